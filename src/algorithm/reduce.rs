//! Reduce geometries, or nested collections of them, to the simplest GeoJSON geometry.
//!
//! Conversions include:
//!
//! - `[G]` -> `G`
//! - `[Point, Point, ...]` -> MultiPoint (likewise for LineString and Polygon)
//! - `[Point, LineString, ...]` -> GeometryCollection
//! - MultiPoint with one member -> Point (likewise for the other MULTI* types)
//! - GeometryCollection of a single simple type -> the MULTI* equivalent
//! - GeometryCollection with one member -> that member
//!
//! MULTI* and GeometryCollection members are exploded into their simple parts before
//! classification, so the output is a fixed point: reducing it again returns it
//! unchanged.

use std::fmt;
use std::sync::Arc;

use geo::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use itertools::Itertools;

use crate::error::Result;
use crate::geometry::{GeometryInput, GeometryType};
use crate::io::wkt::WktParser;
use crate::io::GeometryParser;

/// Reduces [`GeometryInput`] values to a single canonical [`Geometry`].
///
/// Raw inputs are parsed with the reducer's [`GeometryParser`], WKT unless another parser
/// is supplied.
///
/// ```
/// use geo::{point, Geometry, MultiPoint};
/// use geofeature::algorithm::GeometryReducer;
/// use geofeature::geometry::GeometryInput;
///
/// let input = GeometryInput::from(vec!["POINT (0 0)", "POINT (1 1)"]);
/// let reduced = GeometryReducer::default().reduce(&input).unwrap();
/// let expected = MultiPoint::new(vec![point!(x: 0., y: 0.), point!(x: 1., y: 1.)]);
/// assert_eq!(reduced, Some(Geometry::MultiPoint(expected)));
/// ```
#[derive(Clone)]
pub struct GeometryReducer {
    parser: Arc<dyn GeometryParser>,
}

impl GeometryReducer {
    /// Create a reducer parsing raw inputs with `parser`.
    pub fn new(parser: impl GeometryParser + 'static) -> Self {
        Self {
            parser: Arc::new(parser),
        }
    }

    /// Replace the parser used for raw inputs.
    pub fn with_parser(mut self, parser: impl GeometryParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Reduce `input`, returning `None` if it holds no geometry.
    pub fn reduce(&self, input: &GeometryInput) -> Result<Option<Geometry>> {
        match input {
            GeometryInput::Geometry(geom) => self.reduce_geometry(geom.clone()),
            GeometryInput::Raw(_) if input.is_empty() => Ok(None),
            GeometryInput::Raw(raw) => {
                let geom = self.parser.parse(raw)?;
                self.reduce_geometry(geom)
            }
            GeometryInput::Sequence(values) => {
                let mut geoms = Vec::with_capacity(values.len());
                for value in values {
                    if let Some(geom) = self.reduce(value)? {
                        geoms.push(geom);
                    }
                }
                reduce_geometries(geoms)
            }
        }
    }

    /// Reduce an optional input; `None` stays `None`.
    pub fn reduce_opt(&self, input: Option<&GeometryInput>) -> Result<Option<Geometry>> {
        match input {
            Some(input) => self.reduce(input),
            None => Ok(None),
        }
    }

    /// Normalize one already-built geometry.
    pub fn reduce_geometry(&self, geom: Geometry) -> Result<Option<Geometry>> {
        reduce_geometries(std::iter::once(geom))
    }

    /// Reduce a sequence of already-built geometries.
    pub fn reduce_geometries(
        &self,
        geoms: impl IntoIterator<Item = Geometry>,
    ) -> Result<Option<Geometry>> {
        reduce_geometries(geoms)
    }
}

impl Default for GeometryReducer {
    fn default() -> Self {
        Self::new(WktParser)
    }
}

impl fmt::Debug for GeometryReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryReducer").finish_non_exhaustive()
    }
}

/// Reduce `input` with the default (WKT) reducer.
pub fn reduce(input: &GeometryInput) -> Result<Option<Geometry>> {
    GeometryReducer::default().reduce(input)
}

/// Reduce a sequence of already-built geometries into one.
///
/// Returns `None` if the sequence holds no parts, e.g. when it is empty or only contains
/// empty collections.
pub fn reduce_geometries(geoms: impl IntoIterator<Item = Geometry>) -> Result<Option<Geometry>> {
    let mut parts = vec![];
    for geom in geoms {
        explode(geom, &mut parts)?;
    }
    let num_parts = parts.len();
    let reduced = classify(parts);

    tracing::trace!(
        parts = num_parts,
        output = reduced
            .as_ref()
            .and_then(|geom| GeometryType::try_from_geometry(geom).ok())
            .map(|ty| ty.name())
            .unwrap_or("none"),
        "reduced geometries"
    );
    Ok(reduced)
}

/// One part of a geometry of a simple type.
#[derive(Debug)]
enum SimpleGeometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
}

impl SimpleGeometry {
    fn geometry_type(&self) -> GeometryType {
        match self {
            SimpleGeometry::Point(_) => GeometryType::Point,
            SimpleGeometry::LineString(_) => GeometryType::LineString,
            SimpleGeometry::Polygon(_) => GeometryType::Polygon,
        }
    }

    fn into_point(self) -> Option<Point> {
        match self {
            SimpleGeometry::Point(point) => Some(point),
            _ => None,
        }
    }

    fn into_line_string(self) -> Option<LineString> {
        match self {
            SimpleGeometry::LineString(line_string) => Some(line_string),
            _ => None,
        }
    }

    fn into_polygon(self) -> Option<Polygon> {
        match self {
            SimpleGeometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl From<SimpleGeometry> for Geometry {
    fn from(value: SimpleGeometry) -> Self {
        match value {
            SimpleGeometry::Point(point) => Geometry::Point(point),
            SimpleGeometry::LineString(line_string) => Geometry::LineString(line_string),
            SimpleGeometry::Polygon(polygon) => Geometry::Polygon(polygon),
        }
    }
}

/// Append the simple parts of `geom` to `parts`, in order.
fn explode(geom: Geometry, parts: &mut Vec<SimpleGeometry>) -> Result<()> {
    match geom {
        Geometry::Point(point) => parts.push(SimpleGeometry::Point(point)),
        Geometry::LineString(line_string) => parts.push(SimpleGeometry::LineString(line_string)),
        Geometry::Polygon(polygon) => parts.push(SimpleGeometry::Polygon(polygon)),
        Geometry::MultiPoint(multi_point) => {
            parts.extend(multi_point.0.into_iter().map(SimpleGeometry::Point))
        }
        Geometry::MultiLineString(multi_line_string) => parts.extend(
            multi_line_string
                .0
                .into_iter()
                .map(SimpleGeometry::LineString),
        ),
        Geometry::MultiPolygon(multi_polygon) => {
            parts.extend(multi_polygon.0.into_iter().map(SimpleGeometry::Polygon))
        }
        Geometry::GeometryCollection(collection) => {
            for member in collection.0 {
                explode(member, parts)?;
            }
        }
        other => {
            // Line, Rect and Triangle
            GeometryType::try_from_geometry(&other)?;
        }
    }
    Ok(())
}

/// Pick the least general geometry holding all `parts`.
fn classify(parts: Vec<SimpleGeometry>) -> Option<Geometry> {
    if parts.len() <= 1 {
        return parts.into_iter().next().map(Geometry::from);
    }

    if !parts.iter().map(SimpleGeometry::geometry_type).all_equal() {
        let members = parts.into_iter().map(Geometry::from).collect::<Vec<_>>();
        return Some(Geometry::GeometryCollection(GeometryCollection::new_from(
            members,
        )));
    }

    let geom = match parts[0] {
        SimpleGeometry::Point(_) => Geometry::MultiPoint(MultiPoint::new(
            parts
                .into_iter()
                .filter_map(SimpleGeometry::into_point)
                .collect(),
        )),
        SimpleGeometry::LineString(_) => Geometry::MultiLineString(MultiLineString::new(
            parts
                .into_iter()
                .filter_map(SimpleGeometry::into_line_string)
                .collect(),
        )),
        SimpleGeometry::Polygon(_) => Geometry::MultiPolygon(MultiPolygon::new(
            parts
                .into_iter()
                .filter_map(SimpleGeometry::into_polygon)
                .collect(),
        )),
    };
    Some(geom)
}
