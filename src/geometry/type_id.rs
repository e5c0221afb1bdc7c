use geo::Geometry;

use crate::error::{GeoFeatureError, Result};

/// GeoJSON geometry type of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Classify a geometry.
    ///
    /// `Line`, `Rect` and `Triangle` have no GeoJSON counterpart and are rejected.
    pub fn try_from_geometry(geom: &Geometry) -> Result<Self> {
        match geom {
            Geometry::Point(_) => Ok(GeometryType::Point),
            Geometry::LineString(_) => Ok(GeometryType::LineString),
            Geometry::Polygon(_) => Ok(GeometryType::Polygon),
            Geometry::MultiPoint(_) => Ok(GeometryType::MultiPoint),
            Geometry::MultiLineString(_) => Ok(GeometryType::MultiLineString),
            Geometry::MultiPolygon(_) => Ok(GeometryType::MultiPolygon),
            Geometry::GeometryCollection(_) => Ok(GeometryType::GeometryCollection),
            Geometry::Line(_) => Err(unsupported("Line")),
            Geometry::Rect(_) => Err(unsupported("Rect")),
            Geometry::Triangle(_) => Err(unsupported("Triangle")),
        }
    }

    /// GeoJSON `type` member for this geometry type.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn unsupported(name: &'static str) -> GeoFeatureError {
    GeoFeatureError::GeometryReduction(
        format!("{name} is not a GeoJSON geometry type").into(),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{coord, point, Line};

    #[test]
    fn classify() {
        let geom = Geometry::Point(point!(x: 0., y: 1.));
        let ty = GeometryType::try_from_geometry(&geom).unwrap();
        assert_eq!(ty, GeometryType::Point);
        assert_eq!(ty.to_string(), "Point");
    }

    #[test]
    fn rejects_line() {
        let geom = Geometry::Line(Line::new(coord! { x: 0., y: 0. }, coord! { x: 1., y: 1. }));
        let err = GeometryType::try_from_geometry(&geom).unwrap_err();
        assert!(matches!(err, GeoFeatureError::GeometryReduction(_)));
    }
}
