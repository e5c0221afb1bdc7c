//! Geometry values accepted by the reducer and their type tags.

mod type_id;

pub use type_id::GeometryType;

use geo::Geometry;

/// A value the [`GeometryReducer`](crate::algorithm::reduce::GeometryReducer) can reduce.
///
/// Callers say up front whether they hold one geometry representation or an ordered
/// sequence of them; sequences may nest arbitrarily.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryInput {
    /// An already-built geometry.
    Geometry(Geometry),

    /// A scalar representation, handed to the reducer's parser (WKT by default).
    Raw(String),

    /// An ordered sequence of inputs, e.g. the values of a multi-value field.
    Sequence(Vec<GeometryInput>),
}

impl GeometryInput {
    /// Returns `true` if this input cannot produce any geometry.
    ///
    /// Blank raw strings and sequences whose members are all empty count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            GeometryInput::Geometry(_) => false,
            GeometryInput::Raw(raw) => raw.trim().is_empty(),
            GeometryInput::Sequence(values) => values.iter().all(GeometryInput::is_empty),
        }
    }
}

impl From<Geometry> for GeometryInput {
    fn from(value: Geometry) -> Self {
        GeometryInput::Geometry(value)
    }
}

macro_rules! impl_from_geo {
    ($($type:ident),*) => {
        $(
            impl From<geo::$type> for GeometryInput {
                fn from(value: geo::$type) -> Self {
                    GeometryInput::Geometry(Geometry::$type(value))
                }
            }
        )*
    };
}

impl_from_geo!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

impl From<String> for GeometryInput {
    fn from(value: String) -> Self {
        GeometryInput::Raw(value)
    }
}

impl From<&str> for GeometryInput {
    fn from(value: &str) -> Self {
        GeometryInput::Raw(value.to_string())
    }
}

impl<T: Into<GeometryInput>> From<Vec<T>> for GeometryInput {
    fn from(value: Vec<T>) -> Self {
        GeometryInput::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<GeometryInput>> FromIterator<T> for GeometryInput {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        GeometryInput::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
