//! Parsers for scalar geometry representations and GeoJSON output.

pub mod geojson;
pub mod wkt;

use geo::Geometry;

use crate::error::Result;

/// Converts a scalar geometry representation into a [`Geometry`].
///
/// Implemented by [`wkt::WktParser`], [`geojson::GeoJsonParser`] and any closure
/// `Fn(&str) -> Result<Geometry>`.
pub trait GeometryParser: Send + Sync {
    /// Parse `raw` into a geometry.
    fn parse(&self, raw: &str) -> Result<Geometry>;
}

impl<F> GeometryParser for F
where
    F: Fn(&str) -> Result<Geometry> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Result<Geometry> {
        self(raw)
    }
}
