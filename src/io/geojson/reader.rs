use geo::Geometry;
use geojson::GeoJson;

use crate::error::{GeoFeatureError, Result};
use crate::io::GeometryParser;

/// Convert a GeoJSON geometry object into a [`Geometry`].
pub fn geometry_from_geojson(geometry: &geojson::Geometry) -> Result<Geometry> {
    Geometry::try_from(geometry.clone())
        .map_err(|e| GeoFeatureError::GeometryParse(format!("invalid GeoJSON geometry: {e}")))
}

/// Convert a JSON value holding a GeoJSON geometry object into a [`Geometry`].
pub fn geometry_from_json_value(value: &serde_json::Value) -> Result<Geometry> {
    let geometry = geojson::Geometry::from_json_value(value.clone())
        .map_err(|e| GeoFeatureError::GeometryParse(format!("invalid GeoJSON geometry: {e}")))?;
    geometry_from_geojson(&geometry)
}

/// [`GeometryParser`] reading GeoJSON text.
///
/// Accepts a geometry object, or a feature whose geometry is taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonParser;

impl GeometryParser for GeoJsonParser {
    fn parse(&self, raw: &str) -> Result<Geometry> {
        let geojson = raw
            .parse::<GeoJson>()
            .map_err(|e| GeoFeatureError::GeometryParse(format!("invalid GeoJSON: {e}")))?;
        match geojson {
            GeoJson::Geometry(geometry) => geometry_from_geojson(&geometry),
            GeoJson::Feature(feature) => match feature.geometry {
                Some(geometry) => geometry_from_geojson(&geometry),
                None => Err(GeoFeatureError::GeometryParse(
                    "GeoJSON feature has no geometry".to_string(),
                )),
            },
            GeoJson::FeatureCollection(_) => Err(GeoFeatureError::GeometryParse(
                "expected a GeoJSON geometry, got a FeatureCollection".to_string(),
            )),
        }
    }
}
