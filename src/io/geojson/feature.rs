use geo::Geometry;
use geojson::{Feature, FeatureCollection, JsonObject};

use crate::algorithm::reduce::GeometryReducer;
use crate::error::Result;
use crate::geometry::GeometryInput;
use crate::io::geojson::geometry_to_geojson;

/// Creates a GeoJSON Feature.
///
/// A missing geometry is written as `"geometry": null`.
pub fn feature(geometry: Option<&Geometry>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: geometry.map(geometry_to_geojson),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Creates a GeoJSON FeatureCollection, keeping the order of `features`.
pub fn feature_collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Creates a Feature without properties from a WKT value.
///
/// Returns `None` when the value is blank.
pub fn simple_feature(wkt: &str) -> Result<Option<Feature>> {
    let geometry = GeometryReducer::default().reduce(&GeometryInput::from(wkt))?;
    Ok(geometry.map(|geom| feature(Some(&geom), JsonObject::new())))
}

/// Creates a FeatureCollection by applying `feature_fn` to every item.
///
/// Items for which `feature_fn` returns `None` are left out.
///
/// ```
/// use geofeature::io::geojson::{collect_features, simple_feature};
///
/// let items = ["POINT (0 0)", "", "POINT (1 1)"];
/// let collection = collect_features(items, |wkt| simple_feature(wkt)).unwrap();
/// assert_eq!(collection.features.len(), 2);
/// ```
pub fn collect_features<I, F>(items: I, mut feature_fn: F) -> Result<FeatureCollection>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Option<Feature>>,
{
    let mut features = vec![];
    for item in items {
        if let Some(feature) = feature_fn(item)? {
            features.push(feature);
        }
    }
    Ok(feature_collection(features))
}
