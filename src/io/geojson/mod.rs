//! Read geometries from and write features to [GeoJSON](https://geojson.org/).

pub use feature::{collect_features, feature, feature_collection, simple_feature};
pub use reader::{geometry_from_geojson, geometry_from_json_value, GeoJsonParser};
pub use writer::{geometry_to_geojson, write_geojson};

mod feature;
mod reader;
mod writer;
