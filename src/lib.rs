//! Build GeoJSON features from arbitrary domain items.
//!
//! A [`FeatureFactory`] says how one item maps to a geometry, properties and an optional
//! id. A [`Resource`] applies it to every item of a data source, reduces each geometry to
//! its simplest form with a [`GeometryReducer`], and serves the result as GeoJSON, as one
//! combined geometry, or as a bounding box. Built features can be cached per item id.
//!
//! ```
//! use geofeature::{CoordinateFactory, Resource};
//! use geojson::GeoJson;
//! use serde_json::json;
//!
//! let items = vec![json!({"lon": 4.35, "lat": 50.85, "name": "Brussels"})];
//! let mut resource = Resource::new("/api", "/", CoordinateFactory::new("lon", "lat"), items);
//!
//! let GeoJson::Feature(feature) = resource.geojson(false).unwrap() else {
//!     panic!("a single item is served as a bare Feature");
//! };
//! assert_eq!(feature.properties.unwrap()["name"], "Brussels");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::GeometryReducer;
pub use cache::{CacheKey, FeatureCache, MemoryCache, NoOpCache};
pub use config::ResourceConfig;
pub use error::{GeoFeatureError, Result};
pub use factory::{
    CoordinateFactory, FactoryRegistry, FeatureFactory, FnFactory, GeoJsonFieldFactory,
    WktFieldFactory,
};
pub use geometry::{GeometryInput, GeometryType};
pub use resource::{DataSource, Resource};

pub mod algorithm;
pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod io;
pub mod resource;
#[cfg(test)]
pub(crate) mod test;
