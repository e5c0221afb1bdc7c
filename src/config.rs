//! Resource configuration.
//!
//! A [`ResourceConfig`] names its factory by kind; the kind is resolved against a
//! [`FactoryRegistry`](crate::factory::FactoryRegistry) when the resource is built.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

fn default_route() -> String {
    "/".to_string()
}

/// Configuration of one GeoJSON resource.
///
/// ```
/// use geofeature::config::ResourceConfig;
///
/// let config = ResourceConfig::from_json_str(r#"{
///     "route": "/stations/%",
///     "factory": "wkt_field",
///     "factory args": {"geometry_field": "geom", "id_field": "id"},
///     "cache": true
/// }"#)
/// .unwrap();
/// assert_eq!(config.factory, "wkt_field");
/// assert!(config.cache);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Route template; `%`-prefixed segments are placeholders.
    #[serde(default = "default_route")]
    pub route: String,

    /// Registered factory kind.
    pub factory: String,

    /// Arguments handed to the factory constructor.
    #[serde(default, alias = "factory args")]
    pub factory_args: Value,

    /// Attach an in-memory feature cache when no cache is supplied.
    #[serde(default)]
    pub cache: bool,
}

impl ResourceConfig {
    /// Create a config for the factory `kind` with no arguments, on route `/`.
    pub fn new(factory: impl Into<String>) -> Self {
        Self {
            route: default_route(),
            factory: factory.into(),
            factory_args: Value::Null,
            cache: false,
        }
    }

    /// Parse from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Set the route template.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Set the factory arguments.
    pub fn with_factory_args(mut self, args: Value) -> Self {
        self.factory_args = args;
        self
    }

    /// Enable or disable the in-memory cache.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoFeatureError;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = ResourceConfig::from_json_str(r#"{"factory": "coordinates"}"#).unwrap();
        assert_eq!(config, ResourceConfig::new("coordinates"));
        assert_eq!(config.route, "/");
        assert!(!config.cache);
    }

    #[test]
    fn builder() {
        let config = ResourceConfig::new("wkt_field")
            .with_route("/items/%")
            .with_factory_args(json!({"geometry_field": "geom"}))
            .with_cache(true);
        let round_trip: ResourceConfig =
            serde_json::from_value(serde_json::to_value(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn missing_factory() {
        let err = ResourceConfig::from_json_str(r#"{"route": "/"}"#).unwrap_err();
        assert!(matches!(err, GeoFeatureError::SerdeJsonError(_)));
    }
}
