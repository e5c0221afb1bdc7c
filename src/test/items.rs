use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use geojson::JsonObject;
use serde_json::{json, Value};

use crate::error::Result;
use crate::factory::{FeatureFactory, WktFieldFactory};
use crate::geometry::GeometryInput;

/// A JSON item with a numeric id, a name and a WKT geometry in `geom`.
pub(crate) fn station(id: u32, wkt: &str) -> Value {
    json!({
        "id": id,
        "name": format!("station {id}"),
        "geom": wkt,
    })
}

/// A `wkt_field` factory on `geom` that counts how often it is asked for geometry and
/// properties.
pub(crate) struct SpyFactory {
    inner: WktFieldFactory,
    geometry_calls: Arc<AtomicUsize>,
    properties_calls: Arc<AtomicUsize>,
}

impl SpyFactory {
    pub const KIND: &'static str = "spy";

    pub fn new() -> Self {
        Self {
            inner: WktFieldFactory::new("geom"),
            geometry_calls: Arc::default(),
            properties_calls: Arc::default(),
        }
    }

    pub fn with_id_field(mut self, id_field: &str) -> Self {
        self.inner = self.inner.with_id_field(id_field);
        self
    }

    pub fn geometry_calls(&self) -> Arc<AtomicUsize> {
        self.geometry_calls.clone()
    }

    pub fn properties_calls(&self) -> Arc<AtomicUsize> {
        self.properties_calls.clone()
    }
}

impl FeatureFactory<Value> for SpyFactory {
    fn geometry(&self, item: &Value) -> Result<Option<GeometryInput>> {
        self.geometry_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.geometry(item)
    }

    fn properties(&self, item: &Value) -> Result<JsonObject> {
        self.properties_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.properties(item)
    }

    fn id(&self, item: &Value) -> Option<String> {
        self.inner.id(item)
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}
