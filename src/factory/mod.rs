//! Strategies turning one domain item into the parts of a GeoJSON Feature.
//!
//! A [`FeatureFactory`] has one required capability, [`geometry`](FeatureFactory::geometry),
//! and two optional ones with defaults: [`properties`](FeatureFactory::properties) (empty)
//! and [`id`](FeatureFactory::id) (none, meaning the item's feature is never cached).
//!
//! Factories are either implemented directly, assembled from closures with
//! [`FnFactory`], or built from configuration through a [`FactoryRegistry`].

mod json;
mod registry;

pub use json::{CoordinateFactory, GeoJsonFieldFactory, WktFieldFactory};
pub use registry::{FactoryConstructor, FactoryRegistry};

use std::fmt;

use geojson::JsonObject;

use crate::error::Result;
use crate::geometry::GeometryInput;

/// Extracts geometry, properties and an identifier from items of type `I`.
pub trait FeatureFactory<I>: Send + Sync {
    /// The geometry of `item`, or `None` if it has no spatial representation.
    ///
    /// Must not depend on state that changes between calls for the same item.
    fn geometry(&self, item: &I) -> Result<Option<GeometryInput>>;

    /// Attribute properties of `item`.
    fn properties(&self, _item: &I) -> Result<JsonObject> {
        Ok(JsonObject::new())
    }

    /// A stable identifier of `item`, used as a cache key.
    ///
    /// Two distinct logical items must never share an id.
    fn id(&self, _item: &I) -> Option<String> {
        None
    }

    /// Tag distinguishing this factory in cache keys.
    fn kind(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<I, F: FeatureFactory<I> + ?Sized> FeatureFactory<I> for Box<F> {
    fn geometry(&self, item: &I) -> Result<Option<GeometryInput>> {
        (**self).geometry(item)
    }

    fn properties(&self, item: &I) -> Result<JsonObject> {
        (**self).properties(item)
    }

    fn id(&self, item: &I) -> Option<String> {
        (**self).id(item)
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}

type GeometryFn<I> = Box<dyn Fn(&I) -> Result<Option<GeometryInput>> + Send + Sync>;
type PropertiesFn<I> = Box<dyn Fn(&I) -> Result<JsonObject> + Send + Sync>;
type IdFn<I> = Box<dyn Fn(&I) -> Option<String> + Send + Sync>;

/// A [`FeatureFactory`] assembled from closures.
///
/// Capabilities that are not set fall back to the trait defaults.
///
/// ```
/// use geofeature::factory::{FeatureFactory, FnFactory};
/// use geofeature::geometry::GeometryInput;
///
/// let factory = FnFactory::new("station", |wkt: &String| {
///     Ok(Some(GeometryInput::from(wkt.as_str())))
/// })
/// .with_id(|wkt| Some(wkt.clone()));
///
/// assert_eq!(factory.kind(), "station");
/// assert!(factory.properties(&"POINT (0 0)".to_string()).unwrap().is_empty());
/// ```
pub struct FnFactory<I> {
    kind: String,
    geometry: GeometryFn<I>,
    properties: Option<PropertiesFn<I>>,
    id: Option<IdFn<I>>,
}

impl<I> FnFactory<I> {
    /// Create a factory of the given kind from its geometry function.
    pub fn new(
        kind: impl Into<String>,
        geometry: impl Fn(&I) -> Result<Option<GeometryInput>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: kind.into(),
            geometry: Box::new(geometry),
            properties: None,
            id: None,
        }
    }

    /// Set the properties function.
    pub fn with_properties(
        mut self,
        properties: impl Fn(&I) -> Result<JsonObject> + Send + Sync + 'static,
    ) -> Self {
        self.properties = Some(Box::new(properties));
        self
    }

    /// Set the id function.
    pub fn with_id(mut self, id: impl Fn(&I) -> Option<String> + Send + Sync + 'static) -> Self {
        self.id = Some(Box::new(id));
        self
    }
}

impl<I> FeatureFactory<I> for FnFactory<I> {
    fn geometry(&self, item: &I) -> Result<Option<GeometryInput>> {
        (self.geometry)(item)
    }

    fn properties(&self, item: &I) -> Result<JsonObject> {
        match &self.properties {
            Some(properties) => properties(item),
            None => Ok(JsonObject::new()),
        }
    }

    fn id(&self, item: &I) -> Option<String> {
        self.id.as_ref().and_then(|id| id(item))
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

impl<I> fmt::Debug for FnFactory<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory")
            .field("kind", &self.kind)
            .field("properties", &self.properties.is_some())
            .field("id", &self.id.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    struct PointsOnly;

    impl FeatureFactory<(f64, f64)> for PointsOnly {
        fn geometry(&self, item: &(f64, f64)) -> Result<Option<GeometryInput>> {
            Ok(Some(geo::point!(x: item.0, y: item.1).into()))
        }
    }

    #[test]
    fn trait_defaults() {
        let factory = PointsOnly;
        assert!(factory.properties(&(0., 0.)).unwrap().is_empty());
        assert_eq!(factory.id(&(0., 0.)), None);
        assert!(factory.kind().ends_with("PointsOnly"));
    }

    #[test]
    fn boxed_factory_delegates() {
        let factory: Box<dyn FeatureFactory<(f64, f64)>> = Box::new(PointsOnly);
        assert!(factory.geometry(&(1., 2.)).unwrap().is_some());
        assert!(factory.kind().ends_with("PointsOnly"));
    }

    #[test]
    fn fn_factory() {
        let factory = FnFactory::new("pair", |item: &(u32, String)| {
            Ok(Some(GeometryInput::from(item.1.as_str())))
        })
        .with_properties(|item| {
            let mut properties = JsonObject::new();
            properties.insert("n".to_string(), json!(item.0));
            Ok(properties)
        })
        .with_id(|item| Some(item.0.to_string()));

        let item = (7, "POINT (0 0)".to_string());
        assert_eq!(
            factory.geometry(&item).unwrap(),
            Some(GeometryInput::Raw("POINT (0 0)".to_string()))
        );
        assert_eq!(factory.properties(&item).unwrap()["n"], json!(7));
        assert_eq!(factory.id(&item), Some("7".to_string()));
        assert_eq!(factory.kind(), "pair");
    }
}
