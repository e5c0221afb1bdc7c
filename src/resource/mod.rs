//! GeoJSON resources: a factory applied to every item of a data source.
//!
//! A [`Resource`] is either unprocessed or processed. The first call needing features
//! processes it; later calls reuse the result until a reset forces a full recompute.
//!
//! ```
//! use geofeature::factory::WktFieldFactory;
//! use geofeature::resource::Resource;
//! use geojson::GeoJson;
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({"id": 1, "geom": "POINT (0 0)"}),
//!     json!({"id": 2, "geom": "POINT (1 1)"}),
//! ];
//! let factory = WktFieldFactory::new("geom").with_id_field("id");
//! let mut resource = Resource::new("https://example.com/geo", "/stations/%", factory, items);
//!
//! let GeoJson::FeatureCollection(collection) = resource.geojson(false).unwrap() else {
//!     panic!("expected a FeatureCollection");
//! };
//! assert_eq!(collection.features.len(), 2);
//! assert_eq!(resource.bounding_box().unwrap(), [0., 0., 1., 1.]);
//! assert_eq!(resource.uri(&["1"]).unwrap(), "https://example.com/geo/stations/1");
//! ```

mod data;
mod route;

pub use data::DataSource;

use std::fmt;
use std::sync::Arc;

use geo::Geometry;
use geojson::{Feature, GeoJson};

use crate::algorithm::{bounding_box, GeometryReducer};
use crate::cache::{CacheKey, FeatureCache, MemoryCache};
use crate::config::ResourceConfig;
use crate::error::{GeoFeatureError, Result};
use crate::factory::{FactoryRegistry, FeatureFactory};
use crate::io::geojson::{feature, feature_collection, geometry_from_geojson};

/// Builds GeoJSON from a data source using a [`FeatureFactory`].
pub struct Resource<I> {
    endpoint: String,
    route: String,
    factory: Box<dyn FeatureFactory<I>>,
    reducer: GeometryReducer,
    data: DataSource<I>,
    cache: Option<Arc<dyn FeatureCache>>,
    features: Vec<Feature>,
    processed: bool,
}

impl<I> Resource<I> {
    /// Create an unprocessed resource without a cache.
    pub fn new(
        endpoint: impl Into<String>,
        route: impl Into<String>,
        factory: impl FeatureFactory<I> + 'static,
        data: impl Into<DataSource<I>>,
    ) -> Self {
        Self::from_parts(endpoint.into(), route.into(), Box::new(factory), data.into())
    }

    /// Create a resource from configuration, resolving its factory in `registry`.
    ///
    /// When `config.cache` is set, a fresh [`MemoryCache`] is attached; use
    /// [`with_cache`](Self::with_cache) afterwards to share a cache between resources.
    pub fn from_config(
        endpoint: impl Into<String>,
        config: &ResourceConfig,
        registry: &FactoryRegistry<I>,
        data: impl Into<DataSource<I>>,
    ) -> Result<Self> {
        let factory = registry.build(&config.factory, &config.factory_args)?;
        let mut resource =
            Self::from_parts(endpoint.into(), config.route.clone(), factory, data.into());
        if config.cache {
            resource.cache = Some(Arc::new(MemoryCache::new()));
        }
        Ok(resource)
    }

    fn from_parts(
        endpoint: String,
        route: String,
        factory: Box<dyn FeatureFactory<I>>,
        data: DataSource<I>,
    ) -> Self {
        Self {
            endpoint,
            route,
            factory,
            reducer: GeometryReducer::default(),
            data,
            cache: None,
            features: vec![],
            processed: false,
        }
    }

    /// Cache built features in `cache`.
    pub fn with_cache(mut self, cache: Arc<dyn FeatureCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Reduce geometries with `reducer` instead of the default WKT reducer.
    pub fn with_reducer(mut self, reducer: GeometryReducer) -> Self {
        self.reducer = reducer;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Features built by the last [`process`](Self::process); empty before that.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Forget the built features; the next access processes again.
    ///
    /// The data source is not materialized again.
    pub fn reset(&mut self) {
        self.processed = false;
        self.features.clear();
    }

    /// Build a feature for every item of the data source, in order.
    ///
    /// Does nothing if the resource is already processed; call [`reset`](Self::reset)
    /// first to rebuild. Items with an id are looked up in the cache first, and stored
    /// there after a miss. A failure for one item aborts processing and is reported as
    /// [`GeoFeatureError::Item`].
    pub fn process(&mut self) -> Result<()> {
        if self.processed {
            return Ok(());
        }

        let items = self.data.materialize()?;
        let kind = self.factory.kind();
        let mut features = Vec::with_capacity(items.len());
        let mut cache_hits = 0usize;

        for (index, item) in items.iter().enumerate() {
            let id = self.factory.id(item);
            let key = id.as_deref().map(|id| CacheKey::new(id, kind));
            let cache = self.cache.as_deref().zip(key.as_ref());

            let cached = match cache {
                Some((cache, key)) => {
                    let hit = cache
                        .get(key.as_str())
                        .map_err(|e| e.for_item(index, id.clone()))?;
                    tracing::trace!(index, key = %key, hit = hit.is_some(), "feature cache lookup");
                    hit
                }
                None => None,
            };

            let feature = match cached {
                Some(feature) => {
                    cache_hits += 1;
                    feature
                }
                None => {
                    let feature = build_feature(&*self.factory, &self.reducer, item)
                        .map_err(|e| e.for_item(index, id.clone()))?;
                    if let Some((cache, key)) = cache {
                        cache
                            .set(key.as_str(), feature.clone())
                            .map_err(|e| e.for_item(index, id.clone()))?;
                    }
                    feature
                }
            };
            features.push(feature);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            features = features.len(),
            cache_hits,
            "processed resource"
        );
        self.features = features;
        self.processed = true;
        Ok(())
    }

    fn ensure_processed(&mut self, reset: bool) -> Result<()> {
        if reset {
            self.reset();
        }
        self.process()
    }

    /// The resource as GeoJSON.
    ///
    /// A single feature is returned bare; any other number of features is wrapped in a
    /// FeatureCollection. With `reset`, everything is rebuilt first.
    pub fn geojson(&mut self, reset: bool) -> Result<GeoJson> {
        self.ensure_processed(reset)?;
        if let [feature] = self.features.as_slice() {
            return Ok(GeoJson::Feature(feature.clone()));
        }
        Ok(GeoJson::FeatureCollection(feature_collection(
            self.features.clone(),
        )))
    }

    /// All feature geometries reduced into one. Features without geometry are skipped.
    pub fn geometry(&mut self) -> Result<Option<Geometry>> {
        self.ensure_processed(false)?;
        let mut geoms = Vec::with_capacity(self.features.len());
        for geometry in self.features.iter().filter_map(|f| f.geometry.as_ref()) {
            geoms.push(geometry_from_geojson(geometry)?);
        }
        self.reducer.reduce_geometries(geoms)
    }

    /// `[minx, miny, maxx, maxy]` over all features.
    ///
    /// Fails with [`GeoFeatureError::EmptyGeometry`] if there is no geometry to bound.
    pub fn bounding_box(&mut self) -> Result<[f64; 4]> {
        let geometry = self.geometry()?.ok_or(GeoFeatureError::EmptyGeometry)?;
        bounding_box(&geometry)
    }

    /// URI of this resource: the endpoint joined with the route, each `%` segment of the
    /// route replaced by the next of `args`.
    pub fn uri<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let route = route::expand_route(&self.route, args)?;
        Ok(route::join_uri(&self.endpoint, &route))
    }
}

/// Build the feature for one item.
fn build_feature<I>(
    factory: &dyn FeatureFactory<I>,
    reducer: &GeometryReducer,
    item: &I,
) -> Result<Feature> {
    let geometry = reducer.reduce_opt(factory.geometry(item)?.as_ref())?;
    let properties = factory.properties(item)?;
    Ok(feature(geometry.as_ref(), properties))
}

impl<I> fmt::Debug for Resource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("endpoint", &self.endpoint)
            .field("route", &self.route)
            .field("factory", &self.factory.kind())
            .field("data", &self.data)
            .field("cached", &self.cache.is_some())
            .field("features", &self.features.len())
            .field("processed", &self.processed)
            .finish()
    }
}
