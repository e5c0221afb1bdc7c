use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{GeoFeatureError, Result};
use crate::factory::json::{CoordinateFactory, GeoJsonFieldFactory, WktFieldFactory};
use crate::factory::FeatureFactory;

/// Builds a factory from its JSON arguments.
pub type FactoryConstructor<I> =
    Arc<dyn Fn(&serde_json::Value) -> Result<Box<dyn FeatureFactory<I>>> + Send + Sync>;

/// Maps factory-kind identifiers to constructors.
///
/// Configuration names a factory by kind; the registry resolves it when the configuration
/// is loaded, failing with [`GeoFeatureError::InvalidFactory`] for unknown kinds.
pub struct FactoryRegistry<I> {
    constructors: HashMap<String, FactoryConstructor<I>>,
}

impl<I> FactoryRegistry<I> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register `constructor` under `kind`, replacing any previous entry.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&serde_json::Value) -> Result<Box<dyn FeatureFactory<I>>> + Send + Sync + 'static,
    {
        self.constructors.insert(kind.into(), Arc::new(constructor));
        self
    }

    /// Returns `true` if a constructor is registered for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Construct the factory registered under `kind` from `args`.
    pub fn build(&self, kind: &str, args: &serde_json::Value) -> Result<Box<dyn FeatureFactory<I>>> {
        let constructor = self.constructors.get(kind).ok_or_else(|| {
            GeoFeatureError::InvalidFactory(format!("unknown factory kind {kind:?}").into())
        })?;
        constructor(args)
    }
}

impl FactoryRegistry<serde_json::Value> {
    /// A registry holding the built-in factories for JSON items:
    /// `wkt_field`, `geojson_field` and `coordinates`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(WktFieldFactory::KIND, |args| {
                Ok(Box::new(WktFieldFactory::from_args(args)?))
            })
            .register(GeoJsonFieldFactory::KIND, |args| {
                Ok(Box::new(GeoJsonFieldFactory::from_args(args)?))
            })
            .register(CoordinateFactory::KIND, |args| {
                Ok(Box::new(CoordinateFactory::from_args(args)?))
            });
        registry
    }
}

impl<I> Default for FactoryRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for FactoryRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
