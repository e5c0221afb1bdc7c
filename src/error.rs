//! Defines [`GeoFeatureError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoFeatureError {
    /// A feature factory could not be constructed from its configuration.
    #[error("Invalid feature factory: {0}")]
    InvalidFactory(Cow<'static, str>),

    /// A scalar geometry representation could not be parsed.
    #[error("Geometry parse error: {0}")]
    GeometryParse(String),

    /// A geometry had a shape the reducer does not know how to classify.
    #[error("Geometry reduction error: {0}")]
    GeometryReduction(Cow<'static, str>),

    /// Fewer positional arguments were passed to a route than it has placeholders.
    #[error("Route expects {expected} arguments, got {given}")]
    RouteArgument {
        /// Number of `%` placeholders in the route.
        expected: usize,
        /// Number of arguments supplied.
        given: usize,
    },

    /// A bounding box was requested for a resource without any geometry.
    #[error("Cannot compute bounds of an empty geometry")]
    EmptyGeometry,

    /// Building the feature for one item of a data source failed.
    #[error("Failed to build feature for item {index} (id: {}): {source}", .id.as_deref().unwrap_or("none"))]
    Item {
        /// Position of the item in the data source.
        index: usize,
        /// Identifier reported by the factory, if any.
        id: Option<String>,
        /// The underlying failure.
        #[source]
        source: Box<GeoFeatureError>,
    },

    /// The cache collaborator failed.
    #[error("Cache error: {0}")]
    Cache(String),

    /// The data source producer failed.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl GeoFeatureError {
    /// Wrap this error with the position and identifier of the item that caused it.
    pub(crate) fn for_item(self, index: usize, id: Option<String>) -> Self {
        GeoFeatureError::Item {
            index,
            id,
            source: Box::new(self),
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoFeatureError>;
