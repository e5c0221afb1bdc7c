use std::fmt;

use crate::error::{GeoFeatureError, Result};

type Producer<I> = Box<dyn FnMut() -> Result<Vec<I>> + Send>;

/// Where a [`Resource`](crate::resource::Resource) gets its items.
pub enum DataSource<I> {
    /// Items already in memory.
    Items(Vec<I>),

    /// A producer called on first access. Its result replaces it, so it runs at most once
    /// successfully; after a failure it is called again on the next access.
    Producer(Producer<I>),
}

impl<I> DataSource<I> {
    /// A lazily materialized data source.
    pub fn producer(producer: impl FnMut() -> Result<Vec<I>> + Send + 'static) -> Self {
        DataSource::Producer(Box::new(producer))
    }

    /// Returns `true` once the items are in memory.
    pub fn is_materialized(&self) -> bool {
        matches!(self, DataSource::Items(_))
    }

    /// Items of this source, calling the producer if it has not run yet.
    pub(crate) fn materialize(&mut self) -> Result<&[I]> {
        if let DataSource::Producer(producer) = self {
            let items = producer()?;
            tracing::debug!(items = items.len(), "materialized data source");
            *self = DataSource::Items(items);
        }
        match self {
            DataSource::Items(items) => Ok(items),
            DataSource::Producer(_) => Err(GeoFeatureError::DataSource(
                "data source was not materialized".to_string(),
            )),
        }
    }
}

impl<I> From<Vec<I>> for DataSource<I> {
    fn from(value: Vec<I>) -> Self {
        DataSource::Items(value)
    }
}

impl<I> fmt::Debug for DataSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Items(items) => f.debug_tuple("Items").field(&items.len()).finish(),
            DataSource::Producer(_) => f.write_str("Producer"),
        }
    }
}
