//! Store factory binding adapters to generated caches.

use std::collections::HashMap;
use std::sync::Arc;

use gridwire_core::schema::TableDescriptor;

use crate::adapter::CacheStore;

/// Factory for the integrator's data source.
///
/// The store layer never opens connections itself; the factory travels
/// alongside the generated configuration for the cache engine to consume
/// when it wires loaders and writers.
pub trait DataSourceFactory {
    /// Data-source handle produced by this factory.
    type DataSource;

    /// Creates a new data-source handle.
    fn create(&self) -> Self::DataSource;
}

/// Binds a store adapter to every generated table, grouped by cache.
#[derive(Debug)]
pub struct StoreFactory<D> {
    data_source: D,
    tables: HashMap<String, Vec<Arc<TableDescriptor>>>,
}

impl<D: DataSourceFactory> StoreFactory<D> {
    pub(crate) fn new(data_source: D, descriptors: Vec<TableDescriptor>) -> Self {
        let mut tables: HashMap<String, Vec<Arc<TableDescriptor>>> = HashMap::new();
        for descriptor in descriptors {
            tables
                .entry(descriptor.cache_name.clone())
                .or_default()
                .push(Arc::new(descriptor));
        }
        Self {
            data_source,
            tables,
        }
    }

    /// The data-source factory handed over at generation time.
    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    /// One store adapter per table registered for the cache.
    ///
    /// Adapters share the read-only descriptors; an unknown cache name
    /// yields an empty set.
    pub fn stores_for(&self, cache_name: &str) -> Vec<CacheStore> {
        self.tables
            .get(cache_name)
            .map(|group| {
                group
                    .iter()
                    .map(|table| CacheStore::new(Arc::clone(table)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The store adapter for one type's table within a cache.
    pub fn store_for_type(&self, cache_name: &str, type_name: &str) -> Option<CacheStore> {
        self.tables
            .get(cache_name)?
            .iter()
            .find(|table| table.type_name == type_name)
            .map(|table| CacheStore::new(Arc::clone(table)))
    }
}
