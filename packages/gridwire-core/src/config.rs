//! Cache policy and configuration assembly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;
use crate::projection::{build_projections, QuerySchema, StorageBinding};
use crate::schema::TableDescriptor;

/// Write propagation flags for one cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Read entries through the backing store on a miss
    pub read_through: bool,
    /// Propagate writes to the backing store
    pub write_through: bool,
    /// Buffer write-through and flush asynchronously
    pub write_behind: bool,
    /// Write-behind flush interval in milliseconds
    pub write_behind_flush_interval_ms: u64,
    /// Number of backup copies per partition
    pub backups: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            read_through: true,
            write_through: true,
            write_behind: true,
            write_behind_flush_interval_ms: 250, // low-latency flush
            backups: 0,
        }
    }
}

/// Atomicity mode of an assembled cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atomicity {
    /// Single-entry atomic operations, no transactions
    Atomic,
}

/// Options for one assembly run.
#[derive(Debug, Clone, Default)]
pub struct AssemblyOptions {
    /// Policy applied to caches without a dedicated override
    pub defaults: CachePolicy,
    /// Per-cache policy overrides, keyed by cache name
    pub per_cache: HashMap<String, CachePolicy>,
}

impl AssemblyOptions {
    fn policy_for(&self, cache_name: &str) -> &CachePolicy {
        self.per_cache.get(cache_name).unwrap_or(&self.defaults)
    }
}

/// Complete configuration for one named cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache name
    pub name: String,
    pub read_through: bool,
    pub write_through: bool,
    pub write_behind: bool,
    pub write_behind_flush_interval_ms: u64,
    /// Always atomic; transactional caches are not assembled here
    pub atomicity: Atomicity,
    pub backups: u32,
    /// One storage binding per source table, in input order
    pub storage_bindings: Vec<StorageBinding>,
    /// One query schema per source table, in input order
    pub query_schemas: Vec<QuerySchema>,
}

/// Assembles one cache configuration per distinct cache name.
///
/// Groups the descriptors by cache name, preserving first-occurrence order,
/// and builds both projections for every table in each group. The first
/// projection failure aborts the whole batch; no partial configuration set
/// is produced.
///
/// # Arguments
/// * `tables` - Table descriptors to group and project
/// * `options` - Default policy and per-cache overrides
///
/// # Returns
/// `Result<Vec<CacheConfig>, AssemblyError>` with one entry per cache name.
pub fn assemble(
    tables: &[TableDescriptor],
    options: &AssemblyOptions,
) -> Result<Vec<CacheConfig>, AssemblyError> {
    // Group by cache name; the first occurrence fixes the output position.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&TableDescriptor>> = HashMap::new();
    for table in tables {
        let group = groups.entry(table.cache_name.as_str()).or_default();
        if group.is_empty() {
            order.push(table.cache_name.as_str());
        }
        group.push(table);
    }

    let mut configs = Vec::with_capacity(order.len());
    for cache_name in order {
        let group = &groups[cache_name];
        let mut storage_bindings = Vec::with_capacity(group.len());
        let mut query_schemas = Vec::with_capacity(group.len());
        for table in group {
            let (storage, query) = build_projections(table).map_err(|cause| AssemblyError {
                type_name: table.type_name.clone(),
                cause,
            })?;
            storage_bindings.push(storage);
            query_schemas.push(query);
        }

        let policy = options.policy_for(cache_name);
        configs.push(CacheConfig {
            name: cache_name.to_string(),
            read_through: policy.read_through,
            write_through: policy.write_through,
            write_behind: policy.write_behind,
            write_behind_flush_interval_ms: policy.write_behind_flush_interval_ms,
            atomicity: Atomicity::Atomic,
            backups: policy.backups,
            storage_bindings,
            query_schemas,
        });

        tracing::info!("Assembled cache '{}' ({} tables)", cache_name, group.len());
    }

    Ok(configs)
}
