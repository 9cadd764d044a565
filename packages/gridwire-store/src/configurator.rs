//! Top-level configuration facade.

use gridwire_core::config::{assemble, AssemblyOptions, CacheConfig, CachePolicy};
use gridwire_core::error::AssemblyError;
use gridwire_core::registry::SchemaRegistry;
use gridwire_core::schema::EntityDef;

use crate::factory::{DataSourceFactory, StoreFactory};

/// Everything the cache engine needs to register the generated caches.
#[derive(Debug)]
pub struct GeneratedCaches<D> {
    /// One configuration per distinct cache name, first-occurrence order
    pub configs: Vec<CacheConfig>,
    /// Store factory binding adapters per cache and table
    pub store_factory: StoreFactory<D>,
}

/// Facade tying registration, assembly, and store binding together.
///
/// Collects class definitions and per-cache policy overrides, then builds
/// the full configuration set in one all-or-nothing call. Each call derives
/// everything fresh from the registered definitions.
#[derive(Debug, Default)]
pub struct CacheConfigurator {
    registry: SchemaRegistry,
    options: AssemblyOptions,
}

impl CacheConfigurator {
    /// Creates an empty configurator with default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class definition.
    ///
    /// Idempotent per type name; returns whether the definition was newly
    /// added. Defective definitions are accepted here and surface when the
    /// configuration set is generated.
    pub fn add_class(&mut self, def: EntityDef) -> bool {
        self.registry.add_class(def)
    }

    /// Overrides the write policy for one cache.
    pub fn set_policy(&mut self, cache_name: impl Into<String>, policy: CachePolicy) {
        self.options.per_cache.insert(cache_name.into(), policy);
    }

    /// Replaces the default policy applied to caches without an override.
    pub fn set_default_policy(&mut self, policy: CachePolicy) {
        self.options.defaults = policy;
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Generates the cache configurations and the bound store factory.
    ///
    /// All-or-nothing: the first defective definition aborts with no
    /// partial output.
    ///
    /// # Arguments
    /// * `data_source` - Integrator's data-source factory, threaded through
    ///   to the store factory
    ///
    /// # Returns
    /// `Result<GeneratedCaches<D>, AssemblyError>` carrying the configs and
    /// the store factory, or the first schema failure.
    pub fn generate_cache_configurations<D: DataSourceFactory>(
        &self,
        data_source: D,
    ) -> Result<GeneratedCaches<D>, AssemblyError> {
        let descriptors = self
            .registry
            .extract_all()
            .map_err(|cause| AssemblyError {
                type_name: cause.type_name().to_string(),
                cause,
            })?;
        let configs = assemble(&descriptors, &self.options)?;

        tracing::info!(
            "Generated {} cache configurations from {} registered types",
            configs.len(),
            descriptors.len()
        );

        Ok(GeneratedCaches {
            configs,
            store_factory: StoreFactory::new(data_source, descriptors),
        })
    }
}
