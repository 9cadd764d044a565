//! Class definition registry.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::schema::{extract, EntityDef, TableDescriptor};

/// Ordered set of registered class definitions.
///
/// Registration is idempotent per type name and extraction runs in
/// registration order. The registry holds definitions only; descriptors and
/// groupings are rebuilt per assembly call.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    defs: Vec<EntityDef>,
    names: HashSet<String>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class definition.
    ///
    /// Returns `true` when the definition was newly added; re-adding a type
    /// name is a no-op.
    pub fn add_class(&mut self, def: EntityDef) -> bool {
        if self.names.contains(&def.type_name) {
            tracing::debug!("Type '{}' already registered, skipping", def.type_name);
            return false;
        }
        self.names.insert(def.type_name.clone());
        self.defs.push(def);
        true
    }

    /// Whether a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.names.contains(type_name)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Registered definitions in registration order.
    pub fn defs(&self) -> &[EntityDef] {
        &self.defs
    }

    /// Extracts one table descriptor per definition, in registration order.
    ///
    /// The first defective definition aborts the walk.
    pub fn extract_all(&self) -> Result<Vec<TableDescriptor>, SchemaError> {
        self.defs.iter().map(extract).collect()
    }
}
