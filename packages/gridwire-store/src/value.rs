//! SQL bind values and per-entry value maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value bound to one positional statement parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Long(i64),
    Int(i32),
    Double(f64),
    Text(String),
    /// Milliseconds since the epoch
    Timestamp(i64),
    Null,
}

/// Non-key field values of one cache entry, keyed by field name.
///
/// The adapter binds these in descriptor declaration order, never map
/// order; fields missing from the map bind as `Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityValues {
    values: HashMap<String, SqlValue>,
}

impl EntityValues {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, builder style.
    pub fn with(mut self, field: impl Into<String>, value: SqlValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// Sets a field value.
    pub fn set(&mut self, field: impl Into<String>, value: SqlValue) {
        self.values.insert(field.into(), value);
    }

    /// Value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&SqlValue> {
        self.values.get(field)
    }

    /// Number of fields carried.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields are carried.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
