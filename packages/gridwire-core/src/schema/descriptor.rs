//! Normalized table and column descriptors.

use serde::{Deserialize, Serialize};

use super::field::FieldKind;

/// One mapped column of a table descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name in the backing table
    pub column_name: String,
    /// Source field name
    pub field_name: String,
    /// Declared field kind
    pub kind: FieldKind,
    /// Whether this column is part of the key
    pub is_key: bool,
}

/// Normalized schema description of one source type's persisted shape.
///
/// Columns keep field declaration order. Extraction guarantees at least one
/// key column and at least one value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Backing table name (upper-cased)
    pub table_name: String,
    /// Cache this table belongs to
    pub cache_name: String,
    /// Source type name
    pub type_name: String,
    /// Mapped columns in declaration order
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// Key columns in declaration order.
    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_key)
    }

    /// Non-key columns in declaration order.
    pub fn value_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| !c.is_key)
    }

    /// First declared key column, if any.
    pub fn first_key(&self) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.is_key)
    }
}
