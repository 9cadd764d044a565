//! Storage-binding projection.

use serde::{Deserialize, Serialize};

use crate::schema::FieldKind;

use super::sql_type::SqlType;

/// One column of a storage binding with its inferred SQL type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    /// Inferred SQL column type
    pub sql_type: SqlType,
    /// Column name in the backing table
    pub column_name: String,
    /// Source field name
    pub field_name: String,
    /// Declared field kind
    pub kind: FieldKind,
}

/// Key/value column mapping used to read and write a relational row for a
/// cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBinding {
    /// Cache the binding belongs to
    pub cache_name: String,
    /// Backing table name
    pub table_name: String,
    /// Value-side type name (the source type)
    pub value_type: String,
    /// Key-side type name (kind of the first declared key)
    pub key_type: String,
    /// Key columns in declaration order
    pub key_fields: Vec<ColumnBinding>,
    /// Non-key columns in declaration order
    pub value_fields: Vec<ColumnBinding>,
}
