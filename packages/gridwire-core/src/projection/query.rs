//! Query-schema projection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Field/type mapping consumed by the cache engine's indexing and query
/// layer.
///
/// `fields` keeps declaration order and includes the key fields;
/// `key_field_names` is sorted lexicographically regardless of declaration
/// order. With multiple keys, `key_field_name` and `key_type_name` come from
/// the first declared key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySchema {
    /// Value-side type name
    pub value_type_name: String,
    /// Key-side type name
    pub key_type_name: String,
    /// Name of the first declared key field
    pub key_field_name: String,
    /// All key field names, lexicographically sorted
    pub key_field_names: BTreeSet<String>,
    /// Field name to type name, in declaration order
    pub fields: Vec<(String, String)>,
}
