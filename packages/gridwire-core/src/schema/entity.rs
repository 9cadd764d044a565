//! Class definitions supplied by integrators.

use serde::{Deserialize, Serialize};

use super::field::FieldDef;

/// Class-level marker binding a type to a cache and a backing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMarker {
    /// Cache the mapped table belongs to
    pub cache_name: String,
    /// Explicit table name; defaults to the upper-cased type name
    pub name: Option<String>,
}

impl TableMarker {
    /// Marker with a defaulted table name.
    pub fn new(cache_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            name: None,
        }
    }

    /// Marker with an explicit table name.
    pub fn named(cache_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            name: Some(table_name.into()),
        }
    }
}

/// A class definition, the declarative input of the mapping engine.
///
/// Fields keep declaration order; the extractor never reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Source type name
    pub type_name: String,
    /// Table marker, if the class is mapped at all
    pub table: Option<TableMarker>,
    /// Declared fields in declaration order
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Creates an unmapped definition with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            table: None,
            fields: Vec::new(),
        }
    }

    /// Sets the table marker, builder style.
    pub fn table(mut self, marker: TableMarker) -> Self {
        self.table = Some(marker);
        self
    }

    /// Appends a field declaration, builder style.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}
