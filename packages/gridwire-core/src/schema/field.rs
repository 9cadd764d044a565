//! Field kinds and field declarations.

use serde::{Deserialize, Serialize};

use super::marker::Marker;

/// Type tag of a declared field.
///
/// Covers the scalar kinds the mapping understands plus an opaque `Custom`
/// escape hatch; unknown kinds still project (as VARCHAR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// 64-bit signed integer
    Long,
    /// 32-bit signed integer
    Int,
    /// 64-bit float
    Double,
    /// Variable-length text
    Text,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
    /// Time of day
    Time,
    /// Instant with epoch semantics
    Timestamp,
    /// Integrator-defined kind, carried by name
    Custom(String),
}

impl FieldKind {
    /// Stable lowercase type name used by the query-schema projection.
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Long => "i64",
            FieldKind::Int => "i32",
            FieldKind::Double => "f64",
            FieldKind::Text => "string",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Time => "time",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Custom(name) => name,
        }
    }
}

/// Field declaration within a class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as declared
    pub name: String,
    /// Declared type tag
    pub kind: FieldKind,
    /// Markers attached to this field
    pub markers: Vec<Marker>,
}

impl FieldDef {
    /// Creates an unmarked field (not mapped to any column).
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            markers: Vec::new(),
        }
    }

    /// Attaches a marker, builder style.
    pub fn with(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Whether any marker designates this field as a key.
    pub fn is_key(&self) -> bool {
        self.markers.iter().any(Marker::is_key)
    }

    /// Whether any marker maps this field to a column.
    pub fn is_column(&self) -> bool {
        self.markers.iter().any(Marker::is_column)
    }

    /// Resolves the mapped column name.
    ///
    /// A dedicated column marker shadows a standard one entirely: an unnamed
    /// dedicated marker falls back to the field name even when the standard
    /// marker carries a name. Returns `None` for a field without any column
    /// marker.
    pub fn column_name(&self) -> Option<String> {
        let dedicated = self.markers.iter().find_map(|m| match m {
            Marker::Column { name } => Some(name.clone()),
            _ => None,
        });
        let standard = self.markers.iter().find_map(|m| match m {
            Marker::StdColumn { name } => Some(name.clone()),
            _ => None,
        });
        let name = dedicated.or(standard)?;
        Some(name.unwrap_or_else(|| self.name.clone()))
    }
}
