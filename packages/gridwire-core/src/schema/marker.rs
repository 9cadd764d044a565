//! Declarative field markers.

use serde::{Deserialize, Serialize};

/// Field marker from the dedicated or the standard persistence vocabulary.
///
/// Both vocabularies map a field the same way; when a field carries markers
/// from both, the dedicated one shadows the standard one entirely, column
/// name included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Dedicated key marker
    Key,
    /// Dedicated column marker with an optional explicit column name
    Column { name: Option<String> },
    /// Standard persistence id marker (synonym for `Key`)
    StdId,
    /// Standard persistence column marker (synonym for `Column`)
    StdColumn { name: Option<String> },
}

impl Marker {
    /// Dedicated column marker carrying an explicit name.
    pub fn column(name: impl Into<String>) -> Self {
        Marker::Column {
            name: Some(name.into()),
        }
    }

    /// Standard persistence column marker carrying an explicit name.
    pub fn std_column(name: impl Into<String>) -> Self {
        Marker::StdColumn {
            name: Some(name.into()),
        }
    }

    /// Whether this marker designates a key field.
    pub fn is_key(&self) -> bool {
        matches!(self, Marker::Key | Marker::StdId)
    }

    /// Whether this marker maps the field to a column.
    pub fn is_column(&self) -> bool {
        matches!(self, Marker::Column { .. } | Marker::StdColumn { .. })
    }
}
