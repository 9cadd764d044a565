//! SQL type inference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldKind;

/// SQL column type inferred for a storage binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    BigInt,
    Integer,
    Double,
    Varchar,
    Timestamp,
}

impl SqlType {
    /// Infers the SQL type for a field kind.
    ///
    /// Total: every temporal kind maps to `Timestamp`, kinds without a
    /// dedicated mapping fall back to `Varchar`.
    pub fn infer(kind: &FieldKind) -> SqlType {
        match kind {
            FieldKind::Long => SqlType::BigInt,
            FieldKind::Int => SqlType::Integer,
            FieldKind::Double => SqlType::Double,
            FieldKind::Text => SqlType::Varchar,
            FieldKind::Date | FieldKind::DateTime | FieldKind::Time | FieldKind::Timestamp => {
                SqlType::Timestamp
            }
            FieldKind::Custom(_) => SqlType::Varchar,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::BigInt => "BIGINT",
            SqlType::Integer => "INTEGER",
            SqlType::Double => "DOUBLE",
            SqlType::Varchar => "VARCHAR",
            SqlType::Timestamp => "TIMESTAMP",
        };
        write!(f, "{}", name)
    }
}
