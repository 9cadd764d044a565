//! Schema and assembly error types.

use thiserror::Error;

/// Structural defects found while extracting a descriptor from a class
/// definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Class carries no table marker
    #[error("Type '{type_name}' carries no table marker")]
    MissingTableMarker { type_name: String },

    /// No mapped column carries a key marker
    #[error("Type '{type_name}' declares no key column")]
    MissingKey { type_name: String },

    /// No field carries a column marker
    #[error("Type '{type_name}' declares no mapped columns")]
    MissingColumns { type_name: String },

    /// Every mapped column is a key
    #[error("Type '{type_name}' declares no value columns")]
    NoValueColumns { type_name: String },
}

impl SchemaError {
    /// Type the defect was found on.
    pub fn type_name(&self) -> &str {
        match self {
            SchemaError::MissingTableMarker { type_name }
            | SchemaError::MissingKey { type_name }
            | SchemaError::MissingColumns { type_name }
            | SchemaError::NoValueColumns { type_name } => type_name,
        }
    }
}

/// Schema failure hit while assembling a batch of cache configurations.
///
/// Aborts the whole batch; no partial configuration set escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cache configuration aborted at type '{type_name}'")]
pub struct AssemblyError {
    /// Type whose schema failed
    pub type_name: String,
    /// Underlying schema defect
    #[source]
    pub cause: SchemaError,
}
