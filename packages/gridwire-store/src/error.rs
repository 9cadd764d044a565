//! Store adapter error types.

use thiserror::Error;

use crate::connection::DriverError;
use crate::value::SqlValue;

/// Both write steps failed for one cache entry.
///
/// Carries the entry key and a rendering of the value fields for
/// diagnostics. The source is the update step's failure; the insert failure
/// is logged when the fallback starts.
#[derive(Error, Debug)]
#[error("Write to '{table}' failed for key {key:?} (values: {values})")]
pub struct StoreWriteError {
    /// Backing table name
    pub table: String,
    /// Entry key
    pub key: SqlValue,
    /// Debug rendering of the value fields
    pub values: String,
    /// Update-step failure
    #[source]
    pub source: DriverError,
}
