//! Connection and statement interfaces to the backing store.

use crate::value::SqlValue;

/// Driver-side failure surfaced through the connection interfaces.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Narrow connection interface the store adapter runs against.
///
/// Implementations wrap whatever driver or pool the integrator uses; the
/// adapter only ever prepares statements on it.
pub trait Connection {
    /// Prepares a statement for the given SQL text.
    fn prepare(&self, sql: &str) -> Result<Box<dyn Statement>, DriverError>;
}

/// Prepared statement with positional parameters.
///
/// Dropping a statement releases its driver-side resources; the adapter
/// relies on drop for cleanup on every exit path.
pub trait Statement {
    /// Binds the 1-based positional parameter to a value.
    fn bind(&mut self, index: usize, value: &SqlValue) -> Result<(), DriverError>;

    /// Executes the statement, returning the affected row count.
    fn execute(&mut self) -> Result<u64, DriverError>;
}
