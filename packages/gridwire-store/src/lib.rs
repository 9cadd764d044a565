//! Cache store adapter and SQL statement assembly.
//!
//! Persists cache writes to the relational backing store through narrow
//! connection/statement interfaces, with insert-then-update fallback.

pub mod adapter;
pub mod configurator;
pub mod connection;
pub mod error;
pub mod factory;
pub mod sql;
pub mod value;

pub use adapter::{CacheStore, WriteOutcome};
pub use configurator::{CacheConfigurator, GeneratedCaches};
pub use connection::{Connection, DriverError, Statement};
pub use error::StoreWriteError;
pub use factory::{DataSourceFactory, StoreFactory};
pub use value::{EntityValues, SqlValue};
