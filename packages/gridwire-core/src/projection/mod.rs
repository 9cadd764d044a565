//! Storage-binding and query-schema projections.

mod build;
mod query;
mod sql_type;
mod storage;

pub use build::build_projections;
pub use query::QuerySchema;
pub use sql_type::SqlType;
pub use storage::{ColumnBinding, StorageBinding};
