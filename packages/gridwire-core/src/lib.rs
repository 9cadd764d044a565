//! Schema extraction and cache configuration assembly for grid-backed caches.
//!
//! Turns declaratively marked class definitions into table descriptors,
//! storage/query projections, and per-cache configurations.

pub mod config;
pub mod error;
pub mod projection;
pub mod registry;
pub mod schema;

mod macros;

pub use error::{AssemblyError, SchemaError};
