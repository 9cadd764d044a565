//! Class definitions, field markers, and descriptor extraction.

mod descriptor;
mod entity;
mod extract;
mod field;
mod marker;

pub use descriptor::{ColumnDescriptor, TableDescriptor};
pub use entity::{EntityDef, TableMarker};
pub use extract::extract;
pub use field::{FieldDef, FieldKind};
pub use marker::Marker;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
