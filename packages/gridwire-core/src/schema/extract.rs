//! Descriptor extraction from class definitions.

use crate::error::SchemaError;

use super::descriptor::{ColumnDescriptor, TableDescriptor};
use super::entity::EntityDef;

/// Extracts the table descriptor for one class definition.
///
/// Walks the declared fields in order; a field becomes a column when it
/// carries a column marker from either vocabulary and a key column when it
/// also carries a key marker. Naming follows the resolution rules on
/// [`FieldDef`](super::FieldDef) and the table marker; table names are
/// upper-cased, defaulting to the type name.
///
/// # Arguments
/// * `def` - Class definition to extract
///
/// # Returns
/// `Result<TableDescriptor, SchemaError>` containing the descriptor or the
/// first structural defect found.
pub fn extract(def: &EntityDef) -> Result<TableDescriptor, SchemaError> {
    let table = def
        .table
        .as_ref()
        .ok_or_else(|| SchemaError::MissingTableMarker {
            type_name: def.type_name.clone(),
        })?;

    let table_name = table
        .name
        .clone()
        .unwrap_or_else(|| def.type_name.clone())
        .to_uppercase();

    let mut columns = Vec::new();
    for field in &def.fields {
        let column_name = match field.column_name() {
            Some(name) => name,
            None => continue,
        };
        columns.push(ColumnDescriptor {
            column_name,
            field_name: field.name.clone(),
            kind: field.kind.clone(),
            is_key: field.is_key(),
        });
    }

    if columns.is_empty() {
        return Err(SchemaError::MissingColumns {
            type_name: def.type_name.clone(),
        });
    }
    if !columns.iter().any(|c| c.is_key) {
        return Err(SchemaError::MissingKey {
            type_name: def.type_name.clone(),
        });
    }
    if columns.iter().all(|c| c.is_key) {
        return Err(SchemaError::NoValueColumns {
            type_name: def.type_name.clone(),
        });
    }

    tracing::debug!(
        "Extracted table '{}' for type '{}' ({} columns)",
        table_name,
        def.type_name,
        columns.len()
    );

    Ok(TableDescriptor {
        table_name,
        cache_name: table.cache_name.clone(),
        type_name: def.type_name.clone(),
        columns,
    })
}
