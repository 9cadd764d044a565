//! Projection construction from table descriptors.

use std::collections::BTreeSet;

use crate::error::SchemaError;
use crate::schema::TableDescriptor;

use super::query::QuerySchema;
use super::sql_type::SqlType;
use super::storage::{ColumnBinding, StorageBinding};

/// Builds the storage-binding and query-schema projections for one table.
///
/// Both projections come out of the same descriptor walk: the storage
/// binding materializes inferred SQL types per column, the query schema maps
/// field names to type names with the key set sorted lexicographically.
///
/// # Arguments
/// * `table` - Source table descriptor
///
/// # Returns
/// `Result<(StorageBinding, QuerySchema), SchemaError>` with both
/// projections, or `MissingKey` for a descriptor without key columns.
pub fn build_projections(
    table: &TableDescriptor,
) -> Result<(StorageBinding, QuerySchema), SchemaError> {
    let first_key = table.first_key().ok_or_else(|| SchemaError::MissingKey {
        type_name: table.type_name.clone(),
    })?;

    let key_type = first_key.kind.type_name().to_string();
    let key_field_name = first_key.field_name.clone();

    let mut key_fields = Vec::new();
    let mut value_fields = Vec::new();
    let mut key_field_names = BTreeSet::new();
    let mut fields = Vec::with_capacity(table.columns.len());

    for column in &table.columns {
        let binding = ColumnBinding {
            sql_type: SqlType::infer(&column.kind),
            column_name: column.column_name.clone(),
            field_name: column.field_name.clone(),
            kind: column.kind.clone(),
        };
        if column.is_key {
            key_field_names.insert(column.field_name.clone());
            key_fields.push(binding);
        } else {
            value_fields.push(binding);
        }
        fields.push((
            column.field_name.clone(),
            column.kind.type_name().to_string(),
        ));
    }

    tracing::debug!(
        "Built projections for table '{}' ({} key fields, {} value fields)",
        table.table_name,
        key_fields.len(),
        value_fields.len()
    );

    let storage = StorageBinding {
        cache_name: table.cache_name.clone(),
        table_name: table.table_name.clone(),
        value_type: table.type_name.clone(),
        key_type: key_type.clone(),
        key_fields,
        value_fields,
    };

    let query = QuerySchema {
        value_type_name: table.type_name.clone(),
        key_type_name: key_type,
        key_field_name,
        key_field_names,
        fields,
    };

    Ok((storage, query))
}
