//! SQL statement assembly from table descriptors.
//!
//! Statements are generated ad hoc per table and never persisted.
//! Identifiers are emitted verbatim; quoting is the dialect layer's concern.

use gridwire_core::schema::TableDescriptor;

/// Builds the INSERT statement for a table.
///
/// Names the value columns first and the key columns last, one positional
/// placeholder per column, so the insert and update paths share one bind
/// order (value fields in declaration order, then the key).
pub fn insert_statement(table: &TableDescriptor) -> String {
    let mut columns: Vec<&str> = Vec::with_capacity(table.columns.len());
    columns.extend(table.value_columns().map(|c| c.column_name.as_str()));
    columns.extend(table.key_columns().map(|c| c.column_name.as_str()));

    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.table_name,
        columns.join(", "),
        placeholders
    )
}

/// Builds the UPDATE statement for a table.
///
/// Sets every non-key column in declaration order and filters by every key
/// column; multiple key columns are AND-ed.
pub fn update_statement(table: &TableDescriptor) -> String {
    let assignments = table
        .value_columns()
        .map(|c| format!("{} = ?", c.column_name))
        .collect::<Vec<_>>()
        .join(", ");
    let filters = table
        .key_columns()
        .map(|c| format!("{} = ?", c.column_name))
        .collect::<Vec<_>>()
        .join(" AND ");

    format!(
        "UPDATE {} SET {} WHERE {}",
        table.table_name, assignments, filters
    )
}
