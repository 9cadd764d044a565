//! Declarative construction of class definitions.

/// Builds an [`EntityDef`](crate::schema::EntityDef) from a braced field
/// list.
///
/// Fields carry `#[key]` and `#[column]` / `#[column("NAME")]` markers from
/// the dedicated vocabulary; unmarked fields stay unmapped. The `table`
/// clause is optional and defaults like the builder API; the standard
/// persistence vocabulary and `Custom` kinds are builder-only.
///
/// ```
/// use gridwire_core::entity;
///
/// let def = entity! {
///     Invoice => cache "invoiceCache", table "invoice" {
///         #[key] #[column("INVOICE_ID")] invoice_id: Long,
///         #[column] amount: Double,
///         memo: Text,
///     }
/// };
///
/// assert_eq!(def.type_name, "Invoice");
/// assert_eq!(def.fields.len(), 3);
/// ```
#[macro_export]
macro_rules! entity {
    (
        $type_name:ident => cache $cache:literal $(, table $table:literal)? {
            $(
                $(#[$marker:ident $(($name:literal))?])*
                $field:ident : $kind:ident
            ),* $(,)?
        }
    ) => {
        $crate::schema::EntityDef::new(stringify!($type_name))
            .table($crate::__entity_table!($cache $(, $table)?))
            $(
                .field(
                    $crate::schema::FieldDef::new(
                        stringify!($field),
                        $crate::schema::FieldKind::$kind,
                    )
                    $(.with($crate::__entity_marker!($marker $(($name))?)))*
                )
            )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entity_table {
    ($cache:literal) => {
        $crate::schema::TableMarker::new($cache)
    };
    ($cache:literal, $table:literal) => {
        $crate::schema::TableMarker::named($cache, $table)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entity_marker {
    (key) => {
        $crate::schema::Marker::Key
    };
    (column) => {
        $crate::schema::Marker::Column { name: None }
    };
    (column($name:literal)) => {
        $crate::schema::Marker::column($name)
    };
}
