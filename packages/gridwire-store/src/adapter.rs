//! Cache store adapter with insert-then-update fallback.

use std::sync::Arc;

use gridwire_core::schema::TableDescriptor;

use crate::connection::{Connection, DriverError, Statement};
use crate::error::StoreWriteError;
use crate::sql;
use crate::value::{EntityValues, SqlValue};

/// Which branch of the write path committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The initial INSERT committed
    Inserted,
    /// The INSERT failed and the UPDATE fallback committed
    Updated,
}

/// Write-through/write-behind store adapter for one backing table.
///
/// Writes try an INSERT first and fall back to exactly one UPDATE when the
/// insert fails, typically on a key collision; the race between concurrent
/// writers for the same key is resolved by the store's key uniqueness, not
/// adapter locking. Loads always miss and deletes are no-ops; this adapter
/// only propagates writes.
#[derive(Debug, Clone)]
pub struct CacheStore {
    table: Arc<TableDescriptor>,
}

impl CacheStore {
    /// Creates an adapter over a shared table descriptor.
    pub fn new(table: Arc<TableDescriptor>) -> Self {
        Self { table }
    }

    /// The descriptor this adapter writes.
    pub fn table(&self) -> &TableDescriptor {
        &self.table
    }

    /// Loads the entry for a key from the backing store.
    ///
    /// Always `None`: reads are served by the cache itself and a
    /// read-through miss degrades to a loader miss.
    pub fn load(&self, key: &SqlValue) -> Option<EntityValues> {
        tracing::debug!(
            "Load for key {:?} on '{}' served as miss",
            key,
            self.table.table_name
        );
        None
    }

    /// Writes one cache entry to the backing table.
    ///
    /// Prepares the INSERT, binds the non-key field values in declaration
    /// order followed by the key, and executes. Any failure on that path
    /// (preparation, binding, or execution) falls back to the UPDATE with
    /// the same bind order, exactly once. Statements are dropped, and
    /// thereby closed, on every path.
    ///
    /// # Arguments
    /// * `conn` - Connection to prepare statements on
    /// * `key` - Key value of the entry
    /// * `values` - Non-key field values, keyed by field name
    ///
    /// # Returns
    /// `Result<WriteOutcome, StoreWriteError>` reporting which branch
    /// committed, or the update step's failure when both steps fail.
    pub fn write(
        &self,
        conn: &dyn Connection,
        key: &SqlValue,
        values: &EntityValues,
    ) -> Result<WriteOutcome, StoreWriteError> {
        let insert_err = match self.try_insert(conn, key, values) {
            Ok(()) => return Ok(WriteOutcome::Inserted),
            Err(e) => e,
        };

        tracing::debug!(
            "Insert into '{}' failed ({}), falling back to update",
            self.table.table_name,
            insert_err
        );

        match self.try_update(conn, key, values) {
            Ok(()) => Ok(WriteOutcome::Updated),
            Err(update_err) => {
                tracing::error!(
                    "Write to '{}' failed in both steps: insert: {}; update: {}",
                    self.table.table_name,
                    insert_err,
                    update_err
                );
                Err(StoreWriteError {
                    table: self.table.table_name.clone(),
                    key: key.clone(),
                    values: format!("{:?}", values),
                    source: update_err,
                })
            }
        }
    }

    /// Deletes are not propagated; entries age out of the backing store out
    /// of band. Never fails and prepares no statement.
    pub fn delete(&self, key: &SqlValue) -> Result<(), StoreWriteError> {
        tracing::debug!(
            "Delete for key {:?} on '{}' ignored",
            key,
            self.table.table_name
        );
        Ok(())
    }

    fn try_insert(
        &self,
        conn: &dyn Connection,
        key: &SqlValue,
        values: &EntityValues,
    ) -> Result<(), DriverError> {
        let mut stmt = conn.prepare(&sql::insert_statement(&self.table))?;
        self.bind_entry(stmt.as_mut(), key, values)?;
        stmt.execute()?;
        Ok(())
    }

    fn try_update(
        &self,
        conn: &dyn Connection,
        key: &SqlValue,
        values: &EntityValues,
    ) -> Result<(), DriverError> {
        let mut stmt = conn.prepare(&sql::update_statement(&self.table))?;
        self.bind_entry(stmt.as_mut(), key, values)?;
        stmt.execute()?;
        Ok(())
    }

    /// Binds value fields in declaration order, then the key.
    ///
    /// Both generated statements order their parameters this way. Fields
    /// missing from the value map bind as `Null`.
    fn bind_entry(
        &self,
        stmt: &mut dyn Statement,
        key: &SqlValue,
        values: &EntityValues,
    ) -> Result<(), DriverError> {
        let key_count = self.table.key_columns().count();
        if key_count != 1 {
            return Err(format!(
                "table '{}' has {} key columns; the write path binds single-column keys only",
                self.table.table_name, key_count
            )
            .into());
        }

        let mut index = 1;
        for column in self.table.value_columns() {
            let value = values
                .get(&column.field_name)
                .cloned()
                .unwrap_or(SqlValue::Null);
            stmt.bind(index, &value)?;
            index += 1;
        }
        stmt.bind(index, key)?;
        Ok(())
    }
}
