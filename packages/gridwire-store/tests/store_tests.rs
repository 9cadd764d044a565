//! Store adapter tests against a scripted driver mock.
//!
//! The mock records every prepare/bind/execute and counts statement drops,
//! so the tests can check the write state machine and that statements are
//! closed on every exit path.

use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Arc, Mutex};

use ntest::timeout;

use gridwire_core::schema::{extract, EntityDef, FieldDef, FieldKind, Marker, TableMarker};
use gridwire_store::{
    CacheStore, Connection, DriverError, EntityValues, SqlValue, Statement, WriteOutcome,
};

type Script<T> = Arc<Mutex<VecDeque<Result<T, String>>>>;

#[derive(Debug, Clone, Default)]
struct DriverLog {
    prepared: Vec<String>,
    bound: Vec<(usize, SqlValue)>,
    executed: usize,
    closed: usize,
}

#[derive(Default)]
struct MockConnection {
    log: Arc<Mutex<DriverLog>>,
    prepare_script: Script<()>,
    bind_script: Script<()>,
    exec_script: Script<u64>,
}

impl MockConnection {
    fn new() -> Self {
        Self::default()
    }

    /// Scripts the next execute outcomes; unscripted executes succeed.
    fn with_execs(self, outcomes: Vec<Result<u64, &'static str>>) -> Self {
        self.exec_script
            .lock()
            .unwrap()
            .extend(outcomes.into_iter().map(|r| r.map_err(str::to_string)));
        self
    }

    /// Scripts the next prepare outcomes; unscripted prepares succeed.
    fn with_prepares(self, outcomes: Vec<Result<(), &'static str>>) -> Self {
        self.prepare_script
            .lock()
            .unwrap()
            .extend(outcomes.into_iter().map(|r| r.map_err(str::to_string)));
        self
    }

    /// Scripts the next bind outcomes; unscripted binds succeed.
    fn with_binds(self, outcomes: Vec<Result<(), &'static str>>) -> Self {
        self.bind_script
            .lock()
            .unwrap()
            .extend(outcomes.into_iter().map(|r| r.map_err(str::to_string)));
        self
    }

    fn snapshot(&self) -> DriverLog {
        self.log.lock().unwrap().clone()
    }
}

impl Connection for MockConnection {
    fn prepare(&self, sql: &str) -> Result<Box<dyn Statement>, DriverError> {
        if let Some(outcome) = self.prepare_script.lock().unwrap().pop_front() {
            outcome?;
        }
        self.log.lock().unwrap().prepared.push(sql.to_string());
        Ok(Box::new(MockStatement {
            log: Arc::clone(&self.log),
            bind_script: Arc::clone(&self.bind_script),
            exec_script: Arc::clone(&self.exec_script),
        }))
    }
}

struct MockStatement {
    log: Arc<Mutex<DriverLog>>,
    bind_script: Script<()>,
    exec_script: Script<u64>,
}

impl Statement for MockStatement {
    fn bind(&mut self, index: usize, value: &SqlValue) -> Result<(), DriverError> {
        if let Some(outcome) = self.bind_script.lock().unwrap().pop_front() {
            outcome?;
        }
        self.log.lock().unwrap().bound.push((index, value.clone()));
        Ok(())
    }

    fn execute(&mut self) -> Result<u64, DriverError> {
        self.log.lock().unwrap().executed += 1;
        match self.exec_script.lock().unwrap().pop_front() {
            Some(outcome) => Ok(outcome?),
            None => Ok(1),
        }
    }
}

impl Drop for MockStatement {
    fn drop(&mut self) {
        self.log.lock().unwrap().closed += 1;
    }
}

fn invoice_store() -> CacheStore {
    let def = EntityDef::new("Invoice")
        .table(TableMarker::new("invoiceCache"))
        .field(
            FieldDef::new("invoiceId", FieldKind::Long)
                .with(Marker::Key)
                .with(Marker::column("INVOICE_ID")),
        )
        .field(FieldDef::new("amount", FieldKind::Double).with(Marker::Column { name: None }))
        .field(FieldDef::new("memo", FieldKind::Text).with(Marker::column("MEMO")));
    CacheStore::new(Arc::new(extract(&def).unwrap()))
}

fn invoice_values() -> EntityValues {
    EntityValues::new()
        .with("amount", SqlValue::Double(120.5))
        .with("memo", SqlValue::Text("net 30".to_string()))
}

#[test]
#[timeout(1000)]
fn test_absent_key_inserts_once() {
    let store = invoice_store();
    let conn = MockConnection::new();

    let outcome = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Inserted);

    let log = conn.snapshot();
    assert_eq!(
        log.prepared,
        vec!["INSERT INTO INVOICE (amount, MEMO, INVOICE_ID) VALUES (?, ?, ?)".to_string()]
    );
    // Value fields in declaration order, then the key
    assert_eq!(
        log.bound,
        vec![
            (1, SqlValue::Double(120.5)),
            (2, SqlValue::Text("net 30".to_string())),
            (3, SqlValue::Long(7)),
        ]
    );
    assert_eq!(log.executed, 1);
    assert_eq!(log.closed, 1);
}

#[test]
#[timeout(1000)]
fn test_present_key_falls_back_to_update() {
    let store = invoice_store();
    let conn = MockConnection::new().with_execs(vec![Err("duplicate key"), Ok(1)]);

    let outcome = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Updated);

    let log = conn.snapshot();
    assert_eq!(log.prepared.len(), 2);
    assert_eq!(
        log.prepared[1],
        "UPDATE INVOICE SET amount = ?, MEMO = ? WHERE INVOICE_ID = ?"
    );
    // Same bind order on both statements
    assert_eq!(log.bound[..3], log.bound[3..]);
    assert_eq!(log.executed, 2);
    assert_eq!(log.closed, 2);
}

#[test]
fn test_double_failure_surfaces_update_cause() {
    let store = invoice_store();
    let conn = MockConnection::new().with_execs(vec![Err("duplicate key"), Err("lock timeout")]);

    let err = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap_err();

    assert_eq!(err.table, "INVOICE");
    assert_eq!(err.key, SqlValue::Long(7));
    assert_eq!(err.source().unwrap().to_string(), "lock timeout");
    assert!(err.to_string().contains("INVOICE"));

    let log = conn.snapshot();
    // Exactly one retry, statements closed on the failure path too
    assert_eq!(log.prepared.len(), 2);
    assert_eq!(log.executed, 2);
    assert_eq!(log.closed, 2);
}

#[test]
fn test_bind_failure_takes_the_fallback_path() {
    let store = invoice_store();
    let conn = MockConnection::new().with_binds(vec![Err("type clash")]);

    let outcome = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Updated);

    let log = conn.snapshot();
    assert_eq!(log.prepared.len(), 2);
    // The insert never reached execute
    assert_eq!(log.executed, 1);
    assert_eq!(log.closed, 2);
}

#[test]
fn test_prepare_failure_takes_the_fallback_path() {
    let store = invoice_store();
    let conn = MockConnection::new().with_prepares(vec![Err("connection reset")]);

    let outcome = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Updated);

    let log = conn.snapshot();
    // Only the update statement ever existed
    assert_eq!(log.prepared.len(), 1);
    assert!(log.prepared[0].starts_with("UPDATE INVOICE"));
    assert_eq!(log.closed, 1);
}

#[test]
fn test_both_prepares_failing_is_a_write_error() {
    let store = invoice_store();
    let conn = MockConnection::new()
        .with_prepares(vec![Err("connection reset"), Err("connection reset")]);

    let err = store
        .write(&conn, &SqlValue::Long(7), &invoice_values())
        .unwrap_err();
    assert_eq!(err.source().unwrap().to_string(), "connection reset");

    let log = conn.snapshot();
    assert_eq!(log.prepared.len(), 0);
    assert_eq!(log.executed, 0);
    assert_eq!(log.closed, 0);
}

#[test]
fn test_missing_value_fields_bind_null() {
    let store = invoice_store();
    let conn = MockConnection::new();
    let values = EntityValues::new().with("amount", SqlValue::Double(9.0));

    store.write(&conn, &SqlValue::Long(1), &values).unwrap();

    let log = conn.snapshot();
    assert_eq!(log.bound[1], (2, SqlValue::Null));
}

#[test]
fn test_composite_key_write_is_rejected() {
    let def = EntityDef::new("Ledger")
        .table(TableMarker::new("ledgerCache"))
        .field(
            FieldDef::new("tenantId", FieldKind::Long)
                .with(Marker::Key)
                .with(Marker::column("TENANT_ID")),
        )
        .field(
            FieldDef::new("entryId", FieldKind::Long)
                .with(Marker::Key)
                .with(Marker::column("ENTRY_ID")),
        )
        .field(FieldDef::new("balance", FieldKind::Double).with(Marker::Column { name: None }));
    let store = CacheStore::new(Arc::new(extract(&def).unwrap()));
    let conn = MockConnection::new();

    let err = store
        .write(&conn, &SqlValue::Long(1), &EntityValues::new())
        .unwrap_err();
    assert!(err.source().unwrap().to_string().contains("key columns"));

    let log = conn.snapshot();
    // Both statements were prepared, rejected at bind, and closed
    assert_eq!(log.prepared.len(), 2);
    assert_eq!(log.executed, 0);
    assert_eq!(log.closed, 2);
}

#[test]
fn test_load_always_misses() {
    let store = invoice_store();
    assert!(store.load(&SqlValue::Long(7)).is_none());
}

#[test]
fn test_delete_never_fails_and_touches_nothing() {
    let store = invoice_store();
    store.delete(&SqlValue::Long(7)).unwrap();
    store.delete(&SqlValue::Null).unwrap();
}
