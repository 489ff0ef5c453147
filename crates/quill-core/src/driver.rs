use crate::{stmt::Value, Result};

/// One result row, columns in SELECT order.
pub type Row = Vec<Value>;

/// A synchronous connection to the storage engine.
///
/// The handle is exclusively owned by one adapter instance; statements
/// borrow it only for the duration of a call and never retain it.
pub trait Connection {
    /// Executes a statement. Reads return rows; writes return the affected
    /// count and, for inserts, the generated row id.
    fn exec(&mut self, sql: &str, params: &[Value]) -> Result<Response>;

    fn begin(&mut self) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    fn rollback(&mut self) -> Result<()>;
}

/// The result of executing a statement.
#[derive(Debug, Default)]
pub struct Response {
    /// Rows returned by a read
    pub rows: Vec<Row>,

    /// Row id generated by the most recent insert on this connection.
    /// Only meaningful directly after a single-row INSERT.
    pub last_insert_id: Option<i64>,

    /// Rows affected by a write
    pub count: usize,
}

impl Response {
    pub fn rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}
