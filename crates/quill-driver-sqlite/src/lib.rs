mod value;
use value::{from_sql, Value};

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};

use quill_core::{driver::Response, stmt, Error, Result};
use url::Url;

/// SQLite driver configuration: a database file or an in-memory database.
#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Opens the connection. Foreign-key enforcement is switched on.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Self::File(path) => Connection::open(path),
            Self::InMemory => Connection::in_memory(),
        }
    }
}

/// An open SQLite connection. Exclusively owned by whoever holds it; every
/// operation is synchronous and blocking.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Self::configure(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Self::configure(connection)
    }

    fn configure(connection: RusqliteConnection) -> Result<Self> {
        connection
            .execute_batch("PRAGMA foreign_keys = ON")
            .map_err(Error::driver)?;

        Ok(Self { connection })
    }
}

impl quill_core::driver::Connection for Connection {
    fn exec(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Response> {
        tracing::debug!(sql, params = params.len(), "execute");

        let mut stmt = self.connection.prepare(sql).map_err(Error::driver)?;
        let width = stmt.column_count();
        let params = rusqlite::params_from_iter(params.iter().map(Value));

        if width == 0 {
            let count = stmt.execute(params).map_err(|err| exec_error(sql, err))?;
            drop(stmt);

            return Ok(Response {
                rows: vec![],
                last_insert_id: Some(self.connection.last_insert_rowid()),
                count,
            });
        }

        let mut rows = stmt.query(params).map_err(|err| exec_error(sql, err))?;
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(|err| exec_error(sql, err))? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                items.push(from_sql(row, index)?);
            }

            ret.push(items);
        }

        Ok(Response::rows(ret))
    }

    fn begin(&mut self) -> Result<()> {
        tracing::debug!("BEGIN");
        self.connection.execute_batch("BEGIN").map_err(Error::driver)
    }

    fn commit(&mut self) -> Result<()> {
        tracing::debug!("COMMIT");
        self.connection
            .execute_batch("COMMIT")
            .map_err(Error::driver)
    }

    fn rollback(&mut self) -> Result<()> {
        tracing::debug!("ROLLBACK");
        self.connection
            .execute_batch("ROLLBACK")
            .map_err(Error::driver)
    }
}

/// Constraint failures surface as integrity violations with the offending
/// statement attached; everything else passes through as a driver error.
fn exec_error(sql: &str, err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(cause, _)
            if cause.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::integrity_violation(sql, err.to_string())
        }
        _ => Error::driver(err),
    }
}
