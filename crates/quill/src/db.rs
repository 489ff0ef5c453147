use std::cell::{Cell, RefCell};

use quill_core::{
    driver::{Connection, Response},
    schema::{RecordType, Registry},
    Result,
};
use quill_driver_sqlite::Sqlite;
use quill_sql::{Serializer, Statement};

use crate::stmt::{CreateTable, Delete, DropTable, Insert, Select, Update};

/// Handle to an open database: the schema registry plus the exclusively
/// owned connection.
///
/// Statement builders borrow the connection only for the duration of an
/// `execute()`; the handle itself is single-threaded and synchronous.
pub struct Db {
    registry: Registry,
    connection: RefCell<Box<dyn Connection>>,

    /// Transaction nesting depth. Only the outermost scope begins and
    /// commits; inner scopes are no-ops.
    tx_depth: Cell<usize>,
}

impl Db {
    /// Wraps an already-open connection.
    pub fn new(connection: Box<dyn Connection>) -> Self {
        Self {
            registry: Registry::new(),
            connection: RefCell::new(connection),
            tx_depth: Cell::new(0),
        }
    }

    /// Opens a database from a `sqlite:` connection URL.
    pub fn open(url: impl Into<String>) -> Result<Self> {
        let connection = Sqlite::new(url)?.connect()?;
        Ok(Self::new(Box::new(connection)))
    }

    /// Opens a fresh in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = Sqlite::in_memory().connect()?;
        Ok(Self::new(Box::new(connection)))
    }

    /// Declares a record type, returning its immutable schema handle.
    pub fn declare(&mut self, record_type: RecordType) -> Result<&RecordType> {
        self.registry.declare(record_type)
    }

    /// Looks up a declared record type by name.
    pub fn table(&self, name: &str) -> Result<&RecordType> {
        self.registry.get(name)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn create_table(&self) -> CreateTable<'_> {
        CreateTable::new(self)
    }

    pub fn drop_table(&self) -> DropTable<'_> {
        DropTable::new(self)
    }

    pub fn insert<'a>(&'a self, record_type: &'a RecordType) -> Insert<'a> {
        Insert::new(self, record_type)
    }

    pub fn select<'a>(&'a self, record_type: &'a RecordType) -> Select<'a> {
        Select::new(self, record_type)
    }

    pub fn update<'a>(&'a self, record_type: &'a RecordType) -> Update<'a> {
        Update::new(self, record_type)
    }

    pub fn delete<'a>(&'a self, record_type: &'a RecordType) -> Delete<'a> {
        Delete::new(self, record_type)
    }

    /// Runs `f` inside a transaction: commit on `Ok`, rollback on `Err`.
    ///
    /// Nested calls degrade to a no-op begin; only the outermost scope
    /// actually commits or rolls back.
    pub fn transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let depth = self.tx_depth.get();

        if depth == 0 {
            self.connection.borrow_mut().begin()?;
        }

        self.tx_depth.set(depth + 1);
        let result = f(self);
        self.tx_depth.set(depth);

        if depth == 0 {
            match &result {
                Ok(_) => self.connection.borrow_mut().commit()?,
                Err(_) => self.connection.borrow_mut().rollback()?,
            }
        }

        result
    }

    pub(crate) fn exec(&self, stmt: &Statement) -> Result<Response> {
        let mut params = Vec::new();
        let sql = Serializer::sqlite().serialize(stmt, &mut params);

        tracing::debug!(%sql, params = params.len(), "execute");

        self.connection.borrow_mut().exec(&sql, &params)
    }

    /// Renders a statement without touching storage.
    pub(crate) fn render(stmt: &Statement) -> String {
        let mut params = Vec::new();
        Serializer::sqlite().serialize(stmt, &mut params)
    }
}
