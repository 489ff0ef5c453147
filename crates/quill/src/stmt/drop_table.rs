use crate::Db;

use quill_core::{schema::RecordType, Error, Result};
use quill_sql::Statement;

/// A lazy DROP TABLE builder. Renders `IF EXISTS`, so dropping a table
/// that does not exist is not an error.
pub struct DropTable<'a> {
    db: &'a Db,
    table: Option<String>,
}

impl<'a> DropTable<'a> {
    pub(crate) fn new(db: &'a Db) -> Self {
        Self { db, table: None }
    }

    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    pub fn from_record_type(self, record_type: &RecordType) -> Self {
        self.table(record_type.name())
    }

    fn to_stmt(&self) -> Result<Statement> {
        let name = self
            .table
            .clone()
            .ok_or_else(|| Error::invalid_statement("DROP TABLE requires a table"))?;

        Ok(Statement::drop_table(name))
    }

    /// Renders the SQL text without touching storage.
    pub fn build(&self) -> Result<String> {
        Ok(Db::render(&self.to_stmt()?))
    }

    pub fn execute(self) -> Result<()> {
        let stmt = self.to_stmt()?;
        self.db.exec(&stmt)?;
        Ok(())
    }
}
