use crate::Db;

use quill_core::{
    schema::{FieldDescriptor, RecordType},
    Error, Result,
};
use quill_sql::{stmt, Statement};

/// A lazy CREATE TABLE builder.
///
/// The statement is idempotent: it renders `IF NOT EXISTS`, so re-running
/// it against an existing table of the same shape is a no-op.
pub struct CreateTable<'a> {
    db: &'a Db,
    table: Option<String>,
    columns: Vec<stmt::ColumnDef>,
}

impl<'a> CreateTable<'a> {
    pub(crate) fn new(db: &'a Db) -> Self {
        Self {
            db,
            table: None,
            columns: vec![],
        }
    }

    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    /// Sets the columns from raw field descriptors, sorted by name for
    /// deterministic output.
    pub fn fields(mut self, fields: &[FieldDescriptor]) -> Self {
        let mut fields: Vec<&FieldDescriptor> = fields.iter().collect();
        fields.sort_by(|a, b| a.name().cmp(b.name()));

        self.columns = fields.into_iter().map(stmt::ColumnDef::from_field).collect();
        self
    }

    /// Targets the record type's table with its full field set, implicit
    /// primary key included.
    pub fn from_record_type(mut self, record_type: &RecordType) -> Self {
        self.table = Some(record_type.name().to_string());
        self.columns = record_type
            .fields()
            .iter()
            .map(stmt::ColumnDef::from_field)
            .collect();
        self
    }

    fn to_stmt(&self) -> Result<Statement> {
        let name = self
            .table
            .clone()
            .ok_or_else(|| Error::invalid_statement("CREATE TABLE requires a table"))?;

        if self.columns.is_empty() {
            return Err(Error::invalid_statement(
                "CREATE TABLE requires at least one field",
            ));
        }

        Ok(stmt::CreateTable {
            name,
            columns: self.columns.clone(),
        }
        .into())
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
