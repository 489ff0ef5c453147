use crate::{Db, Record};

use quill_core::{
    schema::{FieldDescriptor, RecordType, PK},
    stmt::{self, Value},
    Error, Result,
};
use quill_sql::Statement;

/// A lazy INSERT builder.
///
/// Row values never render inline; every value binds through a positional
/// placeholder. A single-record insert returns the generated primary key;
/// a batch insert trades per-row id visibility for throughput and returns
/// nothing.
pub struct Insert<'a> {
    db: &'a Db,
    record_type: &'a RecordType,
    columns: Option<Vec<String>>,
    rows: Vec<Vec<Value>>,
}

impl<'a> Insert<'a> {
    pub(crate) fn new(db: &'a Db, record_type: &'a RecordType) -> Self {
        Self {
            db,
            record_type,
            columns: None,
            rows: vec![],
        }
    }

    /// Restricts the inserted columns to an explicit subset, sorted by
    /// name.
    pub fn fields(mut self, fields: &[&FieldDescriptor]) -> Self {
        let mut names: Vec<String> = fields
            .iter()
            .map(|field| field.name().to_string())
            .collect();
        names.sort();

        self.columns = Some(names);
        self
    }

    /// Queues a record for insertion.
    ///
    /// The first record fixes the column set when none was given
    /// explicitly: every field except an unset `pk`. An explicitly set
    /// `pk` is honored as an override.
    pub fn record(mut self, record: &Record) -> Result<Self> {
        if record.table() != self.record_type.name() {
            return Err(Error::invalid_statement(format!(
                "record of type `{}` cannot insert into `{}`",
                record.table(),
                self.record_type.name()
            )));
        }

        if self.columns.is_none() {
            self.columns = Some(
                record
                    .values()
                    .filter(|(name, value)| *name != PK || !value.is_null())
                    .map(|(name, _)| name.to_string())
                    .collect(),
            );
        }

        let columns = self.columns.as_ref().unwrap();
        let mut row = Vec::with_capacity(columns.len());

        for column in columns {
            let value = record.get(column).ok_or_else(|| {
                Error::invalid_statement(format!("record has no value for `{column}`"))
            })?;
            row.push(value.clone());
        }

        self.rows.push(row);
        Ok(self)
    }

    /// Queues several records; the first fixes the column set.
    pub fn records(mut self, records: &[Record]) -> Result<Self> {
        for record in records {
            self = self.record(record)?;
        }

        Ok(self)
    }

    fn to_insert(&self) -> Result<stmt::Insert> {
        let columns = self
            .columns
            .clone()
            .ok_or_else(|| Error::invalid_statement("INSERT requires at least one record"))?;

        if self.rows.is_empty() {
            return Err(Error::invalid_statement(
                "INSERT requires at least one record",
            ));
        }

        Ok(stmt::Insert {
            table: self.record_type.name().to_string(),
            columns,
            rows: self.rows.clone(),
        })
    }

    /// Renders the SQL text without touching storage.
    pub fn build(&self) -> Result<String> {
        Ok(Db::render(&self.to_insert()?.into()))
    }

    /// Executes the insert. Returns the generated primary key for a
    /// single record, `None` for a batch.
    pub fn execute(self) -> Result<Option<i64>> {
        let single = self.rows.len() == 1;
        let stmt: Statement = self.to_insert()?.into();
        let response = self.db.exec(&stmt)?;

        Ok(if single { response.last_insert_id } else { None })
    }
}
