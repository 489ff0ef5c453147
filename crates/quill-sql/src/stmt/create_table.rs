use super::{ColumnDef, Statement};

use quill_core::schema::RecordType;

/// A `CREATE TABLE IF NOT EXISTS` statement. Re-running it against an
/// existing table with the same shape is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, in rendering order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(record_type: &RecordType) -> Self {
        CreateTable {
            name: record_type.name().to_string(),
            columns: record_type
                .fields()
                .iter()
                .map(ColumnDef::from_field)
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
