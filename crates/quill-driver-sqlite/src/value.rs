use quill_core::{stmt, Error, Result};

use rusqlite::types::{ToSqlOutput, ValueRef};

/// Bridges a quill value into rusqlite parameter binding.
pub(crate) struct Value<'a>(pub(crate) &'a stmt::Value);

impl rusqlite::ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            stmt::Value::Text(text) => ToSqlOutput::Borrowed(ValueRef::Text(text.as_bytes())),
            stmt::Value::Integer(value) => {
                ToSqlOutput::Owned(rusqlite::types::Value::Integer(*value))
            }
            stmt::Value::Real(value) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*value)),
            stmt::Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
        })
    }
}

/// Decodes one column of a result row.
pub(crate) fn from_sql(row: &rusqlite::Row<'_>, index: usize) -> Result<stmt::Value> {
    let value = row.get_ref(index).map_err(Error::driver)?;

    Ok(match value {
        ValueRef::Null => stmt::Value::Null,
        ValueRef::Integer(value) => stmt::Value::Integer(value),
        ValueRef::Real(value) => stmt::Value::Real(value),
        ValueRef::Text(text) => stmt::Value::Text(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(_) => {
            return Err(Error::unsupported_operation(
                "BLOB columns are outside the value domain",
            ))
        }
    })
}
