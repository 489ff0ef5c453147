use super::{FieldDescriptor, PK};
use crate::{Error, Result};

/// A declared schema entry: named, typed fields backing one table.
///
/// Fields are stored sorted by name so that DDL output, `SELECT *` column
/// order, and row materialization all agree deterministically. The implicit
/// `pk` field is appended at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordType {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Result<Self> {
        let name = name.into();
        let mut fields = fields;

        for (i, field) in fields.iter().enumerate() {
            if field.name() == PK {
                return Err(Error::invalid_schema(format!(
                    "field name `{PK}` is reserved on `{name}`"
                )));
            }

            if fields[..i].iter().any(|prior| prior.name() == field.name()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` on `{name}`",
                    field.name()
                )));
            }
        }

        fields.push(FieldDescriptor::primary_key());
        fields.sort_by(|a, b| a.name().cmp(b.name()));

        for field in &mut fields {
            field.set_table(&name);
        }

        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every field, `pk` included, sorted by name.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name())
    }

    pub fn field(&self, name: &str) -> Result<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| {
                Error::invalid_statement(format!("unknown field `{name}` on `{}`", self.name))
            })
    }

    pub fn pk(&self) -> &FieldDescriptor {
        self.fields
            .iter()
            .find(|field| field.is_primary_key())
            .expect("record type always carries a primary key")
    }
}
