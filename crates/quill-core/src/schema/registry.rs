use super::RecordType;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Holds every declared record type, keyed by name, in declaration order.
///
/// Built once at startup; immutable afterwards apart from further
/// declarations.
#[derive(Debug, Default)]
pub struct Registry {
    types: IndexMap<String, RecordType>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a record type. Foreign keys must reference an
    /// already-declared record type (or the type being declared itself).
    pub fn declare(&mut self, record_type: RecordType) -> Result<&RecordType> {
        if self.types.contains_key(record_type.name()) {
            return Err(Error::invalid_schema(format!(
                "record type `{}` is already declared",
                record_type.name()
            )));
        }

        for field in record_type.fields() {
            if let Some(fk) = field.references() {
                if fk.table != record_type.name() && !self.types.contains_key(&fk.table) {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}` on `{}` references undeclared record type `{}`",
                        field.name(),
                        record_type.name(),
                        fk.table
                    )));
                }
            }
        }

        let name = record_type.name().to_string();
        self.types.insert(name.clone(), record_type);
        Ok(&self.types[&name])
    }

    pub fn get(&self, name: &str) -> Result<&RecordType> {
        self.types
            .get(name)
            .ok_or_else(|| Error::invalid_statement(format!("unknown record type `{name}`")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordType> {
        self.types.values()
    }
}
