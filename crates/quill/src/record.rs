use indexmap::IndexMap;
use quill_core::{
    driver::Row,
    schema::{RecordType, PK},
    stmt::Value,
    Error, Result,
};

use std::fmt;

/// A materialized row: one value per field of its record type, in schema
/// order. Immutable after construction; equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    table: String,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Builds a record from field/value pairs.
    ///
    /// Required fields must be present. An absent optional field falls back
    /// to its declared default, then to null. `pk` stays unset until the
    /// record is persisted, unless explicitly overridden.
    pub fn new<'a, I>(record_type: &RecordType, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut provided: IndexMap<&str, Value> = values.into_iter().collect();
        let mut out = IndexMap::with_capacity(record_type.fields().len());

        for field in record_type.fields() {
            let value = match provided.swap_remove(field.name()) {
                Some(value) => {
                    field.check(&value)?;
                    value
                }
                None if field.is_primary_key() => Value::Null,
                None => match field.default() {
                    Some(default) => default.clone(),
                    None if field.is_required() => {
                        return Err(Error::missing_required_field(
                            record_type.name(),
                            field.name(),
                        ))
                    }
                    None => Value::Null,
                },
            };

            out.insert(field.name().to_string(), value);
        }

        if let Some(name) = provided.keys().next() {
            return Err(Error::invalid_statement(format!(
                "unknown field `{name}` on `{}`",
                record_type.name()
            )));
        }

        Ok(Self {
            table: record_type.name().to_string(),
            values: out,
        })
    }

    /// Materializes a result row, columns in the record type's field order.
    pub(crate) fn load(record_type: &RecordType, row: Row) -> Result<Self> {
        let fields = record_type.fields();

        if row.len() != fields.len() {
            return Err(Error::invalid_statement(format!(
                "row width {} does not match the {} fields of `{}`",
                row.len(),
                fields.len(),
                record_type.name()
            )));
        }

        Ok(Self {
            table: record_type.name().to_string(),
            values: fields
                .iter()
                .map(|field| field.name().to_string())
                .zip(row)
                .collect(),
        })
    }

    /// Name of the record type this instance belongs to.
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// The generated primary key, once persisted.
    pub fn pk(&self) -> Option<i64> {
        self.values.get(PK)?.as_integer()
    }

    /// This record with its primary key filled in. Conceptually a
    /// replacement of the instance, not a mutation of storage.
    pub fn with_pk(mut self, pk: i64) -> Self {
        self.values.insert(PK.to_string(), Value::Integer(pk));
        self
    }

    /// Field name/value pairs in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.table)?;

        for (i, (name, value)) in self.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            match value {
                Value::Text(text) => write!(f, "{name}='{text}'")?,
                Value::Integer(int) => write!(f, "{name}={int}")?,
                Value::Real(real) => write!(f, "{name}={real}")?,
                Value::Null => write!(f, "{name}=None")?,
            }
        }

        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::schema::FieldDescriptor;

    fn trainer() -> RecordType {
        RecordType::new(
            "trainer",
            vec![
                FieldDescriptor::text("name"),
                FieldDescriptor::integer("age"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn required_fields_must_be_provided() {
        let trainer = trainer();

        let err = Record::new(&trainer, [("name", Value::from("Giovanni"))]).unwrap_err();
        assert!(err.is_missing_required_field());
    }

    #[test]
    fn equality_is_structural() {
        let trainer = trainer();
        let values = [("name", Value::from("Giovanni")), ("age", Value::from(42))];

        let a = Record::new(&trainer, values.clone()).unwrap();
        let b = Record::new(&trainer, values).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.pk(), None);
    }

    #[test]
    fn optional_fields_fall_back_to_default_then_null() {
        let pokemon = RecordType::new(
            "pokemon",
            vec![
                FieldDescriptor::text("name"),
                FieldDescriptor::integer("level")
                    .required(false)
                    .default_value(1)
                    .unwrap(),
                FieldDescriptor::real("size").required(false),
            ],
        )
        .unwrap();

        let record = Record::new(&pokemon, [("name", Value::from("Koffing"))]).unwrap();
        assert_eq!(record.get("level"), Some(&Value::Integer(1)));
        assert_eq!(record.get("size"), Some(&Value::Null));
    }

    #[test]
    fn construction_type_checks_values() {
        let trainer = trainer();

        let err = Record::new(
            &trainer,
            [("name", Value::from("Giovanni")), ("age", Value::from("42"))],
        )
        .unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
