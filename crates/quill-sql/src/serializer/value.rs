use super::{Formatter, Params, ToSql};

use quill_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self {
            // Embedded quotes are not escaped; user-supplied data must go
            // through placeholder binding instead.
            Value::Text(text) => {
                f.dst.push('\'');
                f.dst.push_str(text);
                f.dst.push('\'');
            }
            Value::Integer(value) => write!(f.dst, "{value}").unwrap(),
            // Keep at least one fractional digit so a REAL literal never
            // reads back as an integer.
            Value::Real(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f.dst, "{value:.1}").unwrap()
            }
            Value::Real(value) => write!(f.dst, "{value}").unwrap(),
            Value::Null => f.dst.push_str("NULL"),
        }
    }
}
