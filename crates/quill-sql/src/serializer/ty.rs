use super::{Params, ToSql};

use quill_core::stmt::Type;

impl ToSql for &Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                Type::Text => "TEXT",
                Type::Integer => "INTEGER",
                Type::Real => "REAL",
            }
        );
    }
}
