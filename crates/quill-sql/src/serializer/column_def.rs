use super::{Ident, Params, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(&self.name), " ", &self.ty);

        if self.auto_increment {
            fmt!(f, " PRIMARY KEY AUTOINCREMENT");
            return;
        }

        if self.unique {
            fmt!(f, " UNIQUE");
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT ", default);
        }

        if let Some((table, field)) = &self.references {
            fmt!(f, " REFERENCES ", Ident(table), "(", Ident(field), ")");
        }
    }
}
