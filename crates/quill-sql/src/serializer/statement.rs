use super::{Comma, Ident, Params, ToSql};

use crate::stmt::{CreateTable, DropTable, Statement};
use quill_core::stmt::{
    Assignments, Delete, Direction, Expr, Insert, Limit, OrderBy, OrderByExpr, Returning, Select,
    Update,
};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            "CREATE TABLE IF NOT EXISTS ",
            Ident(&self.name),
            " (",
            Comma(&self.columns),
            ")"
        );
    }
}

impl ToSql for &DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DROP TABLE IF EXISTS ", Ident(&self.name));
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        let tables = Comma(self.from.iter().map(Ident));
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));
        let limit = self.limit.as_ref().map(|limit| (" ", limit));
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));

        fmt!(
            f,
            "SELECT ",
            distinct,
            &self.returning,
            " FROM ",
            tables,
            filter,
            limit,
            order_by
        );
    }
}

impl ToSql for &Returning {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Returning::Star => fmt!(f, "*"),
            Returning::Fields(fields) => fmt!(f, Comma(fields)),
        }
    }
}

impl ToSql for &Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let offset = self.offset.map(|offset| (" OFFSET ", offset));

        fmt!(f, "LIMIT ", self.limit, offset);
    }
}

impl ToSql for &OrderBy {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "ORDER BY ", Comma(&self.exprs));
    }
}

impl ToSql for &OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let order = self.order.as_ref().map(|order| (" ", order));

        fmt!(f, self.expr, order);
    }
}

impl ToSql for &Direction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Direction::Asc => fmt!(f, "ASC"),
            Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            columns,
            ") VALUES "
        );

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.dst.push_str(", ");
            }

            f.dst.push('(');
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.dst.push_str(", ");
                }

                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            }
            f.dst.push(')');
        }
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));

        fmt!(
            f,
            "UPDATE ",
            Ident(&self.table),
            " SET ",
            &self.assignments,
            filter
        );
    }
}

impl ToSql for &Assignments {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        for (i, (column, expr)) in self.iter().enumerate() {
            if i > 0 {
                f.dst.push_str(", ");
            }

            fmt!(f, Ident(column), " = ");

            // Scalar assignment values bind as parameters; sub-queries
            // render inline.
            if let Expr::Value(value) = expr {
                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            } else {
                expr.to_sql(f);
            }
        }
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));

        fmt!(f, "DELETE FROM ", Ident(&self.from), filter);
    }
}
