use super::{Comma, Delimited, Ident, Params, ToSql};

use quill_core::stmt::{BinaryOp, Expr, ExprField};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            Between(expr) => {
                fmt!(f, expr.expr, " BETWEEN ", expr.low, " AND ", expr.high);
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs, " ", expr.op, " ", expr.rhs);
            }
            Exists(expr) => {
                let not = if expr.negated { "NOT " } else { "" };
                fmt!(f, not, "EXISTS (", expr.subquery, ")");
            }
            Field(expr) => expr.to_sql(f),
            InList(expr) => {
                let op = if expr.negated { " NOT IN (" } else { " IN (" };
                fmt!(f, expr.expr, op, Comma(&expr.items), ")");
            }
            InSubquery(expr) => {
                let op = if expr.negated { " NOT IN (" } else { " IN (" };
                fmt!(f, expr.expr, op, expr.query, ")");
            }
            IsNull(expr) => {
                if expr.negated {
                    fmt!(f, expr.expr, " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr, " IS NULL");
                }
            }
            // An OR group always renders wrapped so it keeps its meaning
            // inside a surrounding AND or a further OR.
            Or(expr) => {
                fmt!(f, "( ", Delimited(&expr.operands, " OR "), " )");
            }
            Stmt(expr) => {
                fmt!(f, "(", expr.select, ")");
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for &ExprField {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match &self.table {
            Some(table) => fmt!(f, Ident(table), ".", Ident(&self.name)),
            None => fmt!(f, Ident(&self.name)),
        }
    }
}

impl ToSql for &BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "!=",
            BinaryOp::Ge => ">=",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Lt => "<",
            BinaryOp::In => "IN",
            BinaryOp::NotIn => "NOT IN",
        })
    }
}
