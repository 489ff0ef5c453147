use super::{Expr, Select};

/// A sub-query in value position. Renders wrapped in parentheses so the
/// statement can nest inside IN-lists, assignments, and comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub select: Box<Select>,
}

impl Expr {
    pub fn stmt(select: impl Into<Select>) -> Self {
        ExprStmt {
            select: Box::new(select.into()),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}

impl From<Select> for Expr {
    fn from(select: Select) -> Self {
        Self::stmt(select)
    }
}
