use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The named field to order by
    pub expr: Expr,

    /// Ascending or descending; the database default when absent
    pub order: Option<Direction>,
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}

impl From<&str> for OrderByExpr {
    fn from(name: &str) -> Self {
        Self {
            expr: Expr::bare_field(name),
            order: None,
        }
    }
}
