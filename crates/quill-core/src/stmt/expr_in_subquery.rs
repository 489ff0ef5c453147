use super::{Expr, Select};

/// The expression is contained by the rows of the given sub-query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub query: Box<Select>,
    pub negated: bool,
}

impl Expr {
    pub fn in_subquery(expr: impl Into<Self>, query: impl Into<Select>) -> Self {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            query: Box::new(query.into()),
            negated: false,
        }
        .into()
    }
}

impl From<ExprInSubquery> for Expr {
    fn from(value: ExprInSubquery) -> Self {
        Self::InSubquery(value)
    }
}
