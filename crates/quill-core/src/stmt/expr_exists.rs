use super::{Expr, Select};

/// Tests whether a sub-query returns any rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    /// The sub-query to check.
    pub subquery: Box<Select>,

    /// When `true`, this is a "not exists" check.
    pub negated: bool,
}

impl Expr {
    pub fn exists(subquery: impl Into<Select>) -> Expr {
        Expr::Exists(ExprExists {
            subquery: Box::new(subquery.into()),
            negated: false,
        })
    }

    pub fn not_exists(subquery: impl Into<Select>) -> Expr {
        Expr::Exists(ExprExists {
            subquery: Box::new(subquery.into()),
            negated: true,
        })
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
