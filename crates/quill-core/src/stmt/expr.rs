use super::*;
use crate::{Error, Result};

/// A composable predicate or value node used in WHERE/SET clauses.
///
/// Expressions are pure values: they own no connection, carry no hidden
/// state, and are immutable after construction, so they can be shared and
/// reused across statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Range check, inclusive on both ends
    Between(ExprBetween),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Whether a sub-query returns any rows
    Exists(ExprExists),

    /// References a field, qualified by the table it belongs to
    Field(ExprField),

    /// Membership in a list mixing scalars and sub-queries
    InList(ExprInList),

    /// Membership in the rows of a single sub-query
    InSubquery(ExprInSubquery),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary comparison because of how databases treat null.
    IsNull(ExprIsNull),

    /// OR a set of expressions
    Or(ExprOr),

    /// Evaluate a sub-query as a value
    Stmt(ExprStmt),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Self::Stmt(..))
    }

    /// Flips the expression to its logical negation.
    ///
    /// Defined for `=`/`!=`, `IN`/`NOT IN`, `EXISTS`/`NOT EXISTS` and null
    /// checks; every other node fails with an unsupported operation error.
    pub fn invert(self) -> Result<Self> {
        match self {
            Self::BinaryOp(expr) => Ok(ExprBinaryOp {
                op: expr.op.invert()?,
                ..expr
            }
            .into()),
            Self::InList(mut expr) => {
                expr.negated = !expr.negated;
                Ok(expr.into())
            }
            Self::InSubquery(mut expr) => {
                expr.negated = !expr.negated;
                Ok(expr.into())
            }
            Self::Exists(mut expr) => {
                expr.negated = !expr.negated;
                Ok(expr.into())
            }
            Self::IsNull(mut expr) => {
                expr.negated = !expr.negated;
                Ok(expr.into())
            }
            expr => Err(Error::unsupported_operation(format!(
                "expression has no negation; expr={expr:?}"
            ))),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
