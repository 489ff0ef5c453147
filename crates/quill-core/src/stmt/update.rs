use super::{Assignments, Expr};

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table
    pub table: String,

    /// SET clause
    pub assignments: Assignments,

    /// Optional filter; absence updates every row
    pub filter: Option<Expr>,
}
