use super::Expr;

use indexmap::IndexMap;

/// The SET clause of an UPDATE: column name to value expression, in the
/// order first assigned. Re-assigning a column replaces its expression
/// without changing its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<String, Expr>,
}

/// A single `column = value` assignment. The value is a scalar or a
/// sub-query.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub expr: Expr,
}

impl Assignments {
    pub fn set(&mut self, assignment: Assignment) {
        self.assignments.insert(assignment.column, assignment.expr);
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.assignments
            .iter()
            .map(|(column, expr)| (column.as_str(), expr))
    }
}
