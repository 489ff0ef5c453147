use crate::Db;

use quill_core::{
    schema::RecordType,
    stmt::{self, Assignment, Assignments, Expr},
    Error, Result,
};

/// A lazy UPDATE builder.
///
/// Scalar assignment values bind as positional parameters; sub-query
/// values render inline. Omitting the filter updates every row.
pub struct Update<'a> {
    db: &'a Db,
    record_type: &'a RecordType,
    assignments: Assignments,
    filter: Option<Expr>,
}

impl<'a> Update<'a> {
    pub(crate) fn new(db: &'a Db, record_type: &'a RecordType) -> Self {
        Self {
            db,
            record_type,
            assignments: Assignments::default(),
            filter: None,
        }
    }

    /// Adds a `field = value` assignment. Re-assigning a field replaces
    /// its value.
    pub fn set(mut self, assignment: Assignment) -> Self {
        self.assignments.set(assignment);
        self
    }

    /// Adds a filter. Repeated calls AND together, in call order.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(prior) => Expr::and(prior, expr),
            None => expr,
        });
        self
    }

    fn to_update(&self) -> Result<stmt::Update> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(
                "UPDATE requires at least one assignment",
            ));
        }

        Ok(stmt::Update {
            table: self.record_type.name().to_string(),
            assignments: self.assignments.clone(),
            filter: self.filter.clone(),
        })
    }

    /// Renders the SQL text without touching storage.
    pub fn build(&self) -> Result<String> {
        Ok(Db::render(&self.to_update()?.into()))
    }

    /// Executes the update, returning the number of affected rows.
    pub fn execute(self) -> Result<usize> {
        let stmt = self.to_update()?.into();
        Ok(self.db.exec(&stmt)?.count)
    }
}
