use crate::Db;

use quill_core::{
    schema::RecordType,
    stmt::{self, Expr},
    Result,
};

/// A lazy DELETE builder.
///
/// Executing without a filter deletes every row of the table; that is a
/// deliberate operation, not a fallback.
pub struct Delete<'a> {
    db: &'a Db,
    record_type: &'a RecordType,
    filter: Option<Expr>,
}

impl<'a> Delete<'a> {
    pub(crate) fn new(db: &'a Db, record_type: &'a RecordType) -> Self {
        Self {
            db,
            record_type,
            filter: None,
        }
    }

    /// Adds a filter. Repeated calls AND together, in call order.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(prior) => Expr::and(prior, expr),
            None => expr,
        });
        self
    }

    fn to_delete(&self) -> stmt::Delete {
        stmt::Delete {
            from: self.record_type.name().to_string(),
            filter: self.filter.clone(),
        }
    }

    /// Renders the SQL text without touching storage.
    pub fn build(&self) -> String {
        Db::render(&self.to_delete().into())
    }

    /// Executes the delete, returning the number of removed rows.
    pub fn execute(self) -> Result<usize> {
        let stmt = self.to_delete().into();
        Ok(self.db.exec(&stmt)?.count)
    }
}
