use super::*;

/// A SELECT statement.
///
/// Renders in the fixed clause order `SELECT [DISTINCT] fields FROM tables
/// [WHERE expr] [LIMIT n] [OFFSET n] [ORDER BY fields]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Source tables, in FROM order
    pub from: Vec<String>,

    /// The projection
    pub returning: Returning,

    pub distinct: bool,

    /// Query filter
    pub filter: Option<Expr>,

    pub order_by: Option<OrderBy>,

    pub limit: Option<Limit>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            from: vec![table.into()],
            returning: Returning::Star,
            distinct: false,
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    /// Adds a filter, ANDed onto whatever filter is already present.
    pub fn add_filter(&mut self, expr: Expr) {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr,
        });
    }
}
