use super::Expr;

/// A DELETE statement. Omitting the filter deletes every row; callers opt
/// into that explicitly (see the builder layer).
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Source table
    pub from: String,

    /// Optional filter
    pub filter: Option<Expr>,
}
