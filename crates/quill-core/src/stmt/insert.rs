use super::Value;

/// An INSERT statement.
///
/// Row values never render as inline literals; each value binds through a
/// positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// Column names, in rendering order
    pub columns: Vec<String>,

    /// One entry per record to insert, each with one value per column
    pub rows: Vec<Vec<Value>>,
}
