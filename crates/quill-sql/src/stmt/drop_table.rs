use super::Statement;

/// A `DROP TABLE IF EXISTS` statement. Dropping a table that does not exist
/// is not an error.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table
    pub name: String,
}

impl Statement {
    pub fn drop_table(name: impl Into<String>) -> Self {
        DropTable { name: name.into() }.into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
