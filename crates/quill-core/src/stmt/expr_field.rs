use super::*;

/// References a column. The table qualifier is present everywhere except in
/// positions that forbid it, such as an UPDATE assignment target or a bare
/// ORDER BY name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub table: Option<String>,
    pub name: String,
}

impl Expr {
    pub fn field(table: impl Into<String>, name: impl Into<String>) -> Self {
        ExprField {
            table: Some(table.into()),
            name: name.into(),
        }
        .into()
    }

    pub fn bare_field(name: impl Into<String>) -> Self {
        ExprField {
            table: None,
            name: name.into(),
        }
        .into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
