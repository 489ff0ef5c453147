use quill_core::{
    schema::FieldDescriptor,
    stmt::{Type, Value},
};

/// One column definition of a CREATE TABLE statement.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub unique: bool,
    pub not_null: bool,
    pub default: Option<Value>,
    /// `REFERENCES <table>(<field>)` clause
    pub references: Option<(String, String)>,
    /// Renders `PRIMARY KEY AUTOINCREMENT` and suppresses the other
    /// constraints
    pub auto_increment: bool,
}

impl ColumnDef {
    pub fn from_field(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name().to_string(),
            ty: field.ty(),
            unique: field.is_unique(),
            not_null: field.is_required(),
            default: field.default().cloned(),
            references: field
                .references()
                .map(|fk| (fk.table.clone(), fk.field.clone())),
            auto_increment: field.is_primary_key(),
        }
    }
}
