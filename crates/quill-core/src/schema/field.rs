use crate::{
    stmt::{
        Assignment, BinaryOp, Direction, Expr, InItem, OrderByExpr, Select, Type, Value,
    },
    Error, Result,
};

/// Metadata describing one column of a record type.
///
/// Immutable once its record type is declared. A declared descriptor knows
/// the table it belongs to and doubles as the typed handle used to build
/// filter expressions: every comparison constructor validates its literal
/// against the field's type before the expression exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    ty: Type,
    required: bool,
    unique: bool,
    default: Option<Value>,
    foreign_key: Option<ForeignKey>,
    primary_key: bool,
    table: Option<String>,
}

/// `REFERENCES <table>(<field>)` metadata for integer foreign-key columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub table: String,
    pub field: String,
}

impl FieldDescriptor {
    fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            unique: false,
            default: None,
            foreign_key: None,
            primary_key: false,
            table: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, Type::Text)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, Type::Integer)
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, Type::Real)
    }

    /// An integer column referencing the primary key of `target`.
    pub fn foreign_key(name: impl Into<String>, target: impl Into<String>) -> Self {
        let mut field = Self::new(name, Type::Integer);
        field.foreign_key = Some(ForeignKey {
            table: target.into(),
            field: super::PK.to_string(),
        });
        field
    }

    /// The implicit auto-increment primary key, present on every record
    /// type. Never required; only settable by explicit override.
    pub(crate) fn primary_key() -> Self {
        let mut field = Self::new(super::PK, Type::Integer);
        field.required = false;
        field.primary_key = true;
        field
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets the column default, validated against the field's type.
    pub fn default_value(mut self, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        self.check(&value)?;
        self.default = Some(value);
        Ok(self)
    }

    pub(crate) fn set_table(&mut self, table: &str) {
        self.table = Some(table.to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn references(&self) -> Option<&ForeignKey> {
        self.foreign_key.as_ref()
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// The table this field belongs to; set when the record type is built.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Validates a value against the field's declared type.
    pub fn check(&self, value: &Value) -> Result<()> {
        if self.ty.matches(value) {
            Ok(())
        } else {
            Err(Error::type_mismatch(
                &self.name,
                self.ty.name(),
                value.ty_name(),
            ))
        }
    }

    fn expr(&self) -> Expr {
        match &self.table {
            Some(table) => Expr::field(table, &self.name),
            None => Expr::bare_field(&self.name),
        }
    }

    fn literal(&self, value: impl Into<Value>) -> Result<Expr> {
        let value = value.into();
        self.check(&value)?;
        Ok(Expr::Value(value))
    }

    fn compare(&self, op: BinaryOp, value: impl Into<Value>) -> Result<Expr> {
        Ok(Expr::binary_op(self.expr(), op, self.literal(value)?))
    }

    pub fn eq(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Eq, value)
    }

    pub fn ne(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Ne, value)
    }

    pub fn lt(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Lt, value)
    }

    pub fn le(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Le, value)
    }

    pub fn gt(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Gt, value)
    }

    pub fn ge(&self, value: impl Into<Value>) -> Result<Expr> {
        self.compare(BinaryOp::Ge, value)
    }

    /// Membership in a list mixing scalar values and sub-queries. Scalars
    /// are validated against the field's type; sub-queries pass through.
    pub fn in_list(&self, items: impl IntoIterator<Item = InItem>) -> Result<Expr> {
        let items: Vec<InItem> = items.into_iter().collect();

        for item in &items {
            if let InItem::Value(value) = item {
                self.check(value)?;
            }
        }

        Ok(Expr::in_list(self.expr(), items))
    }

    /// Membership in the rows of a single sub-query.
    pub fn in_select(&self, query: Select) -> Expr {
        Expr::in_subquery(self.expr(), query)
    }

    pub fn between(&self, low: impl Into<Value>, high: impl Into<Value>) -> Result<Expr> {
        Ok(Expr::between(
            self.expr(),
            self.literal(low)?,
            self.literal(high)?,
        ))
    }

    pub fn is_null(&self) -> Expr {
        Expr::is_null(self.expr())
    }

    pub fn is_not_null(&self) -> Expr {
        Expr::is_not_null(self.expr())
    }

    pub fn asc(&self) -> OrderByExpr {
        OrderByExpr {
            expr: self.expr(),
            order: Some(Direction::Asc),
        }
    }

    pub fn desc(&self) -> OrderByExpr {
        OrderByExpr {
            expr: self.expr(),
            order: Some(Direction::Desc),
        }
    }

    /// A `column = value` assignment for an UPDATE, validated against the
    /// field's type.
    pub fn assign(&self, value: impl Into<Value>) -> Result<Assignment> {
        let value = value.into();
        self.check(&value)?;
        Ok(Assignment {
            column: self.name.clone(),
            expr: Expr::Value(value),
        })
    }

    /// A `column = (SELECT …)` assignment for an UPDATE.
    pub fn assign_select(&self, query: Select) -> Assignment {
        Assignment {
            column: self.name.clone(),
            expr: Expr::stmt(query),
        }
    }
}

impl From<&FieldDescriptor> for OrderByExpr {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            expr: field.expr(),
            order: None,
        }
    }
}
