use super::*;

/// Membership in a literal list. Items may mix scalar values and
/// sub-queries; rendering flattens them into a single SQL IN-list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub items: Vec<Expr>,
    pub negated: bool,
}

/// One item of an IN-list: a scalar or a sub-query.
#[derive(Debug, Clone, PartialEq)]
pub enum InItem {
    Value(Value),
    Select(Select),
}

impl Expr {
    pub fn in_list(expr: impl Into<Self>, items: impl IntoIterator<Item = InItem>) -> Self {
        ExprInList {
            expr: Box::new(expr.into()),
            items: items.into_iter().map(Expr::from).collect(),
            negated: false,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}

impl From<InItem> for Expr {
    fn from(item: InItem) -> Self {
        match item {
            InItem::Value(value) => Self::Value(value),
            InItem::Select(select) => Self::stmt(select),
        }
    }
}

impl From<Value> for InItem {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for InItem {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for InItem {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for InItem {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for InItem {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<Select> for InItem {
    fn from(select: Select) -> Self {
        Self::Select(select)
    }
}
