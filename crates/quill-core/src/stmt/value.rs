use super::Type;

/// A typed literal: the value domain of every column.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text
    Text(String),

    /// Signed 64-bit integer
    Integer(i64),

    /// 64-bit float
    Real(f64),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The storage type this value inhabits; `None` for null.
    pub fn ty(&self) -> Option<Type> {
        match self {
            Self::Text(_) => Some(Type::Text),
            Self::Integer(_) => Some(Type::Integer),
            Self::Real(_) => Some(Type::Real),
            Self::Null => None,
        }
    }

    /// The SQL name of this value's type, for diagnostics.
    pub fn ty_name(&self) -> &'static str {
        match self.ty() {
            Some(ty) => ty.name(),
            None => "NULL",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::Text(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::Integer(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::Integer(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::Real(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_knows_its_type() {
        assert_eq!(Value::from("hi").ty(), Some(Type::Text));
        assert_eq!(Value::from(3).ty(), Some(Type::Integer));
        assert_eq!(Value::from(3.5).ty(), Some(Type::Real));
        assert_eq!(Value::Null.ty(), None);
    }

    #[test]
    fn null_is_the_default() {
        assert!(Value::default().is_null());
        assert_eq!(Value::default().ty_name(), "NULL");
    }
}
