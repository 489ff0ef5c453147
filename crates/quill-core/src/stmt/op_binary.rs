use crate::{Error, Result};

use std::fmt;

#[derive(Copy, Clone, PartialEq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    In,
    NotIn,
}

impl BinaryOp {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    /// The logical negation of this operator, for the operators that have
    /// one.
    pub fn invert(self) -> Result<Self> {
        match self {
            Self::Eq => Ok(Self::Ne),
            Self::Ne => Ok(Self::Eq),
            Self::In => Ok(Self::NotIn),
            Self::NotIn => Ok(Self::In),
            op => Err(Error::unsupported_operation(format!(
                "operator `{op}` has no negation"
            ))),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;

        match self {
            Eq => "=".fmt(f),
            Ne => "!=".fmt(f),
            Ge => ">=".fmt(f),
            Gt => ">".fmt(f),
            Le => "<=".fmt(f),
            Lt => "<".fmt(f),
            In => "IN".fmt(f),
            NotIn => "NOT IN".fmt(f),
        }
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
