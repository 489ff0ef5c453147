use super::*;

use std::ops;

/// A disjunction. The whole group renders wrapped in parentheses so that a
/// prior OR keeps its meaning when it becomes an operand of AND or of a
/// further OR.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::Or(lhs_or), Self::Or(rhs_or)) => {
                lhs_or.operands.extend(rhs_or.operands);
                lhs
            }
            (Self::Or(lhs_or), rhs) => {
                lhs_or.operands.push(rhs);
                lhs
            }
            (_, rhs) => ExprOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl<'a> IntoIterator for &'a ExprOr {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Expr {
        Expr::field("trainer", name)
    }

    #[test]
    fn and_chains_flatten_in_application_order() {
        let expr = Expr::and(Expr::and(field("a"), field("b")), field("c"));

        let Expr::And(and) = expr else { panic!() };
        assert_eq!(and.operands.len(), 3);
        assert_eq!(and.operands[0], field("a"));
        assert_eq!(and.operands[2], field("c"));
    }

    #[test]
    fn or_groups_flatten() {
        let expr = Expr::or(Expr::or(field("a"), field("b")), field("c"));

        let Expr::Or(or) = expr else { panic!() };
        assert_eq!(or.operands.len(), 3);
    }

    #[test]
    fn or_under_and_stays_grouped() {
        let expr = Expr::and(Expr::or(field("a"), field("b")), field("c"));

        let Expr::And(and) = expr else { panic!() };
        assert_eq!(and.operands.len(), 2);
        assert!(matches!(and.operands[0], Expr::Or(_)));
    }
}
