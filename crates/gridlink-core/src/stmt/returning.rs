use super::Expr;

/// The projection of a SELECT.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// All selectable columns, in table-declaration order.
    Star,

    /// An explicit list of expressions.
    Expr(Vec<Expr>),
}

impl From<Vec<Expr>> for Returning {
    fn from(value: Vec<Expr>) -> Self {
        Self::Expr(value)
    }
}
