use super::Expr;

/// An aggregate function call.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprFunc {
    /// COUNT(*) when the argument is `None`
    Count(Option<Box<Expr>>),
    Sum(Box<Expr>),
    Avg(Box<Expr>),
    Min(Box<Expr>),
    Max(Box<Expr>),
}

impl ExprFunc {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Count(_) => "COUNT",
            Self::Sum(_) => "SUM",
            Self::Avg(_) => "AVG",
            Self::Min(_) => "MIN",
            Self::Max(_) => "MAX",
        }
    }

    /// The column argument, if the function takes one.
    pub fn arg(&self) -> Option<&Expr> {
        match self {
            Self::Count(arg) => arg.as_deref(),
            Self::Sum(arg) | Self::Avg(arg) | Self::Min(arg) | Self::Max(arg) => Some(arg),
        }
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
