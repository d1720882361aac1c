use super::{
    BinaryOp, ExprAnd, ExprBinaryOp, ExprFunc, ExprInList, ExprIsNull, ExprOr, Value,
};
use crate::schema::ColumnId;

/// A boolean or scalar expression appearing in a statement.
///
/// Statements arrive already parsed; this tree is only ever walked, one match
/// arm per node kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// Negate an expression
    Not(Box<Expr>),

    /// A binary comparison
    BinaryOp(ExprBinaryOp),

    /// Reference a column
    Column(ColumnId),

    /// An aggregate function call
    Func(ExprFunc),

    /// The expression is contained by the list of values
    InList(ExprInList),

    /// IS [NOT] NULL
    IsNull(ExprIsNull),

    /// A list of expressions
    List(Vec<Expr>),

    /// A literal value
    Value(Value),
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        match lhs.into() {
            Self::And(mut expr_and) => {
                expr_and.operands.push(rhs.into());
                Self::And(expr_and)
            }
            lhs => Self::And(ExprAnd {
                operands: vec![lhs, rhs.into()],
            }),
        }
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        match lhs.into() {
            Self::Or(mut expr_or) => {
                expr_or.operands.push(rhs.into());
                Self::Or(expr_or)
            }
            lhs => Self::Or(ExprOr {
                operands: vec![lhs, rhs.into()],
            }),
        }
    }

    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Le, rhs)
    }

    pub fn like(lhs: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Like, pattern)
    }

    pub fn in_list(expr: impl Into<Self>, list: Vec<Expr>) -> Self {
        ExprInList {
            expr: Box::new(expr.into()),
            list,
        }
        .into()
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        ExprIsNull {
            expr: Box::new(expr.into()),
            negate: false,
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        ExprIsNull {
            expr: Box::new(expr.into()),
            negate: true,
        }
        .into()
    }

    pub fn as_column(&self) -> Option<ColumnId> {
        match self {
            Self::Column(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ColumnId> for Expr {
    fn from(value: ColumnId) -> Self {
        Self::Column(value)
    }
}

impl From<&crate::schema::Column> for Expr {
    fn from(value: &crate::schema::Column) -> Self {
        Self::Column(value.id)
    }
}
