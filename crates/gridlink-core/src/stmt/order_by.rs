use super::{Direction, Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Direction,
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(value: Vec<OrderByExpr>) -> Self {
        Self { exprs: value }
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}
