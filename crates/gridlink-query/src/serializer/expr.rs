use super::{Comma, Delimited, Formatter, ToSql};

use gridlink_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Not(expr) => {
                let expr = &**expr;
                fmt!(f, "NOT (" expr ")");
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(column_id) => {
                let column = f.serializer.scope.column(*column_id);
                let name = f.serializer.scope.qualified_name(column);
                fmt!(f, name);
            }
            Func(func) => fmt!(f, func),
            InList(expr) => {
                let list = Comma(&expr.list);
                fmt!(f, expr.expr " IN (" list ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            List(exprs) => {
                let exprs = Comma(exprs);
                fmt!(f, "(" exprs ")");
            }
            Value(value) => fmt!(f, value),
        }
    }
}

impl ToSql for &Box<stmt::Expr> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        (&**self).to_sql(f);
    }
}

impl ToSql for &stmt::ExprFunc {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.arg() {
            None => fmt!(f, self.name() "(*)"),
            Some(arg) => fmt!(f, self.name() "(" arg ")"),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "<>",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Like => "LIKE",
        })
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let exprs = Comma(&self.exprs);
        fmt!(f, "ORDER BY " exprs);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.expr);
        if !self.direction.is_asc() {
            fmt!(f, " DESC");
        }
    }
}
