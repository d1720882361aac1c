mod assignments;
pub use assignments::{Assignment, Assignments};

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::{BinaryOp, ExprBinaryOp};

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod order_by;
pub use order_by::{OrderBy, OrderByExpr};

mod query;
pub use query::Query;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod source;
pub use source::{Join, Source};

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
