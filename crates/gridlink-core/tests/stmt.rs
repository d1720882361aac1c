use gridlink_core::{
    stmt::{Expr, ExprAnd, Type, Value},
    Error,
};

use pretty_assertions::assert_eq;

#[test]
fn and_flattens_nested_conjunctions() {
    let a = Expr::Value(Value::Bool(true));
    let b = Expr::Value(Value::I32(1));
    let c = Expr::Value(Value::I32(2));

    let expr = Expr::and(Expr::and(a.clone(), b.clone()), c.clone());
    assert_eq!(
        expr,
        Expr::And(ExprAnd {
            operands: vec![a, b, c],
        })
    );
}

#[test]
fn values_match_their_declared_types() {
    assert!(Value::I32(1).is_a(&Type::I32));
    assert!(!Value::I32(1).is_a(&Type::I64));
    assert!(Value::Null.is_a(&Type::String));
    assert!(Value::List(vec![Value::from("a")]).is_a(&Type::list(Type::String)));
    assert!(!Value::List(vec![Value::I32(1)]).is_a(&Type::list(Type::String)));
}

#[test]
fn list_types_expose_their_item_type() {
    let ty = Type::list(Type::Timestamp);
    assert!(ty.is_list());
    assert_eq!(ty.item_ty(), &Type::Timestamp);
    assert_eq!(Type::Bool.item_ty(), &Type::Bool);
}

#[test]
fn translation_errors_carry_every_problem() {
    let err = Error::translation(vec!["first".to_string(), "second".to_string()]);
    assert!(err.is_translation());
    assert_eq!(
        err.translation_problems(),
        Some(&["first".to_string(), "second".to_string()][..])
    );
    assert_eq!(err.to_string(), "translation failed; first; second");
}

#[test]
fn store_errors_keep_their_source() {
    let err: Error = anyhow::anyhow!("connection reset").into();
    assert_eq!(err.to_string(), "store error: connection reset");
    assert!(std::error::Error::source(&err).is_some());
}
