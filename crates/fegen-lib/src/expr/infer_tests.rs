use std::rc::Rc;

use fegen_core::Operator;

use super::*;

fn int(value: i64) -> RightValue {
    RightValue::integer(value)
}

#[test]
fn equality_is_boolean_for_any_operands() {
    let eq = RightValue::binary(Operator::Equal, int(3), RightValue::float(3.0)).unwrap();
    assert!(eq.ty().is_bool());

    let lt = RightValue::binary(
        Operator::Less,
        RightValue::string("a"),
        RightValue::string("b"),
    )
    .unwrap();
    assert_eq!(lt.ty().name(), "Integer<1>");
}

#[test]
fn arithmetic_promotion() {
    let sum = RightValue::binary(Operator::Add, int(3), RightValue::float(3.0)).unwrap();
    assert_eq!(sum.ty().name(), "FloatPoint<32>");

    let wide = RightValue::integer_with_width(1, 64);
    let product = RightValue::binary(Operator::Mul, wide, int(2)).unwrap();
    assert_eq!(product.ty().name(), "Integer<64>");

    let neg = RightValue::unary(Operator::Neg, RightValue::float_with_width(1.0, 64)).unwrap();
    assert_eq!(neg.ty().name(), "FloatPoint<64>");
}

#[test]
fn logical_operators_require_booleans() {
    let err = RightValue::binary(Operator::And, RightValue::boolean(true), int(3)).unwrap_err();
    assert_eq!(
        err,
        SemanticError::TypeMismatch {
            expected: "Integer<1>".to_owned(),
            found: "Integer<32>".to_owned(),
        }
    );

    let err = RightValue::unary(Operator::Not, int(3)).unwrap_err();
    assert!(matches!(err, SemanticError::TypeMismatch { .. }));

    let or = RightValue::binary(
        Operator::Or,
        RightValue::boolean(true),
        RightValue::boolean(false),
    )
    .unwrap();
    assert!(or.ty().is_bool());
}

#[test]
fn arithmetic_requires_numbers() {
    let err = RightValue::binary(Operator::Add, RightValue::string("a"), int(1)).unwrap_err();

    assert_eq!(
        err,
        SemanticError::TypeMismatch {
            expected: "numeric type".to_owned(),
            found: "String".to_owned(),
        }
    );
}

#[test]
fn width_comes_from_folded_size() {
    let size = RightValue::binary(Operator::Add, int(16), int(48)).unwrap();
    let x = Value::uninit("x", Rc::new(Type::integer(size)));

    let sum = RightValue::binary(Operator::Add, x.reference(), int(1)).unwrap();

    assert_eq!(sum.ty().name(), "Integer<64>");
}

#[test]
fn width_must_be_constant() {
    let n = Value::uninit("n", Rc::new(Type::int(32)));
    let x = Value::uninit("x", Rc::new(Type::integer(n.reference())));

    let err = RightValue::binary(Operator::Add, x.reference(), int(1)).unwrap_err();

    assert_eq!(
        err,
        SemanticError::TypeMismatch {
            expected: "numeric type of constant width".to_owned(),
            found: "Integer<n>".to_owned(),
        }
    );
}

#[test]
fn operator_arity() {
    let err = RightValue::unary(Operator::Add, int(1)).unwrap_err();
    assert_eq!(
        err,
        SemanticError::ArityMismatch {
            name: "+".to_owned(),
            expected: 2,
            found: 1,
        }
    );

    let err = RightValue::binary(Operator::Not, int(1), int(2)).unwrap_err();
    assert_eq!(
        err,
        SemanticError::ArityMismatch {
            name: "!".to_owned(),
            expected: 1,
            found: 2,
        }
    );
}
