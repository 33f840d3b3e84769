use std::rc::Rc;

use fegen_core::{Operator, ValueKind};

use super::*;
use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::manager::Manager;
use crate::value::Value;

fn lit(ty: Type) -> RightValue {
    RightValue::type_lit(Rc::new(ty))
}

#[test]
fn integer_instance() {
    let ty = Type::int(32);

    assert_eq!(ty.name(), "Integer<32>");
    assert_eq!(ty.level(), TypeLevel::Instance);
    assert_eq!(ty.width(), Some(32));
    assert!(ty.is_constant());
    assert!(!ty.is_bool());
    assert!(Type::bool().is_bool());
}

#[test]
fn list_keeps_element_level() {
    let instances = Type::list(lit(Type::int(32))).unwrap();
    assert_eq!(instances.name(), "List<Integer<32>>");
    assert_eq!(instances.level(), TypeLevel::Instance);

    let types = Type::list(lit(Type::meta())).unwrap();
    assert_eq!(types.name(), "List<Type>");
    assert_eq!(types.level(), TypeLevel::Template);

    let optional = Type::optional(lit(Type::string())).unwrap();
    assert_eq!(optional.name(), "Optional<String>");
    assert_eq!(optional.level(), TypeLevel::Instance);
}

#[test]
fn list_rejects_low_levels() {
    let err = Type::list(lit(Type::meta_template())).unwrap_err();
    assert!(matches!(
        err,
        SemanticError::LevelInvariantViolation {
            found: TypeLevel::MetaTemplate,
            ..
        }
    ));

    let err = Type::optional(lit(Type::placeholder())).unwrap_err();
    assert!(matches!(
        err,
        SemanticError::LevelInvariantViolation {
            found: TypeLevel::PlaceHolder,
            ..
        }
    ));
}

#[test]
fn vector_of_instances() {
    let ty = Type::vector(lit(Type::int(32)), RightValue::integer(4)).unwrap();

    assert_eq!(ty.name(), "Vector<Integer<32>, 4>");
    assert_eq!(ty.level(), TypeLevel::Instance);
    assert!(ty.is_constant());
    assert_eq!(ty.element().map(|e| e.name().to_owned()).as_deref(), Some("Integer<32>"));
}

#[test]
fn vector_requires_instance_element() {
    let err = Type::vector(lit(Type::meta()), RightValue::integer(4)).unwrap_err();

    assert_eq!(
        err,
        SemanticError::LevelInvariantViolation {
            constructor: "Vector".to_owned(),
            found: TypeLevel::Template,
            required: "3",
        }
    );
}

#[test]
fn vector_size_from_unbound_value_is_not_constant() {
    let n = Value::uninit("n", Rc::new(Type::int(32)));
    let ty = Type::vector(lit(Type::int(32)), n.reference()).unwrap();

    assert_eq!(ty.name(), "Vector<Integer<32>, n>");
    assert!(!ty.is_constant());
}

#[test]
fn tensor_shape_must_be_a_list() {
    let shape = RightValue::list(vec![RightValue::integer(2), RightValue::integer(3)]).unwrap();
    let ty = Type::tensor(lit(Type::float(32)), shape).unwrap();
    assert_eq!(ty.name(), "Tensor<FloatPoint<32>, [2, 3]>");

    let err = Type::tensor(lit(Type::float(32)), RightValue::integer(2)).unwrap_err();
    assert_eq!(
        err,
        SemanticError::TypeMismatch {
            expected: "List<Integer<32>>".to_owned(),
            found: "Integer<32>".to_owned(),
        }
    );
}

#[test]
fn any_of_alternatives() {
    let alternatives =
        RightValue::list(vec![lit(Type::int(32)), lit(Type::float(32))]).unwrap();
    let ty = Type::any(alternatives).unwrap();

    assert_eq!(ty.name(), "Any<[Integer<32>, FloatPoint<32>]>");
    assert_eq!(ty.level(), TypeLevel::Instance);
}

#[test]
fn any_rejects_empty_list() {
    let err = Type::any(RightValue::list(vec![]).unwrap()).unwrap_err();

    assert!(matches!(err, SemanticError::TypeMismatch { .. }));
}

#[test]
fn width_folds_size_expression() {
    let size = RightValue::binary(
        Operator::Add,
        RightValue::integer(16),
        RightValue::integer(16),
    )
    .unwrap();
    let ty = Type::integer(size);

    assert_eq!(ty.name(), "Integer<(16 + 16)>");
    assert_eq!(ty.width(), Some(32));
}

#[test]
fn template_instantiation() {
    let manager = Manager::new("Test");
    let template = manager.resolve_type_name("Integer").unwrap();
    assert_eq!(template.name(), "Integer");
    assert_eq!(template.level(), TypeLevel::Template);

    let ty = template
        .instantiate(&manager, vec![RightValue::integer(16)])
        .unwrap();
    assert_eq!(ty.name(), "Integer<16>");
    assert_eq!(ty.level(), TypeLevel::Instance);

    let err = ty.instantiate(&manager, vec![]).unwrap_err();
    assert_eq!(
        err,
        SemanticError::TypeMismatch {
            expected: "TypeTemplate".to_owned(),
            found: "Integer<16>".to_owned(),
        }
    );
}

#[test]
fn accepts() {
    assert!(Type::int(32).accepts(&Type::int(32)));
    assert!(!Type::int(32).accepts(&Type::int(16)));
    assert!(Type::meta().accepts(&Type::meta_template()));
    assert!(!Type::meta_template().accepts(&Type::meta()));

    let ints = Type::list_of(Rc::new(Type::int(32))).unwrap();
    let shorts = Type::list_of(Rc::new(Type::int(16))).unwrap();
    let empty = RightValue::list(vec![]).unwrap().ty();
    assert!(ints.accepts(&empty));
    assert!(!ints.accepts(&shorts));
}

#[test]
fn value_kind_retag() {
    let attr = Type::int(32).with_value_kind(ValueKind::Attribute);

    assert_eq!(attr.value_kind(), ValueKind::Attribute);
    assert_eq!(attr.name(), "Integer<32>");
    assert_ne!(attr, Type::int(32));
    assert!(Type::int(32).accepts(&attr));
}

#[test]
fn instantiation_is_deterministic() {
    let manager = Manager::new("Test");
    let a = manager
        .instantiate("List", vec![lit(Type::int(32))])
        .unwrap();
    let b = manager
        .instantiate("List", vec![lit(Type::int(32))])
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.name(), "List<Integer<32>>");
    assert_eq!(a.is_constant(), b.is_constant());
}
