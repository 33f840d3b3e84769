use std::rc::Rc;

use fegen_core::ValueKind;

use super::*;
use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::manager::Manager;
use crate::render::{Render, Target};

fn lit(ty: Type) -> RightValue {
    RightValue::type_lit(Rc::new(ty))
}

/// Typedef, opdef and host renderings, `-` where unsupported.
fn renderings(ty: &Type) -> [String; 3] {
    [Target::TypeDef, Target::OpDef, Target::Cpp].map(|target| {
        ty.render(target).unwrap_or_else(|_| "-".to_owned())
    })
}

#[test]
fn scalars() {
    assert_eq!(renderings(&Type::int(1)), ["\"bool\"", "I1", "bool"]);
    assert_eq!(renderings(&Type::int(8)), ["-", "I8", "-"]);
    assert_eq!(renderings(&Type::int(32)), ["\"int\"", "I32", "int"]);
    assert_eq!(renderings(&Type::int(64)), ["\"long\"", "I64", "long"]);
    assert_eq!(renderings(&Type::float(16)), ["-", "F16", "-"]);
    assert_eq!(renderings(&Type::float(64)), ["\"double\"", "F64", "double"]);
    assert_eq!(
        renderings(&Type::string()),
        ["StringRefParameter<>", "StrAttr", "std::string"]
    );
    assert_eq!(renderings(&Type::meta()), ["\"Type\"", "TypeAttr", "mlir::Type"]);
}

#[test]
fn attributes_use_attr_constraints() {
    let ty = Type::int(32).with_value_kind(ValueKind::Attribute);
    assert_eq!(ty.to_opdef_string().unwrap(), "I32Attr");

    let ty = Type::float(32).with_value_kind(ValueKind::Attribute);
    assert_eq!(ty.to_opdef_string().unwrap(), "F32Attr");
}

#[test]
fn containers() {
    let list = Type::list(lit(Type::int(32))).unwrap();
    assert_eq!(
        renderings(&list),
        ["ArrayRefParameter<\"int\">", "Variadic<I32>", "std::vector<int>"]
    );

    let optional = Type::optional(lit(Type::float(32))).unwrap();
    assert_eq!(
        renderings(&optional),
        ["OptionalParameter<\"float\">", "Optional<F32>", "std::optional<float>"]
    );

    let vector = Type::vector(lit(Type::int(32)), RightValue::integer(4)).unwrap();
    assert_eq!(renderings(&vector), ["-", "VectorOf<[I32]>", "std::array<int, 4>"]);

    let shape = RightValue::list(vec![RightValue::integer(2)]).unwrap();
    let tensor = Type::tensor(lit(Type::float(32)), shape).unwrap();
    assert_eq!(renderings(&tensor), ["-", "TensorOf<[F32]>", "-"]);

    let alternatives =
        RightValue::list(vec![lit(Type::int(32)), lit(Type::float(32))]).unwrap();
    let any = Type::any(alternatives).unwrap();
    assert_eq!(renderings(&any), ["-", "AnyTypeOf<[I32, F32]>", "-"]);
}

#[test]
fn custom_and_templates() {
    let mut manager = Manager::new("Toy");
    manager.add_type_def(TypeDef::new("Toy", "Token", vec![]));

    let token = manager.resolve_type_name("Token").unwrap();
    assert_eq!(renderings(&token), ["Token", "Token", "mlir::Type"]);

    let integer = manager.resolve_type_name("Integer").unwrap();
    assert_eq!(
        renderings(&integer),
        ["Builtin_IntegerAttr", "Builtin_Integer", "-"]
    );

    let float = manager.resolve_type_name("FloatPoint").unwrap();
    assert_eq!(renderings(&float), ["Builtin_FloatAttr", "-", "-"]);
}

#[test]
fn unsupported_is_an_error() {
    let err = Type::placeholder().to_cpp_string().unwrap_err();
    assert_eq!(
        err,
        SemanticError::UnsupportedRendering {
            subject: "PlaceHolder".to_owned(),
            target: Target::Cpp,
        }
    );
    assert_eq!(err.to_string(), "`PlaceHolder` has no host rendering");

    let err = Type::int(7).to_typedef_string().unwrap_err();
    assert_eq!(
        err.to_string(),
        "`Integer<7>` has no type definition rendering"
    );
}
