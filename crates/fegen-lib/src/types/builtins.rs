//! Built-in type constructors.
//!
//! These exist in every registry, pre-registered in a fixed order so their ids
//! are constants. User definitions get ids from [`CUSTOM_START`] on.

use std::rc::Rc;

use super::def::TypeDef;
use super::level::TypeLevel;
use super::ty::Type;
use crate::expr::RightValue;
use crate::value::Value;

/// Dialect namespace of the built-in constructors.
pub const BUILTIN_DIALECT: &str = "fegen_builtin";

/// Index of a type definition in the registry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeDefId(u32);

impl TypeDefId {
    /// Id of a user definition that is not registered yet.
    pub(crate) const PENDING: Self = Self(u32::MAX);

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_builtin(self) -> bool {
        self < CUSTOM_START
    }
}

pub const PLACEHOLDER: TypeDefId = TypeDefId(0);
pub const TYPE: TypeDefId = TypeDefId(1);
pub const TYPE_TEMPLATE: TypeDefId = TypeDefId(2);
pub const INTEGER: TypeDefId = TypeDefId(3);
pub const FLOAT_POINT: TypeDefId = TypeDefId(4);
pub const STRING: TypeDefId = TypeDefId(5);
pub const VECTOR: TypeDefId = TypeDefId(6);
/// Registered ahead of `Tensor` and `Any`, whose parameters are lists.
pub const LIST: TypeDefId = TypeDefId(7);
pub const TENSOR: TypeDefId = TypeDefId(8);
pub const OPTIONAL: TypeDefId = TypeDefId(9);
pub const ANY: TypeDefId = TypeDefId(10);

/// First id available for user definitions.
pub const CUSTOM_START: TypeDefId = TypeDefId(11);

/// The built-in definitions, in id order.
pub(crate) fn definitions() -> Vec<TypeDef> {
    let size = || Value::uninit("size", Rc::new(Type::int(32)));
    let element = || Value::uninit("elementType", Rc::new(Type::meta()));
    let list_of = |element: Type, level: TypeLevel| {
        Rc::new(Type::list_unchecked(
            RightValue::type_lit(Rc::new(element)),
            level,
        ))
    };

    let defs = vec![
        TypeDef::builtin(PLACEHOLDER, "PlaceHolder", vec![]),
        TypeDef::builtin(TYPE, "Type", vec![]),
        TypeDef::builtin(TYPE_TEMPLATE, "TypeTemplate", vec![]),
        TypeDef::builtin(INTEGER, "Integer", vec![size()]),
        TypeDef::builtin(FLOAT_POINT, "FloatPoint", vec![size()]),
        TypeDef::builtin(STRING, "String", vec![]),
        TypeDef::builtin(VECTOR, "Vector", vec![element(), size()]),
        TypeDef::builtin(LIST, "List", vec![element()]),
        TypeDef::builtin(
            TENSOR,
            "Tensor",
            vec![
                element(),
                Value::uninit("shape", list_of(Type::int(32), TypeLevel::Instance)),
            ],
        ),
        TypeDef::builtin(OPTIONAL, "Optional", vec![element()]),
        TypeDef::builtin(
            ANY,
            "Any",
            vec![Value::uninit(
                "elementType",
                list_of(Type::meta(), TypeLevel::Template),
            )],
        ),
    ];
    debug_assert_eq!(defs.len(), CUSTOM_START.index());
    defs
}
