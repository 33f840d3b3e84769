use std::fmt;
use std::rc::Rc;

use fegen_core::ValueKind;

use super::builtins::{self, TypeDefId};
use super::def::TypeDef;
use super::level::TypeLevel;
use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::manager::Manager;

/// Shared handle to an immutable type.
pub type TypeRef = Rc<Type>;

/// Structure of a type: which constructor built it and with what parameters.
///
/// Parameters are expressions: a type literal for element types, an integer
/// for widths and sizes, a list literal for shapes and alternatives.
#[derive(Clone, Debug)]
pub enum Shape {
    PlaceHolder,
    /// `Type`: the type of a concrete type.
    Meta,
    /// `TypeTemplate`: the type of a template.
    MetaTemplate,
    Integer {
        size: RightValue,
    },
    FloatPoint {
        size: RightValue,
    },
    String,
    List {
        element: RightValue,
    },
    Vector {
        element: RightValue,
        size: RightValue,
    },
    Tensor {
        element: RightValue,
        shape: RightValue,
    },
    Optional {
        element: RightValue,
    },
    Any {
        elements: RightValue,
    },
    Custom {
        params: Vec<RightValue>,
    },
    /// Uninstantiated constructor.
    Template,
}

impl Shape {
    /// Actual parameters in declaration order.
    pub fn params(&self) -> Vec<&RightValue> {
        match self {
            Self::Integer { size } | Self::FloatPoint { size } => vec![size],
            Self::List { element } | Self::Optional { element } => vec![element],
            Self::Vector { element, size } => vec![element, size],
            Self::Tensor { element, shape } => vec![element, shape],
            Self::Any { elements } => vec![elements],
            Self::Custom { params } => params.iter().collect(),
            Self::PlaceHolder | Self::Meta | Self::MetaTemplate | Self::String | Self::Template => {
                vec![]
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Type {
    shape: Shape,
    def: TypeDefId,
    def_name: String,
    /// `Name` or `Name<p0, p1>`, computed once.
    name: String,
    level: TypeLevel,
    value_kind: ValueKind,
    constant: bool,
}

impl Type {
    fn build(def: TypeDefId, def_name: &str, shape: Shape, level: TypeLevel) -> Self {
        let params = shape.params();
        let name = if params.is_empty() {
            def_name.to_owned()
        } else {
            let rendered: Vec<String> = params.iter().map(|p| p.to_string()).collect();
            format!("{def_name}<{}>", rendered.join(", "))
        };
        let constant = params.iter().all(|p| p.is_constant());
        Self {
            shape,
            def,
            def_name: def_name.to_owned(),
            name,
            level,
            value_kind: ValueKind::default(),
            constant,
        }
    }

    pub fn placeholder() -> Self {
        Self::build(
            builtins::PLACEHOLDER,
            "PlaceHolder",
            Shape::PlaceHolder,
            TypeLevel::PlaceHolder,
        )
    }

    pub fn meta() -> Self {
        Self::build(builtins::TYPE, "Type", Shape::Meta, TypeLevel::Template)
    }

    pub fn meta_template() -> Self {
        Self::build(
            builtins::TYPE_TEMPLATE,
            "TypeTemplate",
            Shape::MetaTemplate,
            TypeLevel::MetaTemplate,
        )
    }

    pub fn integer(size: RightValue) -> Self {
        Self::build(
            builtins::INTEGER,
            "Integer",
            Shape::Integer { size },
            TypeLevel::Instance,
        )
    }

    /// `Integer<width>`.
    pub fn int(width: u32) -> Self {
        Self::integer(RightValue::integer(i64::from(width)))
    }

    /// `Integer<1>`.
    pub fn bool() -> Self {
        Self::int(1)
    }

    pub fn float_point(size: RightValue) -> Self {
        Self::build(
            builtins::FLOAT_POINT,
            "FloatPoint",
            Shape::FloatPoint { size },
            TypeLevel::Instance,
        )
    }

    /// `FloatPoint<width>`.
    pub fn float(width: u32) -> Self {
        Self::float_point(RightValue::integer(i64::from(width)))
    }

    pub fn string() -> Self {
        Self::build(
            builtins::STRING,
            "String",
            Shape::String,
            TypeLevel::Instance,
        )
    }

    /// `List<element>`, with the element's level.
    pub fn list(element: RightValue) -> Result<Self, SemanticError> {
        let level = element_level("List", &element)?;
        Ok(Self::list_unchecked(element, level))
    }

    /// `List<element>` for an element type.
    pub fn list_of(element: TypeRef) -> Result<Self, SemanticError> {
        Self::list(RightValue::type_lit(element))
    }

    /// Skips the element level check. Used for built-in parameter types and
    /// the type of an empty list literal.
    pub(crate) fn list_unchecked(element: RightValue, level: TypeLevel) -> Self {
        Self::build(builtins::LIST, "List", Shape::List { element }, level)
    }

    pub fn optional(element: RightValue) -> Result<Self, SemanticError> {
        let level = element_level("Optional", &element)?;
        Ok(Self::build(
            builtins::OPTIONAL,
            "Optional",
            Shape::Optional { element },
            level,
        ))
    }

    pub fn vector(element: RightValue, size: RightValue) -> Result<Self, SemanticError> {
        require_instance("Vector", element_level("Vector", &element)?)?;
        Ok(Self::build(
            builtins::VECTOR,
            "Vector",
            Shape::Vector { element, size },
            TypeLevel::Instance,
        ))
    }

    pub fn tensor(element: RightValue, shape: RightValue) -> Result<Self, SemanticError> {
        require_instance("Tensor", element_level("Tensor", &element)?)?;
        let shape_ty = shape.ty();
        if !matches!(shape_ty.shape(), Shape::List { .. }) {
            return Err(SemanticError::type_mismatch(
                "List<Integer<32>>",
                shape_ty.name(),
            ));
        }
        Ok(Self::build(
            builtins::TENSOR,
            "Tensor",
            Shape::Tensor { element, shape },
            TypeLevel::Instance,
        ))
    }

    /// `Any<[T0, T1, ...]>`: one of several alternatives, all of the same level.
    pub fn any(elements: RightValue) -> Result<Self, SemanticError> {
        let level = match elements.as_list() {
            Some([]) => {
                return Err(SemanticError::type_mismatch(
                    "non-empty list of types",
                    elements.to_string(),
                ));
            }
            Some(items) => {
                let first = element_level("Any", &items[0])?;
                for item in &items[1..] {
                    let level = element_level("Any", item)?;
                    if level != first {
                        return Err(SemanticError::LevelInvariantViolation {
                            constructor: "Any".to_owned(),
                            found: level,
                            required: "equal to the first alternative's",
                        });
                    }
                }
                first
            }
            None => {
                let list_ty = elements.ty();
                let element = list_ty.element().and_then(|ty| reified_level(&ty));
                match element {
                    Some(level) => level,
                    None => {
                        return Err(SemanticError::type_mismatch("List<Type>", list_ty.name()));
                    }
                }
            }
        };
        Ok(Self::build(
            builtins::ANY,
            "Any",
            Shape::Any { elements },
            level,
        ))
    }

    /// Instance of a user definition.
    pub fn custom(def: &TypeDef, params: Vec<RightValue>) -> Self {
        Self::build(
            def.id(),
            def.name(),
            Shape::Custom { params },
            TypeLevel::Instance,
        )
    }

    /// The uninstantiated constructor of `def`.
    pub fn template(def: &TypeDef) -> Self {
        Self::build(def.id(), def.name(), Shape::Template, TypeLevel::Template)
    }

    /// Instantiate a template type with actual parameters.
    pub fn instantiate(
        &self,
        registry: &Manager,
        args: Vec<RightValue>,
    ) -> Result<Self, SemanticError> {
        if !matches!(self.shape, Shape::Template) {
            return Err(SemanticError::type_mismatch("TypeTemplate", self.name()));
        }
        registry.type_def_by_id(self.def).instantiate(args)
    }

    /// Retag the value kind. Only valid before the type is shared.
    pub fn set_value_kind(&mut self, kind: ValueKind) {
        self.value_kind = kind;
    }

    pub fn with_value_kind(mut self, kind: ValueKind) -> Self {
        self.set_value_kind(kind);
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn def(&self) -> TypeDefId {
        self.def
    }

    pub fn def_name(&self) -> &str {
        &self.def_name
    }

    /// Display name, e.g. `Vector<Integer<32>, 4>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> TypeLevel {
        self.level
    }

    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// True iff every parameter expression is constant-foldable.
    pub fn is_constant(&self) -> bool {
        self.constant
    }

    pub fn is_custom(&self) -> bool {
        !self.def.is_builtin()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.shape, Shape::PlaceHolder)
    }

    /// Bit width of an `Integer` or `FloatPoint`, when it folds to a constant.
    pub fn width(&self) -> Option<u32> {
        match &self.shape {
            Shape::Integer { size } | Shape::FloatPoint { size } => {
                size.as_integer().and_then(|w| u32::try_from(w).ok())
            }
            _ => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.shape, Shape::Integer { .. }) && self.width() == Some(1)
    }

    /// Element type of a `List`, `Optional`, `Vector` or `Tensor`, when the
    /// element parameter is a type literal.
    pub fn element(&self) -> Option<TypeRef> {
        match &self.shape {
            Shape::List { element }
            | Shape::Optional { element }
            | Shape::Vector { element, .. }
            | Shape::Tensor { element, .. } => element.as_type().cloned(),
            _ => None,
        }
    }

    /// Whether a value of type `actual` may be bound where `self` is expected.
    ///
    /// Display names must match, except that `Type` accepts `TypeTemplate`,
    /// lists compare element-wise, and an empty list literal fits any list.
    pub fn accepts(&self, actual: &Type) -> bool {
        if self.name == actual.name {
            return true;
        }
        match (&self.shape, &actual.shape) {
            (Shape::Meta, Shape::MetaTemplate) => true,
            (Shape::List { element: expected }, Shape::List { element: found }) => {
                match (expected.as_type(), found.as_type()) {
                    (Some(expected), Some(found)) => {
                        found.is_placeholder() || expected.accepts(found)
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.def == other.def
            && self.name == other.name
            && self.level == other.level
            && self.constant == other.constant
            && self.value_kind == other.value_kind
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Level of the type an element parameter stands for.
///
/// A type literal gives its own level. Any other expression must be a value of
/// type `Type` or `TypeTemplate` (e.g. a template parameter).
fn element_level(constructor: &str, element: &RightValue) -> Result<TypeLevel, SemanticError> {
    let level = match element.as_type() {
        Some(ty) => ty.level(),
        None => {
            let ty = element.ty();
            reified_level(&ty).ok_or_else(|| SemanticError::type_mismatch("Type", ty.name()))?
        }
    };
    if !level.is_element() {
        return Err(SemanticError::LevelInvariantViolation {
            constructor: constructor.to_owned(),
            found: level,
            required: "2 or 3",
        });
    }
    Ok(level)
}

/// Level of the types that values of `ty` hold.
fn reified_level(ty: &Type) -> Option<TypeLevel> {
    match ty.shape {
        Shape::Meta => Some(TypeLevel::Instance),
        Shape::MetaTemplate => Some(TypeLevel::Template),
        _ => None,
    }
}

fn require_instance(constructor: &str, level: TypeLevel) -> Result<(), SemanticError> {
    if level != TypeLevel::Instance {
        return Err(SemanticError::LevelInvariantViolation {
            constructor: constructor.to_owned(),
            found: level,
            required: "3",
        });
    }
    Ok(())
}
