//! Target notations of types.
//!
//! Definition-language notation uses C++ type strings and `*Parameter<>` wrappers,
//! operation notation uses ODS type constraints, host notation uses C++ types.

use fegen_core::ValueKind;

use super::builtins;
use super::ty::{Shape, Type};
use crate::error::SemanticError;
use crate::render::{Render, Target};

impl Render for Type {
    fn render(&self, target: Target) -> Result<String, SemanticError> {
        let rendered = match target {
            Target::TypeDef => self.typedef_notation()?,
            Target::OpDef => self.opdef_notation()?,
            Target::Cpp => self.cpp_notation()?,
        };
        rendered.ok_or_else(|| SemanticError::UnsupportedRendering {
            subject: self.name().to_owned(),
            target,
        })
    }
}

impl Type {
    fn typedef_notation(&self) -> Result<Option<String>, SemanticError> {
        let rendered = match self.shape() {
            Shape::Meta => "\"Type\"".to_owned(),
            Shape::Integer { .. } => match self.width() {
                Some(1) => "\"bool\"".to_owned(),
                Some(16) => "\"short\"".to_owned(),
                Some(32) => "\"int\"".to_owned(),
                Some(64) => "\"long\"".to_owned(),
                _ => return Ok(None),
            },
            Shape::FloatPoint { .. } => match self.width() {
                Some(32) => "\"float\"".to_owned(),
                Some(64) => "\"double\"".to_owned(),
                _ => return Ok(None),
            },
            Shape::String => "StringRefParameter<>".to_owned(),
            Shape::List { element } => {
                format!("ArrayRefParameter<{}>", element.render(Target::TypeDef)?)
            }
            Shape::Optional { element } => {
                format!("OptionalParameter<{}>", element.render(Target::TypeDef)?)
            }
            Shape::Custom { .. } => self.def_name().to_owned(),
            Shape::Template => match self.def() {
                _ if self.is_custom() => self.def_name().to_owned(),
                builtins::INTEGER => "Builtin_IntegerAttr".to_owned(),
                builtins::FLOAT_POINT => "Builtin_FloatAttr".to_owned(),
                _ => return Ok(None),
            },
            Shape::PlaceHolder
            | Shape::MetaTemplate
            | Shape::Vector { .. }
            | Shape::Tensor { .. }
            | Shape::Any { .. } => return Ok(None),
        };
        Ok(Some(rendered))
    }

    fn opdef_notation(&self) -> Result<Option<String>, SemanticError> {
        // Attributes use the `*Attr` form of scalar constraints.
        let attr = if self.value_kind() == ValueKind::Attribute {
            "Attr"
        } else {
            ""
        };
        let rendered = match self.shape() {
            Shape::Meta => "TypeAttr".to_owned(),
            Shape::Integer { .. } => match self.width() {
                Some(w @ (1 | 8 | 16 | 32 | 64)) => format!("I{w}{attr}"),
                _ => return Ok(None),
            },
            Shape::FloatPoint { .. } => match self.width() {
                Some(w @ (16 | 32 | 64)) => format!("F{w}{attr}"),
                _ => return Ok(None),
            },
            Shape::String => "StrAttr".to_owned(),
            Shape::List { element } => format!("Variadic<{}>", element.render(Target::OpDef)?),
            Shape::Optional { element } => {
                format!("Optional<{}>", element.render(Target::OpDef)?)
            }
            Shape::Vector { element, .. } => {
                format!("VectorOf<[{}]>", element.render(Target::OpDef)?)
            }
            Shape::Tensor { element, .. } => {
                format!("TensorOf<[{}]>", element.render(Target::OpDef)?)
            }
            Shape::Any { elements } => {
                format!("AnyTypeOf<{}>", elements.render(Target::OpDef)?)
            }
            Shape::Custom { .. } => self.def_name().to_owned(),
            Shape::Template => match self.def() {
                _ if self.is_custom() => self.def_name().to_owned(),
                builtins::INTEGER => "Builtin_Integer".to_owned(),
                _ => return Ok(None),
            },
            Shape::PlaceHolder | Shape::MetaTemplate => return Ok(None),
        };
        Ok(Some(rendered))
    }

    fn cpp_notation(&self) -> Result<Option<String>, SemanticError> {
        let rendered = match self.shape() {
            Shape::Meta | Shape::Custom { .. } => "mlir::Type".to_owned(),
            Shape::Integer { .. } => match self.width() {
                Some(1) => "bool".to_owned(),
                Some(16) => "short".to_owned(),
                Some(32) => "int".to_owned(),
                Some(64) => "long".to_owned(),
                _ => return Ok(None),
            },
            Shape::FloatPoint { .. } => match self.width() {
                Some(32) => "float".to_owned(),
                Some(64) => "double".to_owned(),
                _ => return Ok(None),
            },
            Shape::String => "std::string".to_owned(),
            Shape::List { element } => format!("std::vector<{}>", element.render(Target::Cpp)?),
            Shape::Optional { element } => {
                format!("std::optional<{}>", element.render(Target::Cpp)?)
            }
            Shape::Vector { element, size } => format!(
                "std::array<{}, {}>",
                element.render(Target::Cpp)?,
                size.render(Target::Cpp)?
            ),
            Shape::PlaceHolder
            | Shape::MetaTemplate
            | Shape::Template
            | Shape::Tensor { .. }
            | Shape::Any { .. } => return Ok(None),
        };
        Ok(Some(rendered))
    }
}
