//! Named, typed bindings.

use crate::expr::RightValue;
use crate::types::TypeRef;

/// A named binding of a type and its content.
///
/// Used for template parameters, function parameters, operation arguments and
/// results, rule inputs and returns, and local variables. The content is a
/// placeholder until something is bound.
#[derive(Clone, Debug)]
pub struct Value {
    name: String,
    ty: TypeRef,
    content: RightValue,
}

impl Value {
    pub fn new(name: impl Into<String>, ty: TypeRef, content: RightValue) -> Self {
        Self {
            name: name.into(),
            ty,
            content,
        }
    }

    /// A binding without content.
    pub fn uninit(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, ty, RightValue::placeholder())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn content(&self) -> &RightValue {
        &self.content
    }

    pub fn set_content(&mut self, content: RightValue) {
        self.content = content;
    }

    /// Keep the binding initialized but drop what is known about its content,
    /// e.g. after it was assigned on only some paths.
    pub fn forget_content(&mut self) {
        let opaque = Value::uninit(self.name.clone(), self.ty.clone());
        self.content = RightValue::left_value(&opaque);
    }

    pub fn is_initialized(&self) -> bool {
        !self.content.is_placeholder()
    }

    /// A left-value expression naming this binding.
    pub fn reference(&self) -> RightValue {
        RightValue::left_value(self)
    }
}
