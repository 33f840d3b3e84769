use super::builtins::{self, BUILTIN_DIALECT, TypeDefId};
use super::ty::Type;
use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::value::Value;

/// A named type constructor registered in a dialect namespace.
#[derive(Clone, Debug)]
pub struct TypeDef {
    id: TypeDefId,
    dialect: String,
    name: String,
    mnemonic: String,
    params: Vec<Value>,
    custom: bool,
    /// Text of the declaring construct, for diagnostics.
    origin: Option<String>,
}

impl TypeDef {
    /// A user definition. Gets its id when registered.
    pub fn new(dialect: impl Into<String>, name: impl Into<String>, params: Vec<Value>) -> Self {
        let name = name.into();
        Self {
            id: TypeDefId::PENDING,
            dialect: dialect.into(),
            mnemonic: name.to_lowercase(),
            name,
            params,
            custom: true,
            origin: None,
        }
    }

    pub(crate) fn builtin(id: TypeDefId, name: &str, params: Vec<Value>) -> Self {
        Self {
            id,
            dialect: BUILTIN_DIALECT.to_owned(),
            name: name.to_owned(),
            mnemonic: name.to_lowercase(),
            params,
            custom: false,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub(crate) fn assign_id(&mut self, id: TypeDefId) {
        self.id = id;
    }

    pub fn id(&self) -> TypeDefId {
        self.id
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase name, used in the dialect's textual type syntax.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Formal parameters in declaration order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Apply the constructor to actual parameters.
    ///
    /// Checks the parameter count and each parameter's type against the formal,
    /// then dispatches to the matching factory. The result is a fresh type; equal
    /// arguments give value-equal but distinct instances.
    pub fn instantiate(&self, args: Vec<RightValue>) -> Result<Type, SemanticError> {
        if args.len() != self.params.len() {
            return Err(self.arity_mismatch(args.len()));
        }
        for (param, arg) in self.params.iter().zip(&args) {
            let found = arg.ty();
            if !param.ty().accepts(&found) {
                return Err(SemanticError::type_mismatch(
                    param.ty().name(),
                    found.name(),
                ));
            }
        }

        if self.custom {
            return Ok(Type::custom(self, args));
        }
        match (self.id, args.as_slice()) {
            (builtins::PLACEHOLDER, []) => Ok(Type::placeholder()),
            (builtins::TYPE, []) => Ok(Type::meta()),
            (builtins::TYPE_TEMPLATE, []) => Ok(Type::meta_template()),
            (builtins::INTEGER, [size]) => Ok(Type::integer(size.clone())),
            (builtins::FLOAT_POINT, [size]) => Ok(Type::float_point(size.clone())),
            (builtins::STRING, []) => Ok(Type::string()),
            (builtins::VECTOR, [element, size]) => Type::vector(element.clone(), size.clone()),
            (builtins::LIST, [element]) => Type::list(element.clone()),
            (builtins::TENSOR, [element, shape]) => Type::tensor(element.clone(), shape.clone()),
            (builtins::OPTIONAL, [element]) => Type::optional(element.clone()),
            (builtins::ANY, [elements]) => Type::any(elements.clone()),
            _ => Err(self.arity_mismatch(args.len())),
        }
    }

    fn arity_mismatch(&self, found: usize) -> SemanticError {
        SemanticError::ArityMismatch {
            name: self.name.clone(),
            expected: self.params.len(),
            found,
        }
    }
}
