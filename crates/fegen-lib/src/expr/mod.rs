//! Right values: constant-foldable expression trees.
//!
//! Terminals are literals and left-value references; nodes are operator
//! applications and calls. Expressions are built bottom-up and never mutated.
//! Nodes are typed on construction, so an ill-typed operator application is
//! rejected right where it is built.

mod fold;
mod infer;
mod render;

#[cfg(test)]
mod infer_tests;

pub use fold::Constant;

use std::fmt;
use std::rc::Rc;

use fegen_core::Operator;

use crate::error::SemanticError;
use crate::manager::{Function, Operation};
use crate::render::quote;
use crate::types::{Type, TypeLevel, TypeRef};
use crate::value::Value;

/// Shared handle to an immutable expression.
#[derive(Clone, Debug)]
pub struct RightValue(Rc<Node>);

#[derive(Debug)]
struct Node {
    expr: Expr,
    constant: bool,
    /// Set for lists and nodes, whose type is inferred on construction.
    /// Literal types are derived on demand.
    ty: Option<TypeRef>,
}

#[derive(Clone, Debug)]
pub enum Expr {
    /// No content bound yet.
    PlaceHolder,
    /// Integer literal. Width 1 is a boolean.
    Integer { value: i64, width: u32 },
    Float { value: f64, width: u32 },
    String(String),
    Type(TypeRef),
    List(Vec<RightValue>),
    LeftValue(LeftValue),
    Unary {
        op: Operator,
        operand: RightValue,
    },
    Binary {
        op: Operator,
        lhs: RightValue,
        rhs: RightValue,
    },
    FunctionCall {
        callee: String,
        args: Vec<RightValue>,
    },
    OperationCall {
        callee: String,
        args: Vec<RightValue>,
    },
}

/// Reference to a declared [`Value`], with a snapshot of its binding.
#[derive(Clone, Debug)]
pub struct LeftValue {
    name: String,
    ty: TypeRef,
    binding: RightValue,
}

impl LeftValue {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Content of the value when the reference was made.
    pub fn binding(&self) -> &RightValue {
        &self.binding
    }
}

impl RightValue {
    fn terminal(expr: Expr, constant: bool) -> Self {
        Self(Rc::new(Node {
            expr,
            constant,
            ty: None,
        }))
    }

    fn typed(expr: Expr, constant: bool, ty: Type) -> Self {
        Self(Rc::new(Node {
            expr,
            constant,
            ty: Some(Rc::new(ty)),
        }))
    }

    /// Uninitialized content. Not constant-foldable.
    pub fn placeholder() -> Self {
        Self::terminal(Expr::PlaceHolder, false)
    }

    /// 32-bit integer literal.
    pub fn integer(value: i64) -> Self {
        Self::integer_with_width(value, 32)
    }

    pub fn integer_with_width(value: i64, width: u32) -> Self {
        Self::terminal(Expr::Integer { value, width }, true)
    }

    /// 1-bit integer literal.
    pub fn boolean(value: bool) -> Self {
        Self::integer_with_width(i64::from(value), 1)
    }

    /// 32-bit float literal.
    pub fn float(value: f64) -> Self {
        Self::float_with_width(value, 32)
    }

    pub fn float_with_width(value: f64, width: u32) -> Self {
        Self::terminal(Expr::Float { value, width }, true)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::terminal(Expr::String(value.into()), true)
    }

    pub fn type_lit(ty: TypeRef) -> Self {
        let constant = ty.is_constant();
        Self::terminal(Expr::Type(ty), constant)
    }

    /// List literal, typed `List<T>` with `T` the first element's type.
    ///
    /// All elements must have types of the same level. An empty list is typed
    /// `List<PlaceHolder>` and fits any list.
    pub fn list(elements: Vec<RightValue>) -> Result<Self, SemanticError> {
        let ty = match elements.first() {
            None => Type::list_unchecked(
                Self::type_lit(Rc::new(Type::placeholder())),
                TypeLevel::PlaceHolder,
            ),
            Some(first) => {
                let first_ty = first.ty();
                for element in &elements[1..] {
                    let level = element.ty().level();
                    if level != first_ty.level() {
                        return Err(SemanticError::LevelInvariantViolation {
                            constructor: "List".to_owned(),
                            found: level,
                            required: "equal to the first element's",
                        });
                    }
                }
                Type::list_of(first_ty)?
            }
        };
        let constant = elements.iter().all(RightValue::is_constant);
        Ok(Self::typed(Expr::List(elements), constant, ty))
    }

    /// Reference to `value`. Constant-foldable iff its current content is.
    pub fn left_value(value: &Value) -> Self {
        let constant = value.content().is_constant();
        Self::terminal(
            Expr::LeftValue(LeftValue {
                name: value.name().to_owned(),
                ty: value.ty().clone(),
                binding: value.content().clone(),
            }),
            constant,
        )
    }

    pub fn unary(op: Operator, operand: RightValue) -> Result<Self, SemanticError> {
        let ty = infer::unary(op, &operand.ty())?;
        let constant = operand.is_constant();
        Ok(Self::typed(Expr::Unary { op, operand }, constant, ty))
    }

    pub fn binary(op: Operator, lhs: RightValue, rhs: RightValue) -> Result<Self, SemanticError> {
        let ty = infer::binary(op, &lhs.ty(), &rhs.ty())?;
        let constant = lhs.is_constant() && rhs.is_constant();
        Ok(Self::typed(Expr::Binary { op, lhs, rhs }, constant, ty))
    }

    /// Call of a registered function; typed by its return type.
    pub fn function_call(function: &Function, args: Vec<RightValue>) -> Result<Self, SemanticError> {
        check_args(function.name(), function.params(), &args)?;
        let ty = match function.return_type() {
            Some(ty) => Type::clone(ty),
            None => Type::placeholder(),
        };
        let constant = args.iter().all(RightValue::is_constant);
        let callee = function.name().to_owned();
        Ok(Self::typed(Expr::FunctionCall { callee, args }, constant, ty))
    }

    /// Invocation of a registered operation; typed by its single result.
    pub fn operation_call(
        operation: &Operation,
        args: Vec<RightValue>,
    ) -> Result<Self, SemanticError> {
        check_args(operation.name(), operation.arguments(), &args)?;
        let ty = match operation.results() {
            [result] => Type::clone(result.ty()),
            _ => Type::placeholder(),
        };
        let constant = args.iter().all(RightValue::is_constant);
        let callee = operation.name().to_owned();
        Ok(Self::typed(Expr::OperationCall { callee, args }, constant, ty))
    }

    pub fn expr(&self) -> &Expr {
        &self.0.expr
    }

    pub fn is_constant(&self) -> bool {
        self.0.constant
    }

    /// Same expression, or both fold to the same constant.
    pub fn agrees_with(&self, other: &RightValue) -> bool {
        if Rc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (self.fold(), other.fold()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.0.expr, Expr::PlaceHolder)
    }

    /// Prefix operator applications and negative literals; another prefix
    /// operator directly before them would fuse into one token, as in `--`.
    fn starts_with_sign(&self) -> bool {
        match &self.0.expr {
            Expr::Unary { .. } => true,
            Expr::Integer { value, .. } => *value < 0,
            Expr::Float { value, .. } => value.is_sign_negative(),
            _ => false,
        }
    }

        pub fn is_terminal(&self) -> bool {
        !matches!(
            self.0.expr,
            Expr::Unary { .. }
                | Expr::Binary { .. }
                | Expr::FunctionCall { .. }
                | Expr::OperationCall { .. }
        )
    }

    /// Type of the expression.
    pub fn ty(&self) -> TypeRef {
        if let Some(ty) = &self.0.ty {
            return ty.clone();
        }
        let ty = match &self.0.expr {
            Expr::Integer { width, .. } => Type::int(*width),
            Expr::Float { width, .. } => Type::float(*width),
            Expr::String(_) => Type::string(),
            Expr::Type(ty) => match ty.level() {
                TypeLevel::Instance => Type::meta(),
                TypeLevel::Template => Type::meta_template(),
                TypeLevel::PlaceHolder | TypeLevel::MetaTemplate => Type::placeholder(),
            },
            Expr::LeftValue(left) => return left.ty.clone(),
            // Typed on construction.
            Expr::PlaceHolder
            | Expr::List(_)
            | Expr::Unary { .. }
            | Expr::Binary { .. }
            | Expr::FunctionCall { .. }
            | Expr::OperationCall { .. } => Type::placeholder(),
        };
        Rc::new(ty)
    }

    /// The wrapped type of a type literal.
    pub fn as_type(&self) -> Option<&TypeRef> {
        match &self.0.expr {
            Expr::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RightValue]> {
        match &self.0.expr {
            Expr::List(elements) => Some(elements),
            _ => None,
        }
    }
}

fn check_args(name: &str, params: &[Value], args: &[RightValue]) -> Result<(), SemanticError> {
    if params.len() != args.len() {
        return Err(SemanticError::ArityMismatch {
            name: name.to_owned(),
            expected: params.len(),
            found: args.len(),
        });
    }
    for (param, arg) in params.iter().zip(args) {
        let found = arg.ty();
        if !param.ty().accepts(&found) {
            return Err(SemanticError::type_mismatch(
                param.ty().name(),
                found.name(),
            ));
        }
    }
    Ok(())
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[RightValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Canonical rendering, used in type display names and diagnostics.
impl fmt::Display for RightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.expr {
            Expr::PlaceHolder => Ok(()),
            Expr::Integer { value, width: 1 } => write!(f, "{}", *value != 0),
            Expr::Integer { value, .. } => write!(f, "{value}"),
            Expr::Float { value, .. } => write!(f, "{value:?}"),
            Expr::String(value) => f.write_str(&quote(value)),
            Expr::Type(ty) => f.write_str(ty.name()),
            Expr::List(elements) => {
                f.write_str("[")?;
                write_joined(f, elements)?;
                f.write_str("]")
            }
            Expr::LeftValue(left) => f.write_str(&left.name),
            Expr::Unary { op, operand } if operand.starts_with_sign() => {
                write!(f, "{}({operand})", op.symbol())
            }
            Expr::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Expr::FunctionCall { callee, args } | Expr::OperationCall { callee, args } => {
                write!(f, "{callee}(")?;
                write_joined(f, args)?;
                f.write_str(")")
            }
        }
    }
}
