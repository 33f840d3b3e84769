use std::rc::Rc;

use fegen_core::ValueKind;
use fegen_core::syntax::{Expr, TypeExpr};

use super::Builder;
use crate::error::{DefinitionKind, SemanticError};
use crate::expr::RightValue;
use crate::types::Type;
use crate::value::Value;

impl Builder<'_> {
    pub(super) fn resolve_type(&self, ty: &TypeExpr) -> Result<Type, SemanticError> {
        match ty {
            TypeExpr::Name { name } => self.manager.resolve_type_name(name),
            TypeExpr::Instance { template, args } => {
                let args = self.visit_exprs(args)?;
                self.manager.instantiate(template, args)
            }
        }
    }

    pub(super) fn visit_expr(&self, expr: &Expr) -> Result<RightValue, SemanticError> {
        match expr {
            Expr::Int { value, width } => Ok(RightValue::integer_with_width(
                *value,
                width.unwrap_or(32),
            )),
            Expr::Float { value, width } => Ok(RightValue::float_with_width(
                *value,
                width.unwrap_or(32),
            )),
            Expr::Bool { value } => Ok(RightValue::boolean(*value)),
            Expr::String { value } => Ok(RightValue::string(value.clone())),
            Expr::List { elements } => RightValue::list(self.visit_exprs(elements)?),
            Expr::Type { ty } => Ok(RightValue::type_lit(Rc::new(self.resolve_type(ty)?))),
            Expr::Ident { name } => self.visit_ident(name),
            Expr::Unary { op, operand } => RightValue::unary(*op, self.visit_expr(operand)?),
            Expr::Binary { op, lhs, rhs } => {
                RightValue::binary(*op, self.visit_expr(lhs)?, self.visit_expr(rhs)?)
            }
            Expr::Call { callee, args } => {
                let args = self.visit_exprs(args)?;
                if let Some(function) = self.manager.get_function(callee) {
                    RightValue::function_call(function, args)
                } else if let Some(operation) = self.manager.get_operation(callee) {
                    RightValue::operation_call(operation, args)
                } else {
                    Err(SemanticError::UnknownIdentifier {
                        name: callee.clone(),
                    })
                }
            }
        }
    }

    fn visit_exprs(&self, exprs: &[Expr]) -> Result<Vec<RightValue>, SemanticError> {
        exprs.iter().map(|expr| self.visit_expr(expr)).collect()
    }

    /// Scope bindings shadow type names.
    fn visit_ident(&self, name: &str) -> Result<RightValue, SemanticError> {
        if let Some(value) = self.scopes.lookup(name) {
            return Ok(value.reference());
        }
        if self.manager.get_type_def(name).is_some() {
            let ty = self.manager.resolve_type_name(name)?;
            return Ok(RightValue::type_lit(Rc::new(ty)));
        }
        Err(SemanticError::UnknownIdentifier {
            name: name.to_owned(),
        })
    }

    /// Resolve a typed declaration and bind it in the innermost frame.
    ///
    /// The value kind is applied before the type is shared.
    pub(super) fn declare_value(
        &mut self,
        name: &str,
        ty: &TypeExpr,
        value_kind: Option<ValueKind>,
        init: Option<&Expr>,
    ) -> Result<Value, SemanticError> {
        let mut declared = self.resolve_type(ty)?;
        if let Some(kind) = value_kind {
            declared.set_value_kind(kind);
        }
        let declared = Rc::new(declared);
        let content = match init {
            Some(init) => {
                let content = self.visit_expr(init)?;
                check_assignable(&declared, &content)?;
                content
            }
            None => RightValue::placeholder(),
        };
        let value = Value::new(name, declared, content);
        if !self.scopes.declare(value.clone()) {
            return Err(SemanticError::duplicate(DefinitionKind::Value, name));
        }
        Ok(value)
    }
}

pub(super) fn check_assignable(expected: &Type, value: &RightValue) -> Result<(), SemanticError> {
    let found = value.ty();
    if expected.accepts(&found) {
        Ok(())
    } else {
        Err(SemanticError::type_mismatch(expected.name(), found.name()))
    }
}
