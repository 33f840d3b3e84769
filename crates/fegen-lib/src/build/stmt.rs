use fegen_core::syntax;

use super::expr::check_assignable;
use super::{Builder, Returns};
use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::stmt::Stmt;
use crate::types::Shape;
use crate::value::Value;
use crate::Result;

impl Builder<'_> {
    /// Statements in the current frame.
    pub(super) fn visit_stmts(&mut self, stmts: &[syntax::Stmt]) -> Result<Vec<Stmt>> {
        stmts.iter().map(|stmt| self.visit_stmt(stmt)).collect()
    }

    /// Statements in a fresh frame.
    fn visit_block(&mut self, stmts: &[syntax::Stmt]) -> Result<Vec<Stmt>> {
        self.with_scope(|this| this.visit_stmts(stmts))
    }

    fn visit_stmt(&mut self, stmt: &syntax::Stmt) -> Result<Stmt> {
        let at = |e: SemanticError| e.at(stmt);
        match stmt {
            syntax::Stmt::VarDecl {
                name,
                ty,
                value_kind,
                init,
            } => {
                let value = self
                    .declare_value(name, ty, *value_kind, init.as_ref())
                    .map_err(at)?;
                Ok(Stmt::VarDecl(value))
            }
            syntax::Stmt::Assign { name, value } => {
                let value = self.visit_expr(value).map_err(at)?;
                let Some(target) = self.scopes.lookup_mut(name) else {
                    return Err(at(SemanticError::UnknownIdentifier { name: name.clone() }));
                };
                check_assignable(target.ty(), &value).map_err(at)?;
                target.set_content(value.clone());
                Ok(Stmt::Assign {
                    target: target.clone(),
                    value,
                })
            }
            syntax::Stmt::Expr { expr } => Ok(Stmt::Expr(self.visit_expr(expr).map_err(at)?)),
            syntax::Stmt::If {
                cond,
                then,
                otherwise,
            } => {
                let cond = self.visit_expr(cond).map_err(at)?;
                let cond_ty = cond.ty();
                if !cond_ty.is_bool() {
                    return Err(at(SemanticError::type_mismatch(
                        "Integer<1>",
                        cond_ty.name(),
                    )));
                }
                let (then, otherwise) = self.visit_branches(then, otherwise.as_deref())?;
                Ok(Stmt::If {
                    cond,
                    then,
                    otherwise,
                })
            }
            syntax::Stmt::For {
                var,
                ty,
                iterable,
                body,
            } => {
                let iterable = self.visit_expr(iterable).map_err(at)?;
                let iterable_ty = iterable.ty();
                if !matches!(iterable_ty.shape(), Shape::List { .. }) {
                    return Err(at(SemanticError::type_mismatch("List", iterable_ty.name())));
                }
                let var_ty = self.resolve_type(ty).map_err(at)?;
                // An empty list literal has no element type to check against.
                if let Some(element) = iterable_ty.element()
                    && !element.is_placeholder()
                    && !var_ty.accepts(&element)
                {
                    return Err(at(SemanticError::type_mismatch(
                        var_ty.name(),
                        element.name(),
                    )));
                }
                let var = Value::uninit(var, var_ty.into());
                let body = self.visit_loop_body(&var, body)?;
                Ok(Stmt::For {
                    var,
                    iterable,
                    body,
                })
            }
            syntax::Stmt::Return { value } => {
                let value = match value {
                    Some(value) => Some(self.visit_expr(value).map_err(at)?),
                    None => None,
                };
                self.check_return(value.as_ref()).map_err(at)?;
                Ok(Stmt::Return(value))
            }
        }
    }

    /// Both branches start from the bindings before the `if`. Afterwards a
    /// binding keeps its content only where the two paths agree; a missing
    /// `else` is the path that changes nothing.
    fn visit_branches(
        &mut self,
        then: &[syntax::Stmt],
        otherwise: Option<&[syntax::Stmt]>,
    ) -> Result<(Vec<Stmt>, Option<Vec<Stmt>>)> {
        let before = self.scopes.snapshot();
        let then = self.visit_block(then)?;
        let after_then = self.scopes.snapshot();
        self.scopes.restore(&before);
        let otherwise = match otherwise {
            Some(block) => Some(self.visit_block(block)?),
            None => None,
        };
        let forgotten = self.scopes.merge(&after_then);
        if !forgotten.is_empty() {
            log::trace!("branches disagree on {}", forgotten.join(", "));
        }
        Ok((then, otherwise))
    }

    /// The body may run any number of times, so every outer binding it assigns
    /// is unknown both inside it and after the loop. A first visit finds those
    /// bindings; the second, with them forgotten, is the one kept.
    fn visit_loop_body(&mut self, var: &Value, body: &[syntax::Stmt]) -> Result<Vec<Stmt>> {
        let before = self.scopes.snapshot();
        self.visit_iteration(var, body)?;
        let after = self.scopes.snapshot();
        self.scopes.restore(&before);
        let assigned = self.scopes.merge(&after);
        if assigned.is_empty() {
            return self.visit_iteration(var, body);
        }
        log::trace!("loop assigns {}", assigned.join(", "));
        let entry = self.scopes.snapshot();
        let body = self.visit_iteration(var, body)?;
        self.scopes.merge(&entry);
        Ok(body)
    }

    fn visit_iteration(&mut self, var: &Value, body: &[syntax::Stmt]) -> Result<Vec<Stmt>> {
        self.with_scope(|this| {
            let declared = this.scopes.declare(var.clone());
            debug_assert!(declared);
            this.visit_stmts(body)
        })
    }

    fn check_return(&self, value: Option<&RightValue>) -> std::result::Result<(), SemanticError> {
        match (&self.returns, value) {
            (Returns::Unchecked, _) | (Returns::Nothing, None) => Ok(()),
            (Returns::Nothing, Some(value)) => Err(SemanticError::type_mismatch(
                "no value",
                value.ty().name(),
            )),
            (Returns::Typed(expected), None) => {
                Err(SemanticError::type_mismatch(expected.name(), "no value"))
            }
            (Returns::Typed(expected), Some(value)) => check_assignable(expected, value),
        }
    }
}
