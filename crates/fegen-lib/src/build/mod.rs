//! Single-pass builder from the parse tree into the registry.
//!
//! Items are visited in document order and registered as soon as they are
//! complete, so a definition is visible to every item after it. Children are
//! resolved before their parent; the first failure aborts the build.

mod expr;
mod stmt;


use fegen_core::syntax::{
    Alternative, FunctionDecl, Item, OperationDecl, Param, RuleDecl, SourceFile, TypeDefDecl,
};

use crate::error::{DefinitionKind, SemanticError};
use crate::manager::{Function, Manager, Operation, Rule, RuleKind, RuleNode};
use crate::scope::ScopeStack;
use crate::types::{TypeDef, TypeRef};
use crate::value::Value;
use crate::Result;

/// What a `return` statement is checked against.
#[derive(Clone, Debug)]
enum Returns {
    /// Operation bodies and rule actions.
    Unchecked,
    /// Function without a result.
    Nothing,
    Typed(TypeRef),
}

pub struct Builder<'m> {
    manager: &'m mut Manager,
    scopes: ScopeStack,
    returns: Returns,
}

impl<'m> Builder<'m> {
    pub fn new(manager: &'m mut Manager) -> Self {
        Self {
            manager,
            scopes: ScopeStack::new(),
            returns: Returns::Unchecked,
        }
    }

    /// Resolve every item of `file` and register it.
    pub fn build(mut self, file: &SourceFile) -> Result<()> {
        log::debug!("build module `{}` ({} items)", file.module, file.items.len());
        self.manager.set_module_name(file.module.clone());
        for item in &file.items {
            self.visit_item(item)?;
        }
        debug_assert!(self.scopes.is_empty());
        Ok(())
    }

    fn visit_item(&mut self, item: &Item) -> Result<()> {
        match item {
            Item::TypeDef(decl) => self.visit_type_def(decl),
            Item::Function(decl) => self.visit_function(decl),
            Item::Operation(decl) => self.visit_operation(decl),
            Item::Rule(decl) => self.visit_rule(decl),
        }
    }

    fn visit_type_def(&mut self, decl: &TypeDefDecl) -> Result<()> {
        let params = self
            .with_scope(|this| this.visit_params(&decl.params))
            .map_err(|e| e.at(decl))?;
        let def = TypeDef::new(self.manager.module_name(), &decl.name, params)
            .with_origin(decl.to_string());
        if !self.manager.add_type_def(def) {
            return Err(SemanticError::duplicate(DefinitionKind::Type, &decl.name).at(decl));
        }
        Ok(())
    }

    fn visit_function(&mut self, decl: &FunctionDecl) -> Result<()> {
        let function = self.with_scope(|this| {
            let params = this.visit_params(&decl.params).map_err(|e| e.at(decl))?;
            let return_type: Option<TypeRef> = match &decl.return_type {
                Some(ty) => Some(this.resolve_type(ty).map_err(|e| e.at(decl))?.into()),
                None => None,
            };
            this.returns = match &return_type {
                Some(ty) => Returns::Typed(TypeRef::clone(ty)),
                None => Returns::Nothing,
            };
            let body = this.visit_stmts(&decl.body);
            this.returns = Returns::Unchecked;
            Ok::<_, crate::Error>(Function::new(&decl.name, params, return_type, body?))
        })?;
        if !self.manager.add_function(function) {
            return Err(SemanticError::duplicate(DefinitionKind::Function, &decl.name).at(decl));
        }
        Ok(())
    }

    fn visit_operation(&mut self, decl: &OperationDecl) -> Result<()> {
        let operation = self.with_scope(|this| {
            let arguments = this.visit_params(&decl.arguments).map_err(|e| e.at(decl))?;
            let results = this.visit_params(&decl.results).map_err(|e| e.at(decl))?;
            let body = this.visit_stmts(&decl.body)?;
            let dialect = this.manager.module_name().to_owned();
            Ok::<_, crate::Error>(Operation::new(dialect, &decl.name, arguments, results, body))
        })?;
        if !self.manager.add_operation(operation) {
            return Err(SemanticError::duplicate(DefinitionKind::Operation, &decl.name).at(decl));
        }
        Ok(())
    }

    fn visit_rule(&mut self, decl: &RuleDecl) -> Result<()> {
        let rules = decl
            .alternatives
            .iter()
            .map(|alt| self.visit_alternative(alt))
            .collect::<Result<Vec<_>>>()?;
        let kind = if decl.lexer {
            RuleKind::Lexer
        } else {
            RuleKind::Parser
        };
        if !self.manager.add_rule_node(RuleNode::new(&decl.name, kind, rules)) {
            return Err(SemanticError::duplicate(DefinitionKind::Rule, &decl.name).at(decl));
        }
        Ok(())
    }

    /// Inputs and returns share one frame, so their names must be distinct.
    fn visit_alternative(&mut self, alt: &Alternative) -> Result<Rule> {
        self.with_scope(|this| {
            let inputs = this.visit_params(&alt.inputs).map_err(|e| e.at(alt))?;
            let returns = this.visit_params(&alt.returns).map_err(|e| e.at(alt))?;
            let actions = this.visit_stmts(&alt.actions)?;
            Ok(Rule::new(&alt.content, inputs, returns, actions))
        })
    }

    /// Declare each parameter in the current frame.
    fn visit_params(&mut self, params: &[Param]) -> std::result::Result<Vec<Value>, SemanticError> {
        params
            .iter()
            .map(|param| {
                self.declare_value(&param.name, &param.ty, param.value_kind, param.init.as_ref())
            })
            .collect()
    }

    fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.push();
        let result = f(self);
        self.scopes.pop();
        result
    }
}
