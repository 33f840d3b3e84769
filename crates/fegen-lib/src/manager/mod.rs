//! Definition registry.
//!
//! One [`Manager`] per compilation run. Built-in type constructors are installed
//! on creation. Every table keeps insertion order, which is document order, so
//! emitted files list definitions as they were declared.

mod records;

#[cfg(test)]
mod manager_tests;

pub use records::{Function, Operation, Rule, RuleKind, RuleNode};

use indexmap::IndexMap;

use crate::error::SemanticError;
use crate::expr::RightValue;
use crate::types::{Type, TypeDef, TypeDefId, builtins};

#[derive(Debug)]
pub struct Manager {
    module_name: String,
    /// Indexed by [`TypeDefId`].
    type_defs: Vec<TypeDef>,
    type_def_ids: IndexMap<String, TypeDefId>,
    operations: IndexMap<String, Operation>,
    functions: IndexMap<String, Function>,
    rule_nodes: IndexMap<String, RuleNode>,
}

impl Manager {
    pub fn new(module_name: impl Into<String>) -> Self {
        let mut manager = Self {
            module_name: module_name.into(),
            type_defs: Vec::new(),
            type_def_ids: IndexMap::new(),
            operations: IndexMap::new(),
            functions: IndexMap::new(),
            rule_nodes: IndexMap::new(),
        };
        for def in builtins::definitions() {
            let id = def.id();
            manager.type_def_ids.insert(def.name().to_owned(), id);
            manager.type_defs.push(def);
            debug_assert_eq!(manager.type_defs.len(), id.index() + 1);
        }
        manager
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn set_module_name(&mut self, name: impl Into<String>) {
        self.module_name = name.into();
    }

    /// Register a user type definition and assign its id.
    ///
    /// Returns `false`, leaving the registered definition untouched, if the name
    /// is taken. Built-in names are always taken.
    pub fn add_type_def(&mut self, mut def: TypeDef) -> bool {
        if self.type_def_ids.contains_key(def.name()) {
            return false;
        }
        let id = TypeDefId::from_index(self.type_defs.len());
        def.assign_id(id);
        log::debug!("register type `{}` as #{}", def.name(), id.index());
        self.type_def_ids.insert(def.name().to_owned(), id);
        self.type_defs.push(def);
        true
    }

    pub fn get_type_def(&self, name: &str) -> Option<&TypeDef> {
        let id = self.type_def_ids.get(name)?;
        Some(self.type_def_by_id(*id))
    }

    /// Like [`get_type_def`](Self::get_type_def), for names that must exist.
    pub fn type_def(&self, name: &str) -> Result<&TypeDef, SemanticError> {
        self.get_type_def(name)
            .ok_or_else(|| SemanticError::UnknownIdentifier {
                name: name.to_owned(),
            })
    }

    /// # Panics
    ///
    /// If the id was not handed out by this registry.
    pub fn type_def_by_id(&self, id: TypeDefId) -> &TypeDef {
        match self.type_defs.get(id.index()) {
            Some(def) => def,
            None => panic!("type definition #{} is not registered", id.index()),
        }
    }

    /// All type definitions, built-ins first, in registration order.
    pub fn type_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.type_defs.iter()
    }

    /// User type definitions in registration order.
    pub fn custom_type_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.type_defs.iter().filter(|def| def.is_custom())
    }

    /// Type named without arguments.
    ///
    /// Parameterless definitions give their only instance, others the
    /// uninstantiated template.
    pub fn resolve_type_name(&self, name: &str) -> Result<Type, SemanticError> {
        let def = self.type_def(name)?;
        if def.params().is_empty() {
            def.instantiate(Vec::new())
        } else {
            Ok(Type::template(def))
        }
    }

    /// Instantiate the definition called `name`.
    pub fn instantiate(&self, name: &str, args: Vec<RightValue>) -> Result<Type, SemanticError> {
        self.type_def(name)?.instantiate(args)
    }

    /// Returns `false` if an operation of that name is registered already.
    pub fn add_operation(&mut self, operation: Operation) -> bool {
        if self.operations.contains_key(operation.name()) {
            return false;
        }
        log::debug!("register operation `{}`", operation.name());
        self.operations
            .insert(operation.name().to_owned(), operation);
        true
    }

    pub fn get_operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    /// Returns `false` and reports the clash if a function of that name is
    /// registered already.
    pub fn add_function(&mut self, function: Function) -> bool {
        if self.functions.contains_key(function.name()) {
            log::error!("function `{}` is redefined", function.name());
            return false;
        }
        log::debug!("register function `{}`", function.name());
        self.functions.insert(function.name().to_owned(), function);
        true
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    /// Returns `false` if a rule of that name is registered already.
    pub fn add_rule_node(&mut self, node: RuleNode) -> bool {
        if self.rule_nodes.contains_key(node.name()) {
            return false;
        }
        log::debug!(
            "register {} rule `{}` ({} alternatives)",
            node.kind().as_str(),
            node.name(),
            node.rules().len()
        );
        self.rule_nodes.insert(node.name().to_owned(), node);
        true
    }

    pub fn get_rule_node(&self, name: &str) -> Option<&RuleNode> {
        self.rule_nodes.get(name)
    }

    pub fn rule_nodes(&self) -> impl Iterator<Item = &RuleNode> {
        self.rule_nodes.values()
    }
}
