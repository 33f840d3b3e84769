//! Registered definitions other than types.

use crate::stmt::Stmt;
use crate::types::TypeRef;
use crate::value::Value;

/// A host-language function.
#[derive(Clone, Debug)]
pub struct Function {
    name: String,
    params: Vec<Value>,
    return_type: Option<TypeRef>,
    body: Vec<Stmt>,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        params: Vec<Value>,
        return_type: Option<TypeRef>,
        body: Vec<Stmt>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// `None` for a function without a result.
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

/// A dialect operation.
#[derive(Clone, Debug)]
pub struct Operation {
    dialect: String,
    name: String,
    arguments: Vec<Value>,
    results: Vec<Value>,
    body: Vec<Stmt>,
}

impl Operation {
    pub fn new(
        dialect: impl Into<String>,
        name: impl Into<String>,
        arguments: Vec<Value>,
        results: Vec<Value>,
        body: Vec<Stmt>,
    ) -> Self {
        Self {
            dialect: dialect.into(),
            name: name.into(),
            arguments,
            results,
            body,
        }
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn results(&self) -> &[Value] {
        &self.results
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    Parser,
    Lexer,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parser => "parser",
            Self::Lexer => "lexer",
        }
    }
}

/// A grammar rule: its alternatives in declaration order.
#[derive(Clone, Debug)]
pub struct RuleNode {
    name: String,
    kind: RuleKind,
    rules: Vec<Rule>,
}

impl RuleNode {
    pub fn new(name: impl Into<String>, kind: RuleKind, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            kind,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// One alternative of a grammar rule.
#[derive(Clone, Debug)]
pub struct Rule {
    /// Production text, copied into the grammar as is.
    content: String,
    inputs: Vec<Value>,
    returns: Vec<Value>,
    actions: Vec<Stmt>,
}

impl Rule {
    pub fn new(
        content: impl Into<String>,
        inputs: Vec<Value>,
        returns: Vec<Value>,
        actions: Vec<Stmt>,
    ) -> Self {
        Self {
            content: content.into(),
            inputs,
            returns,
            actions,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn inputs(&self) -> &[Value] {
        &self.inputs
    }

    pub fn returns(&self) -> &[Value] {
        &self.returns
    }

    pub fn actions(&self) -> &[Stmt] {
        &self.actions
    }
}
