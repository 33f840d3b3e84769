//! Tagged parse tree for FeGen dialect descriptions.
//!
//! The tree is produced by the external front-end parser and handed over as JSON.
//! Every enum is internally tagged with a `kind` field (snake_case), one variant per
//! grammar construct. Nothing here resolves names or types; that is the job of the
//! semantic builder in `fegen-lib`.

mod display;
mod json;

#[cfg(test)]
mod display_tests;

pub use json::SyntaxError;

use serde::Deserialize;

/// A whole input file: one dialect module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceFile {
    /// Module name, used for the grammar name and the dialect name.
    pub module: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Top-level construct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    TypeDef(TypeDefDecl),
    Function(FunctionDecl),
    Operation(OperationDecl),
    Rule(RuleDecl),
}

/// `typedef Name(params)`: a user type constructor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeDefDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub return_type: Option<TypeExpr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationDecl {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Param>,
    #[serde(default)]
    pub results: Vec<Param>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// Grammar rule with its alternative productions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleDecl {
    pub name: String,
    /// Lexer rules are emitted verbatim like parser rules but carry no actions.
    #[serde(default)]
    pub lexer: bool,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alternative {
    /// Grammar text of the production, e.g. `expr '+' expr`.
    pub content: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub returns: Vec<Param>,
    #[serde(default)]
    pub actions: Vec<Stmt>,
}

/// A typed declaration: template parameter, function parameter, operation
/// argument/result, or rule input/return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    /// Explicit `attribute`/`operand` marker. Absent means host value.
    #[serde(default)]
    pub value_kind: Option<ValueKind>,
    #[serde(default)]
    pub init: Option<Expr>,
}

/// Type position: a bare name or a template applied to arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    Name {
        name: String,
    },
    Instance {
        template: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    VarDecl {
        name: String,
        ty: TypeExpr,
        #[serde(default)]
        value_kind: Option<ValueKind>,
        #[serde(default)]
        init: Option<Expr>,
    },
    Assign {
        name: String,
        value: Expr,
    },
    /// Function or operation call in statement position.
    Expr {
        expr: Expr,
    },
    If {
        cond: Expr,
        then: Vec<Stmt>,
        #[serde(default, rename = "else")]
        otherwise: Option<Vec<Stmt>>,
    },
    For {
        var: String,
        ty: TypeExpr,
        iterable: Expr,
        #[serde(default)]
        body: Vec<Stmt>,
    },
    Return {
        #[serde(default)]
        value: Option<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Int {
        value: i64,
        #[serde(default)]
        width: Option<u32>,
    },
    Float {
        value: f64,
        #[serde(default)]
        width: Option<u32>,
    },
    Bool {
        value: bool,
    },
    String {
        value: String,
    },
    List {
        #[serde(default)]
        elements: Vec<Expr>,
    },
    Type {
        ty: TypeExpr,
    },
    Ident {
        name: String,
    },
    Unary {
        op: Operator,
        operand: Box<Expr>,
    },
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
}

/// Downstream category of a typed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Host-language value, used in generated statement bodies.
    #[default]
    Cpp,
    /// Declarative attribute of an operation or type.
    Attribute,
    /// Dialect operand.
    Operand,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Attribute => "attribute",
            Self::Operand => "operand",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Power,
    Neg,
    Not,
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    /// Source-level spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Power => "**",
            Self::Not => "!",
            Self::And => "&&",
            Self::Or => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Self::Neg | Self::Not)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Power | Self::Neg
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }

    /// Ordering and equality comparisons.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessEqual
                | Self::Greater
                | Self::GreaterEqual
        )
    }
}
