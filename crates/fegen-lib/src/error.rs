//! Semantic error taxonomy.

use std::fmt;

use crate::Error;
use crate::render::Target;
use crate::types::TypeLevel;

/// What kind of named entity a duplicate definition refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionKind {
    Type,
    Operation,
    Function,
    Rule,
    /// Parameter, local variable, rule input or return.
    Value,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::Operation => "operation",
            Self::Function => "function",
            Self::Rule => "rule",
            Self::Value => "value",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("{kind} `{name}` is already defined")]
    DuplicateDefinition { kind: DefinitionKind, name: String },

    #[error("unknown identifier `{name}`")]
    UnknownIdentifier { name: String },

    #[error("`{name}` expects {expected} parameter(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    #[error("`{constructor}` requires an element of level {required}, found level {found}")]
    LevelInvariantViolation {
        constructor: String,
        found: TypeLevel,
        required: &'static str,
    },

    #[error("`{subject}` has no {target} rendering")]
    UnsupportedRendering { subject: String, target: Target },
}

impl SemanticError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn duplicate(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind,
            name: name.into(),
        }
    }

    /// Attach the text of the offending construct.
    pub fn at(self, construct: &impl fmt::Display) -> Error {
        Error::Semantic {
            error: self,
            construct: construct.to_string(),
        }
    }
}
