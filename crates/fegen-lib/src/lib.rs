//! FeGen: front-end generator for MLIR dialects.
//!
//! A dialect description is handed over as a tagged parse tree ([`fegen_core::syntax`]).
//! The [`Builder`] walks it once, bottom-up, and fills a [`Manager`] with type
//! definitions, operations, functions and grammar rules. The manager then
//! serializes its tables into an ANTLR grammar and TableGen dialect files.
//!
//! # Example
//!
//! ```
//! use fegen_lib::{Builder, EmitConfig, Manager};
//! use fegen_core::SourceFile;
//!
//! let tree = SourceFile::from_json(r#"{ "module": "Toy" }"#).unwrap();
//! let mut manager = Manager::new("Toy");
//! Builder::new(&mut manager).build(&tree).unwrap();
//! let dialect = manager.emit_dialect_definition(&EmitConfig::default()).unwrap();
//! assert!(dialect.contains("def Toy_Dialect : Dialect {"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod dump;
pub mod emit;
pub mod error;
pub mod expr;
pub mod manager;
pub mod render;
pub mod scope;
pub mod stmt;
pub mod types;
pub mod value;

#[cfg(test)]
mod dump_tests;

pub use build::Builder;
pub use emit::{Artifact, EmitConfig};
pub use error::{DefinitionKind, SemanticError};
pub use expr::{Constant, RightValue};
pub use fegen_core::{Colors, Operator, Role, ValueKind};
pub use manager::{Function, Manager, Operation, Rule, RuleKind, RuleNode};
pub use render::{Render, Target};
pub use scope::ScopeStack;
pub use stmt::Stmt;
pub use types::{Type, TypeDef, TypeDefId, TypeLevel, TypeRef};
pub use value::Value;

/// Errors reported by a compilation run.
///
/// Every failure is fatal: the run stops at the first one and produces no output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] fegen_core::SyntaxError),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Semantic failure, with the text of the construct that triggered it.
    #[error("{error}\n  in `{construct}`")]
    Semantic {
        #[source]
        error: SemanticError,
        construct: String,
    },
}

impl Error {
    /// The underlying semantic failure, if any.
    pub fn semantic(&self) -> Option<&SemanticError> {
        match self {
            Self::Semantic { error, .. } => Some(error),
            Self::Syntax(_) | Self::Io { .. } => None,
        }
    }
}

/// Result type for compilation runs.
pub type Result<T> = std::result::Result<T, Error>;
