#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the FeGen crates.
//!
//! - [`syntax`]: the tagged parse tree produced by the front-end parser
//! - [`Colors`]: ANSI styling for registry dumps

mod colors;
pub mod syntax;

pub use colors::{Colors, Painted, Role};
pub use syntax::{Operator, SourceFile, SyntaxError, ValueKind};
