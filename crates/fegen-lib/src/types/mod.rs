//! Type system: built-in and user type constructors, the level hierarchy,
//! template instantiation and the three target renderings.
//!
//! Types are immutable once built and shared through [`TypeRef`]. The only
//! mutation is value-kind retagging, done on an owned [`Type`] before it is
//! wrapped.

pub mod builtins;
mod def;
mod level;
mod render;
mod ty;

#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod ty_tests;

pub use builtins::TypeDefId;
pub use def::TypeDef;
pub use level::TypeLevel;
pub use ty::{Shape, Type, TypeRef};
