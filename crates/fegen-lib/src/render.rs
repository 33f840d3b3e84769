//! Serialization targets shared by types and expressions.

use std::fmt;

use crate::error::SemanticError;

/// Textual notation a type or expression is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Type/attribute parameter lists in `Types.td`.
    TypeDef,
    /// Operation argument/result lists in `Ops.td`.
    OpDef,
    /// Host-language (C++) statement bodies.
    Cpp,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TypeDef => "type definition",
            Self::OpDef => "operation definition",
            Self::Cpp => "host",
        };
        f.write_str(name)
    }
}

/// Rendering into each [`Target`].
///
/// Implementors return [`SemanticError::UnsupportedRendering`] instead of
/// falling back to some default text.
pub trait Render {
    fn render(&self, target: Target) -> Result<String, SemanticError>;

    fn to_typedef_string(&self) -> Result<String, SemanticError> {
        self.render(Target::TypeDef)
    }

    fn to_opdef_string(&self) -> Result<String, SemanticError> {
        self.render(Target::OpDef)
    }

    fn to_cpp_string(&self) -> Result<String, SemanticError> {
        self.render(Target::Cpp)
    }
}

/// Render each item and join with `", "`.
pub(crate) fn render_joined<'a, T: Render + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    target: Target,
) -> Result<String, SemanticError> {
    let rendered = items
        .into_iter()
        .map(|item| item.render(target))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(", "))
}

/// `text` as a double-quoted literal. Quotes, backslashes and control
/// characters are escaped the way C++ reads them.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\{:03o}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
