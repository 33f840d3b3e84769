//! ANSI styling for registry dumps.

use std::fmt;

/// What a piece of dump output shows, and so how it is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Module, type, operation, function and rule names: blue.
    Name,
    /// Rule alternatives: green.
    Content,
    /// Indices, levels and rule kinds: dim.
    Meta,
}

impl Role {
    fn code(self) -> &'static str {
        match self {
            Self::Name => "\x1b[34m",
            Self::Content => "\x1b[32m",
            Self::Meta => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Whether output is styled. Only the 16 standard colors are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// `text` styled as `role`, or as is when styling is off.
    pub fn paint<T: fmt::Display>(self, role: Role, text: T) -> Painted<T> {
        Painted {
            role: self.enabled.then_some(role),
            text,
        }
    }
}

/// Displayable text with an optional style, see [`Colors::paint`].
#[derive(Debug)]
pub struct Painted<T> {
    role: Option<Role>,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "{}{}{RESET}", role.code(), self.text),
            None => fmt::Display::fmt(&self.text, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painting() {
        assert!(!Colors::default().is_enabled());
        assert_eq!(Colors::OFF.paint(Role::Name, "x").to_string(), "x");
        assert_eq!(
            Colors::new(true).paint(Role::Meta, 3).to_string(),
            "\x1b[2m3\x1b[0m"
        );
    }
}
