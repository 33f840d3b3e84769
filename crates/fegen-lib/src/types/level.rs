//! The four-tier kind hierarchy.

use std::fmt;

/// Level of a type in the kind hierarchy.
///
/// Ordered: an element slot that requires "at least a template" accepts
/// `Template` and `Instance`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum TypeLevel {
    /// Untyped hole.
    PlaceHolder = 0,
    /// The kind of a template constructor (`TypeTemplate`).
    MetaTemplate = 1,
    /// Uninstantiated constructor, or the reified notion "a Type".
    Template = 2,
    /// Concrete instance type.
    Instance = 3,
}

impl TypeLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::PlaceHolder),
            1 => Some(Self::MetaTemplate),
            2 => Some(Self::Template),
            3 => Some(Self::Instance),
            _ => None,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a type of this level may be used as a collection element.
    pub fn is_element(self) -> bool {
        self >= Self::Template
    }
}

impl fmt::Display for TypeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
