//! JSON deserialization for parse trees.

use super::SourceFile;

/// Error while reading a parse tree.
#[derive(Debug)]
pub enum SyntaxError {
    Json(serde_json::Error),
    /// The tree names no module, so nothing downstream can be named.
    MissingModule,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::MissingModule => write!(f, "parse tree has an empty module name"),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::MissingModule => None,
        }
    }
}

impl SourceFile {
    /// Parse a tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SyntaxError> {
        let file: SourceFile = serde_json::from_str(json).map_err(SyntaxError::Json)?;
        if file.module.trim().is_empty() {
            return Err(SyntaxError::MissingModule);
        }
        Ok(file)
    }
}
