//! Configuration for file emission.

/// Text every emitter falls back to for summaries and descriptions.
pub const DEFAULT_SUMMARY: &str = "This is generated by buddy fegen.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// One level of indentation
    pub indent: String,
    /// Summary and description of generated definitions
    pub summary: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_owned(),
            summary: DEFAULT_SUMMARY.to_owned(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
