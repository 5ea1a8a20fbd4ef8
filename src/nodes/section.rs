use serde::Serialize;

use crate::dsl::OperationKind;

/// Resolved output of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSection {
    /// Provenance label: the given path, the command string, or `"text"`.
    pub source: String,
    pub content: String,
    pub kind: OperationKind,
}

impl ContentSection {
    pub fn new(source: impl Into<String>, content: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
            kind,
        }
    }
}

/// Top-level sections of a root document in declaration order, ready for
/// rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompiledDocument {
    pub sections: Vec<ContentSection>,
    /// Non-fatal diagnostics raised during execution.
    pub warnings: Vec<String>,
    /// Running word total at the end of the walk.
    pub word_count: usize,
}
