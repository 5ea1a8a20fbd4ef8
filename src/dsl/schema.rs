use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ComposeError;

// ================================
// Wire schema
// ================================

/// Top-level layout of a prompt file: a single `prompt` key holding the
/// ordered operation list.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PromptFileSchema {
    #[serde(default)]
    pub prompt: Option<Vec<OperationSchema>>,
}

/// One entry of the `prompt` sequence as it appears on the wire.
///
/// Exactly one field must be set; [`Operation::from_schema`] enforces that.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OperationSchema {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ================================
// Document model
// ================================

/// Discriminant of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    File,
    Prompt,
    Command,
    Text,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::File => "file",
            OperationKind::Prompt => "prompt",
            OperationKind::Command => "command",
            OperationKind::Text => "text",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Include a file, path relative to the declaring document.
    File(String),
    /// Recursively compose another prompt document.
    Prompt(String),
    /// Run a shell command and include its combined output.
    Command(String),
    /// Include literal text verbatim.
    Text(String),
}

impl Operation {
    /// Build an operation from its wire entry.
    ///
    /// `file` and `index` only feed the error context.
    pub fn from_schema(
        schema: OperationSchema,
        file: &Path,
        index: usize,
    ) -> Result<Self, ComposeError> {
        let OperationSchema {
            file: file_ref,
            prompt,
            command,
            text,
        } = schema;

        let mut present = Vec::new();
        let candidates = [
            (OperationKind::File, file_ref),
            (OperationKind::Prompt, prompt),
            (OperationKind::Command, command),
            (OperationKind::Text, text),
        ];
        let mut chosen = None;
        for (kind, value) in candidates {
            if let Some(value) = value {
                present.push(kind.as_str());
                chosen = Some((kind, value));
            }
        }

        match (present.len(), chosen) {
            (1, Some((kind, value))) => Ok(Operation::new(kind, value)),
            (0, _) => Err(ComposeError::OperationEmpty {
                file: file.to_path_buf(),
                index,
            }),
            _ => Err(ComposeError::OperationMultiple {
                file: file.to_path_buf(),
                index,
                keys: present,
            }),
        }
    }

    pub fn new(kind: OperationKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            OperationKind::File => Operation::File(value),
            OperationKind::Prompt => Operation::Prompt(value),
            OperationKind::Command => Operation::Command(value),
            OperationKind::Text => Operation::Text(value),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::File(_) => OperationKind::File,
            Operation::Prompt(_) => OperationKind::Prompt,
            Operation::Command(_) => OperationKind::Command,
            Operation::Text(_) => OperationKind::Text,
        }
    }

    /// The raw value: a path, a shell string, or literal text.
    pub fn value(&self) -> &str {
        match self {
            Operation::File(v)
            | Operation::Prompt(v)
            | Operation::Command(v)
            | Operation::Text(v) => v,
        }
    }
}

/// A parsed prompt document. Operation order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    /// Path the document was loaded from, as given by the caller.
    pub path: PathBuf,
    pub operations: Vec<Operation>,
}

impl PromptDocument {
    pub fn new(path: impl Into<PathBuf>, operations: Vec<Operation>) -> Self {
        Self {
            path: path.into(),
            operations,
        }
    }

    /// Referenced prompt paths with their operation index, in declaration
    /// order.
    pub fn prompt_refs(&self) -> impl Iterator<Item = (usize, &str)> {
        self.operations
            .iter()
            .enumerate()
            .filter_map(|(index, op)| match op {
                Operation::Prompt(path) => Some((index, path.as_str())),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
