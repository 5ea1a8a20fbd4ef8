//! Composition error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Composition errors. All of them are terminal for the current walk.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("invalid YAML in file {}: {message}", .file.display())]
    InvalidYaml { file: PathBuf, message: String },
    #[error("invalid prompt file {}: missing required 'prompt' key", .file.display())]
    MissingPromptKey { file: PathBuf },
    #[error(
        "validation failed for {}: operation {index}: operation must specify exactly one of: file, prompt, command, text (none given)",
        .file.display()
    )]
    OperationEmpty { file: PathBuf, index: usize },
    #[error(
        "validation failed for {}: operation {index}: operation must specify exactly one of: file, prompt, command, text (got {})",
        .file.display(),
        .keys.join(", ")
    )]
    OperationMultiple {
        file: PathBuf,
        index: usize,
        keys: Vec<&'static str>,
    },
    #[error("file not found: {}", .file.display())]
    FileNotFound { file: PathBuf },
    #[error("cannot process binary file: {}", .file.display())]
    BinaryFile { file: PathBuf },
    #[error("failed to read file {}: {source}", .file.display())]
    FileRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "circular reference detected in file {} (reference path: {})",
        .file.display(),
        format_stack(.stack)
    )]
    CircularReference { file: PathBuf, stack: Vec<PathBuf> },
    #[error("command execution failed: {command} ({reason})")]
    CommandFailed { command: String, reason: String },
    #[error("compiled output ({current} words) exceeds maximum word limit ({limit} words)")]
    WordLimitExceeded { current: usize, limit: usize },
    #[error("failed to write output file {}: {source}", .file.display())]
    OutputWrite {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("in {} (operation {index}): {source}", .document.display())]
    InOperation {
        document: PathBuf,
        index: usize,
        #[source]
        source: Box<ComposeError>,
    },
}

impl ComposeError {
    /// Wrap `self` with the document and operation index that was in progress.
    pub fn in_operation(self, document: impl Into<PathBuf>, index: usize) -> Self {
        ComposeError::InOperation {
            document: document.into(),
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any [`ComposeError::InOperation`] layers.
    pub fn root_cause(&self) -> &ComposeError {
        let mut current = self;
        while let ComposeError::InOperation { source, .. } = current {
            current = source;
        }
        current
    }
}

fn format_stack(stack: &[PathBuf]) -> String {
    let parts: Vec<String> = stack.iter().map(|p| p.display().to_string()).collect();
    format!("[{}]", parts.join(" -> "))
}
