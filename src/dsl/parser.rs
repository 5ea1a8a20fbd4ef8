//! Prompt file parser: converts raw YAML text into a [`PromptDocument`].
//!
//! Parsing is purely structural. Paths are not resolved and nothing is
//! executed here.

use std::fs;
use std::path::Path;

use super::schema::{Operation, PromptDocument, PromptFileSchema};
use crate::error::{ComposeError, ComposeResult};

/// Parse prompt file content. `file` is used for error context and recorded
/// as the document path.
pub fn parse_document(content: &str, file: &Path) -> ComposeResult<PromptDocument> {
    let schema: PromptFileSchema =
        serde_saphyr::from_str(content).map_err(|e| ComposeError::InvalidYaml {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    let entries = schema.prompt.ok_or_else(|| ComposeError::MissingPromptKey {
        file: file.to_path_buf(),
    })?;

    let operations = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Operation::from_schema(entry, file, index))
        .collect::<ComposeResult<Vec<_>>>()?;

    Ok(PromptDocument::new(file, operations))
}

/// Read and parse the prompt file at `path`.
///
/// An unreadable file is reported as [`ComposeError::FileNotFound`].
pub fn load_document(path: &Path) -> ComposeResult<PromptDocument> {
    let content = fs::read_to_string(path).map_err(|_| ComposeError::FileNotFound {
        file: path.to_path_buf(),
    })?;
    parse_document(&content, path)
}
