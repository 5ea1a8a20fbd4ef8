//! Mutable state threaded through one walk of the document graph.
//!
//! The validation walk and the execution walk each build their own
//! [`WalkContext`]; nothing is shared between them.

use std::path::{Component, Path, PathBuf};

use crate::error::{ComposeError, ComposeResult};
use crate::render::DelimiterStyle;

#[derive(Debug, Clone)]
pub struct WalkContext {
    base_dir: PathBuf,
    stack: Vec<PathBuf>,
    max_words: usize,
    word_count: usize,
    delimiter_style: DelimiterStyle,
}

impl WalkContext {
    /// Start a walk rooted at `root_document`; relative references resolve
    /// against the directory containing it.
    pub fn new(root_document: &Path, max_words: usize, delimiter_style: DelimiterStyle) -> Self {
        Self {
            base_dir: parent_dir(root_document),
            stack: Vec::new(),
            max_words,
            word_count: 0,
            delimiter_style,
        }
    }

    /// Context for the validation walk, which never charges words or
    /// renders anything.
    pub fn for_validation(root_document: &Path) -> Self {
        Self::new(root_document, usize::MAX, DelimiterStyle::default())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn delimiter_style(&self) -> DelimiterStyle {
        self.delimiter_style
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Documents currently on the recursion stack, outermost first.
    pub fn stack(&self) -> &[PathBuf] {
        &self.stack
    }

    /// Resolve a reference against the current base directory. Absolute
    /// paths are returned unchanged.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Push a document onto the recursion stack.
    ///
    /// Fails with [`ComposeError::CircularReference`] when the document is
    /// already being processed further up the stack.
    pub fn enter(&mut self, document: &Path) -> ComposeResult<()> {
        let key = stack_key(document);
        if self.stack.contains(&key) {
            let mut stack = self.stack.clone();
            stack.push(key);
            return Err(ComposeError::CircularReference {
                file: document.to_path_buf(),
                stack,
            });
        }
        self.stack.push(key);
        Ok(())
    }

    /// Pop the innermost document once its subtree is finished.
    pub fn leave(&mut self) {
        self.stack.pop();
    }

    /// Switch the base directory to the one containing `document`,
    /// returning the previous value for [`WalkContext::restore_base_dir`].
    pub fn descend_into(&mut self, document: &Path) -> PathBuf {
        std::mem::replace(&mut self.base_dir, parent_dir(document))
    }

    pub fn restore_base_dir(&mut self, previous: PathBuf) {
        self.base_dir = previous;
    }

    /// Add `count` words to the running total, failing as soon as the
    /// ceiling is crossed.
    pub fn add_words(&mut self, count: usize) -> ComposeResult<()> {
        self.word_count += count;
        if self.word_count > self.max_words {
            return Err(ComposeError::WordLimitExceeded {
                current: self.word_count,
                limit: self.max_words,
            });
        }
        Ok(())
    }
}

/// Number of maximal runs of non-whitespace characters.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn parent_dir(document: &Path) -> PathBuf {
    document
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Absolute, lexically normalised form of `path` used as the recursion
/// stack identity.
fn stack_key(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_lexically(&absolute)
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
