use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::options::CompileOptions;
use crate::core::{RuntimeContext, WalkContext};
use crate::dsl::load_document;
use crate::error::{ComposeError, ComposeResult};
use crate::graph::validate_reference_graph;
use crate::nodes::{CompiledDocument, Executor};
use crate::render::render_document;

/// Where compiled text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Write the full text in one go. Nothing is written unless compilation
    /// already succeeded.
    pub fn write(&self, text: &str) -> ComposeResult<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|source| ComposeError::OutputWrite {
                        file: PathBuf::from("<stdout>"),
                        source,
                    })
            }
            OutputTarget::File(path) => {
                fs::write(path, text).map_err(|source| ComposeError::OutputWrite {
                    file: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Validates, executes, and renders prompt documents.
#[derive(Clone, Default)]
pub struct PromptCompiler {
    options: CompileOptions,
    runtime: RuntimeContext,
}

impl PromptCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            runtime: RuntimeContext::default(),
        }
    }

    pub fn with_runtime(mut self, runtime: RuntimeContext) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Validate the whole reference graph, then run the execution walk.
    ///
    /// No file is read and no command runs unless validation succeeds.
    pub fn compile_document(&self, root: &Path) -> ComposeResult<CompiledDocument> {
        validate_reference_graph(root)?;

        let document = load_document(root)?;
        let ctx = WalkContext::new(root, self.options.max_words, self.options.delimiter_style);
        Executor::new(ctx, &self.runtime).execute(&document)
    }

    /// Compile `root` to its final text.
    pub fn compile(&self, root: &Path) -> ComposeResult<String> {
        let compiled = self.compile_document(root)?;
        Ok(render_document(&compiled, self.options.delimiter_style))
    }

    /// Compile `root` and write the result to `target`.
    pub fn compile_to(&self, root: &Path, target: &OutputTarget) -> ComposeResult<()> {
        let text = self.compile(root)?;
        target.write(&text)
    }
}

/// Compile the prompt file at `root` with `options` and the real shell.
pub fn compile_file(root: &Path, options: CompileOptions) -> ComposeResult<String> {
    PromptCompiler::new(options).compile(root)
}
