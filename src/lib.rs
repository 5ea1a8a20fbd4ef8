//! # pcp: Prompt Composition Processor
//!
//! `pcp` compiles a declarative YAML prompt document into one deterministic
//! text stream for downstream consumers that need complete, auditable
//! context. A document is an ordered list of operations:
//!
//! - **file**: include a text file, path relative to the declaring document.
//! - **prompt**: recursively compose another prompt document in place.
//! - **command**: run a shell command and include its combined output.
//! - **text**: include literal text verbatim.
//!
//! Compilation runs in two independent walks. The validation walk proves the
//! `prompt` reference graph is acyclic and every document is well-formed
//! before anything is read or executed. The execution walk then produces one
//! [`ContentSection`] per top-level operation in declaration order while
//! enforcing the word budget after every content production. Finally the
//! sections are rendered with the selected [`DelimiterStyle`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pcp::{CompileOptions, DelimiterStyle, PromptCompiler};
//!
//! let options = CompileOptions::default().with_delimiter_style(DelimiterStyle::Minimal);
//! let text = PromptCompiler::new(options)
//!     .compile(Path::new("prompt.yml"))
//!     .unwrap();
//! print!("{text}");
//! ```

pub mod cli;
pub mod compiler;
pub mod core;
pub mod dsl;
pub mod error;
pub mod graph;
pub mod nodes;
pub mod render;

pub use crate::compiler::{
    compile_file, CompileOptions, OutputTarget, PromptCompiler, DEFAULT_MAX_WORDS,
};
pub use crate::core::{
    CommandOutput, CommandRunner, RuntimeContext, ShellCommandRunner, WalkContext,
};
pub use crate::dsl::{load_document, parse_document, Operation, OperationKind, PromptDocument};
pub use crate::error::{ComposeError, ComposeResult};
pub use crate::graph::{validate_reference_graph, ValidationSummary};
pub use crate::nodes::{CompiledDocument, ContentSection, Executor};
pub use crate::render::{render_document, DelimiterStyle};
