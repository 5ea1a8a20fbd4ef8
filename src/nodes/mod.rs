//! Execution of prompt operations.
//!
//! - [`executor`]: the depth-first execution walk.
//! - [`file`]: file reads and the binary-content heuristic.
//! - [`command`]: shell command execution and the exit-status policy.

pub mod command;
pub mod executor;
pub mod file;
pub mod section;

pub use command::{run_command, CommandCapture};
pub use executor::{Executor, TEXT_SOURCE};
pub use file::{is_binary_file, read_text_file};
pub use section::{CompiledDocument, ContentSection};
