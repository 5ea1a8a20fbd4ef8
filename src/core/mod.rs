//! Per-walk state and runtime collaborators.

pub mod runtime_context;
pub mod walk_context;

pub use runtime_context::{CommandOutput, CommandRunner, RuntimeContext, ShellCommandRunner};
pub use walk_context::{count_words, normalize_lexically, WalkContext};
