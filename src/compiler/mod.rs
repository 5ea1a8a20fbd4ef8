pub mod compiler;
pub mod options;

pub use compiler::{compile_file, OutputTarget, PromptCompiler};
pub use options::{CompileOptions, DEFAULT_MAX_WORDS};
