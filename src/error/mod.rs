//! Error types for the composition engine.
//!
//! - [`ComposeError`]: every failure raised while parsing, validating,
//!   executing, or writing a compiled prompt.

pub mod compose_error;

pub use compose_error::ComposeError;

/// Convenience alias for engine-level results.
pub type ComposeResult<T> = Result<T, ComposeError>;
