//! Deterministic serialization of compiled sections.

pub mod delimiter;
pub mod renderer;

pub use delimiter::{DelimiterStyle, UnknownDelimiterStyle, ALL_STYLES};
pub use renderer::{render_document, render_nested, render_sections};
