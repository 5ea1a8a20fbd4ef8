use serde::{Deserialize, Serialize};

use crate::render::DelimiterStyle;

/// Default word budget.
pub const DEFAULT_MAX_WORDS: usize = 128_000;

/// Settings for one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default)]
    pub delimiter_style: DelimiterStyle,
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            max_words: DEFAULT_MAX_WORDS,
            delimiter_style: DelimiterStyle::default(),
        }
    }
}

impl CompileOptions {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_delimiter_style(mut self, style: DelimiterStyle) -> Self {
        self.delimiter_style = style;
        self
    }
}
