use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Section header template used when rendering compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStyle {
    /// `<!-- pcp-source: S -->`
    #[default]
    Xml,
    /// `=== PCP SOURCE: S ===`
    Minimal,
    /// Boxed `BEGIN: S` banner.
    Full,
    /// No label, separation only.
    None,
}

pub const ALL_STYLES: [DelimiterStyle; 4] = [
    DelimiterStyle::Xml,
    DelimiterStyle::Minimal,
    DelimiterStyle::Full,
    DelimiterStyle::None,
];

const FULL_RULE: &str = "----------------------------------";

impl DelimiterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterStyle::Xml => "xml",
            DelimiterStyle::Minimal => "minimal",
            DelimiterStyle::Full => "full",
            DelimiterStyle::None => "none",
        }
    }

    /// Whether top-level sections get a labelled header.
    pub fn has_header(&self) -> bool {
        !matches!(self, DelimiterStyle::None)
    }

    /// Header written before a section whose provenance label is `source`.
    pub fn header(&self, source: &str) -> String {
        match self {
            DelimiterStyle::Xml => format!("\n<!-- pcp-source: {source} -->\n"),
            DelimiterStyle::Minimal => format!("\n=== PCP SOURCE: {source} ===\n"),
            DelimiterStyle::Full => format!("\n{FULL_RULE}\nBEGIN: {source}\n{FULL_RULE}\n"),
            DelimiterStyle::None => "\n".to_string(),
        }
    }
}

impl fmt::Display for DelimiterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDelimiterStyle(pub String);

impl fmt::Display for UnknownDelimiterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid delimiter style '{}'. Must be one of: xml, minimal, none, full",
            self.0
        )
    }
}

impl std::error::Error for UnknownDelimiterStyle {}

impl FromStr for DelimiterStyle {
    type Err = UnknownDelimiterStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STYLES
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownDelimiterStyle(s.to_string()))
    }
}
