use super::delimiter::DelimiterStyle;
use crate::dsl::OperationKind;
use crate::nodes::{CompiledDocument, ContentSection};

/// Serialize top-level sections into the final text stream.
///
/// The output never starts with the first header's leading blank line and
/// always ends with exactly one `\n`.
pub fn render_document(document: &CompiledDocument, style: DelimiterStyle) -> String {
    render_sections(&document.sections, style)
}

pub fn render_sections(sections: &[ContentSection], style: DelimiterStyle) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if style.has_header() {
            let header = style.header(&section.source);
            if i == 0 {
                out.push_str(header.trim_start_matches('\n'));
            } else {
                out.push_str(&header);
            }
        }
        if !style.has_header() && out.is_empty() {
            push_leading_unlabelled(&mut out, section);
        } else {
            push_line_terminated(&mut out, &section.content);
        }
    }

    let trimmed_len = out.trim_end_matches('\n').len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

/// Concatenate the sections of a nested prompt into one block of text.
///
/// Each child gets a header whose label is `"<prompt>-><child source>"`,
/// so provenance survives arbitrary nesting depth. The `none` style still
/// separates children with a blank line.
pub fn render_nested(prompt: &str, children: &[ContentSection], style: DelimiterStyle) -> String {
    let mut out = String::new();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&style.header(&format!("{prompt}->{}", child.source)));
        out.push_str(&child.content);
    }
    out
}

/// Unlabelled output must not open with a blank line: drop the separator a
/// nested prompt starts with, and write nothing for empty content.
fn push_leading_unlabelled(out: &mut String, section: &ContentSection) {
    let mut content = section.content.as_str();
    if section.kind == OperationKind::Prompt {
        content = content.strip_prefix('\n').unwrap_or(content);
    }
    if !content.is_empty() {
        push_line_terminated(out, content);
    }
}

/// Append `content` so that it ends with exactly one `\n`.
fn push_line_terminated(out: &mut String, content: &str) {
    out.push_str(content.trim_end_matches('\n'));
    out.push('\n');
}
