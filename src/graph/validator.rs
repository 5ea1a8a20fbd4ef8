//! The validation walk.
//!
//! Proves that every document reachable from the root through `prompt`
//! references parses, has well-formed operations, and that the reference
//! graph has no cycle. Nothing is read or executed beyond the prompt
//! documents themselves.

use std::path::Path;

use crate::core::WalkContext;
use crate::dsl::load_document;
use crate::error::ComposeResult;

/// What the validation walk saw. Documents included from several branches
/// are counted once per inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub documents: usize,
    pub operations: usize,
    pub max_depth: usize,
}

/// Validate the document graph rooted at `root`.
pub fn validate_reference_graph(root: &Path) -> ComposeResult<ValidationSummary> {
    let mut ctx = WalkContext::for_validation(root);
    let mut summary = ValidationSummary::default();
    validate_document(root, &mut ctx, &mut summary)?;
    tracing::debug!(
        root = %root.display(),
        documents = summary.documents,
        operations = summary.operations,
        max_depth = summary.max_depth,
        "prompt graph validated"
    );
    Ok(summary)
}

fn validate_document(
    path: &Path,
    ctx: &mut WalkContext,
    summary: &mut ValidationSummary,
) -> ComposeResult<()> {
    ctx.enter(path)?;
    summary.max_depth = summary.max_depth.max(ctx.stack().len());
    let result = validate_references(path, ctx, summary);
    ctx.leave();
    result
}

fn validate_references(
    path: &Path,
    ctx: &mut WalkContext,
    summary: &mut ValidationSummary,
) -> ComposeResult<()> {
    let document = load_document(path)?;
    summary.documents += 1;
    summary.operations += document.len();

    let previous = ctx.descend_into(path);
    let result = document.prompt_refs().try_for_each(|(index, given)| {
        let nested = ctx.resolve_path(given);
        validate_document(&nested, ctx, summary)
            .map_err(|e| e.in_operation(path, index))
    });
    ctx.restore_base_dir(previous);
    result
}
