//! The execution walk.
//!
//! Operations run strictly in declaration order, depth first. Nested prompt
//! documents are expanded in place and every atomic content production is
//! charged against the word budget before the walk moves on.

use std::path::Path;

use super::command::run_command;
use super::file::read_text_file;
use super::section::{CompiledDocument, ContentSection};
use crate::core::{count_words, RuntimeContext, WalkContext};
use crate::dsl::{load_document, Operation, OperationKind, PromptDocument};
use crate::error::ComposeResult;
use crate::render::render_nested;

/// Source label used for literal text sections.
pub const TEXT_SOURCE: &str = "text";

pub struct Executor<'a> {
    ctx: WalkContext,
    runtime: &'a RuntimeContext,
    warnings: Vec<String>,
}

impl<'a> Executor<'a> {
    /// `ctx` must be fresh; it is never shared with the validation walk.
    pub fn new(ctx: WalkContext, runtime: &'a RuntimeContext) -> Self {
        Self {
            ctx,
            runtime,
            warnings: Vec::new(),
        }
    }

    /// Execute a root document, producing one section per top-level
    /// operation.
    pub fn execute(mut self, document: &PromptDocument) -> ComposeResult<CompiledDocument> {
        self.ctx.enter(&document.path)?;
        let sections = self.execute_operations(document)?;
        self.ctx.leave();

        tracing::info!(
            document = %document.path.display(),
            sections = sections.len(),
            words = self.ctx.word_count(),
            "prompt executed"
        );

        Ok(CompiledDocument {
            sections,
            warnings: self.warnings,
            word_count: self.ctx.word_count(),
        })
    }

    fn execute_operations(
        &mut self,
        document: &PromptDocument,
    ) -> ComposeResult<Vec<ContentSection>> {
        let mut sections = Vec::with_capacity(document.len());
        for (index, operation) in document.operations.iter().enumerate() {
            tracing::debug!(
                document = %document.path.display(),
                index,
                kind = %operation.kind(),
                value = operation.value(),
                "executing operation"
            );
            let section = self
                .execute_operation(operation)
                .map_err(|e| e.in_operation(&document.path, index))?;
            sections.push(section);
        }
        Ok(sections)
    }

    fn execute_operation(&mut self, operation: &Operation) -> ComposeResult<ContentSection> {
        match operation {
            Operation::File(path) => self.execute_file(path),
            Operation::Prompt(path) => self.execute_prompt(path),
            Operation::Command(command) => self.execute_command(command),
            Operation::Text(text) => self.execute_text(text),
        }
    }

    fn execute_file(&mut self, given: &str) -> ComposeResult<ContentSection> {
        let resolved = self.ctx.resolve_path(given);
        let content = read_text_file(&resolved)?;
        self.ctx.add_words(count_words(&content))?;
        Ok(ContentSection::new(given, content, OperationKind::File))
    }

    fn execute_prompt(&mut self, given: &str) -> ComposeResult<ContentSection> {
        let resolved = self.ctx.resolve_path(given);
        self.ctx.enter(&resolved)?;
        let children = self.execute_nested(&resolved);
        self.ctx.leave();
        let children = children?;

        let content = render_nested(given, &children, self.ctx.delimiter_style());
        self.ctx.add_words(count_words(&content))?;
        Ok(ContentSection::new(given, content, OperationKind::Prompt))
    }

    fn execute_nested(&mut self, resolved: &Path) -> ComposeResult<Vec<ContentSection>> {
        let document = load_document(resolved)?;
        let previous = self.ctx.descend_into(resolved);
        let children = self.execute_operations(&document);
        self.ctx.restore_base_dir(previous);
        children
    }

    fn execute_command(&mut self, command: &str) -> ComposeResult<ContentSection> {
        let capture = run_command(self.runtime.command_runner.as_ref(), command)?;
        if let Some(warning) = capture.warning {
            self.warnings.push(warning);
        }
        self.ctx.add_words(count_words(&capture.output))?;
        Ok(ContentSection::new(command, capture.output, OperationKind::Command))
    }

    fn execute_text(&mut self, text: &str) -> ComposeResult<ContentSection> {
        self.ctx.add_words(count_words(text))?;
        Ok(ContentSection::new(TEXT_SOURCE, text, OperationKind::Text))
    }
}
