//! The block comment toggle command.
//!
//! # Overview
//!
//! Toggling runs in two phases with the host in between:
//!
//! 1. [`BlockCommentCommand::get_edit_operations`] reads the selection's lines, classifies the
//!    selection and submits the resulting edits to an [`EditOperationBuilder`]. It returns the
//!    [`EditPlan`] that was chosen.
//! 2. The host applies the edits and reports where each one ended up
//!    ([`InverseEditOperations`]).
//! 3. [`BlockCommentCommand::compute_cursor_state`] turns the plan and the inverse ranges into
//!    the new selection.
//!
//! The plan carries everything the second phase needs, so a command can be reused.
//!
//! # Example
//!
//! ```rust
//! use comment_toggle::{BlockCommentCommand, EditBatch, Position, Selection, TextBuffer};
//! use comment_toggle_lang::LanguageRegistry;
//!
//! let mut buffer = TextBuffer::new("let x = 1;", "rust");
//! let languages = LanguageRegistry::with_defaults();
//! let command = BlockCommentCommand::new(Selection::new(Position::new(1, 9), Position::new(1, 10)));
//!
//! let mut batch = EditBatch::new();
//! let plan = command.get_edit_operations(&buffer, &languages, &mut batch);
//! let applied = buffer.apply(batch).unwrap();
//! let selection = command.compute_cursor_state(&plan, &applied).unwrap();
//!
//! assert_eq!(buffer.text(), "let x = /* 1 */;");
//! assert_eq!(selection, Some(Selection::new(Position::new(1, 12), Position::new(1, 13))));
//! ```

use crate::error::ToggleError;
use crate::locator::{Classification, locate};
use crate::plan::{
    EditPlan, PlanOps, add_block_comment_operations, remove_block_comment_operations,
};
use crate::position::{Position, Range, Selection};
use comment_toggle_lang::CommentConfigProvider;

/// Read access to the document being edited.
pub trait TextModel {
    /// Contents of the 1-based `line`, without its line terminator.
    fn line_content(&self, line: usize) -> String;

    /// Hint that language information for `line` will be needed. Implementations should only do
    /// work that is cheap; the default does nothing.
    fn tokenize_if_cheap(&self, _line: usize) {}

    /// Language id of the text at `position`.
    fn language_id_at(&self, position: Position) -> String;
}

/// Sink for the edits produced by a command.
pub trait EditOperationBuilder {
    /// Queue a replacement whose final range must be reported back after application.
    fn add_tracked_edit_operation(&mut self, range: Range, text: String);
}

/// Where tracked edits ended up once the whole batch was applied.
pub trait InverseEditOperations {
    /// Ranges covering each tracked edit's new text, in submission order.
    fn inverse_ranges(&self) -> &[Range];
}

impl InverseEditOperations for [Range] {
    fn inverse_ranges(&self) -> &[Range] {
        self
    }
}

impl InverseEditOperations for Vec<Range> {
    fn inverse_ranges(&self) -> &[Range] {
        self
    }
}

/// Toggles a block comment around one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCommentCommand {
    selection: Selection,
}

impl BlockCommentCommand {
    /// Create a command acting on `selection`.
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    /// The selection this command acts on.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Plan the toggle and submit its edits to `builder`, in order.
    ///
    /// Returns [`EditPlan::NoOp`] (and submits nothing) when the language at the selection start
    /// has no complete block comment configuration.
    pub fn get_edit_operations<M, L, B>(
        &self,
        model: &M,
        languages: &L,
        builder: &mut B,
    ) -> EditPlan
    where
        M: TextModel + ?Sized,
        L: CommentConfigProvider + ?Sized,
        B: EditOperationBuilder + ?Sized,
    {
        let range = self.selection.range();

        model.tokenize_if_cheap(range.start.line);
        let language = model.language_id_at(range.start);
        let Some((start_token, end_token)) = languages
            .comment_config(&language)
            .and_then(|config| config.block_tokens())
        else {
            tracing::debug!(%language, "no block comment tokens configured");
            return EditPlan::NoOp;
        };

        let start_line = model.line_content(range.start.line);
        let end_line = if range.end.line == range.start.line {
            start_line.clone()
        } else {
            model.line_content(range.end.line)
        };

        let plan = match locate(&start_line, &end_line, range, start_token, end_token) {
            Classification::Commented(span) => {
                let ops = remove_block_comment_operations(
                    span.content,
                    &span.start_token,
                    &span.end_token,
                );
                EditPlan::Remove { ops }
            }
            Classification::NotCommented => {
                let ops = add_block_comment_operations(range, start_token, end_token);
                let used_end_token = match ops {
                    PlanOps::Single(_) => Some(end_token.to_string()),
                    PlanOps::Pair { .. } => None,
                };
                EditPlan::Add { ops, used_end_token }
            }
        };
        tracing::debug!(
            %language,
            remove = matches!(plan, EditPlan::Remove { .. }),
            operations = plan.len(),
            "planned block comment toggle"
        );

        for op in plan.operations() {
            builder.add_tracked_edit_operation(op.range, op.text.clone());
        }
        plan
    }

    /// Compute the selection after `plan`'s edits were applied.
    ///
    /// Returns `Ok(None)` for [`EditPlan::NoOp`]: nothing changed and the caller keeps its
    /// selection.
    pub fn compute_cursor_state<I>(
        &self,
        plan: &EditPlan,
        inverse: &I,
    ) -> Result<Option<Selection>, ToggleError>
    where
        I: InverseEditOperations + ?Sized,
    {
        let ranges = inverse.inverse_ranges();
        if ranges.len() != plan.len() {
            return Err(ToggleError::InverseCountMismatch {
                expected: plan.len(),
                actual: ranges.len(),
            });
        }

        let ops = match plan {
            EditPlan::NoOp => return Ok(None),
            EditPlan::Add { ops, .. } | EditPlan::Remove { ops } => ops,
        };

        let selection = match (ops, ranges) {
            (PlanOps::Pair { .. }, [start, end]) => Selection::new(start.end, end.start),
            (PlanOps::Single(_), [only]) => {
                let shift = match plan {
                    EditPlan::Add {
                        used_end_token: Some(token),
                        ..
                    } => token.chars().count() + 1,
                    _ => 0,
                };
                let pos = only.end;
                Selection::collapsed(Position::new(pos.line, pos.column.saturating_sub(shift)))
            }
            _ => {
                return Err(ToggleError::InverseCountMismatch {
                    expected: ops.len(),
                    actual: ranges.len(),
                });
            }
        };
        Ok(Some(selection))
    }
}
