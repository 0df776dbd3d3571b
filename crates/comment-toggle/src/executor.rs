//! One-call driver over [`TextBuffer`].

use crate::buffer::{EditBatch, TextBuffer};
use crate::command::BlockCommentCommand;
use crate::error::ToggleError;
use crate::position::Selection;
use comment_toggle_lang::CommentConfigProvider;

/// Toggle a block comment around `selection` in `buffer`.
///
/// Returns the selection to show afterwards, or `None` when the language at the selection has
/// no block comment tokens and the buffer was left untouched.
///
/// ```rust
/// use comment_toggle::{Position, Selection, TextBuffer, toggle_block_comment};
/// use comment_toggle_lang::LanguageRegistry;
///
/// let languages = LanguageRegistry::with_defaults();
/// let mut buffer = TextBuffer::new("a /* b */ c", "c");
///
/// let cursor = Selection::collapsed(Position::new(1, 6));
/// let selection = toggle_block_comment(&mut buffer, &languages, cursor).unwrap();
///
/// assert_eq!(buffer.text(), "a b c");
/// assert_eq!(selection, Some(Selection::new(Position::new(1, 3), Position::new(1, 4))));
/// ```
pub fn toggle_block_comment<L>(
    buffer: &mut TextBuffer,
    languages: &L,
    selection: Selection,
) -> Result<Option<Selection>, ToggleError>
where
    L: CommentConfigProvider + ?Sized,
{
    let command = BlockCommentCommand::new(selection);
    let mut batch = EditBatch::new();
    let plan = command.get_edit_operations(buffer, languages, &mut batch);
    if plan.is_empty() {
        return Ok(None);
    }

    let applied = buffer.apply(batch)?;
    command.compute_cursor_state(&plan, &applied)
}
