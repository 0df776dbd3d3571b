//! Classify a selection as inside or outside a block comment.
//!
//! The search is purely literal: it looks for the start token on the selection's first line
//! and for the end token on its last line, without any knowledge of strings, nesting or the
//! language's grammar.

use crate::matcher::{has_needle_at_offset, index_of, last_index_of};
use crate::position::Range;

/// A block comment found around a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    /// The text between the tokens (after whitespace widening).
    pub content: Range,
    /// Start token, including the space that follows it when there is one.
    pub start_token: String,
    /// End token, including the space that precedes it when there is one.
    pub end_token: String,
}

/// Result of [`locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The selection is not wrapped in a block comment.
    NotCommented,
    /// The selection sits inside the given comment.
    Commented(CommentSpan),
}

/// Decide whether `selection` is already inside a `start_token ... end_token` comment.
///
/// `start_line` and `end_line` are the contents of the selection's first and last lines. Both
/// tokens must be non-empty.
pub fn locate(
    start_line: &str,
    end_line: &str,
    selection: Range,
    start_token: &str,
    end_token: &str,
) -> Classification {
    let start_chars: Vec<char> = start_line.chars().collect();
    let end_chars: Vec<char> = end_line.chars().collect();
    let start_tok: Vec<char> = start_token.chars().collect();
    let end_tok: Vec<char> = end_token.chars().collect();

    let start_offset = selection.start.column as isize - 1;
    let end_offset = selection.end.column as isize - 1;

    let start_index = last_index_of(
        &start_chars,
        &start_tok,
        start_offset + start_tok.len() as isize,
    );
    let end_index = index_of(&end_chars, &end_tok, end_offset - end_tok.len() as isize);
    tracing::trace!(?start_index, ?end_index, "located block comment tokens");

    let (Some(start_index), Some(mut end_index)) = (start_index, end_index) else {
        return Classification::NotCommented;
    };

    // An end token that closes before the selection begins means the start token we found
    // belongs to an earlier, finished comment.
    let closed_before = last_index_of(
        &start_chars,
        &end_tok,
        start_offset - end_tok.len() as isize,
    );
    if closed_before.is_some_and(|i| i + 1 > start_index + start_tok.len()) {
        tracing::trace!(?closed_before, "start token belongs to a closed comment");
        return Classification::NotCommented;
    }

    // The end token must come after the whole start token (`*/ /*` and `/*/` are not comments).
    let single_line = selection.start.line == selection.end.line;
    if single_line && end_index < start_index + start_tok.len() {
        return Classification::NotCommented;
    }

    let mut start_token = start_token.to_string();
    let mut end_token = end_token.to_string();

    let content_start = start_index + start_tok.len();
    if has_needle_at_offset(&start_chars, &[' '], content_start as isize) {
        start_token.push(' ');
    }
    let content_start = start_index + start_token.chars().count();

    // On a single line the space after the start token may also be the one before the end
    // token (`/* */`); it can only be removed once.
    let shared = single_line && end_index <= content_start;
    let space_before_end =
        end_index > 0 && has_needle_at_offset(&end_chars, &[' '], end_index as isize - 1);
    if space_before_end && !shared {
        end_token.insert(0, ' ');
        end_index -= 1;
    }

    Classification::Commented(CommentSpan {
        content: Range::from_coords(
            selection.start.line,
            content_start + 1,
            selection.end.line,
            end_index + 1,
        ),
        start_token,
        end_token,
    })
}
