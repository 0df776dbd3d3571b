//! Error types.

use crate::position::{Position, Range};

/// Errors produced by [`TextBuffer::apply`](crate::TextBuffer::apply).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// A position does not exist in the buffer.
    #[error("Invalid position: line {}, column {}", .0.line, .0.column)]
    InvalidPosition(Position),
    /// Two operations of one batch touch the same text.
    #[error("Overlapping edits: {first:?} and {second:?}")]
    OverlappingEdits {
        /// The earlier range.
        first: Range,
        /// The range that starts inside `first`.
        second: Range,
    },
}

/// Errors produced while toggling a block comment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// The host reported a different number of inverse ranges than operations were submitted.
    #[error("expected {expected} inverse edit ranges, got {actual}")]
    InverseCountMismatch {
        /// Number of submitted operations.
        expected: usize,
        /// Number of inverse ranges received.
        actual: usize,
    },
    /// Applying the edits to the buffer failed.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
