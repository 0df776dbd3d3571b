//! Edit plans for adding or removing a block comment.

use crate::position::{Position, Range};

/// Replace `range` with `text`.
///
/// An empty `text` deletes the range; an empty `range` inserts at its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// The range to replace.
    pub range: Range,
    /// The replacement text.
    pub text: String,
}

impl EditOperation {
    /// Insert `text` at `pos`.
    pub fn insert(pos: Position, text: impl Into<String>) -> Self {
        Self::replace(Range::collapsed(pos), text)
    }

    /// Delete `range`.
    pub fn delete(range: Range) -> Self {
        Self::replace(range, String::new())
    }

    /// Replace `range` with `text`.
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// The operations of a plan, named by role rather than by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOps {
    /// One operation covering both tokens.
    Single(EditOperation),
    /// Separate operations at the start and at the end of the selection.
    Pair {
        /// Edit at the start token.
        start_op: EditOperation,
        /// Edit at the end token.
        end_op: EditOperation,
    },
}

impl PlanOps {
    /// Operations in submission order: the start edit always comes first.
    pub fn iter(&self) -> impl Iterator<Item = &EditOperation> {
        let (first, second) = match self {
            PlanOps::Single(op) => (op, None),
            PlanOps::Pair { start_op, end_op } => (start_op, Some(end_op)),
        };
        std::iter::once(first).chain(second)
    }

    /// Number of operations (1 or 2).
    pub fn len(&self) -> usize {
        match self {
            PlanOps::Single(_) => 1,
            PlanOps::Pair { .. } => 2,
        }
    }

    /// Always `false`; a plan with no operations is [`EditPlan::NoOp`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// What toggling a block comment will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPlan {
    /// The language has no block comment tokens.
    NoOp,
    /// Wrap the selection in a comment.
    Add {
        /// Edits to perform.
        ops: PlanOps,
        /// End token inserted by a single-operation add, used to place the cursor between the
        /// two inserted spaces. `None` for two-operation adds.
        used_end_token: Option<String>,
    },
    /// Unwrap the comment around the selection.
    Remove {
        /// Edits to perform.
        ops: PlanOps,
    },
}

impl EditPlan {
    /// The operations of this plan, empty for [`EditPlan::NoOp`].
    pub fn operations(&self) -> impl Iterator<Item = &EditOperation> {
        let ops = match self {
            EditPlan::NoOp => None,
            EditPlan::Add { ops, .. } | EditPlan::Remove { ops } => Some(ops),
        };
        ops.into_iter().flat_map(|ops| ops.iter())
    }

    /// Number of operations in this plan.
    pub fn len(&self) -> usize {
        match self {
            EditPlan::NoOp => 0,
            EditPlan::Add { ops, .. } | EditPlan::Remove { ops } => ops.len(),
        }
    }

    /// Returns `true` for [`EditPlan::NoOp`].
    pub fn is_empty(&self) -> bool {
        matches!(self, EditPlan::NoOp)
    }
}

/// Build the edits that wrap `selection` in `start_token`/`end_token`.
///
/// A non-empty selection gets `"<start> "` before it and `" <end>"` after it. An empty
/// selection is replaced by `"<start>  <end>"`, leaving room for the cursor between the spaces.
pub fn add_block_comment_operations(
    selection: Range,
    start_token: &str,
    end_token: &str,
) -> PlanOps {
    if selection.is_empty() {
        return PlanOps::Single(EditOperation::replace(
            selection,
            format!("{start_token}  {end_token}"),
        ));
    }

    PlanOps::Pair {
        start_op: EditOperation::insert(selection.start, format!("{start_token} ")),
        end_op: EditOperation::insert(selection.end, format!(" {end_token}")),
    }
}

/// Build the edits that delete the tokens around `content`.
///
/// The tokens are expected to sit directly before `content.start` and directly after
/// `content.end`, on the same lines. When `content` is empty the tokens are adjacent and are
/// deleted as one range.
pub fn remove_block_comment_operations(
    content: Range,
    start_token: &str,
    end_token: &str,
) -> PlanOps {
    let start_len = start_token.chars().count();
    let end_len = end_token.chars().count();

    let token_start = Position::new(content.start.line, content.start.column - start_len);
    let token_end = Position::new(content.end.line, content.end.column + end_len);

    if content.is_empty() {
        return PlanOps::Single(EditOperation::delete(Range::new(token_start, token_end)));
    }

    PlanOps::Pair {
        start_op: EditOperation::delete(Range::new(token_start, content.start)),
        end_op: EditOperation::delete(Range::new(content.end, token_end)),
    }
}
