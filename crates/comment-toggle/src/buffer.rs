//! Rope-backed reference host.
//!
//! [`TextBuffer`] implements [`TextModel`] and applies batches of tracked edits, reporting where
//! each edit landed. Hosts with their own document model only need to implement the traits in
//! [`crate::command`]; this type is what the driver in [`crate::executor`] and the tests use.

use crate::command::{EditOperationBuilder, InverseEditOperations, TextModel};
use crate::error::BufferError;
use crate::plan::EditOperation;
use crate::position::{Position, Range};
use ropey::Rope;
use std::collections::BTreeMap;

/// An ordered batch of edits, all expressed against the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    operations: Vec<EditOperation>,
}

impl EditBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// The queued operations, in submission order.
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Number of queued operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if nothing was queued.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl EditOperationBuilder for EditBatch {
    fn add_tracked_edit_operation(&mut self, range: Range, text: String) {
        self.operations.push(EditOperation { range, text });
    }
}

/// The result of [`TextBuffer::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdits {
    ranges: Vec<Range>,
}

impl InverseEditOperations for AppliedEdits {
    fn inverse_ranges(&self) -> &[Range] {
        &self.ranges
    }
}

/// A text document with language information.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    language: String,
    /// Per-line language overrides (embedded languages), keyed by 1-based line.
    line_languages: BTreeMap<usize, String>,
}

impl TextBuffer {
    /// Create a buffer whose text is entirely in `language`.
    pub fn new(text: &str, language: impl Into<String>) -> Self {
        Self {
            rope: Rope::from_str(text),
            language: language.into(),
            line_languages: BTreeMap::new(),
        }
    }

    /// Full text of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of lines (a trailing newline starts a new, empty line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Mark the 1-based `line` as written in `language`.
    pub fn set_line_language(&mut self, line: usize, language: impl Into<String>) {
        self.line_languages.insert(line, language.into());
    }

    /// Apply every operation of `batch` against the current text.
    ///
    /// All ranges refer to the text before the batch. Operations may be submitted in any order
    /// but must not overlap; inserts at the same position keep their submission order.
    pub fn apply(&mut self, batch: EditBatch) -> Result<AppliedEdits, BufferError> {
        let mut resolved = Vec::with_capacity(batch.operations.len());
        for op in &batch.operations {
            let start = self.position_to_char(op.range.start)?;
            let end = self.position_to_char(op.range.end)?;
            resolved.push((start, end, op.text.chars().count()));
        }

        let mut order: Vec<usize> = (0..resolved.len()).collect();
        order.sort_by_key(|&i| (resolved[i].0, resolved[i].1));
        for pair in order.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if resolved[second].0 < resolved[first].1 {
                return Err(BufferError::OverlappingEdits {
                    first: batch.operations[first].range,
                    second: batch.operations[second].range,
                });
            }
        }

        // Offsets of each edit's new text in the edited document.
        let mut new_offsets = vec![(0, 0); resolved.len()];
        let (mut inserted, mut deleted) = (0, 0);
        for &i in &order {
            let (start, end, insert_len) = resolved[i];
            let new_start = start + inserted - deleted;
            new_offsets[i] = (new_start, new_start + insert_len);
            inserted += insert_len;
            deleted += end - start;
        }

        // Back to front, so earlier offsets stay valid.
        for &i in order.iter().rev() {
            let (start, end, _) = resolved[i];
            if end > start {
                self.rope.remove(start..end);
            }
            let text = &batch.operations[i].text;
            if !text.is_empty() {
                self.rope.insert(start, text);
            }
        }
        tracing::trace!(edits = resolved.len(), "applied edit batch");

        let ranges = new_offsets
            .into_iter()
            .map(|(start, end)| Range::new(self.char_to_position(start), self.char_to_position(end)))
            .collect();
        Ok(AppliedEdits { ranges })
    }

    fn line_len_chars(&self, line_idx: usize) -> usize {
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn position_to_char(&self, pos: Position) -> Result<usize, BufferError> {
        if pos.line == 0 || pos.line > self.rope.len_lines() || pos.column == 0 {
            return Err(BufferError::InvalidPosition(pos));
        }
        let line_idx = pos.line - 1;
        if pos.column - 1 > self.line_len_chars(line_idx) {
            return Err(BufferError::InvalidPosition(pos));
        }
        Ok(self.rope.line_to_char(line_idx) + pos.column - 1)
    }

    fn char_to_position(&self, offset: usize) -> Position {
        let line_idx = self.rope.char_to_line(offset);
        Position::new(line_idx + 1, offset - self.rope.line_to_char(line_idx) + 1)
    }
}

impl TextModel for TextBuffer {
    fn line_content(&self, line: usize) -> String {
        let Some(slice) = line.checked_sub(1).and_then(|idx| self.rope.get_line(idx)) else {
            return String::new();
        };
        let text = slice.to_string();
        let text = text.strip_suffix('\n').unwrap_or(&text);
        text.strip_suffix('\r').unwrap_or(text).to_string()
    }

    fn language_id_at(&self, position: Position) -> String {
        self.line_languages
            .get(&position.line)
            .unwrap_or(&self.language)
            .clone()
    }
}
