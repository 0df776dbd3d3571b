#![warn(missing_docs)]
//! Comment Toggle - headless block comment toggling
//!
//! # Overview
//!
//! `comment-toggle` wraps a selection in a block comment, or unwraps the comment the selection
//! already sits in. It works purely on literal token matching against line text, using the
//! comment tokens configured per language in `comment-toggle-lang`.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Driver (toggle_block_comment)              │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Command (plan, then cursor reconstruction) │  ← Host traits
//! ├─────────────────────────────────────────────┤
//! │  Edit plans (add / remove)                  │
//! ├─────────────────────────────────────────────┤
//! │  Token locator                              │
//! ├─────────────────────────────────────────────┤
//! │  Substring matcher                          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use comment_toggle::{Position, Selection, TextBuffer, toggle_block_comment};
//! use comment_toggle_lang::LanguageRegistry;
//!
//! let languages = LanguageRegistry::with_defaults();
//! let mut buffer = TextBuffer::new("abc", "c");
//! let selection = Selection::new(Position::new(1, 2), Position::new(1, 3));
//!
//! let selection = toggle_block_comment(&mut buffer, &languages, selection).unwrap().unwrap();
//! assert_eq!(buffer.text(), "a/* b */c");
//!
//! toggle_block_comment(&mut buffer, &languages, selection).unwrap();
//! assert_eq!(buffer.text(), "abc");
//! ```
//!
//! # Module Description
//!
//! - [`position`] - 1-based positions, ranges and selections
//! - [`matcher`] - token matching at character offsets
//! - [`locator`] - classification of a selection as commented or not
//! - [`plan`] - add/remove edit plans
//! - [`command`] - the two-phase command and the host traits
//! - [`buffer`] - rope-backed reference host
//! - [`executor`] - one-call driver

pub mod buffer;
pub mod command;
pub mod error;
pub mod executor;
pub mod locator;
pub mod matcher;
pub mod plan;
pub mod position;

pub use buffer::{AppliedEdits, EditBatch, TextBuffer};
pub use command::{BlockCommentCommand, EditOperationBuilder, InverseEditOperations, TextModel};
pub use error::{BufferError, ToggleError};
pub use executor::toggle_block_comment;
pub use locator::{Classification, CommentSpan, locate};
pub use matcher::{has_needle_at_offset, index_of, last_index_of, matches_at};
pub use plan::{
    EditOperation, EditPlan, PlanOps, add_block_comment_operations,
    remove_block_comment_operations,
};
pub use position::{Position, Range, Selection, SelectionDirection};
