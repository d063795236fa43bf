//! The move tree: recursively nested lines of moves.
//!
//! A [`Line`] is an ordered sequence of [`Move`]s. Each move may own
//! alternative continuation lines in `branches`. The central invariant:
//! `branches[i][0]` is an **alternative to the move holding `branches`**,
//! not a follow-up to it. Every branch line replaces what would come
//! after that move's predecessor.
//!
//! Labels are opaque text. The crate never interprets them, checks move
//! legality, or detects transpositions; a notation parser upstream is
//! expected to produce the tree.

use serde::{Deserialize, Serialize};

/// An ordered sequence of moves. The top-level line handed to the crate
/// by the caller is the main line.
pub type Line = Vec<Move>;

/// A single node in the move tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Move notation, treated as an uninterpreted string key.
    pub label: String,

    /// Ordered text notes attached to this move.
    pub annotations: Vec<String>,

    /// Alternative continuation lines. Empty means no branches.
    pub branches: Vec<Line>,
}

impl Move {
    /// Create a move with no annotations and no branches.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            annotations: Vec::new(),
            branches: Vec::new(),
        }
    }

    /// Create a move with the given branch lines.
    #[must_use]
    pub fn with_branches(label: impl Into<String>, branches: Vec<Line>) -> Self {
        Self {
            label: label.into(),
            annotations: Vec::new(),
            branches,
        }
    }

    /// Attach an annotation, builder style.
    #[must_use]
    pub fn with_annotation(mut self, note: impl Into<String>) -> Self {
        self.annotations.push(note.into());
        self
    }

    /// Check whether this move has any branch lines.
    #[must_use]
    pub fn has_branches(&self) -> bool {
        !self.branches.is_empty()
    }
}
