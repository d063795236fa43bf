//! Cursor state: current coordinate plus undo history.

use serde::{Deserialize, Serialize};

use super::CoordPath;

/// Where the caller currently stands in the tree.
///
/// A plain immutable value: every navigation step returns a new
/// `Cursor` rather than mutating this one. `history` holds one entry
/// per forward step taken since the initial state, so popping it undoes
/// exactly one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Coordinate of the current position.
    pub current: CoordPath,

    /// Previously visited coordinates, oldest first.
    pub history: Vec<CoordPath>,
}

impl Cursor {
    /// The initial cursor: at the start of the tree with no history.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            current: CoordPath::root(),
            history: Vec::new(),
        }
    }

    /// Build a cursor from explicit parts.
    #[must_use]
    pub fn at(current: CoordPath, history: Vec<CoordPath>) -> Self {
        Self { current, history }
    }

    /// Number of forward steps taken since the initial state.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::initial()
    }
}
