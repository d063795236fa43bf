//! The `Traveler` facade: a chained, value-semantics cursor over the
//! move tree. Composes the finder, navigator, and edit operations; no
//! logic of its own.

use crate::coord::{CoordPath, Cursor};
use crate::edit::{add_move, promote_branch, remove_move, AddOutcome, EditOptions, EditOutcome};
use crate::error::TravelError;
use crate::finder::{
    find_branch, history_line, is_end_of_line, previous_made_move, resolve, BranchMatch,
    EndOfLine, Resolved,
};
use crate::nav::{advance, retreat};
use crate::tree::{Line, Move};

/// A stateless-per-call cursor object.
///
/// The tree stays with the caller; the traveler only carries the
/// [`Cursor`]. Navigation returns a new `Traveler`, so calls chain:
///
/// ```
/// use move_traveler::{Move, Traveler};
///
/// let tree = vec![Move::new("d4"), Move::new("d5")];
/// let traveler = Traveler::new()
///     .forward(&tree, Some(&Move::new("d4")))?
///     .forward(&tree, Some(&Move::new("d5")))?
///     .back()?;
/// assert_eq!(traveler.cursor.current.as_slice(), &[1]);
/// # Ok::<(), move_traveler::TravelError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traveler {
    /// The cursor this traveler stands on.
    pub cursor: Cursor,
}

impl Traveler {
    /// A traveler at the start of the tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A traveler at an explicit cursor.
    #[must_use]
    pub fn at(cursor: Cursor) -> Self {
        Self { cursor }
    }

    /// Step forward, following `target` (or the in-line continuation
    /// when `target` is `None`).
    pub fn forward(&self, tree: &[Move], target: Option<&Move>) -> Result<Self, TravelError> {
        Ok(Self::at(advance(tree, &self.cursor, target)?))
    }

    /// Step back one move.
    pub fn back(&self) -> Result<Self, TravelError> {
        Ok(Self::at(retreat(&self.cursor)?))
    }

    /// The move at the current coordinate.
    #[must_use]
    pub fn current_move<'a>(&self, tree: &'a [Move]) -> Resolved<'a> {
        resolve(tree, &self.cursor.current)
    }

    /// The move actually made to arrive here.
    #[must_use]
    pub fn previous_made_move<'a>(&self, tree: &'a [Move]) -> Resolved<'a> {
        previous_made_move(tree, &self.cursor)
    }

    /// Match `label` against the next move or its branch alternatives.
    #[must_use]
    pub fn next_move<'a>(&self, tree: &'a [Move], label: Option<&str>) -> BranchMatch<'a> {
        find_branch(tree, &self.cursor, label)
    }

    /// Whether the cursor sits at the end of its current line.
    pub fn end_of_line<'a>(&self, tree: &'a [Move]) -> Result<EndOfLine<'a>, TravelError> {
        is_end_of_line(tree, &self.cursor)
    }

    /// The moves played so far, in order.
    pub fn history_line<'a>(&self, tree: &'a [Move]) -> Result<Vec<&'a Move>, TravelError> {
        history_line(tree, &self.cursor.history)
    }

    /// Add a move at the current position.
    pub fn add_move(
        &self,
        tree: &mut Line,
        label: &str,
        opts: EditOptions,
    ) -> Result<AddOutcome, TravelError> {
        add_move(tree, &self.cursor, label, opts)
    }

    /// Remove a branch or in-line move at the current position.
    pub fn remove_move(
        &self,
        tree: &mut Line,
        target: &Move,
        opts: EditOptions,
    ) -> Option<EditOutcome> {
        remove_move(tree, &self.cursor, target, opts)
    }

    /// Promote a branch of the move at the current coordinate.
    pub fn promote_branch(
        &self,
        tree: &mut Line,
        target: &Move,
        opts: EditOptions,
    ) -> Option<EditOutcome> {
        promote_branch(tree, &self.cursor.current, target, opts)
    }

    /// The current coordinate.
    #[must_use]
    pub fn position(&self) -> &CoordPath {
        &self.cursor.current
    }
}
