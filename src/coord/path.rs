//! Integer-sequence addresses into the move tree.
//!
//! Coordinate semantics are recursive. Length 0 or 1 indexes the
//! top-level line directly (length 0 aliases "start of tree"). Longer
//! paths append `(branch_index, index_in_branch)` pairs, descending one
//! branch level per pair, so every valid path has odd length past the
//! first element.
//!
//! Branch entry uses a reserved slot: inside a freshly entered branch,
//! last element `0` addresses the branching move itself and `1` the
//! first real move of the branch. [`CoordPath::entered_branch`] and
//! [`CoordPath::is_branch_entry`] make that convention explicit instead
//! of leaving it buried in arithmetic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Address of one move within a tree. Indices are `usize`, so negative
/// indices are unrepresentable; only out-of-range remains observable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordPath(SmallVec<[usize; 8]>);

impl CoordPath {
    /// The start-of-tree coordinate, `[0]`.
    #[must_use]
    pub fn root() -> Self {
        Self::new([0])
    }

    /// Build a path from explicit indices.
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Number of elements in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// View the raw indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// A path is well-formed when the tail after the first element
    /// consists of whole `(branch, index)` pairs.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.len() <= 1 || (self.0.len() - 1) % 2 == 0
    }

    /// This path with its last element incremented by one: the next
    /// sibling slot in the same line. Returns `self` unchanged if empty.
    #[must_use]
    pub fn incremented_last(&self) -> Self {
        match self.0.last() {
            Some(&last) => self.with_last_replaced(last + 1),
            None => self.clone(),
        }
    }

    /// This path with its last element replaced. Returns `self`
    /// unchanged if empty.
    #[must_use]
    pub fn with_last_replaced(&self, value: usize) -> Self {
        let mut out = self.clone();
        if let Some(last) = out.0.last_mut() {
            *last = value;
        }
        out
    }

    /// This path descended into branch `branch` of the move it
    /// addresses. Appends `branch` then `1`: slot `0` of an entered
    /// branch is reserved for the branching move, so the first real
    /// branch move lives at `1`.
    #[must_use]
    pub fn entered_branch(&self, branch: usize) -> Self {
        let mut out = self.clone();
        out.0.push(branch);
        out.0.push(1);
        out
    }

    /// Whether this path sits on the reserved branch-entry slot
    /// (length > 1 with last element `1`).
    #[must_use]
    pub fn is_branch_entry(&self) -> bool {
        self.0.len() > 1 && self.0.last() == Some(&1)
    }
}

impl FromIterator<usize> for CoordPath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for CoordPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, idx) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{idx}")?;
        }
        write!(f, "]")
    }
}
