//! Structural edits: adding, removing, and promoting variations.
//!
//! Every entry point takes [`EditOptions`]. The default is
//! non-destructive: the edit runs on a deep copy of the caller's tree
//! and the copy is returned. Opting out with
//! [`EditOptions::in_place`] mutates the caller's tree directly and
//! returns no new tree; the caller keeps using the original. In-place
//! edits assume single-writer access to the tree.

mod add;
mod promote;
mod remove;
mod splice;

pub use add::{add_move, AddOutcome};
pub use promote::promote_branch;
pub use remove::remove_move;

use serde::{Deserialize, Serialize};

use crate::tree::Line;

/// Copy-on-write configuration for the edit operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOptions {
    /// When true (the default), edits run on a deep copy of the tree.
    pub immutable: bool,
}

impl EditOptions {
    /// Mutate the caller's tree directly instead of copying.
    #[must_use]
    pub fn in_place() -> Self {
        Self { immutable: false }
    }
}

impl Default for EditOptions {
    fn default() -> Self {
        Self { immutable: true }
    }
}

/// Result of a successful [`remove_move`] or [`promote_branch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// The edited copy of the tree. `None` when the edit ran in place;
    /// the caller's tree then *is* the edited tree.
    pub modified_tree: Option<Line>,
}
