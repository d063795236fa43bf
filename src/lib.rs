//! # move-traveler
//!
//! Navigation and structural editing for a **move tree**: the
//! recursively nested lists of moves used by annotated game records,
//! where any move may own alternative continuation lines (branches).
//!
//! ## Design Principles
//!
//! 1. **Labels are opaque**: a move's notation is an uninterpreted
//!    string key. No legality checking, no game-specific semantics.
//!
//! 2. **The caller owns the tree**: every operation reads a
//!    caller-supplied tree plus a cursor and returns a new cursor, a
//!    read-only projection, or an edited tree. Construction from a
//!    notation format and rendering live outside this crate.
//!
//! 3. **Copy-on-write by default**: edits run on a deep copy unless
//!    the caller explicitly opts into in-place mutation.
//!
//! ## Coordinates
//!
//! A move's address is an integer sequence: the first element indexes
//! the top-level line, then `(branch, index)` pairs descend one branch
//! level each. Entering a branch appends `(i, 1)`; slot `0` of a
//! freshly entered branch is reserved for the branching move itself.
//! [`CoordPath`] names these conventions; misuse of the raw integers is
//! the classic source of off-by-one defects in this encoding.
//!
//! ## Modules
//!
//! - `tree`: the `Move`/`Line` data model
//! - `coord`: coordinate paths and cursor state
//! - `finder`: resolution, matching, end-of-line, history projection
//! - `nav`: forward/backward navigation
//! - `edit`: add/remove/promote variation edits
//! - `traveler`: the chained facade

pub mod coord;
pub mod edit;
pub mod error;
pub mod finder;
pub mod nav;
pub mod traveler;
pub mod tree;

// Re-export commonly used types
pub use crate::coord::{CoordPath, Cursor};
pub use crate::edit::{
    add_move, promote_branch, remove_move, AddOutcome, EditOptions, EditOutcome,
};
pub use crate::error::TravelError;
pub use crate::finder::{
    find_branch, history_line, is_end_of_line, previous_made_move, resolve, BranchMatch,
    EndOfLine, Resolved,
};
pub use crate::nav::{advance, retreat};
pub use crate::traveler::Traveler;
pub use crate::tree::{Line, Move};
