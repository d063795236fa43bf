//! Read-only lookups over the move tree.
//!
//! - [`resolve`]: coordinate → move/line/index (the core address decode)
//! - [`find_branch`]: match a candidate label against the current move
//!   or its branch continuations
//! - [`is_end_of_line`]: is the cursor past the last move of its line
//! - [`history_line`] / [`previous_made_move`]: project history back
//!   into concrete moves

mod end_of_line;
mod history;
mod matching;
mod resolve;

pub use end_of_line::{is_end_of_line, EndOfLine};
pub use history::{history_line, previous_made_move};
pub use matching::{find_branch, BranchMatch};
pub use resolve::{resolve, Resolved};

pub(crate) use resolve::{locate_line_mut, locate_move_mut};
