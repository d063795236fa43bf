//! Coordinates and cursor state.
//!
//! A [`CoordPath`] addresses one move within the tree; a [`Cursor`]
//! pairs the current coordinate with the undo history of prior ones.

mod cursor;
mod path;

pub use cursor::Cursor;
pub use path::CoordPath;
