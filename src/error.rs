//! Error taxonomy for navigation and editing.
//!
//! Structural and contract violations are `Err`; "nothing matched" is
//! an ordinary `Option`-shaped return everywhere in this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised by navigation and mutation entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TravelError {
    /// The cursor's current coordinate does not resolve to a move.
    #[error("current coordinate does not resolve to a move")]
    InvalidCoordinate,

    /// The requested move is neither the in-line continuation nor the
    /// first move of any branch at the current position.
    #[error("move is not present on the move tree at this position")]
    NoMatchingBranch,

    /// Backward navigation with an empty history (already at the root).
    #[error("coordinate history is empty")]
    NoHistory,

    /// No line exists at a non-root coordinate. This is a torn cursor
    /// state, not a user error.
    #[error("no line exists at the current coordinate")]
    EmptyLine,
}
