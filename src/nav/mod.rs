//! Forward and backward navigation over the move tree.
//!
//! [`advance`] computes the next cursor for a chosen continuation,
//! [`retreat`] undoes exactly one forward step. Both are pure: they
//! read the tree and return a new [`Cursor`] value.

use crate::coord::Cursor;
use crate::error::TravelError;
use crate::finder::resolve;
use crate::tree::Move;

/// Step the cursor forward.
///
/// With no `target`, or a `target` whose label equals the move at the
/// current coordinate, the cursor steps to the next sibling slot in the
/// same line. Otherwise the current move's branches are scanned for one
/// whose first move carries the target label, and the cursor enters
/// that branch (coordinate suffix `(i, 1)`; slot `0` is the branching
/// move itself).
///
/// Fails with [`TravelError::InvalidCoordinate`] when the current
/// coordinate resolves to no move, and [`TravelError::NoMatchingBranch`]
/// when the target is neither the continuation nor any branch head.
pub fn advance(tree: &[Move], cursor: &Cursor, target: Option<&Move>) -> Result<Cursor, TravelError> {
    let mv = resolve(tree, &cursor.current)
        .mv
        .ok_or(TravelError::InvalidCoordinate)?;

    let next = match target {
        Some(target) if target.label != mv.label => {
            let branch = mv
                .branches
                .iter()
                .position(|b| b.first().is_some_and(|m| m.label == target.label))
                .ok_or(TravelError::NoMatchingBranch)?;
            cursor.current.entered_branch(branch)
        }
        _ => cursor.current.incremented_last(),
    };

    let mut history = cursor.history.clone();
    history.push(cursor.current.clone());

    Ok(Cursor::at(next, history))
}

/// Step the cursor back by popping the last history entry.
///
/// Fails with [`TravelError::NoHistory`] when already at the initial
/// state.
pub fn retreat(cursor: &Cursor) -> Result<Cursor, TravelError> {
    let mut history = cursor.history.clone();
    let current = history.pop().ok_or(TravelError::NoHistory)?;
    Ok(Cursor::at(current, history))
}
