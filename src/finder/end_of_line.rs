//! End-of-line detection: has the last move of the current line been
//! made.

use crate::coord::Cursor;
use crate::error::TravelError;
use crate::finder::resolve;
use crate::tree::Move;

/// Outcome of [`is_end_of_line`].
#[derive(Clone, Copy, Debug)]
pub struct EndOfLine<'a> {
    /// Whether the cursor sits past the last move of its line.
    pub is_end_reached: bool,

    /// The line the cursor's coordinate addresses into.
    pub line: &'a [Move],
}

/// Check whether the cursor has run off the end of its current line
/// (main line or a branch).
///
/// With an empty history the cursor is still at the root, so the end is
/// reached only when the tree itself is empty. Otherwise the current
/// coordinate must at least address a line; failing that is
/// [`TravelError::EmptyLine`], a torn cursor state that is not
/// swallowed.
pub fn is_end_of_line<'a>(tree: &'a [Move], cursor: &Cursor) -> Result<EndOfLine<'a>, TravelError> {
    if cursor.history.is_empty() {
        return Ok(EndOfLine {
            is_end_reached: tree.is_empty(),
            line: tree,
        });
    }

    let current = resolve(tree, &cursor.current);
    let line = current.line.ok_or(TravelError::EmptyLine)?;

    if current.mv.is_some() {
        // A move still exists at the coordinate: more line to traverse.
        return Ok(EndOfLine {
            is_end_reached: false,
            line,
        });
    }

    // The branch-entry slot: coordinate [.., b, 1] with a single-move
    // branch line means the branch's only move was already made (slot 0
    // is the branching move, never present in history as [.., b, 0]).
    if cursor.current.last() == Some(1) && line.len() == 1 {
        return Ok(EndOfLine {
            is_end_reached: true,
            line,
        });
    }

    // General case: the end is reached when the previously made move is
    // the last move of the addressed line.
    let previous = cursor
        .history
        .last()
        .map(|path| resolve(tree, path))
        .unwrap_or_default();

    let is_after_last = match (line.last(), previous.mv) {
        (Some(last), Some(prev)) => last.label == prev.label,
        (None, None) => true,
        _ => false,
    };

    Ok(EndOfLine {
        is_end_reached: is_after_last,
        line,
    })
}
