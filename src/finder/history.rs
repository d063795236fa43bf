//! Projecting coordinate history back into concrete moves.

use crate::coord::{CoordPath, Cursor};
use crate::error::TravelError;
use crate::finder::{resolve, Resolved};
use crate::tree::Move;

/// The move actually made to arrive at the cursor.
///
/// On a branch-entry coordinate (`[.., b, 1]`) the made move is the
/// branch's first move, addressed by slot `0`, not the slot the
/// coordinate points at; everywhere else it is the move at the last
/// history entry. An empty current path or empty history yields an
/// empty result.
#[must_use]
pub fn previous_made_move<'a>(tree: &'a [Move], cursor: &Cursor) -> Resolved<'a> {
    if cursor.current.is_empty() || cursor.history.is_empty() {
        return Resolved::none();
    }

    if cursor.current.is_branch_entry() {
        return resolve(tree, &cursor.current.with_last_replaced(0));
    }

    match cursor.history.last() {
        Some(path) => resolve(tree, path),
        None => Resolved::none(),
    }
}

/// Map each historical coordinate to the move played at that step.
///
/// A history entry followed by a longer successor marks a branch entry:
/// the move actually made there is the branch's first move, recovered
/// by resolving the successor with its last element swapped for `0`.
/// The result aligns one-to-one with `history`; an entry that resolves
/// to no move is [`TravelError::InvalidCoordinate`] (history and tree
/// are out of step).
pub fn history_line<'a>(
    tree: &'a [Move],
    history: &[CoordPath],
) -> Result<Vec<&'a Move>, TravelError> {
    history
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let made = match history.get(i + 1) {
                Some(next) if next.len() > path.len() => resolve(tree, &next.with_last_replaced(0)),
                _ => resolve(tree, path),
            };
            made.mv.ok_or(TravelError::InvalidCoordinate)
        })
        .collect()
}
