//! Adding a move or a new variation at the cursor.

use crate::coord::Cursor;
use crate::error::TravelError;
use crate::finder::{find_branch, is_end_of_line, locate_line_mut, locate_move_mut};
use crate::tree::{Line, Move};

use super::EditOptions;

/// Result of [`add_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    /// The matched or newly inserted move.
    pub mv: Move,

    /// The edited copy of the tree. `None` when the move already
    /// existed (no edit happened) or when the edit ran in place.
    pub modified_tree: Option<Line>,
}

/// Add a move with `label` at the cursor's position.
///
/// If a move with that label already exists there (as the in-line
/// continuation or as a branch head) it is returned unchanged and no
/// edit happens. Otherwise, at the end of a line the move continues
/// that line; mid-line it starts a new single-move branch on the
/// current move. On an empty tree the move becomes the first move of
/// the main line.
pub fn add_move(
    tree: &mut Line,
    cursor: &Cursor,
    label: &str,
    opts: EditOptions,
) -> Result<AddOutcome, TravelError> {
    if let Some(found) = find_branch(tree, cursor, Some(label)).matching {
        return Ok(AddOutcome {
            mv: found.clone(),
            modified_tree: None,
        });
    }

    if opts.immutable {
        let mut working = tree.clone();
        let mv = apply(&mut working, cursor, label)?;
        Ok(AddOutcome {
            mv,
            modified_tree: Some(working),
        })
    } else {
        let mv = apply(tree, cursor, label)?;
        Ok(AddOutcome {
            mv,
            modified_tree: None,
        })
    }
}

/// The mutation core, shared by both copy modes.
fn apply(tree: &mut Line, cursor: &Cursor, label: &str) -> Result<Move, TravelError> {
    let end = is_end_of_line(tree, cursor)?;
    let mv = Move::new(label);

    if end.is_end_reached {
        if cursor.history.is_empty() {
            // Root case: the addressed line is the top-level line.
            tree.push(mv.clone());
        } else {
            let (line, _) =
                locate_line_mut(tree, &cursor.current).ok_or(TravelError::EmptyLine)?;
            line.push(mv.clone());
        }
        return Ok(mv);
    }

    let current = locate_move_mut(tree, &cursor.current).ok_or(TravelError::InvalidCoordinate)?;
    current.branches.push(vec![mv.clone()]);
    Ok(mv)
}
