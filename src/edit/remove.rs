//! Removing a branch or an in-line move.

use crate::coord::Cursor;
use crate::finder::{find_branch, locate_line_mut, locate_move_mut, resolve};
use crate::tree::{Line, Move};

use super::splice::{promote_first_branch, split_line_at};
use super::{EditOptions, EditOutcome};

/// Remove `target` at the cursor's position.
///
/// A branch alternative is simply dropped from the current move's
/// branch list. Removing the in-line move itself splices the line: the
/// move and everything after it on that line are discarded, and the
/// removed move's first branch takes over as the continuation, with
/// its remaining sibling branches re-homed onto the branch's first
/// move. Returns `None` when the cursor does not resolve; the tree is
/// untouched in that case.
pub fn remove_move(
    tree: &mut Line,
    cursor: &Cursor,
    target: &Move,
    opts: EditOptions,
) -> Option<EditOutcome> {
    if opts.immutable {
        let mut working = tree.clone();
        apply(&mut working, cursor, target)?;
        Some(EditOutcome {
            modified_tree: Some(working),
        })
    } else {
        apply(tree, cursor, target)?;
        Some(EditOutcome::default())
    }
}

fn apply(tree: &mut Line, cursor: &Cursor, target: &Move) -> Option<()> {
    let resolved = resolve(tree, &cursor.current);
    let current = resolved.mv?;
    resolved.line?;
    let index = resolved.index?;

    if !find_branch(tree, cursor, Some(&target.label)).is_main {
        // Drop the first branch whose head carries the label. A label
        // matching nothing removes nothing but still succeeds.
        let branch_idx = current
            .branches
            .iter()
            .position(|b| b.first().is_some_and(|m| m.label == target.label));
        if let Some(branch_idx) = branch_idx {
            let mv = locate_move_mut(tree, &cursor.current)?;
            mv.branches.remove(branch_idx);
        }
        return Some(());
    }

    let (line, _) = locate_line_mut(tree, &cursor.current)?;
    let suffix = split_line_at(line, index);
    let mut removed = suffix.into_iter().next()?;
    let promoted = promote_first_branch(&mut removed);
    line.extend(promoted);
    Some(())
}
