//! Promoting a branch toward, or into, the line it branches from.

use crate::coord::CoordPath;
use crate::finder::{locate_line_mut, locate_move_mut, resolve};
use crate::tree::{Line, Move};

use super::splice::split_line_at;
use super::{EditOptions, EditOutcome};

/// Promote the branch of the move at `path` whose head matches
/// `target`.
///
/// A branch that is not listed first swaps places with its immediately
/// preceding sibling: one promotion step up, nothing else moves. The
/// first-listed branch instead replaces the in-line continuation
/// entirely: the old continuation (from the move at `path` onward) is
/// demoted to a new leading branch on the promoted head, and the
/// promoted line is spliced in after the prefix. Returns `None` when
/// `path` does not resolve or no branch head matches.
pub fn promote_branch(
    tree: &mut Line,
    path: &CoordPath,
    target: &Move,
    opts: EditOptions,
) -> Option<EditOutcome> {
    if opts.immutable {
        let mut working = tree.clone();
        apply(&mut working, path, target)?;
        Some(EditOutcome {
            modified_tree: Some(working),
        })
    } else {
        apply(tree, path, target)?;
        Some(EditOutcome::default())
    }
}

fn apply(tree: &mut Line, path: &CoordPath, target: &Move) -> Option<()> {
    let resolved = resolve(tree, path);
    let current = resolved.mv?;
    resolved.line?;
    let index = resolved.index?;

    let branch_idx = current
        .branches
        .iter()
        .position(|b| b.first().is_some_and(|m| m.label == target.label))?;

    if branch_idx > 0 {
        // One step up: pairwise swap with the preceding sibling.
        let mv = locate_move_mut(tree, path)?;
        mv.branches.swap(branch_idx - 1, branch_idx);
        return Some(());
    }

    // Already the first branch: replace the in-line continuation. The
    // demoted continuation becomes the promoted head's new leading
    // branch, ahead of the other former siblings; the demoted move
    // itself gives up its branches.
    let (line, _) = locate_line_mut(tree, path)?;
    let mut suffix = split_line_at(line, index);
    let demoted = suffix.first_mut()?;
    let mut branches = std::mem::take(&mut demoted.branches).into_iter();
    let mut promoted = branches.next()?;
    let rest: Vec<Line> = branches.collect();

    if let Some(head) = promoted.first_mut() {
        let mut rehomed = Vec::with_capacity(rest.len() + 1);
        rehomed.push(suffix);
        rehomed.extend(rest);
        head.branches = rehomed;
    }

    line.extend(promoted);
    Some(())
}
