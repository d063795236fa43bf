//! Coordinate resolution: decoding a [`CoordPath`] into a concrete
//! move, its owning line, and its index on that line.

use crate::coord::CoordPath;
use crate::tree::{Line, Move};

/// Result of resolving a coordinate.
///
/// The three fields fail independently, and deliberately so. When a
/// descent step finds the line but not the slot, `line` and `index`
/// keep the last successfully decoded values while `mv` is `None`;
/// callers use this to tell "valid line, no move yet made" (end of
/// line) apart from a completely invalid coordinate (everything
/// `None`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Resolved<'a> {
    /// The move at the coordinate, if it exists.
    pub mv: Option<&'a Move>,

    /// The line the coordinate addresses into, if it was reached.
    pub line: Option<&'a [Move]>,

    /// Index of `mv` on `line`, present only when `mv` is.
    pub index: Option<usize>,
}

impl<'a> Resolved<'a> {
    /// An entirely unresolved result.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a move was found at the coordinate.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.mv.is_some()
    }
}

/// Resolve `path` against `tree`.
///
/// Length 0 aliases the start of the tree (`[0]`); length 1 indexes the
/// top-level line directly, and the top-level line is reported as
/// `line` even when the index is out of range. Longer paths must be
/// well-formed (odd length) and descend one `(branch, index)` pair per
/// level; a malformed path resolves to nothing at all.
#[must_use]
pub fn resolve<'a>(tree: &'a [Move], path: &CoordPath) -> Resolved<'a> {
    let coords = path.as_slice();

    match coords.len() {
        0 => Resolved {
            mv: tree.first(),
            line: Some(tree),
            index: Some(0),
        },
        1 => {
            let mv = tree.get(coords[0]);
            Resolved {
                mv,
                line: Some(tree),
                index: mv.map(|_| coords[0]),
            }
        }
        _ if !path.is_well_formed() => Resolved::none(),
        _ => {
            let mut mv = tree.get(coords[0]);
            let mut line: Option<&[Move]> = None;
            let mut index: Option<usize> = None;

            for pair in coords[1..].chunks_exact(2) {
                line = mv.and_then(|m| m.branches.get(pair[0])).map(Vec::as_slice);
                mv = line.and_then(|l| l.get(pair[1]));
                index = mv.map(|_| pair[1]);
            }

            Resolved { mv, line, index }
        }
    }
}

/// Descend to the line `path` addresses into, mutably, together with
/// the final index. The final index is *not* bounds-checked: mutators
/// need "the line exists even though this slot doesn't" (e.g. to
/// append at the end of a line).
///
/// Returns `None` for malformed paths, empty paths, or when a descent
/// step finds no branch or no move.
pub(crate) fn locate_line_mut<'a>(
    tree: &'a mut Line,
    path: &CoordPath,
) -> Option<(&'a mut Line, usize)> {
    let coords = path.as_slice();
    if coords.is_empty() || !path.is_well_formed() {
        return None;
    }

    let mut line = tree;
    let mut index = coords[0];
    for pair in coords[1..].chunks_exact(2) {
        let mv = line.get_mut(index)?;
        line = mv.branches.get_mut(pair[0])?;
        index = pair[1];
    }

    Some((line, index))
}

/// Descend to the move `path` addresses, mutably. Unlike
/// [`locate_line_mut`] the final slot must exist.
pub(crate) fn locate_move_mut<'a>(tree: &'a mut Line, path: &CoordPath) -> Option<&'a mut Move> {
    let (line, index) = locate_line_mut(tree, path)?;
    line.get_mut(index)
}
