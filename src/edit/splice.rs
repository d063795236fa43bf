//! Line-splicing helpers shared by remove and promote.

use crate::tree::{Line, Move};

/// Truncate `line` at `index` and return the cut-off suffix. The move
/// at `index` becomes the suffix head; an out-of-range index yields an
/// empty suffix.
pub(super) fn split_line_at(line: &mut Line, index: usize) -> Line {
    if index >= line.len() {
        return Vec::new();
    }
    line.split_off(index)
}

/// Detach `mv`'s first branch for promotion.
///
/// The remaining branches move onto the promoted branch's first move,
/// replacing whatever branches it carried, so sibling alternatives
/// survive the promotion. `mv` is left with no branches. Returns an
/// empty line when there was nothing to promote.
pub(super) fn promote_first_branch(mv: &mut Move) -> Line {
    let mut iter = std::mem::take(&mut mv.branches).into_iter();
    let Some(mut first) = iter.next() else {
        return Vec::new();
    };
    let rest: Vec<Line> = iter.collect();
    if let Some(head) = first.first_mut() {
        head.branches = rest;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_at() {
        let mut line = vec![Move::new("a"), Move::new("b"), Move::new("c")];
        let suffix = split_line_at(&mut line, 1);
        assert_eq!(line.len(), 1);
        assert_eq!(suffix.len(), 2);
        assert_eq!(suffix[0].label, "b");
    }

    #[test]
    fn test_split_line_at_out_of_range() {
        let mut line = vec![Move::new("a")];
        let suffix = split_line_at(&mut line, 5);
        assert!(suffix.is_empty());
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_promote_first_branch() {
        let mut mv = Move::with_branches(
            "d4",
            vec![
                vec![Move::new("e4"), Move::new("e5")],
                vec![Move::new("c4"), Move::new("e5")],
            ],
        );
        let promoted = promote_first_branch(&mut mv);

        assert!(mv.branches.is_empty());
        assert_eq!(promoted[0].label, "e4");
        // sibling branch re-homed onto the promoted head
        assert_eq!(promoted[0].branches.len(), 1);
        assert_eq!(promoted[0].branches[0][0].label, "c4");
    }

    #[test]
    fn test_promote_first_branch_without_branches() {
        let mut mv = Move::new("d4");
        assert!(promote_first_branch(&mut mv).is_empty());
    }
}
