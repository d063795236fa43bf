//! Matching a candidate label against the current position.

use crate::coord::Cursor;
use crate::finder::resolve;
use crate::tree::Move;

/// Outcome of [`find_branch`].
///
/// `matching` is the move the label landed on; `is_main` tells whether
/// it was the in-line continuation (`true`) or the first move of a
/// branch (`false`). No match is `matching: None`, a soft condition,
/// never an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchMatch<'a> {
    /// The matched move, if any.
    pub matching: Option<&'a Move>,

    /// Whether the match was the in-line move itself.
    pub is_main: bool,
}

/// Check whether `label` matches the move at the cursor or the first
/// move of one of its branches.
///
/// The in-line move wins over branches; among branches sharing a first
/// label, the first listed wins. An empty tree, an unresolvable cursor,
/// or an absent label all yield no match.
#[must_use]
pub fn find_branch<'a>(tree: &'a [Move], cursor: &Cursor, label: Option<&str>) -> BranchMatch<'a> {
    if tree.is_empty() {
        return BranchMatch::default();
    }

    let Some(mv) = resolve(tree, &cursor.current).mv else {
        return BranchMatch::default();
    };
    let Some(label) = label else {
        return BranchMatch::default();
    };

    if mv.label == label {
        return BranchMatch {
            matching: Some(mv),
            is_main: true,
        };
    }

    let matching = mv
        .branches
        .iter()
        .filter_map(|branch| branch.first())
        .find(|first| first.label == label);

    BranchMatch {
        matching,
        is_main: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CoordPath;
    use crate::tree::Line;

    fn default_tree() -> Line {
        vec![
            Move::with_branches(
                "d4",
                vec![
                    vec![
                        Move::new("e4"),
                        Move::with_branches(
                            "e5",
                            vec![vec![Move::new("e6"), Move::new("d4"), Move::new("d5")]],
                        ),
                    ],
                    vec![Move::new("c4"), Move::new("e5")],
                ],
            ),
            Move::new("d5"),
            Move::new("c4"),
            Move::new("e6"),
        ]
    }

    #[test]
    fn test_find_main_move_without_branches() {
        let tree = default_tree();
        let cursor = Cursor::at(CoordPath::new([1]), vec![CoordPath::new([0])]);
        let res = find_branch(&tree, &cursor, Some("d5"));
        assert_eq!(res.matching.map(|m| m.label.as_str()), Some("d5"));
        assert!(res.is_main);
    }

    #[test]
    fn test_find_main_move_with_branches() {
        let tree = default_tree();
        let res = find_branch(&tree, &Cursor::initial(), Some("d4"));
        assert_eq!(res.matching.map(|m| m.label.as_str()), Some("d4"));
        assert!(res.is_main);
    }

    #[test]
    fn test_find_branch_move() {
        let tree = default_tree();
        let res = find_branch(&tree, &Cursor::initial(), Some("e4"));
        assert_eq!(res.matching.map(|m| m.label.as_str()), Some("e4"));
        assert!(!res.is_main);

        let res = find_branch(&tree, &Cursor::initial(), Some("c4"));
        assert_eq!(res.matching.map(|m| m.label.as_str()), Some("c4"));
        assert!(!res.is_main);
    }

    #[test]
    fn test_first_listed_branch_wins_on_tie() {
        let tree = vec![Move::with_branches(
            "d4",
            vec![
                vec![Move::new("e4").with_annotation("first")],
                vec![Move::new("e4").with_annotation("second")],
            ],
        )];
        let res = find_branch(&tree, &Cursor::initial(), Some("e4"));
        assert_eq!(
            res.matching.map(|m| m.annotations[0].as_str()),
            Some("first")
        );
    }

    #[test]
    fn test_no_match() {
        let tree = default_tree();
        let res = find_branch(&tree, &Cursor::initial(), Some("f4"));
        assert!(res.matching.is_none());
        assert!(!res.is_main);
    }

    #[test]
    fn test_absent_label() {
        let tree = default_tree();
        let res = find_branch(&tree, &Cursor::initial(), None);
        assert!(res.matching.is_none());
        assert!(!res.is_main);
    }

    #[test]
    fn test_empty_tree() {
        let res = find_branch(&[], &Cursor::initial(), Some("d4"));
        assert!(res.matching.is_none());
        assert!(!res.is_main);
    }

    #[test]
    fn test_unresolvable_cursor() {
        let tree = default_tree();
        let cursor = Cursor::at(CoordPath::new([99]), vec![]);
        let res = find_branch(&tree, &cursor, Some("d4"));
        assert!(res.matching.is_none());
    }
}
