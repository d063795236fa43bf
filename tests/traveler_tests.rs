//! Facade integration tests: library usage through `Traveler`.

use move_traveler::{CoordPath, Cursor, EditOptions, Line, Move, Traveler};

fn m(label: &str) -> Move {
    Move::new(label)
}

fn mb(label: &str, branches: Vec<Line>) -> Move {
    Move::with_branches(label, branches)
}

fn demo_tree() -> Line {
    vec![
        mb(
            "d4",
            vec![vec![m("e4"), m("e5")], vec![m("c4"), m("e5")]],
        ),
        m("d5"),
        m("c4"),
        m("e6"),
    ]
}

fn cursor(current: &[usize], history: &[&[usize]]) -> Cursor {
    Cursor::at(
        CoordPath::new(current.iter().copied()),
        history
            .iter()
            .map(|h| CoordPath::new(h.iter().copied()))
            .collect(),
    )
}

/// Forward twice and back once leaves the traveler on the second move.
#[test]
fn test_chained_forward_and_back() {
    let tree = demo_tree();
    let traveler = Traveler::new()
        .forward(&tree, Some(&m("d4")))
        .unwrap()
        .forward(&tree, Some(&m("d5")))
        .unwrap()
        .back()
        .unwrap();

    assert_eq!(traveler.cursor.current, CoordPath::new([1]));
    assert_eq!(traveler.cursor.history, vec![CoordPath::new([0])]);
}

/// Any move is reachable by its coordinates.
#[test]
fn test_current_move_lookup() {
    let tree = demo_tree();
    let traveler = Traveler::at(cursor(&[2], &[&[0], &[1]]));

    let res = traveler.current_move(&tree);
    assert_eq!(res.mv, Some(&tree[2]));
    assert_eq!(res.line, Some(tree.as_slice()));
    assert_eq!(res.index, Some(2));
}

/// The previously made move comes from the history, not the cursor.
#[test]
fn test_previous_made_move() {
    let tree = demo_tree();
    let traveler = Traveler::at(cursor(&[2], &[&[0], &[1]]));

    let res = traveler.previous_made_move(&tree);
    assert_eq!(res.mv.map(|mv| mv.label.as_str()), Some("d5"));
    assert_eq!(res.index, Some(1));
}

/// `next_move` matches the in-line continuation first, then branch
/// heads, and reports misses softly.
#[test]
fn test_next_move_matching() {
    let tree = demo_tree();
    let traveler = Traveler::new();

    let res = traveler.next_move(&tree, Some("d4"));
    assert_eq!(res.matching, Some(&tree[0]));
    assert!(res.is_main);

    let res = traveler.next_move(&tree, Some("e4"));
    assert_eq!(res.matching, Some(&tree[0].branches[0][0]));
    assert!(!res.is_main);

    let res = traveler.next_move(&tree, Some("c4"));
    assert_eq!(res.matching, Some(&tree[0].branches[1][0]));
    assert!(!res.is_main);

    let res = traveler.next_move(&tree, Some("f4"));
    assert!(res.matching.is_none());
    assert!(!res.is_main);

    let res = traveler.next_move(&tree, None);
    assert!(res.matching.is_none());
    assert!(!res.is_main);
}

/// `next_move` on an empty tree is a soft miss, never an error.
#[test]
fn test_next_move_on_empty_tree() {
    let res = Traveler::new().next_move(&[], Some("d4"));
    assert!(res.matching.is_none());
    assert!(!res.is_main);
}

/// The history projects to the concrete moves played.
#[test]
fn test_history_line_projection() {
    let tree = demo_tree();
    let traveler = Traveler::at(cursor(&[2], &[&[0], &[1]]));

    let moves = traveler.history_line(&tree).unwrap();
    assert_eq!(moves, vec![&tree[0], &tree[1]]);
}

/// Adding through the facade produces the edited copy.
#[test]
fn test_add_variation_through_facade() {
    let mut tree = demo_tree();
    let traveler = Traveler::at(cursor(&[2], &[&[0], &[1]]));

    let res = traveler
        .add_move(&mut tree, "Nf3", EditOptions::default())
        .unwrap();

    assert_eq!(res.mv, m("Nf3"));
    let expected = vec![
        mb(
            "d4",
            vec![vec![m("e4"), m("e5")], vec![m("c4"), m("e5")]],
        ),
        m("d5"),
        mb("c4", vec![vec![m("Nf3")]]),
        m("e6"),
    ];
    assert_eq!(res.modified_tree.unwrap(), expected);
}

/// Promoting the first branch through the facade replaces the line.
#[test]
fn test_promote_variation_through_facade() {
    let mut tree = demo_tree();
    let res = Traveler::new()
        .promote_branch(&mut tree, &m("e4"), EditOptions::default())
        .unwrap();

    let expected = vec![
        mb(
            "e4",
            vec![vec![m("d4"), m("d5"), m("c4"), m("e6")], vec![m("c4"), m("e5")]],
        ),
        m("e5"),
    ];
    assert_eq!(res.modified_tree.unwrap(), expected);
}

/// Removing the in-line first move through the facade promotes its
/// first branch.
#[test]
fn test_remove_variation_through_facade() {
    let mut tree = demo_tree();
    let res = Traveler::new()
        .remove_move(&mut tree, &m("d4"), EditOptions::default())
        .unwrap();

    let expected = vec![mb("e4", vec![vec![m("c4"), m("e5")]]), m("e5")];
    assert_eq!(res.modified_tree.unwrap(), expected);
}
