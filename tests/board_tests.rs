//! Board and position integration tests.

use go_rules::{Board, Color, IllegalPointError, ParseError, Point, Position};

/// Build a board from rows of `B`, `W` and `.`.
fn board(rows: &[&str]) -> Board {
    let s: String = rows
        .concat()
        .chars()
        .map(|c| match c {
            'B' => Color::Black.code(),
            'W' => Color::White.code(),
            _ => Color::Empty.code(),
        })
        .collect();
    s.parse().unwrap()
}

// =============================================================================
// Addressing
// =============================================================================

#[test]
fn test_color_at_every_edge() {
    let b = board(&["B..", "...", "..W"]);

    assert_eq!(b.color_at(0, 0), Color::Black);
    assert_eq!(b.color_at(2, 2), Color::White);
    assert_eq!(b.color_at(1, 1), Color::Empty);

    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (3, 3), (i32::MIN, i32::MAX)] {
        assert_eq!(b.color_at(x, y), Color::OutOfBounds, "({x}, {y})");
    }
}

#[test]
fn test_index_and_coords_agree() {
    let b = Board::new(7);
    for i in 0..49 {
        let (x, y) = b.coords(i);
        assert_eq!(b.index(x, y), Some(i));
    }
    assert_eq!(b.index(7, 0), None);
}

#[test]
fn test_corner_surrounding_has_two_off_board() {
    let b = Board::new(5);
    let off = b
        .surrounding(0, 0)
        .iter()
        .filter(|p| p.color == Color::OutOfBounds)
        .count();
    assert_eq!(off, 2);
}

// =============================================================================
// Chains and Liberties
// =============================================================================

#[test]
fn test_chain_follows_orthogonal_links_only() {
    let b = board(&[
        "BB...",
        ".B...",
        "..B..", // diagonal, separate chain
        ".....",
        ".....",
    ]);

    let chain = b.chain(0, 0);
    assert_eq!(chain.len(), 3);
    assert!(chain.contains(&Point::new(1, 1, Color::Black)));
    assert!(!chain.contains(&Point::new(2, 2, Color::Black)));
}

#[test]
fn test_chain_of_empty_cell_is_empty() {
    let b = Board::new(5);
    assert!(b.chain(2, 2).is_empty());
    assert!(b.chain(-1, 2).is_empty());
}

#[test]
fn test_shared_liberties_counted_once() {
    let b = board(&[
        "B.B",
        "...",
        "...",
    ]);
    // (1,0) touches both stones but they are separate chains.
    assert_eq!(b.liberties(0, 0).len(), 2);

    let b = board(&[
        "BBB",
        "B.B",
        "BBB",
    ]);
    assert_eq!(b.liberties(0, 0).len(), 1);
}

#[test]
fn test_is_captured_large_chain() {
    let b = board(&[
        "WWWW",
        "WBBW",
        "WBBW",
        "WWWW",
    ]);
    assert_eq!(b.is_captured(1, 1), Ok(true));
    // The white ring only touches black stones and the edge.
    assert_eq!(b.is_captured(0, 0), Ok(true));

    let b = board(&[
        "WWWW",
        "WBBW",
        "WB.W",
        "WWWW",
    ]);
    assert_eq!(b.is_captured(1, 1), Ok(false));
}

#[test]
fn test_is_captured_rejects_empty_and_off_board() {
    let b = Board::new(5);
    assert_eq!(
        b.is_captured(2, 2),
        Err(IllegalPointError { x: 2, y: 2, color: Color::Empty })
    );
    assert!(b.is_captured(9, 9).is_err());
}

#[test]
fn test_remove_stones_then_compare() {
    let before = board(&["WW.", "BB.", "..."]);
    let mut after = before.clone();
    let chain = after.chain(0, 0);
    after.remove_stones(&chain);

    assert_eq!(after.color_at(0, 0), Color::Empty);
    assert_eq!(after.color_at(0, 1), Color::Black);
    assert_eq!(before.changed_cells(&after).as_slice(), &[0, 1]);
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_position_string_form() {
    let b = board(&["B.", ".W"]);
    let position = b.to_position();

    assert_eq!(position.to_string(), "1220");
    assert_eq!(position.count(Color::Empty), 2);
    assert_eq!(Board::from_position(&position), b);
}

#[test]
fn test_position_parse_errors() {
    assert_eq!("12".parse::<Position>(), Err(ParseError::NotSquare(2)));
    assert_eq!("".parse::<Position>(), Err(ParseError::NotSquare(0)));
    assert_eq!("12x2".parse::<Position>(), Err(ParseError::UnknownColor('x')));
    assert_eq!(
        "1232".parse::<Position>(),
        Err(ParseError::NotStorable(Color::OutOfBounds))
    );
}

#[test]
fn test_render() {
    let b = board(&["B.", ".W"]);
    assert_eq!(b.render(), "     0  1\n  0  X  +\n  1  +  O\n");
}
