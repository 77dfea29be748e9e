//! Pieces tests - shape catalog, colors and the rotation transform

use tui_blockfall::core::pieces::{color, oriented_shape, rotate, shape, Shape};
use tui_blockfall::types::PieceKind;

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(shape(kind).cells().len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_t_piece_cells() {
    let t = shape(PieceKind::T);
    assert_eq!((t.width(), t.height()), (3, 2));
    assert_eq!(t.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_i_piece_turns_upright() {
    let upright = rotate(&shape(PieceKind::I), 1);
    assert_eq!(upright, Shape::from_rows(&["#", "#", "#", "#"]));
    assert_eq!((upright.width(), upright.height()), (1, 4));
}

#[test]
fn test_t_clockwise_points_right() {
    let t = rotate(&shape(PieceKind::T), 1);
    assert_eq!(t, Shape::from_rows(&["#.", "##", "#."]));
}

#[test]
fn test_s_clockwise() {
    let s = rotate(&shape(PieceKind::S), 1);
    assert_eq!(s, Shape::from_rows(&["#.", "##", ".#"]));
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = shape(PieceKind::O);
    for times in 0..4 {
        assert_eq!(rotate(&o, times), o);
    }
}

#[test]
fn test_four_turns_return_to_start() {
    for kind in PieceKind::ALL {
        let base = shape(kind);
        assert_eq!(rotate(&base, 4), base);
        assert_eq!(rotate(&rotate(&base, 1), 3), base, "{:?}", kind);
        assert_eq!(rotate(&rotate(&base, 2), 2), base, "{:?}", kind);
    }
}

#[test]
fn test_oriented_shape_matches_rotate() {
    for kind in PieceKind::ALL {
        for o in 0..4 {
            assert_eq!(oriented_shape(kind, o), rotate(&shape(kind), o));
        }
    }
}

#[test]
fn test_colors_are_distinct() {
    let colors: Vec<_> = PieceKind::ALL.iter().map(|k| color(*k)).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
