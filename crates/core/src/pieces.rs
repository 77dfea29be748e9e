//! Pieces module - tetromino shapes, colors and the 2D rotation transform
//!
//! Shapes are stored as small occupancy matrices inside a fixed 4x4 box, so a
//! rotated shape is a plain `Copy` value and rotating never allocates.
//! Rotation has no kick tables: a rotated shape is anchored at the same origin.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest bounding box edge of any 2D shape
pub const MAX_SHAPE_EDGE: usize = 4;

/// Occupied `(col, row)` offsets of a shape
pub type ShapeCells = ArrayVec<(i16, i16), 16>;

/// A 2D occupancy matrix in a local bounding box of `width x height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE],
}

impl Shape {
    /// Build a shape from rows of `#` (occupied) and `.` (empty).
    ///
    /// Rows longer than the widest supported edge are truncated.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut out = [[false; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        let height = rows.len().min(MAX_SHAPE_EDGE);
        let mut width = 0usize;
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, ch) in row.chars().take(MAX_SHAPE_EDGE).enumerate() {
                out[y][x] = ch == '#';
                width = width.max(x + 1);
            }
        }
        Self {
            width: width as u8,
            height: height as u8,
            rows: out,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the local cell `(x, y)` is occupied
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Occupied offsets, row-major.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }

    /// One clockwise quarter turn: transpose, then reverse the row order.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top.
    fn quarter_turn(&self) -> Self {
        let mut rows = [[false; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        let h = self.height as usize;
        for (i, row) in rows.iter_mut().enumerate().take(self.width as usize) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }
}

/// Rotate a shape clockwise by `times` quarter turns (taken modulo 4).
///
/// Pure: the input is untouched and a new shape is returned.
pub fn rotate(shape: &Shape, times: u8) -> Shape {
    let mut out = *shape;
    for _ in 0..(times % 4) {
        out = out.quarter_turn();
    }
    out
}

/// Canonical (orientation 0) shape of a piece kind
pub fn shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&["####"]),
        PieceKind::O => Shape::from_rows(&["##", "##"]),
        PieceKind::T => Shape::from_rows(&[".#.", "###"]),
        PieceKind::S => Shape::from_rows(&[".##", "##."]),
        PieceKind::Z => Shape::from_rows(&["##.", ".##"]),
        PieceKind::J => Shape::from_rows(&["#..", "###"]),
        PieceKind::L => Shape::from_rows(&["..#", "###"]),
    }
}

/// Shape of a piece kind in the given orientation (0..3)
pub fn oriented_shape(kind: PieceKind, orientation: u8) -> Shape {
    rotate(&shape(kind), orientation)
}

/// Display color of a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::from_hex(0x00f0f0),
        PieceKind::O => Color::from_hex(0xf0f000),
        PieceKind::T => Color::from_hex(0xa000f0),
        PieceKind::S => Color::from_hex(0x00f000),
        PieceKind::Z => Color::from_hex(0xf00000),
        PieceKind::J => Color::from_hex(0x0000f0),
        PieceKind::L => Color::from_hex(0xf0a000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_quarter_turn_matches_transpose_reverse() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let r = rotate(&shape(PieceKind::T), 1);
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(r, Shape::from_rows(&["#.", "##", "#."]));
    }

    #[test]
    fn i_piece_turns_vertical() {
        let r = rotate(&shape(PieceKind::I), 1);
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!(r.cells().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn four_turns_is_identity() {
        for kind in PieceKind::ALL {
            let s = shape(kind);
            assert_eq!(rotate(&s, 4), s);
            assert_eq!(rotate(&rotate(&s, 1), 3), s);
        }
    }

    #[test]
    fn rotate_does_not_touch_input() {
        let s = shape(PieceKind::L);
        let copy = s;
        let _ = rotate(&s, 2);
        assert_eq!(s, copy);
    }

    #[test]
    fn l_half_turn() {
        assert_eq!(
            oriented_shape(PieceKind::L, 2),
            Shape::from_rows(&["###", "#.."])
        );
    }
}
