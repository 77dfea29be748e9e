//! Board module - manages the 2D game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! color of a locked piece. Cells are stored in a flat row-major vector.
//! Coordinates: (x, y) where x grows to the right and y grows downwards;
//! row 0 is the top. Rows above the board (y < 0) are treated as free space so
//! pieces may spawn or rotate partly above the visible area.

use crate::field::{FallingPiece, Field, PieceCells};
use crate::pieces::{self, Shape};
use crate::types::{Cell, Color, Offset, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// The falling piece on a 2D board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Orientation 0 shape
    pub base: Shape,
    /// Orientation index 0..3 (clockwise quarter turns from `base`)
    pub rotation: u8,
    /// `base` materialized in the current orientation
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
    pub color: Color,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        let base = pieces::shape(kind);
        Self {
            kind,
            base,
            rotation: 0,
            shape: base,
            x,
            y,
            color: pieces::color(kind),
        }
    }

    /// The same piece in another orientation, origin unchanged.
    pub fn with_rotation(&self, rotation: u8) -> Self {
        let rotation = rotation % 4;
        Self {
            rotation,
            shape: pieces::rotate(&self.base, rotation),
            ..*self
        }
    }
}

impl FallingPiece for ActivePiece {
    fn kind(&self) -> PieceKind {
        self.kind
    }

    fn color(&self) -> Color {
        self.color
    }

    fn origin(&self) -> Point {
        Point::flat(self.x, self.y)
    }

    fn shifted(&self, by: Offset) -> Self {
        Self {
            x: self.x + by.dx,
            y: self.y + by.dy,
            ..*self
        }
    }

    fn cells(&self) -> PieceCells {
        self.shape
            .cells()
            .iter()
            .map(|&(dx, dy)| Point::flat(self.x + dx, self.y + dy))
            .collect()
    }
}

/// The 2D game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Each dimension is at least one cell.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// A 10x20 board
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Whether `shape` anchored at `(x, y)` collides.
    ///
    /// Cells left/right of the board or below its bottom collide; cells above
    /// the top (y < 0) never do.
    pub fn shape_collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let gx = x + dx;
            let gy = y + dy;
            gx < 0 || gx >= self.width as i16 || gy >= self.height as i16 || self.is_occupied(gx, gy)
        })
    }

    /// Whether `piece`, offset by `(dx, dy)` and optionally re-oriented to
    /// `rotation`, would collide.
    pub fn collides(&self, piece: &ActivePiece, dx: i16, dy: i16, rotation: Option<u8>) -> bool {
        let shape = match rotation {
            Some(r) => pieces::rotate(&piece.base, r),
            None => piece.shape,
        };
        self.shape_collides(&shape, piece.x + dx, piece.y + dy)
    }

    /// Lock a piece's cells into the grid. Cells above the top row or
    /// otherwise outside the board are skipped.
    pub fn place(&mut self, piece: &ActivePiece) {
        for p in piece.cells() {
            if p.y >= 0 {
                self.set(p.x, p.y, Some(piece.color));
            }
        }
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Rows are scanned bottom to top. A full row is removed, everything above
    /// it shifts down one row, an empty row appears at the top, and the same
    /// row index is examined again.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // copy_within handles the overlapping move.
            self.cells.copy_within(0..row * width, width);
            self.cells[..width].fill(None);
            cleared += 1;
        }

        cleared
    }

    /// Spawn origin for a shape: centred horizontally, top edge on row 0.
    pub fn spawn_origin(&self, shape: &Shape) -> (i16, i16) {
        let x = (self.width / 2) as i16 - (shape.width() / 2) as i16;
        (x, 0)
    }

    /// Lowest legal y for the piece at its current x (ghost position).
    pub fn ghost_y(&self, piece: &ActivePiece) -> i16 {
        let mut dy = 0;
        while !self.collides(piece, 0, dy + 1, None) {
            dy += 1;
        }
        piece.y + dy
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows (`#` filled, anything else empty), for
    /// fixtures and tests. Filled cells get `color`.
    pub fn from_rows(width: u8, rows: &[&str], color: Color) -> Self {
        let mut board = Self::new(width, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    board.set(x as i16, y as i16, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Field for Board {
    type Piece = ActivePiece;

    fn spawn_piece(&self, kind: PieceKind) -> ActivePiece {
        let (x, y) = self.spawn_origin(&pieces::shape(kind));
        ActivePiece::new(kind, x, y)
    }

    fn blocked(&self, piece: &ActivePiece, by: Offset) -> bool {
        // No depth axis.
        by.dz != 0 || self.collides(piece, by.dx, by.dy, None)
    }

    fn turned(&self, piece: &ActivePiece, clockwise: bool) -> Option<ActivePiece> {
        let step = if clockwise { 1 } else { 3 };
        let rotation = (piece.rotation + step) % 4;
        if self.collides(piece, 0, 0, Some(rotation)) {
            return None;
        }
        Some(piece.with_rotation(rotation))
    }

    fn lock(&mut self, piece: &ActivePiece) {
        self.place(piece);
    }

    fn clear_full(&mut self) -> usize {
        self.clear_full_lines()
    }

    fn emptied(&self) -> Self {
        Self::new(self.width, self.height)
    }

    fn for_each_occupied(&self, mut f: impl FnMut(Point, Color)) {
        let width = self.width as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(color) = cell {
                f(Point::flat((i % width) as i16, (i / width) as i16), *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::new(128, 128, 128);

    #[test]
    fn test_board_index_calculation() {
        let board = Board::standard();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_above_top_is_free_but_sides_are_not() {
        let board = Board::standard();
        let piece = ActivePiece::new(PieceKind::I, 3, 0);
        assert!(!board.collides(&piece, 0, -3, None));
        assert!(board.collides(&piece, -4, 0, None));
        assert!(board.collides(&piece, 4, 0, None));
        assert!(board.collides(&piece, 0, 20, None));
    }

    #[test]
    fn test_rotation_override_uses_base_shape() {
        let board = Board::standard();
        // Vertical I at the bottom would poke through the floor.
        let piece = ActivePiece::new(PieceKind::I, 0, 18);
        assert!(!board.collides(&piece, 0, 0, Some(0)));
        assert!(board.collides(&piece, 0, 0, Some(1)));
    }

    #[test]
    fn test_place_skips_rows_above_top() {
        let mut board = Board::standard();
        let piece = ActivePiece::new(PieceKind::O, 4, -1);
        board.place(&piece);
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(5, 0));
    }

    #[test]
    fn test_clear_rechecks_same_row() {
        let mut board = Board::from_rows(
            3,
            &["...", "#..", "###", "###", ".#.", "###"],
            GRAY,
        );
        assert_eq!(board.clear_full_lines(), 3);
        let expected = Board::from_rows(3, &["...", "...", "...", "...", "#..", ".#."], GRAY);
        assert_eq!(board, expected);
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::from_rows(2, &["##", "##"], GRAY);
        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_spawn_origin_centres_shape() {
        let board = Board::standard();
        assert_eq!(board.spawn_origin(&pieces::shape(PieceKind::I)), (3, 0));
        assert_eq!(board.spawn_origin(&pieces::shape(PieceKind::O)), (4, 0));
        assert_eq!(board.spawn_origin(&pieces::shape(PieceKind::T)), (4, 0));
    }

    #[test]
    fn test_depth_moves_always_blocked() {
        let board = Board::standard();
        let piece = board.spawn_piece(PieceKind::T);
        assert!(board.blocked(&piece, Offset::new(0, 0, 1)));
        assert!(!board.blocked(&piece, Offset::DOWN));
    }
}
