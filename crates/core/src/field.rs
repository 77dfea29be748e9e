//! Playfield abstraction shared by the 2D board and the 3D volume.
//!
//! A [`Session`](crate::session::Session) is generic over a [`Field`]; the
//! field owns the grid and answers every geometric question (spawn position,
//! collisions, rotation legality, locking, clearing), so the session logic is
//! written once for both dimensionalities.

use arrayvec::ArrayVec;

use crate::types::{Color, Offset, PieceKind, Point};
use crate::voxels::MAX_VOXEL_CELLS;

/// Absolute cells of a piece
pub type PieceCells = ArrayVec<Point, MAX_VOXEL_CELLS>;

/// A piece that can fall through a [`Field`].
pub trait FallingPiece: Copy + std::fmt::Debug {
    fn kind(&self) -> PieceKind;

    fn color(&self) -> Color;

    /// Top-left-front corner of the piece's local bounding box
    fn origin(&self) -> Point;

    /// The same piece translated by `by` (no legality check).
    fn shifted(&self, by: Offset) -> Self;

    /// Absolute grid coordinates of every occupied cell
    fn cells(&self) -> PieceCells;
}

/// A fixed-size grid that pieces fall through.
pub trait Field: Clone + std::fmt::Debug {
    type Piece: FallingPiece;

    /// New piece of `kind` at this field's spawn position (may collide).
    fn spawn_piece(&self, kind: PieceKind) -> Self::Piece;

    /// Whether `piece` moved by `by` would collide.
    fn blocked(&self, piece: &Self::Piece, by: Offset) -> bool;

    /// The piece turned one quarter, if the field supports rotation and the
    /// turned piece does not collide. No kicks are attempted.
    fn turned(&self, piece: &Self::Piece, clockwise: bool) -> Option<Self::Piece>;

    /// Write the piece into the grid, skipping cells outside it.
    fn lock(&mut self, piece: &Self::Piece);

    /// Remove every full line (2D) or layer (3D); returns how many.
    fn clear_full(&mut self) -> usize;

    /// An empty field with the same dimensions.
    fn emptied(&self) -> Self;

    /// Visit every occupied cell with its color.
    fn for_each_occupied(&self, f: impl FnMut(Point, Color));

    /// Number of occupied cells.
    fn occupied_count(&self) -> usize {
        let mut n = 0;
        self.for_each_occupied(|_, _| n += 1);
        n
    }
}
