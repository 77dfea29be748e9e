//! Volume module - the 3D voxel well
//!
//! Axes: x runs left to right, y runs top to bottom (gravity), z runs front to
//! back. A layer is a horizontal slab of constant y spanning every x and z.
//! Unlike the 2D board there is no headroom above the top: every cell of a
//! piece must lie inside all three bounds.
//!
//! Storage is a flat vector ordered so that each layer is contiguous
//! (`(y * depth + z) * width + x`), which makes a layer clear one slice move.

use crate::field::{FallingPiece, Field, PieceCells};
use crate::pieces;
use crate::types::{Cell, Color, Offset, PieceKind, Point, VOLUME_DEPTH, VOLUME_HEIGHT, VOLUME_WIDTH};
use crate::voxels::{self, VoxelShape};

/// The falling piece inside a [`Volume`]. 3D pieces never rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveVoxelPiece {
    pub kind: PieceKind,
    pub shape: VoxelShape,
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub color: Color,
}

impl ActiveVoxelPiece {
    pub fn new(kind: PieceKind, x: i16, y: i16, z: i16) -> Self {
        Self {
            kind,
            shape: voxels::voxel_shape(kind),
            x,
            y,
            z,
            color: pieces::color(kind),
        }
    }
}

impl FallingPiece for ActiveVoxelPiece {
    fn kind(&self) -> PieceKind {
        self.kind
    }

    fn color(&self) -> Color {
        self.color
    }

    fn origin(&self) -> Point {
        Point::new(self.x, self.y, self.z)
    }

    fn shifted(&self, by: Offset) -> Self {
        Self {
            x: self.x + by.dx,
            y: self.y + by.dy,
            z: self.z + by.dz,
            ..*self
        }
    }

    fn cells(&self) -> PieceCells {
        self.shape
            .cells()
            .iter()
            .map(|p| Point::new(self.x + p.x, self.y + p.y, self.z + p.z))
            .collect()
    }
}

/// The 3D game grid
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    width: u8,
    height: u8,
    depth: u8,
    cells: Vec<Cell>,
}

impl Volume {
    /// Create an empty volume. Each dimension is at least one cell.
    pub fn new(width: u8, height: u8, depth: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let depth = depth.max(1);
        Self {
            width,
            height,
            depth,
            cells: vec![None; width as usize * height as usize * depth as usize],
        }
    }

    /// A 5x12x5 well
    pub fn standard() -> Self {
        Self::new(VOLUME_WIDTH, VOLUME_HEIGHT, VOLUME_DEPTH)
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16, z: i16) -> Option<usize> {
        if x < 0
            || x >= self.width as i16
            || y < 0
            || y >= self.height as i16
            || z < 0
            || z >= self.depth as i16
        {
            return None;
        }
        let (w, d) = (self.width as usize, self.depth as usize);
        Some((y as usize * d + z as usize) * w + x as usize)
    }

    #[inline(always)]
    fn layer_len(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Cell at `(x, y, z)`, or None if out of bounds
    pub fn get(&self, x: i16, y: i16, z: i16) -> Option<Cell> {
        self.index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set a cell; returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, z: i16, cell: Cell) -> bool {
        match self.index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i16, y: i16, z: i16) -> bool {
        matches!(self.get(x, y, z), Some(Some(_)))
    }

    /// Whether every cell of layer `y` is filled
    pub fn is_layer_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let len = self.layer_len();
        let start = y * len;
        self.cells[start..start + len].iter().all(|c| c.is_some())
    }

    /// Whether `piece` moved by `(dx, dy, dz)` would collide. Any cell outside
    /// the volume collides, including cells above the top.
    pub fn collides(&self, piece: &ActiveVoxelPiece, dx: i16, dy: i16, dz: i16) -> bool {
        piece.shape.cells().iter().any(|p| {
            let (x, y, z) = (piece.x + dx + p.x, piece.y + dy + p.y, piece.z + dz + p.z);
            match self.get(x, y, z) {
                None => true,
                Some(cell) => cell.is_some(),
            }
        })
    }

    /// Lock a piece's in-bounds cells into the grid.
    pub fn place(&mut self, piece: &ActiveVoxelPiece) {
        for p in piece.cells() {
            self.set(p.x, p.y, p.z, Some(piece.color));
        }
    }

    /// Remove every full layer, bottom to top, shifting the layers above down
    /// and re-examining the same index. Returns the number removed.
    pub fn clear_full_layers(&mut self) -> usize {
        let len = self.layer_len();
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            let layer = y - 1;
            if !self.is_layer_full(layer) {
                y -= 1;
                continue;
            }
            self.cells.copy_within(0..layer * len, len);
            self.cells[..len].fill(None);
            cleared += 1;
        }

        cleared
    }

    /// Spawn origin: centred on x and z, top layer at y = 0.
    pub fn spawn_origin(&self, shape: &VoxelShape) -> (i16, i16, i16) {
        let x = (self.width / 2) as i16 - (shape.width() / 2) as i16;
        let z = (self.depth / 2) as i16 - (shape.depth() / 2) as i16;
        (x, 0, z)
    }

    /// Lowest legal y for the piece at its current x and z.
    pub fn ghost_y(&self, piece: &ActiveVoxelPiece) -> i16 {
        let mut dy = 0;
        while !self.collides(piece, 0, dy + 1, 0) {
            dy += 1;
        }
        piece.y + dy
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::standard()
    }
}

impl Field for Volume {
    type Piece = ActiveVoxelPiece;

    fn spawn_piece(&self, kind: PieceKind) -> ActiveVoxelPiece {
        let (x, y, z) = self.spawn_origin(&voxels::voxel_shape(kind));
        ActiveVoxelPiece::new(kind, x, y, z)
    }

    fn blocked(&self, piece: &ActiveVoxelPiece, by: Offset) -> bool {
        self.collides(piece, by.dx, by.dy, by.dz)
    }

    fn turned(&self, _piece: &ActiveVoxelPiece, _clockwise: bool) -> Option<ActiveVoxelPiece> {
        None
    }

    fn lock(&mut self, piece: &ActiveVoxelPiece) {
        self.place(piece);
    }

    fn clear_full(&mut self) -> usize {
        self.clear_full_layers()
    }

    fn emptied(&self) -> Self {
        Self::new(self.width, self.height, self.depth)
    }

    fn for_each_occupied(&self, mut f: impl FnMut(Point, Color)) {
        let (w, d) = (self.width as usize, self.depth as usize);
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(color) = cell {
                let x = i % w;
                let z = (i / w) % d;
                let y = i / (w * d);
                f(Point::new(x as i16, y as i16, z as i16), *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::new(90, 90, 90);

    fn fill_layer(volume: &mut Volume, y: i16) {
        for z in 0..volume.depth() as i16 {
            for x in 0..volume.width() as i16 {
                volume.set(x, y, z, Some(GRAY));
            }
        }
    }

    #[test]
    fn no_headroom_above_top() {
        let volume = Volume::standard();
        let piece = volume.spawn_piece(PieceKind::T);
        assert!(!volume.collides(&piece, 0, 0, 0));
        assert!(volume.collides(&piece, 0, -1, 0));
    }

    #[test]
    fn depth_bounds_collide() {
        let volume = Volume::standard();
        // Rod spans z = 0..3 at spawn on a depth of 5: one step back is fine, two is not.
        let piece = volume.spawn_piece(PieceKind::I);
        assert_eq!(piece.z, 0);
        assert!(!volume.collides(&piece, 0, 0, 1));
        assert!(volume.collides(&piece, 0, 0, 2));
        assert!(volume.collides(&piece, 0, 0, -1));
    }

    #[test]
    fn spawn_centres_on_x_and_z() {
        let volume = Volume::standard();
        assert_eq!(volume.spawn_origin(&voxels::voxel_shape(PieceKind::O)), (1, 0, 1));
        assert_eq!(volume.spawn_origin(&voxels::voxel_shape(PieceKind::T)), (1, 0, 2));
    }

    #[test]
    fn place_and_get() {
        let mut volume = Volume::standard();
        let piece = ActiveVoxelPiece::new(PieceKind::O, 0, 10, 3);
        volume.place(&piece);
        assert_eq!(volume.occupied_count(), 8);
        assert!(volume.is_occupied(1, 11, 4));
        assert_eq!(volume.get(1, 11, 4), Some(Some(pieces::color(PieceKind::O))));
        assert_eq!(volume.get(5, 0, 0), None);
    }

    #[test]
    fn layer_clear_shifts_down() {
        let mut volume = Volume::new(2, 4, 2);
        volume.set(0, 1, 1, Some(GRAY));
        fill_layer(&mut volume, 2);
        fill_layer(&mut volume, 3);
        assert!(volume.is_layer_full(3));
        assert!(!volume.is_layer_full(1));

        assert_eq!(volume.clear_full_layers(), 2);
        assert_eq!(volume.occupied_count(), 1);
        assert!(volume.is_occupied(0, 3, 1));
    }

    #[test]
    fn occupied_enumeration_reports_coordinates() {
        let mut volume = Volume::new(3, 3, 3);
        volume.set(2, 1, 0, Some(GRAY));
        let mut seen = Vec::new();
        volume.for_each_occupied(|p, _| seen.push(p));
        assert_eq!(seen, vec![Point::new(2, 1, 0)]);
    }

    #[test]
    fn never_rotates() {
        let volume = Volume::standard();
        let piece = volume.spawn_piece(PieceKind::L);
        assert!(volume.turned(&piece, true).is_none());
    }
}
