//! 3D piece catalog.
//!
//! Each kind has one fixed layered shape; layers run along the depth (z) axis,
//! and each layer is a `rows x cols` occupancy grid in the (x, y) plane.
//! These pieces never rotate.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Point};

/// Largest bounding box edge of any 3D shape
pub const MAX_VOXEL_EDGE: usize = 4;

/// Upper bound on occupied cells in one 3D shape (a full bounding box)
pub const MAX_VOXEL_CELLS: usize = MAX_VOXEL_EDGE * MAX_VOXEL_EDGE * MAX_VOXEL_EDGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelShape {
    width: u8,
    height: u8,
    depth: u8,
    /// `[z][y][x]`
    layers: [[[bool; MAX_VOXEL_EDGE]; MAX_VOXEL_EDGE]; MAX_VOXEL_EDGE],
}

impl VoxelShape {
    /// Build from layers, each layer a list of `#`/`.` rows.
    pub fn from_layers(layers: &[&[&str]]) -> Self {
        let mut out = [[[false; MAX_VOXEL_EDGE]; MAX_VOXEL_EDGE]; MAX_VOXEL_EDGE];
        let depth = layers.len().min(MAX_VOXEL_EDGE);
        let mut width = 0usize;
        let mut height = 0usize;
        for (z, rows) in layers.iter().take(depth).enumerate() {
            height = height.max(rows.len().min(MAX_VOXEL_EDGE));
            for (y, row) in rows.iter().take(MAX_VOXEL_EDGE).enumerate() {
                for (x, ch) in row.chars().take(MAX_VOXEL_EDGE).enumerate() {
                    out[z][y][x] = ch == '#';
                    width = width.max(x + 1);
                }
            }
        }
        Self {
            width: width as u8,
            height: height as u8,
            depth: depth as u8,
            layers: out,
        }
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

    /// Occupied local offsets, layer by layer.
    pub fn cells(&self) -> ArrayVec<Point, MAX_VOXEL_CELLS> {
        let mut out = ArrayVec::new();
        for z in 0..self.depth as usize {
            for y in 0..self.height as usize {
                for x in 0..self.width as usize {
                    if self.layers[z][y][x] {
                        out.push(Point::new(x as i16, y as i16, z as i16));
                    }
                }
            }
        }
        out
    }
}

/// Layered shape of a piece kind in the 3D catalog.
pub fn voxel_shape(kind: PieceKind) -> VoxelShape {
    match kind {
        // A rod lying along depth.
        PieceKind::I => VoxelShape::from_layers(&[&["#"], &["#"], &["#"], &["#"]]),
        PieceKind::O => VoxelShape::from_layers(&[&["##", "##"], &["##", "##"]]),
        PieceKind::T => VoxelShape::from_layers(&[&[".#.", "###"]]),
        PieceKind::S => VoxelShape::from_layers(&[&["##."], &[".##"]]),
        PieceKind::Z => VoxelShape::from_layers(&[&[".##"], &["##."]]),
        PieceKind::J => VoxelShape::from_layers(&[&["###"], &["#.."]]),
        PieceKind::L => VoxelShape::from_layers(&[&["###"], &["..#"]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_cell_counts() {
        let counts: Vec<usize> = PieceKind::ALL
            .iter()
            .map(|k| voxel_shape(*k).cells().len())
            .collect();
        assert_eq!(counts, vec![4, 8, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn layer_extents() {
        let i = voxel_shape(PieceKind::I);
        assert_eq!((i.width(), i.height(), i.depth()), (1, 1, 4));

        let o = voxel_shape(PieceKind::O);
        assert_eq!((o.width(), o.height(), o.depth()), (2, 2, 2));

        let t = voxel_shape(PieceKind::T);
        assert_eq!((t.width(), t.height(), t.depth()), (3, 2, 1));
    }

    #[test]
    fn s_piece_skews_across_layers() {
        let cells = voxel_shape(PieceKind::S).cells();
        assert_eq!(
            cells.as_slice(),
            &[
                Point::new(0, 0, 0),
                Point::new(1, 0, 0),
                Point::new(1, 0, 1),
                Point::new(2, 0, 1),
            ]
        );
    }

    #[test]
    fn full_bounding_box_keeps_every_cell() {
        let row = "####";
        let layer: &[&str] = &[row, row, row, row];
        let cube = VoxelShape::from_layers(&[layer, layer, layer, layer]);
        let cells = cube.cells();
        assert_eq!(cells.len(), MAX_VOXEL_CELLS);
        assert_eq!(cells.last(), Some(&Point::new(3, 3, 3)));
    }
}
