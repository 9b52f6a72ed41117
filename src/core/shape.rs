//! Shape module - square tetromino occupancy matrices
//!
//! Each kind is defined by a square boolean matrix (side 2 for O, 3 for
//! J/L/S/T/Z, 4 for I) in its spawn orientation. Rotation turns the matrix
//! clockwise in place; there are no kick tables, so a rotation that does
//! not fit is simply rejected by the caller.

use crate::types::PieceKind;

/// Largest matrix side among the bundled kinds (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix for a tetromino in some rotation.
///
/// Cells outside `size` are always false. Rotating preserves both the side
/// length and the occupied-cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row literals (1 = occupied). Rows must form a
    /// square of side 2..=4.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        debug_assert!((2..=MAX_SHAPE_SIZE).contains(&size));

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), size);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            size: size as u8,
            cells,
        }
    }

    /// Spawn-orientation matrix for a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        }
    }

    /// Matrix side length (2, 3 or 4)
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at (row, col) within the matrix is occupied
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Number of occupied cells (4 for every bundled kind)
    pub fn cell_count(&self) -> usize {
        let n = self.size();
        self.cells[..n]
            .iter()
            .map(|row| row[..n].iter().filter(|&&v| v).count())
            .sum()
    }

    /// Iterate the occupied (row, col) offsets within the matrix
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |r| (0..n).filter(move |&c| self.cells[r][c]).map(move |c| (r, c)))
    }

    /// Return the matrix rotated 90 degrees clockwise
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..n {
            for c in 0..n {
                cells[r][c] = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_per_kind() {
        assert_eq!(Shape::for_kind(PieceKind::I).size(), 4);
        assert_eq!(Shape::for_kind(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(Shape::for_kind(kind).size(), 3);
        }
    }

    #[test]
    fn test_every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::for_kind(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_preserves_size_and_count() {
        for kind in PieceKind::ALL {
            let shape = Shape::for_kind(kind);
            let rotated = shape.rotated_cw();
            assert_eq!(rotated.size(), shape.size());
            assert_eq!(rotated.cell_count(), shape.cell_count());
        }
    }

    #[test]
    fn test_four_rotations_restore_original() {
        for kind in PieceKind::ALL {
            let shape = Shape::for_kind(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let shape = Shape::for_kind(PieceKind::O);
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn test_i_rotates_to_vertical() {
        let vertical = Shape::for_kind(PieceKind::I).rotated_cw();
        let offsets: Vec<_> = vertical.offsets().collect();
        assert_eq!(offsets, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_t_spawn_offsets() {
        let offsets: Vec<_> = Shape::for_kind(PieceKind::T).offsets().collect();
        assert_eq!(offsets, vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }
}
