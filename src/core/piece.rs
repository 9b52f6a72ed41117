//! Piece module - the active falling tetromino
//!
//! A piece is a kind plus its current shape matrix and the matrix's
//! top-left anchor in board coordinates. The anchor row is negative at
//! spawn so pieces enter the field from above.

use crate::core::shape::Shape;
use crate::types::{FIELD_WIDTH, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board row of the shape matrix's top-left cell (may be negative)
    pub row: i8,
    /// Board column of the shape matrix's top-left cell
    pub col: i8,
}

impl Piece {
    /// Construct a new piece at its spawn anchor.
    ///
    /// Column centers the matrix: `floor(width / 2) - ceil(side / 2)`.
    /// Row is -1 for I and -2 for everything else, compensating for the
    /// empty top rows of the taller matrices.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::for_kind(kind);
        let side = shape.size() as i8;
        let col = (FIELD_WIDTH as i8) / 2 - (side + 1) / 2;
        let row = if kind == PieceKind::I { -1 } else { -2 };

        Self {
            kind,
            shape,
            row,
            col,
        }
    }

    /// Iterate the piece's occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(r, c)| (self.row + r as i8, self.col + c as i8))
    }
}
