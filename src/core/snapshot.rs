//! Read-only render snapshot of the game state.
//!
//! The render boundary consumes one of these per tick and never touches
//! core state. `GameState::snapshot_into` refills an existing snapshot so
//! the render loop allocates nothing per frame.

use crate::core::piece::Piece;
use crate::core::shape::Shape;
use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH, GamePhase, PieceKind};

/// Active piece as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Flat row-major copy of the board cells
    pub field: [Cell; (FIELD_WIDTH * FIELD_HEIGHT) as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    /// Cell at (row, col), None outside the field
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= FIELD_HEIGHT as usize || col >= FIELD_WIDTH as usize {
            return None;
        }
        Some(self.field[row * FIELD_WIDTH as usize + col])
    }

    pub fn clear(&mut self) {
        self.field = [None; (FIELD_WIDTH * FIELD_HEIGHT) as usize];
        self.active = None;
        self.score = 0;
        self.high_score = 0;
        self.phase = GamePhase::Running;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [None; (FIELD_WIDTH * FIELD_HEIGHT) as usize],
            active: None,
            score: 0,
            high_score: 0,
            phase: GamePhase::Running,
        }
    }
}
