//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playfield dimensions
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 20;

/// Frame duration the shell drives the game at (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity fires once the per-piece tick counter exceeds this value
pub const GRAVITY_INTERVAL_TICKS: u32 = 50;

/// Rows above this index count as past the death line when a piece locks
pub const DEATH_LINE_ROW: i8 = 2;

/// Points per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per successful soft-drop row
pub const SOFT_DROP_POINTS: u32 = 1;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in canonical order (one full bag)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game lifecycle phase
///
/// `GameOver` is terminal; a new game requires a fresh `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Level-triggered input snapshot sampled once per tick.
///
/// Each flag is true while the corresponding key is held, so holding a key
/// repeats its effect every tick. Pause is edge-triggered and handled
/// outside this snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        left: false,
        right: false,
        soft_drop: false,
        rotate: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right || self.soft_drop || self.rotate
    }
}
