//! Game state module - orchestrates the core engines
//!
//! Ties together board, pieces, bag and scoring. One `tick` per frame:
//! apply the sampled input snapshot, then advance gravity. When the piece
//! can no longer fall it locks, rows clear, the score updates, and the
//! next piece spawns from the bag. A lock above the death line ends the
//! game instead.

use crate::core::board::{Board, LockOutcome};
use crate::core::piece::Piece;
use crate::core::rng::SevenBag;
use crate::core::scoring::Scoreboard;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::persist::HighScoreStore;
use crate::types::{DEATH_LINE_ROW, GamePhase, GRAVITY_INTERVAL_TICKS, InputState};

/// Complete game state
///
/// Owns the board and the active piece exclusively; all mutation happens
/// inside the tick that was invoked, never concurrently.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    bag: SevenBag,
    scoreboard: Scoreboard,
    /// Frames since the last gravity step
    gravity_counter: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and starting high score
    pub fn new(seed: u32, high_score: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            bag: SevenBag::new(seed),
            scoreboard: Scoreboard::new(high_score),
            gravity_counter: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup in tests
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Toggle pause. Ignored once the game is over.
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Draw the next kind from the bag and spawn it.
    ///
    /// Pieces spawn above the field, so a spawn itself never collides;
    /// loss is detected at lock time via the death line.
    fn spawn_piece(&mut self) {
        self.active = Some(Piece::spawn(self.bag.next()));
    }

    /// Try to shift the active piece; commits only if the target fits
    pub(crate) fn try_shift(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let row = active.row + d_row;
        let col = active.col + d_col;
        if !self.board.can_place(&active.shape, row, col) {
            return false;
        }

        self.active = Some(Piece {
            row,
            col,
            ..active
        });
        true
    }

    /// Try to rotate the active piece clockwise at its current anchor
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if !self.board.can_place(&rotated, active.row, active.col) {
            return false;
        }

        self.active = Some(Piece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Apply one input snapshot.
    ///
    /// Every direction is validated and applied independently; a failed
    /// (or successful) move never short-circuits the others. A successful
    /// soft drop scores one point.
    fn apply_input(&mut self, input: InputState) {
        if input.left {
            self.try_shift(0, -1);
        }
        if input.right {
            self.try_shift(0, 1);
        }
        if input.soft_drop && self.try_shift(1, 0) {
            self.scoreboard.award_soft_drop();
        }
        if input.rotate {
            self.try_rotate();
        }
    }

    /// Lock the active piece, clear rows, update score, spawn the next.
    ///
    /// A lock with any cell above the death line ends the game without
    /// committing anything; the board keeps its pre-lock contents.
    fn lock_active(&mut self, store: &mut dyn HighScoreStore) {
        let Some(active) = self.active else {
            return;
        };

        match self
            .board
            .place(&active.shape, active.row, active.col, active.kind, DEATH_LINE_ROW)
        {
            LockOutcome::AboveDeathLine => {
                self.game_over = true;
            }
            LockOutcome::Locked => {
                let cleared = self.board.clear_full_rows();
                self.scoreboard.award_line_clears(cleared.len(), store);
                self.spawn_piece();
            }
        }
    }

    /// Advance the game by one frame.
    ///
    /// Applies the input snapshot, then steps gravity once the counter
    /// passes its interval (the counter resets on every crossing whether
    /// or not the piece could fall). Returns true if gravity ran this
    /// tick. No-op while paused, over, or not yet started.
    pub fn tick(&mut self, input: InputState, store: &mut dyn HighScoreStore) -> bool {
        if self.paused || self.game_over || !self.started {
            return false;
        }

        self.apply_input(input);

        self.gravity_counter += 1;
        if self.gravity_counter <= GRAVITY_INTERVAL_TICKS {
            return false;
        }
        self.gravity_counter = 0;

        if !self.try_shift(1, 0) {
            self.lock_active(store);
        }
        true
    }

    /// Write a read-only render snapshot into `out`
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field.copy_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.scoreboard.score();
        out.high_score = self.scoreboard.high_score();
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
