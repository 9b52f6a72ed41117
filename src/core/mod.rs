//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! Contains the game rules, state management, and piece generation. The
//! only boundary it touches is the [`crate::persist::HighScoreStore`]
//! trait, threaded into `tick` by the caller.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, LockOutcome};
pub use game::GameState;
pub use piece::Piece;
pub use rng::{SevenBag, SimpleRng};
pub use scoring::Scoreboard;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
