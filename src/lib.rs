//! blockfall - a terminal falling-block puzzle game.
//!
//! The crate splits into a pure core (board, pieces, bag randomizer,
//! scoring, game state) and thin boundaries around it: level-triggered
//! keyboard input, a framebuffer-based terminal renderer, and a one-scalar
//! persistence layer for the high score. The core is deterministic per
//! seed and fully exercisable without a terminal.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
