//! Terminal input module.
//!
//! Maps `crossterm` key events onto the level-triggered input model the
//! core expects: directions are held state sampled once per tick, while
//! pause, new-game and quit are edge-triggered and mapped per event.

pub mod keystate;
pub mod map;

pub use keystate::KeyState;
pub use map::{direction_for_key, is_new_game, is_pause, should_quit, Direction};
