//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is then flushed to the terminal
//! backend; no TUI widget framework. The view layer is pure and consumes
//! only read-only snapshots, keeping the render boundary one-directional.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
