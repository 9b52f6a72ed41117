//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against constructed snapshots.
//! The view draws the bordered playfield, the death-line marker, the
//! active piece, score/high score, and the pause/game-over overlays.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb, TermCell};
use crate::types::{DEATH_LINE_ROW, FIELD_HEIGHT, FIELD_WIDTH, GamePhase, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Fill color per piece kind, matching the classic palette
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),   // cyan
        PieceKind::J => Rgb::new(0, 80, 255),    // blue
        PieceKind::L => Rgb::new(255, 165, 0),   // orange
        PieceKind::O => Rgb::new(255, 255, 0),   // yellow
        PieceKind::S => Rgb::new(0, 200, 0),     // green
        PieceKind::T => Rgb::new(160, 0, 200),   // purple
        PieceKind::Z => Rgb::new(220, 0, 0),     // red
    }
}

/// A lightweight terminal view of the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one snapshot into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(TermCell::default());

        let field_px_w = (FIELD_WIDTH as u16) * self.cell_w;
        let field_px_h = (FIELD_HEIGHT as u16) * self.cell_h;
        let frame_w = field_px_w + 2;
        let frame_h = field_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_px_w, field_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Committed field cells
        for row in 0..FIELD_HEIGHT as usize {
            for col in 0..FIELD_WIDTH as usize {
                if let Some(Some(kind)) = snapshot.cell(row, col) {
                    self.draw_field_cell(&mut fb, start_x, start_y, row, col, kind);
                }
            }
        }

        // Death-line marker under the spawn buffer
        self.draw_death_line(&mut fb, start_x, start_y);

        // Active piece (cells above the field stay invisible)
        if let Some(active) = snapshot.active {
            for (r, c) in active.shape.offsets() {
                let row = active.row + r as i8;
                let col = active.col + c as i8;
                if (0..FIELD_HEIGHT as i8).contains(&row) && (0..FIELD_WIDTH as i8).contains(&col)
                {
                    self.draw_field_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        row as usize,
                        col as usize,
                        active.kind,
                    );
                }
            }
        }

        self.draw_score_panel(&mut fb, snapshot, start_x, start_y, frame_w);

        match snapshot.phase {
            GamePhase::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            GamePhase::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER!")
            }
            GamePhase::Running => {}
        }

        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        (
            start_x + 1 + col as u16 * self.cell_w,
            start_y + 1 + row as u16 * self.cell_h,
        )
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        kind: PieceKind,
    ) {
        let color = kind_color(kind);
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        let (x, y) = self.cell_origin(start_x, start_y, row, col);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_death_line(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle {
            fg: Rgb::new(220, 0, 0),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        // Drawn along the bottom edge of the row above the line, on empty
        // glyphs only, so committed cells keep their fill
        let row = (DEATH_LINE_ROW - 1) as usize;
        let (_, y) = self.cell_origin(start_x, start_y, row, 0);
        let y = y + self.cell_h - 1;
        for px in 0..(FIELD_WIDTH as u16) * self.cell_w {
            let x = start_x + 1 + px;
            if fb.get(x, y).map(|c| c.ch) == Some(' ') {
                fb.put_char(x, y, '▁', style);
            }
        }
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let panel_x = start_x + frame_w + 2;
        fb.put_str(panel_x, start_y + 1, &format!("Score: {}", snapshot.score), style);
        fb.put_str(
            panel_x,
            start_y + 2,
            &format!("High Score: {}", snapshot.high_score),
            style,
        );
        fb.put_str(panel_x, start_y + 4, "←/→ move  ↓ drop  ↑ rotate", style);
        fb.put_str(panel_x, start_y + 5, "p pause  r new game  q quit", style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let y = start_y + frame_h / 2;
        let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
        fb.fill_rect(start_x + 1, y, frame_w.saturating_sub(2), 1, ' ', style);
        fb.put_str(x, y, text, style);
    }
}
