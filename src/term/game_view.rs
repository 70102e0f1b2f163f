//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! Pure layout code, no I/O; unit tests render into buffers directly.

use crate::core::GameSession;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

/// Display color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

/// Composes one frame: bordered board, locked stack, falling piece,
/// side panel, game-over overlay.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the tall glyph aspect of most terminals.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the session into `fb`, resizing it to the viewport. The board
    /// is centered; whatever does not fit gets clipped.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let rows = session.playfield().rows() as u16;
        let cols = session.playfield().cols() as u16;
        let board_w = cols * self.cell_w;
        let board_h = rows * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked stack, empty cells as faint grid dots
        for row in 0..rows {
            for col in 0..cols {
                match session.playfield().get(row as usize, col as usize).flatten() {
                    Some(kind) => self.draw_piece_cell(fb, start_x, start_y, row, col, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, row, col),
                }
            }
        }

        // Falling piece; cells above the top edge stay invisible
        let piece = session.current();
        for (r, c) in piece.matrix.occupied() {
            let row = piece.row + r as i16;
            let col = piece.col + c as i16;
            if row >= 0 && row < rows as i16 && col >= 0 && col < cols as i16 {
                self.draw_piece_cell(fb, start_x, start_y, row as u16, col as u16, piece.kind);
            }
        }

        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);

        if session.is_game_over() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
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

    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        self.fill_cell(fb, start_x, start_y, row, col, '█', style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.fill_cell(fb, start_x, start_y, row, col, '·', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(180, 180, 180),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &session.lines().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["←/→ move", "↓ drop", "↑ rotate", "q quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
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
        let len = text.chars().count() as u16;
        let y = start_y + frame_h / 2;
        let x = start_x + frame_w.saturating_sub(len) / 2;
        // Black band behind the text so it reads over the stack
        fb.fill_rect(start_x + 1, y, frame_w.saturating_sub(2), 1, ' ', style);
        fb.put_str(x, y, text, style);
    }
}
