//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Fill color for a shape id
pub fn shape_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::T => Rgb::new(170, 90, 210),
        PieceKind::I => Rgb::new(120, 210, 240),
    }
}

/// Board, falling piece, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the cells in most fonts.
        Self { cell_w: 2 }
    }
}

/// Which frame of a flash animation to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashFrame {
    /// Regular display: game-over overlay shown, filled rows unmarked
    #[default]
    Steady,
    /// Filled rows inverted, game-over overlay shown
    Lit,
    /// Filled rows unmarked, game-over overlay hidden
    Dark,
}

/// Where the board frame landed in the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl GameView {
    /// Board frame position for a viewport, centered horizontally and vertically.
    pub fn board_frame(&self, viewport: Viewport) -> BoardFrame {
        let width = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let height = BOARD_HEIGHT as u16 + 2;
        BoardFrame {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Terminal position of the top-left column of board cell (x, y).
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let frame = self.board_frame(viewport);
        (frame.x + 1 + x * self.cell_w, frame.y + 1 + y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `flash` picks the animation frame: [`FlashFrame::Lit`] inverts the rows
    /// being cleared, [`FlashFrame::Dark`] hides the game-over overlay.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        flash: FlashFrame,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let frame = self.board_frame(viewport);
        let board_w = frame.width - 2;
        let board_h = frame.height - 2;

        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', Style::new(PLAY_BG, PLAY_BG));
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), PANEL_BG));

        for (y, row) in snap.board.iter().enumerate() {
            let flashing = flash == FlashFrame::Lit
                && snap.row_clearing()
                && snap.filled_rows.contains(&y);
            for (x, &value) in row.iter().enumerate() {
                self.draw_cell(fb, viewport, x as u16, y as u16, value, flashing);
            }
        }

        if !snap.row_clearing() && !snap.game_over() {
            self.draw_piece(fb, viewport, &snap.active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() && flash != FlashFrame::Dark {
            draw_overlay(fb, frame, "GAME OVER", "n new  q quit");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        flash: FlashFrame,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, flash, viewport, &mut fb);
        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        x: u16,
        y: u16,
        value: Cell,
        flashing: bool,
    ) {
        let (px, py) = self.cell_origin(viewport, x, y);
        let Some(kind) = PieceKind::from_id(value) else {
            let dot = Style::new(Rgb::new(70, 70, 80), PLAY_BG);
            fb.fill_rect(px, py, self.cell_w, 1, '·', dot);
            return;
        };
        let style = Style::new(shape_color(kind), PLAY_BG);
        let style = if flashing { style.reverse().bold() } else { style };
        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, viewport: Viewport, piece: &Piece) {
        for (x, y, value) in piece.cells() {
            if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            self.draw_cell(fb, viewport, x as u16, y as u16, value, false);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let panel_x = frame.x.saturating_add(frame.width).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(2);
        for piece in &snap.queue {
            y = self.draw_preview(fb, panel_x, y, piece);
            y = y.saturating_add(1);
        }
    }

    /// Draw the non-empty rows of a piece matrix; returns the row below it.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) -> u16 {
        let style = Style::new(shape_color(piece.kind()), PANEL_BG);
        let n = piece.size();
        let mut cy = y;
        for row in piece.matrix().iter().take(n) {
            if row[..n].iter().all(|&v| v == EMPTY) {
                continue;
            }
            for (dx, &v) in row[..n].iter().enumerate() {
                if v != EMPTY {
                    fb.fill_rect(x + dx as u16 * self.cell_w, cy, self.cell_w, 1, '█', style);
                }
            }
            cy = cy.saturating_add(1);
        }
        cy
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: BoardFrame, style: Style) {
    let BoardFrame { x, y, width: w, height: h } = frame;
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

fn draw_overlay(fb: &mut FrameBuffer, frame: BoardFrame, title: &str, hint: &str) {
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let mid_y = frame.y.saturating_add(frame.height / 2);
    for (dy, text) in [title, hint].into_iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.width.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y + dy as u16, text, style);
    }
}
