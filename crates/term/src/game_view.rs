//! GameView: maps a `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O). The layout is fixed: the well on the left, drawn two
//! columns per board cell between `<!` `!>` walls, and a status panel on the
//! right.

use crate::core::pieces::occupied_cells;
use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Ink};
use crate::types::{GameMode, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell.
const CELL_W: u16 = 2;
const WALL_W: u16 = 2;
const WELL_W: u16 = BOARD_WIDTH as u16 * CELL_W;
const PANEL_X: u16 = WALL_W * 2 + WELL_W + 2;

pub const VIEW_WIDTH: u16 = PANEL_X + 14;
pub const VIEW_HEIGHT: u16 = BOARD_HEIGHT as u16 + 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into a fresh framebuffer of the view's size.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(VIEW_WIDTH, VIEW_HEIGHT);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, reusing its storage.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();
        self.draw_well(snap, fb);
        if snap.playable() {
            for (x, y) in snap.active_cells() {
                draw_cell(fb, x, y, "[]", Ink::Active);
            }
        }
        self.draw_panel(snap, fb);
        self.draw_banner(snap, fb);
    }

    fn draw_well(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let right_wall = WALL_W + WELL_W;
        for (y, row) in snap.board.iter().enumerate() {
            let ty = y as u16;
            fb.put_str(0, ty, "<!", Ink::Wall);
            fb.put_str(right_wall, ty, "!>", Ink::Wall);
            for (x, &code) in row.iter().enumerate() {
                let (text, ink) = match code {
                    0 => (" .", Ink::Dim),
                    1 => ("[]", Ink::Block),
                    _ => ("::", Ink::Marked),
                };
                draw_cell(fb, x as i8, y as i8, text, ink);
            }
        }

        let floor = BOARD_HEIGHT as u16;
        fb.put_str(0, floor, "<!", Ink::Wall);
        for x in 0..WELL_W {
            fb.set(WALL_W + x, floor, Glyph::new('=', Ink::Wall));
        }
        fb.put_str(right_wall, floor, "!>", Ink::Wall);
    }

    fn draw_panel(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.put_str(PANEL_X, 0, "NEXT", Ink::Title);
        for (dx, dy) in occupied_cells(snap.next.kind, snap.next.rotation) {
            fb.put_str(PANEL_X + dx as u16 * CELL_W, 1 + dy as u16, "[]", Ink::Block);
        }

        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score),
            ("TOP", snap.top_score),
            ("LEVEL", snap.level as u32),
            ("LINES", snap.lines),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = 6 + i as u16 * 3;
            fb.put_str(PANEL_X, y, label, Ink::Title);
            fb.put_str(PANEL_X, y + 1, &value.to_string(), Ink::Plain);
        }
    }

    fn draw_banner(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let lines: [&str; 2] = match snap.mode {
            GameMode::Init => ["FRAMETRIS", "PRESS ANY KEY"],
            GameMode::LevelSelect => ["SELECT LEVEL", "UP/DOWN  A=GO"],
            GameMode::Paused => ["PAUSED", ""],
            GameMode::GameOver => ["GAME OVER", ""],
            GameMode::Playing => return,
        };

        let mid = BOARD_HEIGHT as u16 / 2 - 1;
        for (i, text) in lines.iter().enumerate() {
            banner_line(fb, mid + i as u16, text);
        }
        if snap.mode == GameMode::LevelSelect {
            banner_line(fb, mid + 2, &format!("LEVEL {:02}", snap.level));
        }
    }
}

/// Draw one board cell; cells outside the board are skipped.
fn draw_cell(fb: &mut FrameBuffer, x: i8, y: i8, text: &str, ink: Ink) {
    if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
        return;
    }
    fb.put_str(WALL_W + x as u16 * CELL_W, y as u16, text, ink);
}

/// Centered text across the well, on a blanked row.
fn banner_line(fb: &mut FrameBuffer, y: u16, text: &str) {
    for x in 0..WELL_W {
        fb.set(WALL_W + x, y, Glyph::BLANK);
    }
    let len = text.chars().count() as u16;
    let x = WALL_W + WELL_W.saturating_sub(len) / 2;
    fb.put_str(x, y, text, Ink::Title);
}
