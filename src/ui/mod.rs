//! Screen geometry and palette for the 320×240 landscape panel.
//!
//! ```text
//!  0                                   272      320
//!  ┌────────────────────────────────────┬────────┐
//!  │            play field              │ Score  │
//!  │   [ ][ ][ ][ ][ ]                  │ 1234   │
//!  │   [ ][ ][M][ ][ ]                  │ Combo  │
//!  │   [ ][ ][ ][ ][ ]                  │ 3      │
//!  └────────────────────────────────────┴────────┘
//! ```
//!
//! Everything here is plain arithmetic; [`screens`] does the drawing.

pub mod screens;

pub use screens::render;

use crate::app::ports::Colour;
use crate::game::grid::{GRID_COLUMNS, clamp_position};

pub const TFT_WIDTH: i32 = 320;
pub const TFT_HEIGHT: i32 = 240;
/// Black strip on the right holding the score readout.
pub const SIDEBAR_WIDTH: i32 = 48;
pub const PLAY_WIDTH: i32 = TFT_WIDTH - SIDEBAR_WIDTH;
pub const PLAY_HEIGHT: i32 = TFT_HEIGHT;

/// Glyph cell of the size-1 font (`FONT_6X10`).
pub const SMALL_GLYPH_W: u32 = 6;
pub const SMALL_GLYPH_H: u32 = 10;
/// Widest sidebar value: a four-digit score.
const SIDEBAR_DIGITS: u32 = 4;

pub const SCORE_LABEL_Y: i32 = 1;
pub const SCORE_VALUE_Y: i32 = 12;
pub const COMBO_LABEL_Y: i32 = 26;
pub const COMBO_VALUE_Y: i32 = 37;

/// Box cleared before a sidebar value is reprinted at row `y`.
pub const fn sidebar_value_rect(y: i32) -> Rect {
    Rect::new(PLAY_WIDTH + 1, y, SIDEBAR_DIGITS * SMALL_GLYPH_W, SMALL_GLYPH_H)
}

/// Distance between neighbouring card origins.
const CARD_PITCH: i32 = 50;
const CARD_W: u32 = 27;
const CARD_H: u32 = 37;
pub const SYMBOL_RADIUS: u32 = 10;

/// Play-field background.
pub const BACKGROUND: Colour = Colour::OLIVE;
pub const HIGHLIGHT: Colour = Colour::RED;

/// Axis-aligned box in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The same box shrunk by one pixel on every side.
    pub const fn inset(self) -> Self {
        Self::new(self.x + 1, self.y + 1, self.w - 2, self.h - 2)
    }

    /// The same box grown by `by` pixels on every side.
    pub const fn outset(self, by: i32) -> Self {
        Self::new(
            self.x - by,
            self.y - by,
            self.w + 2 * by as u32,
            self.h + 2 * by as u32,
        )
    }
}

fn cell_origin(position: usize) -> (i32, i32) {
    let p = clamp_position(position);
    let col = (p % GRID_COLUMNS) as i32;
    let row = (p / GRID_COLUMNS) as i32;
    (
        PLAY_WIDTH / 2 - 113 + CARD_PITCH * col,
        PLAY_HEIGHT / 2 - 68 + CARD_PITCH * row,
    )
}

/// Outer border of the card at `position`.
pub fn card_rect(position: usize) -> Rect {
    let (x, y) = cell_origin(position);
    Rect::new(x, y, CARD_W, CARD_H)
}

/// Cursor outline, two pixels clear of the card border.
pub fn cursor_rect(position: usize) -> Rect {
    card_rect(position).outset(2)
}

/// Centre of the coloured symbol on a face-up card.
pub fn symbol_centre(position: usize) -> (i32, i32) {
    let (x, y) = cell_origin(position);
    (x + 13, y + 17)
}

/// Face colour for each pair.
pub fn value_colour(value: u8) -> Colour {
    match value {
        0 => Colour::RED,
        1 => Colour::ORANGE,
        2 => Colour::YELLOW,
        3 => Colour::GREEN,
        4 => Colour::BLUE,
        5 => Colour::PURPLE,
        _ => Colour::PINK,
    }
}

// --- Buttons (outline boxes around labels) ---

pub const PLAY_BUTTON: Rect = Rect::new(46, 198, 73, 25);
pub const SCORES_BUTTON: Rect = Rect::new(168, 198, 109, 25);
pub const CONTINUE_BUTTON: Rect = Rect::new(71, 198, 98, 18);
pub const QUIT_BUTTON: Rect = Rect::new(185, 198, 50, 18);
pub const NEXT_BUTTON: Rect = Rect::new(135, 218, 50, 18);
pub const BACK_BUTTON: Rect = Rect::new(135, 218, 48, 18);

// --- Scoreboard rows ---

pub const SCORE_ROW_TOP: i32 = 48;
pub const SCORE_ROW_PITCH: i32 = 17;
pub const SCORE_RANK_X: i32 = 71;
pub const SCORE_VALUE_X: i32 = 203;

pub fn score_row_rect(row: usize) -> Rect {
    Rect::new(69, SCORE_ROW_TOP - 2 + SCORE_ROW_PITCH * row as i32, 182, SCORE_ROW_PITCH as u32)
}
