//! Screen drawing. Every function writes through [`DisplayPort`] only.
//!
//! A full repaint is issued on every mode entry; in between, only the
//! regions flagged in [`RenderRequest`] are touched.

use super::{
    BACK_BUTTON, BACKGROUND, COMBO_LABEL_Y, COMBO_VALUE_Y, CONTINUE_BUTTON, HIGHLIGHT,
    NEXT_BUTTON, PLAY_BUTTON, PLAY_HEIGHT, PLAY_WIDTH, QUIT_BUTTON, Rect, SCORE_LABEL_Y,
    SCORE_RANK_X, SCORE_ROW_PITCH, SCORE_ROW_TOP, SCORE_VALUE_X, SCORE_VALUE_Y, SCORES_BUTTON,
    SIDEBAR_WIDTH, SYMBOL_RADIUS, card_rect, cursor_rect, score_row_rect, sidebar_value_rect,
    symbol_centre, value_colour,
};
use crate::app::ports::{Colour, DisplayPort};
use crate::fsm::GameMode;
use crate::fsm::context::{GameContext, RenderRequest};
use crate::game::grid::{CELL_COUNT, MENU_CELL};
use crate::game::{MenuChoice, PauseChoice};

/// Draw whatever `request` asks for, given the mode the FSM is now in.
pub fn render<D: DisplayPort + ?Sized>(
    display: &mut D,
    mode: GameMode,
    ctx: &GameContext,
    request: RenderRequest,
) {
    if request.full {
        match mode {
            GameMode::Menu => draw_menu(display, ctx.menu_choice),
            GameMode::Playing => draw_play_field(display, ctx),
            GameMode::Paused => draw_pause(display, ctx),
            GameMode::ScoreEntry => draw_game_over(display, ctx.score.score()),
            GameMode::ScoreBoard => draw_scoreboard(display, ctx),
        }
        return;
    }

    match mode {
        GameMode::Menu if request.highlight => {
            menu_highlight(display, ctx.menu_choice);
        }
        GameMode::Paused if request.highlight => {
            pause_highlight(display, ctx.pause_choice);
        }
        GameMode::Playing => {
            for position in 0..CELL_COUNT {
                if request.cards & (1 << position) != 0 {
                    draw_card(display, ctx, position);
                }
            }
            if request.highlight {
                draw_cursor(display, ctx.cursor.position());
            }
            if request.sidebar {
                draw_sidebar_values(display, ctx);
            }
        }
        _ => {}
    }
}

fn outline<D: DisplayPort + ?Sized>(display: &mut D, r: Rect, colour: Colour) {
    display.draw_rect(r.x, r.y, r.w, r.h, colour);
}

fn text<D: DisplayPort + ?Sized>(display: &mut D, x: i32, y: i32, s: &str) {
    display.set_cursor(x, y);
    display.print(s);
}

fn number<D: DisplayPort + ?Sized>(display: &mut D, x: i32, y: i32, n: u16) {
    display.set_cursor(x, y);
    display.print_number(u32::from(n));
}

// ───────────────────────────────────────────────────────────────
// Title menu
// ───────────────────────────────────────────────────────────────

fn draw_menu<D: DisplayPort + ?Sized>(display: &mut D, choice: MenuChoice) {
    display.clear(Colour::BLACK);
    display.set_text_colour(Colour::WHITE, Colour::BLACK);
    display.set_text_size(4);
    text(display, 6, 80, "MATCHING GAME");
    display.set_text_size(3);
    text(display, 48, 200, "Play");
    text(display, 170, 200, "Scores");
    menu_highlight(display, choice);
}

fn menu_highlight<D: DisplayPort + ?Sized>(display: &mut D, choice: MenuChoice) {
    let (on, off) = match choice {
        MenuChoice::Play => (PLAY_BUTTON, SCORES_BUTTON),
        MenuChoice::Scores => (SCORES_BUTTON, PLAY_BUTTON),
    };
    outline(display, off, Colour::BLACK);
    outline(display, on, HIGHLIGHT);
}

// ───────────────────────────────────────────────────────────────
// Play field
// ───────────────────────────────────────────────────────────────

fn draw_play_field<D: DisplayPort + ?Sized>(display: &mut D, ctx: &GameContext) {
    display.clear(BACKGROUND);
    display.fill_rect(PLAY_WIDTH, 0, SIDEBAR_WIDTH as u32, PLAY_HEIGHT as u32, Colour::BLACK);

    display.set_text_size(1);
    display.set_text_colour(Colour::WHITE, Colour::BLACK);
    text(display, PLAY_WIDTH + 1, SCORE_LABEL_Y, "Score");
    text(display, PLAY_WIDTH + 1, COMBO_LABEL_Y, "Combo");
    draw_sidebar_values(display, ctx);

    for position in 0..CELL_COUNT {
        draw_card(display, ctx, position);
    }
    draw_cursor(display, ctx.cursor.position());
}

fn draw_sidebar_values<D: DisplayPort + ?Sized>(display: &mut D, ctx: &GameContext) {
    for (y, value) in [(SCORE_VALUE_Y, ctx.score.score()), (COMBO_VALUE_Y, ctx.score.combo())] {
        let r = sidebar_value_rect(y);
        display.fill_rect(r.x, r.y, r.w, r.h, Colour::BLACK);
        display.set_text_size(1);
        display.set_text_colour(Colour::WHITE, Colour::BLACK);
        number(display, r.x, r.y, value);
    }
}

fn draw_card<D: DisplayPort + ?Sized>(display: &mut D, ctx: &GameContext, position: usize) {
    let border = card_rect(position);
    let face = border.inset();

    if position == MENU_CELL {
        display.fill_rect(border.x, border.y, border.w, border.h, Colour::WHITE);
        display.fill_rect(face.x, face.y, face.w, face.h, Colour::RED);
        display.set_text_size(1);
        display.set_text_colour(Colour::WHITE, Colour::RED);
        text(display, border.x + 2, border.y + 15, "Menu");
        return;
    }

    let card = ctx.grid.card(position);
    match (card.face_up, card.match_value) {
        (true, Some(value)) => {
            outline(display, border, Colour::BLUE);
            display.fill_rect(face.x, face.y, face.w, face.h, Colour::WHITE);
            let (cx, cy) = symbol_centre(position);
            display.fill_circle(cx, cy, SYMBOL_RADIUS, value_colour(value));
        }
        _ => {
            outline(display, border, Colour::WHITE);
            display.fill_rect(face.x, face.y, face.w, face.h, Colour::BLUE);
        }
    }
}

fn draw_cursor<D: DisplayPort + ?Sized>(display: &mut D, position: usize) {
    for p in 0..CELL_COUNT {
        if p != position {
            outline(display, cursor_rect(p), BACKGROUND);
        }
    }
    outline(display, cursor_rect(position), HIGHLIGHT);
}

// ───────────────────────────────────────────────────────────────
// Pause
// ───────────────────────────────────────────────────────────────

fn draw_pause<D: DisplayPort + ?Sized>(display: &mut D, ctx: &GameContext) {
    display.clear(Colour::BLACK);
    display.set_text_colour(Colour::WHITE, Colour::BLACK);
    display.set_text_size(3);
    text(display, 107, 40, "Paused");
    text(display, 107, 70, "Score:");
    number(display, 125, 94, ctx.score.score());

    display.set_text_size(2);
    text(display, 73, 200, "Continue");
    text(display, 187, 200, "Quit");
    pause_highlight(display, ctx.pause_choice);
}

fn pause_highlight<D: DisplayPort + ?Sized>(display: &mut D, choice: PauseChoice) {
    let (on, off) = match choice {
        PauseChoice::Continue => (CONTINUE_BUTTON, QUIT_BUTTON),
        PauseChoice::Quit => (QUIT_BUTTON, CONTINUE_BUTTON),
    };
    outline(display, off, Colour::BLACK);
    outline(display, on, HIGHLIGHT);
}

// ───────────────────────────────────────────────────────────────
// Game over / highscores
// ───────────────────────────────────────────────────────────────

fn draw_game_over<D: DisplayPort + ?Sized>(display: &mut D, score: u16) {
    display.clear(Colour::BLACK);
    display.set_text_colour(Colour::WHITE, Colour::BLACK);
    display.set_text_size(5);
    text(display, 27, 27, "Game Over");
    display.set_text_size(3);
    text(display, 116, 100, "Score:");
    number(display, 134, 124, score);
    display.set_text_size(2);
    text(display, 137, 220, "Next");
    outline(display, NEXT_BUTTON, HIGHLIGHT);
}

fn draw_scoreboard<D: DisplayPort + ?Sized>(display: &mut D, ctx: &GameContext) {
    display.clear(Colour::BLACK);
    display.set_text_colour(Colour::WHITE, Colour::BLACK);
    display.set_text_size(3);
    text(display, 71, 10, "Highscores");
    display.set_text_size(2);
    text(display, 137, 220, "Back");
    outline(display, BACK_BUTTON, HIGHLIGHT);

    for (row, &score) in ctx.highscores.scores().iter().enumerate() {
        let y = SCORE_ROW_TOP + SCORE_ROW_PITCH * row as i32;
        number(display, SCORE_RANK_X, y, row as u16 + 1);
        number(display, SCORE_VALUE_X, y, score);
        if ctx.scoreboard_highlight == Some(row) {
            outline(display, score_row_rect(row), HIGHLIGHT);
        }
    }
}
