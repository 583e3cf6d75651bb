//! Concrete mode handler functions and table builder.
//!
//! Each mode is defined by plain `fn` pointers with no closures, no
//! dynamic dispatch and no heap.
//!
//! ```text
//!          ┌──[Select: Scores]──────────────────────────────┐
//!          │                                                ▼
//!  MENU ──[Select: Play]──▶ PLAYING ──[board cleared]──▶ SCORE_ENTRY
//!    ▲                       │    ▲                         │
//!    │            [Select: menu cell] [Continue]        [Select]
//!    │                       ▼    │                         ▼
//!    └────────[Quit]────── PAUSED                       SCORE_BOARD
//!    ▲                                                      │
//!    └──────────────────────────[Select]────────────────────┘
//! ```
//!
//! Timed holds (start-of-game preview, mismatch display) are resolved at
//! the top of `playing_update`; input arriving during a hold is dropped.

use super::context::{GameContext, Hold};
use super::{GameMode, StateDescriptor};
use crate::app::events::AppEvent;
use crate::drivers::joystick::InputEvent;
use crate::game::grid::{CELL_COUNT, MENU_CELL};
use crate::game::{MatchEngine, MatchOutcome, MenuChoice, PauseChoice, SelectOutcome};
use log::{debug, info};

/// Every board position, as a redraw mask.
const ALL_CARDS: u16 = (1 << CELL_COUNT) - 1;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; GameMode::COUNT] {
    [
        // Index 0: Menu
        StateDescriptor {
            id: GameMode::Menu,
            name: "Menu",
            on_enter: Some(menu_enter),
            on_exit: None,
            on_update: menu_update,
        },
        // Index 1: Playing
        StateDescriptor {
            id: GameMode::Playing,
            name: "Playing",
            on_enter: Some(playing_enter),
            on_exit: None,
            on_update: playing_update,
        },
        // Index 2: Paused
        StateDescriptor {
            id: GameMode::Paused,
            name: "Paused",
            on_enter: Some(paused_enter),
            on_exit: None,
            on_update: paused_update,
        },
        // Index 3: ScoreEntry
        StateDescriptor {
            id: GameMode::ScoreEntry,
            name: "ScoreEntry",
            on_enter: Some(score_entry_enter),
            on_exit: None,
            on_update: score_entry_update,
        },
        // Index 4: ScoreBoard
        StateDescriptor {
            id: GameMode::ScoreBoard,
            name: "ScoreBoard",
            on_enter: Some(score_board_enter),
            on_exit: None,
            on_update: score_board_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  MENU state
// ═══════════════════════════════════════════════════════════════════════════

fn menu_enter(ctx: &mut GameContext) {
    ctx.reset_session();
    ctx.render.full = true;
}

fn menu_update(ctx: &mut GameContext) -> Option<GameMode> {
    match ctx.input {
        InputEvent::Move(dir) => {
            if ctx.menu_choice.step(dir) {
                ctx.render.highlight = true;
            }
            None
        }
        InputEvent::Select => match ctx.menu_choice {
            MenuChoice::Play => {
                ctx.reset_session();
                ctx.deal();
                ctx.emit(AppEvent::NewGame);
                info!("MENU: new game dealt, preview for {} ms", ctx.config.reveal_ms);
                Some(GameMode::Playing)
            }
            MenuChoice::Scores => {
                ctx.scoreboard_highlight = None;
                Some(GameMode::ScoreBoard)
            }
        },
        InputEvent::None => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  PLAYING state: cursor movement, card selection, pair evaluation
// ═══════════════════════════════════════════════════════════════════════════

fn playing_enter(ctx: &mut GameContext) {
    ctx.render.full = true;
}

fn playing_update(ctx: &mut GameContext) -> Option<GameMode> {
    if ctx.hold.is_some() {
        resolve_hold(ctx);
        return None;
    }

    match ctx.input {
        InputEvent::Move(dir) => {
            if ctx.cursor.step(dir) {
                ctx.render.highlight = true;
            }
            None
        }
        InputEvent::Select if ctx.cursor.position() == MENU_CELL => Some(GameMode::Paused),
        InputEvent::Select => select_card(ctx),
        InputEvent::None => None,
    }
}

/// Release an expired hold. Leaves it in place until its time is up.
fn resolve_hold(ctx: &mut GameContext) {
    match ctx.hold {
        Some(Hold::Reveal { since_ms }) if ctx.elapsed_since(since_ms) >= ctx.config.reveal_ms => {
            ctx.grid.hide_all();
            ctx.hold = None;
            ctx.render.cards |= ALL_CARDS;
            debug!("PLAYING: preview over");
        }
        Some(Hold::Mismatch { since_ms, flip })
            if ctx.elapsed_since(since_ms) >= ctx.config.mismatch_hold_ms =>
        {
            flip.conceal(&mut ctx.grid);
            ctx.hold = None;
            ctx.render.card(flip.first);
            ctx.render.card(flip.second);
        }
        _ => {}
    }
}

fn select_card(ctx: &mut GameContext) -> Option<GameMode> {
    let position = ctx.cursor.position();
    match ctx.grid.select(position) {
        SelectOutcome::Ignored => None,
        SelectOutcome::First(p) => {
            flipped(ctx, p);
            None
        }
        SelectOutcome::PairReady(_, p) => {
            flipped(ctx, p);
            evaluate_pair(ctx)
        }
    }
}

fn flipped(ctx: &mut GameContext, position: usize) {
    ctx.render.card(position);
    let value = ctx.grid.match_value(position);
    ctx.emit(AppEvent::CardFlipped { position, value });
}

fn evaluate_pair(ctx: &mut GameContext) -> Option<GameMode> {
    let outcome = MatchEngine::evaluate(&mut ctx.grid, &mut ctx.score)?;
    ctx.render.sidebar = true;
    let (score, combo) = (ctx.score.score(), ctx.score.combo());

    match outcome {
        MatchOutcome::Matched { value, points, board_cleared } => {
            ctx.emit(AppEvent::PairMatched { value, points, score, combo });
            if board_cleared {
                ctx.emit(AppEvent::BoardCleared { score });
                info!("PLAYING: board cleared with {score} points");
                return Some(GameMode::ScoreEntry);
            }
            None
        }
        MatchOutcome::Mismatched(flip) => {
            ctx.hold = Some(Hold::Mismatch { since_ms: ctx.now_ms, flip });
            ctx.emit(AppEvent::PairMismatched {
                first: flip.first,
                second: flip.second,
                score,
            });
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  PAUSED state
// ═══════════════════════════════════════════════════════════════════════════

fn paused_enter(ctx: &mut GameContext) {
    ctx.pause_choice = PauseChoice::Continue;
    ctx.render.full = true;
}

fn paused_update(ctx: &mut GameContext) -> Option<GameMode> {
    match ctx.input {
        InputEvent::Move(dir) => {
            if ctx.pause_choice.step(dir) {
                ctx.render.highlight = true;
            }
            None
        }
        InputEvent::Select => match ctx.pause_choice {
            PauseChoice::Continue => Some(GameMode::Playing),
            PauseChoice::Quit => {
                info!("PAUSED: session abandoned at {} points", ctx.score.score());
                Some(GameMode::Menu)
            }
        },
        InputEvent::None => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SCORE ENTRY state: record once, then wait for a press
// ═══════════════════════════════════════════════════════════════════════════

fn score_entry_enter(ctx: &mut GameContext) {
    let score = ctx.score.score();
    let rank = ctx.highscores.record(score);
    ctx.scoreboard_highlight = rank;
    ctx.emit(AppEvent::ScoreRecorded { score, rank });
    ctx.render.full = true;
}

fn score_entry_update(ctx: &mut GameContext) -> Option<GameMode> {
    match ctx.input {
        InputEvent::Select => Some(GameMode::ScoreBoard),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SCORE BOARD state
// ═══════════════════════════════════════════════════════════════════════════

fn score_board_enter(ctx: &mut GameContext) {
    ctx.render.full = true;
}

fn score_board_update(ctx: &mut GameContext) -> Option<GameMode> {
    match ctx.input {
        InputEvent::Select => Some(GameMode::Menu),
        _ => None,
    }
}
