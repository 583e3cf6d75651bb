//! End-to-end game flow through GameService → FSM → screens.
//!
//! Runs on the host with scripted joystick levels and a recording display;
//! every assertion is made through the public service API, the emitted
//! events, or the recorded draw calls.

use memory_match::app::events::AppEvent;
use memory_match::app::ports::Colour;
use memory_match::config::GameConfig;
use memory_match::drivers::joystick::Direction;
use memory_match::error::InputError;
use memory_match::fsm::GameMode;
use memory_match::game::HighscorePolicy;
use memory_match::game::grid::MENU_CELL;
use memory_match::ui;

use super::rig::Rig;

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn boots_into_menu_and_draws_title() {
    let rig = Rig::new(1);
    assert_eq!(rig.mode(), GameMode::Menu);
    assert!(rig.sink.contains(&AppEvent::Started(GameMode::Menu)));
    assert!(rig.display.has_printed("MATCHING GAME"));
    assert!(rig.display.has_printed("Play"));
    assert!(rig.display.has_printed("Scores"));
}

#[test]
fn button_held_at_boot_does_not_start_a_game() {
    let mut rig = Rig::new(1);
    rig.input.hold_button();
    for _ in 0..50 {
        rig.tick();
    }
    assert_eq!(rig.mode(), GameMode::Menu);
}

#[test]
fn preview_shows_every_card_then_hides_them() {
    let mut rig = Rig::new(2);
    rig.press();
    assert_eq!(rig.mode(), GameMode::Playing);
    assert!(rig.service.is_holding());
    assert!(rig.service.grid().is_complete());
    assert_eq!(rig.display.circles(), 14);
    assert!(rig.sink.contains(&AppEvent::NewGame));

    rig.idle(4000);
    assert!(!rig.service.is_holding());
    assert_eq!(rig.service.grid().face_up_count(), 0);
    assert_eq!(rig.service.cursor().position(), MENU_CELL);
}

// ── Full games ────────────────────────────────────────────────

#[test]
fn perfect_game_scores_1750_and_enters_score_entry() {
    let mut rig = Rig::new(3);
    rig.play_perfect_game();

    assert_eq!(rig.mode(), GameMode::ScoreEntry);
    assert_eq!(rig.service.score(), 1750);
    assert_eq!(rig.service.combo(), 7);
    assert_eq!(rig.service.highscores().best(), 1750);
    assert!(rig.sink.contains(&AppEvent::BoardCleared { score: 1750 }));
    assert!(rig.sink.contains(&AppEvent::ScoreRecorded {
        score: 1750,
        rank: Some(0),
    }));
    assert!(rig.sink.contains(&AppEvent::ModeChanged {
        from: GameMode::Playing,
        to: GameMode::ScoreEntry,
    }));
    assert!(rig.display.has_printed("Game Over"));
    assert!(rig.display.has_printed("1750"));
}

#[test]
fn score_entry_waits_for_press_then_highlights_new_row() {
    let mut rig = Rig::new(4);
    rig.play_perfect_game();

    rig.tilt(Direction::Right);
    rig.idle(2000);
    assert_eq!(rig.mode(), GameMode::ScoreEntry);

    rig.display.clear_log();
    rig.press();
    assert_eq!(rig.mode(), GameMode::ScoreBoard);
    assert!(rig.display.has_printed("Highscores"));
    let row = ui::score_row_rect(0);
    assert!(rig
        .display
        .outlines_in(Colour::RED)
        .contains(&(row.x, row.y, row.w, row.h)));

    rig.press();
    assert_eq!(rig.mode(), GameMode::Menu);
    assert_eq!(rig.service.score(), 0);
    assert_eq!(rig.service.combo(), 0);
}

#[test]
fn second_game_ranks_below_first() {
    let mut rig = Rig::new(5);
    rig.play_perfect_game();
    rig.press();
    rig.press();
    assert_eq!(rig.mode(), GameMode::Menu);

    // Match, miss, then six clean matches: 100 - 50 + (100 + ... + 350).
    rig.start_game();
    rig.match_value(0);
    let (a, b) = rig.mismatched_pair();
    rig.pick(a);
    rig.pick(b);
    assert_eq!((rig.service.score(), rig.service.combo()), (50, 0));
    rig.idle(1000);
    for value in 1..7 {
        rig.match_value(value);
    }

    assert_eq!(rig.mode(), GameMode::ScoreEntry);
    assert_eq!(rig.service.score(), 1400);
    assert!(rig.sink.contains(&AppEvent::ScoreRecorded {
        score: 1400,
        rank: Some(1),
    }));
    assert_eq!(&rig.service.highscores().scores()[..3], &[1750, 1400, 0]);
}

// ── Mismatch handling ─────────────────────────────────────────

#[test]
fn mismatch_stays_visible_for_the_hold_then_flips_back() {
    let mut rig = Rig::new(6);
    rig.start_game();
    let (a, b) = rig.mismatched_pair();
    rig.pick(a);
    rig.pick(b);

    assert!(rig.service.is_holding());
    assert!(rig.service.grid().card(a).face_up);
    assert!(rig.service.grid().card(b).face_up);
    assert_eq!(rig.service.score(), 0, "penalty clamps at zero");
    assert_eq!(
        rig.sink
            .count(|e| matches!(e, AppEvent::PairMismatched { .. })),
        1
    );

    // Moves during the hold are dropped.
    let before = rig.service.cursor();
    rig.tilt(Direction::Up);
    assert_eq!(rig.service.cursor(), before);

    rig.idle(1000);
    assert!(!rig.service.is_holding());
    assert!(!rig.service.grid().card(a).face_up);
    assert!(!rig.service.grid().card(b).face_up);
}

#[test]
fn mismatch_breaks_the_combo() {
    let mut rig = Rig::new(7);
    rig.start_game();
    rig.match_value(0);
    rig.match_value(1);
    assert_eq!((rig.service.score(), rig.service.combo()), (250, 2));

    let (a, b) = rig.mismatched_pair();
    rig.pick(a);
    rig.pick(b);
    assert_eq!((rig.service.score(), rig.service.combo()), (200, 0));

    rig.idle(1000);
    rig.match_value(2);
    assert_eq!((rig.service.score(), rig.service.combo()), (300, 1));
}

#[test]
fn reselecting_matched_cards_is_ignored() {
    let mut rig = Rig::new(8);
    rig.start_game();
    let (a, b) = rig.pair_of(3);
    rig.match_value(3);

    // Re-selecting a matched card does nothing.
    let flips = rig.sink.count(|e| matches!(e, AppEvent::CardFlipped { .. }));
    rig.pick(a);
    rig.pick(b);
    assert_eq!(
        rig.sink.count(|e| matches!(e, AppEvent::CardFlipped { .. })),
        flips
    );
    assert_eq!(rig.service.score(), 100);
    assert_eq!(rig.mode(), GameMode::Playing);
}

// ── Pause menu ────────────────────────────────────────────────

#[test]
fn pause_then_continue_keeps_the_board() {
    let mut rig = Rig::new(9);
    rig.start_game();
    rig.match_value(5);
    let board = rig.service.grid().clone();

    rig.walk_to(MENU_CELL);
    rig.press();
    assert_eq!(rig.mode(), GameMode::Paused);
    assert!(rig.display.has_printed("Paused"));
    assert!(rig.display.has_printed("Continue"));

    rig.display.clear_log();
    rig.press();
    assert_eq!(rig.mode(), GameMode::Playing);
    assert_eq!(rig.service.grid(), &board);
    assert_eq!(rig.service.score(), 100);
    // Full repaint shows the two matched cards.
    assert_eq!(rig.display.full_repaints(), 1);
    assert_eq!(rig.display.circles(), 2);
}

#[test]
fn pause_then_quit_abandons_without_recording() {
    let mut rig = Rig::new(10);
    rig.start_game();
    rig.match_value(0);

    rig.walk_to(MENU_CELL);
    rig.press();
    rig.tilt(Direction::Right);
    rig.press();

    assert_eq!(rig.mode(), GameMode::Menu);
    assert_eq!(rig.service.highscores().best(), 0);
    assert_eq!(
        rig.sink
            .count(|e| matches!(e, AppEvent::ScoreRecorded { .. })),
        0
    );
    assert_eq!(rig.service.score(), 0);
}

#[test]
fn pause_choice_does_not_wrap() {
    let mut rig = Rig::new(11);
    rig.start_game();
    rig.press();
    assert_eq!(rig.mode(), GameMode::Paused);

    rig.tilt(Direction::Left);
    rig.tilt(Direction::Left);
    rig.press();
    assert_eq!(rig.mode(), GameMode::Playing);
}

// ── Menu ──────────────────────────────────────────────────────

#[test]
fn scores_from_menu_shows_board_without_highlight() {
    let mut rig = Rig::new(12);
    rig.tilt(Direction::Right);
    rig.display.clear_log();
    rig.press();

    assert_eq!(rig.mode(), GameMode::ScoreBoard);
    assert!(rig.display.has_printed("Highscores"));
    for row in 0..10 {
        let r = ui::score_row_rect(row);
        assert!(!rig
            .display
            .outlines_in(Colour::RED)
            .contains(&(r.x, r.y, r.w, r.h)));
    }

    rig.press();
    assert_eq!(rig.mode(), GameMode::Menu);
}

#[test]
fn cursor_stops_at_board_edges() {
    let mut rig = Rig::new(13);
    rig.start_game();
    rig.walk_to(0);
    rig.tilt(Direction::Left);
    rig.tilt(Direction::Up);
    assert_eq!(rig.service.cursor().position(), 0);

    rig.walk_to(14);
    rig.tilt(Direction::Right);
    rig.tilt(Direction::Down);
    assert_eq!(rig.service.cursor().position(), 14);
}

// ── Faults & configuration ────────────────────────────────────

#[test]
fn input_fault_is_reported_once_and_treated_as_rest() {
    let mut rig = Rig::new(14);
    rig.input.fail(InputError::AdcReadFailed);
    for _ in 0..30 {
        rig.tick();
    }
    assert_eq!(rig.mode(), GameMode::Menu);
    assert_eq!(
        rig.sink.count(|e| matches!(e, AppEvent::InputFault(_))),
        1
    );

    // Recovers on the next good read.
    rig.press();
    assert_eq!(rig.mode(), GameMode::Playing);
}

#[test]
fn legacy_config_plays_the_same_game() {
    let config = GameConfig::legacy();
    assert_eq!(config.highscore_policy, HighscorePolicy::OverwriteLowest);
    let mut rig = Rig::with_config(config, 15);
    rig.play_perfect_game();
    assert_eq!(rig.service.score(), 1750);
    assert_eq!(rig.service.highscores().best(), 1750);
}

#[test]
fn clock_wraparound_does_not_stall_holds() {
    let mut rig = Rig::new(16);
    rig.now_ms = u32::MAX - 1000;
    rig.press();
    rig.idle(4000);
    assert!(!rig.service.is_holding());
    assert_eq!(rig.service.grid().face_up_count(), 0);
}
