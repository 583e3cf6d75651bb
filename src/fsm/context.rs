//! Shared mutable context threaded through every FSM handler.
//!
//! `GameContext` is the single struct that state handlers read from and
//! write to: the input event for this tick, the board, score, highscores,
//! cursors, timed holds, redraw requests and queued events. It replaces
//! free-standing globals with one owned value.

use heapless::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::app::events::AppEvent;
use crate::config::GameConfig;
use crate::drivers::joystick::InputEvent;
use crate::game::{
    CardGrid, GridCursor, HighscoreTable, MenuChoice, PauseChoice, PendingFlip, ScoreTracker,
};

/// Events a single tick can queue before the service drains them.
pub const EVENT_QUEUE_CAP: usize = 8;

// ---------------------------------------------------------------------------
// Timed holds (input is ignored while one is running)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    /// Start-of-game preview; every card face-up.
    Reveal { since_ms: u32 },
    /// A mismatched pair on show before it is turned back down.
    Mismatch { since_ms: u32, flip: PendingFlip },
}

// ---------------------------------------------------------------------------
// Redraw requests (written by state handlers; consumed by the service)
// ---------------------------------------------------------------------------

/// Which parts of the screen changed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderRequest {
    /// Repaint the whole screen for the current mode.
    pub full: bool,
    /// Move the highlight box (board cursor or menu choice).
    pub highlight: bool,
    /// Bitmask of board positions whose face changed.
    pub cards: u16,
    /// Score / combo readout.
    pub sidebar: bool,
}

impl RenderRequest {
    pub fn card(&mut self, position: usize) {
        self.cards |= 1 << position;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

// ---------------------------------------------------------------------------
// GameContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct GameContext {
    // -- Timing --
    /// Monotonic time of the current tick (milliseconds, wrapping).
    pub now_ms: u32,

    // -- Input --
    /// Event produced by the poller for this tick.
    pub input: InputEvent,

    // -- Game state --
    pub grid: CardGrid,
    pub score: ScoreTracker,
    pub highscores: HighscoreTable,
    pub cursor: GridCursor,
    pub menu_choice: MenuChoice,
    pub pause_choice: PauseChoice,
    pub hold: Option<Hold>,
    /// Row to highlight on the scoreboard; `None` when opened from the menu.
    pub scoreboard_highlight: Option<usize>,

    // -- Outputs --
    pub render: RenderRequest,
    pub events: Vec<AppEvent, EVENT_QUEUE_CAP>,

    // -- Configuration --
    pub config: GameConfig,

    rng: SmallRng,
}

impl GameContext {
    /// Create a new context. `seed` drives every shuffle for this power cycle.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            now_ms: 0,
            input: InputEvent::None,
            grid: CardGrid::new(),
            score: ScoreTracker::new(),
            highscores: HighscoreTable::new(config.highscore_policy),
            cursor: GridCursor::new(),
            menu_choice: MenuChoice::default(),
            pause_choice: PauseChoice::default(),
            hold: None,
            scoreboard_highlight: None,
            render: RenderRequest::default(),
            events: Vec::new(),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Clear everything a finished or abandoned session left behind.
    pub fn reset_session(&mut self) {
        self.grid.reset();
        self.score.reset();
        self.cursor = GridCursor::new();
        self.menu_choice = MenuChoice::default();
        self.pause_choice = PauseChoice::default();
        self.hold = None;
    }

    /// Deal, shuffle and start the preview hold.
    pub fn deal(&mut self) {
        self.grid.reset();
        self.grid.assign_values();
        self.grid.shuffle(&mut self.rng, self.config.shuffle);
        self.grid.reveal_all();
        self.hold = Some(Hold::Reveal { since_ms: self.now_ms });
    }

    /// Elapsed time since `since_ms`, wrap-safe.
    pub fn elapsed_since(&self, since_ms: u32) -> u32 {
        self.now_ms.wrapping_sub(since_ms)
    }

    /// Queue an outbound event. A full queue drops the event with a warning.
    pub fn emit(&mut self, event: AppEvent) {
        if self.events.push(event).is_err() {
            log::warn!("event queue full, dropping event");
        }
    }
}
