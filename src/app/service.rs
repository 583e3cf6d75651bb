//! Application service: the hexagonal core.
//!
//! [`GameService`] owns the FSM, the input poller and the shared context.
//! It exposes a clean, hardware-agnostic API.  All I/O flows through
//! port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      GameService       │
//! DisplayPort ◀───│  Poller · FSM · Screens │
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::GameConfig;
use crate::drivers::joystick::{InputEvent, InputPoller, RawInput};
use crate::fsm::context::GameContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, GameMode};
use crate::game::{CardGrid, GridCursor, HighscoreTable};
use crate::ui;

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, InputPort};

// ───────────────────────────────────────────────────────────────
// GameService
// ───────────────────────────────────────────────────────────────

/// The game service orchestrates all domain logic.
pub struct GameService {
    fsm: Fsm,
    ctx: GameContext,
    poller: InputPoller,
    tick_count: u64,
    /// Set while the input port keeps failing; cleared on the next good read.
    input_faulted: bool,
}

impl GameService {
    /// Construct the service. `seed` drives every shuffle this power cycle.
    ///
    /// Does **not** start the FSM: call [`start`](Self::start) next.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let poller = InputPoller::new(config.joystick, config.settle_ms);
        let ctx = GameContext::new(config, seed);
        let fsm = Fsm::new(build_state_table(), GameMode::Menu);

        Self {
            fsm,
            ctx,
            poller,
            tick_count: 0,
            input_faulted: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the title menu and draw it.
    pub fn start(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        self.flush(display, sink);
        sink.emit(&AppEvent::Started(self.fsm.current_mode()));
        info!("GameService started in {:?}", self.fsm.current_mode());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one cycle: read input → poller → FSM → redraw → events.
    ///
    /// `now_ms` is a monotonic millisecond clock; wrap-around is fine.
    pub fn tick(
        &mut self,
        input: &mut impl InputPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
        now_ms: u32,
    ) {
        self.tick_count += 1;
        let prev_mode = self.fsm.current_mode();
        self.ctx.now_ms = now_ms;

        // 1. Read raw levels via InputPort; a failed read counts as "at rest"
        let raw = match input.read_input() {
            Ok(raw) => {
                if self.input_faulted {
                    info!("Joystick input recovered");
                    self.input_faulted = false;
                }
                raw
            }
            Err(e) => {
                if !self.input_faulted {
                    warn!("Joystick read failed: {e}");
                    self.input_faulted = true;
                    sink.emit(&AppEvent::InputFault(e));
                }
                RawInput::centred(self.ctx.config.joystick.centre)
            }
        };

        // 2. Debounce into at most one event
        self.ctx.input = self.poller.sample(raw, now_ms);

        // 3. FSM tick (pure game logic, including hold expiry)
        self.fsm.tick(&mut self.ctx);
        self.ctx.input = InputEvent::None;

        // 4. Redraw what changed and forward queued events
        self.flush(display, sink);

        // 5. Emit mode change if the FSM moved
        let new_mode = self.fsm.current_mode();
        if new_mode != prev_mode {
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: new_mode,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> GameMode {
        self.fsm.current_mode()
    }

    pub fn score(&self) -> u16 {
        self.ctx.score.score()
    }

    pub fn combo(&self) -> u16 {
        self.ctx.score.combo()
    }

    pub fn highscores(&self) -> &HighscoreTable {
        &self.ctx.highscores
    }

    pub fn grid(&self) -> &CardGrid {
        &self.ctx.grid
    }

    pub fn cursor(&self) -> GridCursor {
        self.ctx.cursor
    }

    /// A timed hold (preview or mismatch display) is running.
    pub fn is_holding(&self) -> bool {
        self.ctx.hold.is_some()
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn flush(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        let request = self.ctx.render.take();
        if !request.is_empty() {
            ui::render(display, self.fsm.current_mode(), &self.ctx, request);
        }

        for event in &self.ctx.events {
            sink.emit(event);
        }
        self.ctx.events.clear();
    }
}
