//! Test rig: a [`GameService`] wired to the mock adapters, plus a small
//! vocabulary of player actions (press, tilt, walk, pick).
//!
//! Every action advances a fake clock in 10 ms ticks and returns the stick
//! to rest afterwards, long enough for the poller's settle gate to reopen.

use memory_match::app::service::GameService;
use memory_match::config::GameConfig;
use memory_match::drivers::joystick::Direction;
use memory_match::fsm::GameMode;
use memory_match::game::grid::{CELL_COUNT, GRID_COLUMNS, MENU_CELL};

use super::mock_hw::{LogSink, RecordingDisplay, ScriptedInput};

pub const TICK_MS: u32 = 10;

pub struct Rig {
    pub service: GameService,
    pub input: ScriptedInput,
    pub display: RecordingDisplay,
    pub sink: LogSink,
    pub now_ms: u32,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        let mut rig = Self {
            service: GameService::new(config, seed),
            input: ScriptedInput::new(),
            display: RecordingDisplay::new(),
            sink: LogSink::new(),
            now_ms: 0,
        };
        rig.service.start(&mut rig.display, &mut rig.sink);
        rig
    }

    pub fn mode(&self) -> GameMode {
        self.service.mode()
    }

    /// One tick with whatever level the input is currently scripted to.
    pub fn tick(&mut self) {
        self.now_ms = self.now_ms.wrapping_add(TICK_MS);
        self.service
            .tick(&mut self.input, &mut self.display, &mut self.sink, self.now_ms);
    }

    /// Stick and button at rest for at least `ms`.
    pub fn idle(&mut self, ms: u32) {
        self.input.rest();
        for _ in 0..ms.div_ceil(TICK_MS) {
            self.tick();
        }
    }

    /// Release, press, release.
    pub fn press(&mut self) {
        self.input.rest();
        self.tick();
        self.input.hold_button();
        self.tick();
        self.idle(TICK_MS);
    }

    /// Tilt once and let the stick settle back to centre.
    pub fn tilt(&mut self, direction: Direction) {
        self.input.tilt(direction);
        self.tick();
        let settle = self.service.config().settle_ms;
        self.idle(settle + 2 * TICK_MS);
    }

    /// Press Play from the menu and wait out the preview.
    pub fn start_game(&mut self) {
        assert_eq!(self.mode(), GameMode::Menu);
        self.press();
        assert_eq!(self.mode(), GameMode::Playing);
        let reveal = self.service.config().reveal_ms;
        self.idle(reveal + TICK_MS);
        assert!(!self.service.is_holding(), "preview should be over");
    }

    /// Move the board cursor onto `target`.
    pub fn walk_to(&mut self, target: usize) {
        assert!(target < CELL_COUNT);
        let (row, col) = (target / GRID_COLUMNS, target % GRID_COLUMNS);
        while self.service.cursor().row() > row {
            self.tilt(Direction::Up);
        }
        while self.service.cursor().row() < row {
            self.tilt(Direction::Down);
        }
        while self.service.cursor().column() > col {
            self.tilt(Direction::Left);
        }
        while self.service.cursor().column() < col {
            self.tilt(Direction::Right);
        }
        assert_eq!(self.service.cursor().position(), target);
    }

    /// Walk to `target` and press.
    pub fn pick(&mut self, target: usize) {
        self.walk_to(target);
        self.press();
    }

    /// Both positions holding `value`.
    pub fn pair_of(&self, value: u8) -> (usize, usize) {
        let grid = self.service.grid();
        let mut it = (0..CELL_COUNT).filter(|&p| grid.match_value(p) == Some(value));
        (
            it.next().expect("value is dealt twice"),
            it.next().expect("value is dealt twice"),
        )
    }

    /// Two face-down cards with different values.
    pub fn mismatched_pair(&self) -> (usize, usize) {
        let grid = self.service.grid();
        let down: Vec<usize> = (0..CELL_COUNT)
            .filter(|&p| p != MENU_CELL && !grid.card(p).face_up)
            .collect();
        let a = down[0];
        let b = *down
            .iter()
            .find(|&&p| grid.match_value(p) != grid.match_value(a))
            .expect("at least two values remain face-down");
        (a, b)
    }

    /// Find and pick the pair for `value`.
    pub fn match_value(&mut self, value: u8) {
        let (a, b) = self.pair_of(value);
        self.pick(a);
        self.pick(b);
    }

    /// Play a full board with no mistakes.
    pub fn play_perfect_game(&mut self) {
        self.start_game();
        for value in 0..7 {
            self.match_value(value);
        }
    }
}
