//! Function-pointer finite state machine engine.
//!
//! Classic embedded FSM pattern ported to Rust:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌────────────┬───────────┬──────────┬───────────────────┐   │
//! │  │ GameMode   │ on_enter  │ on_exit  │ on_update         │   │
//! │  ├────────────┼───────────┼──────────┼───────────────────┤   │
//! │  │ Menu       │ fn(ctx)   │ -        │ fn(ctx)->Option<> │   │
//! │  │ Playing    │ fn(ctx)   │ -        │ fn(ctx)->Option<> │   │
//! │  │ Paused     │ fn(ctx)   │ -        │ fn(ctx)->Option<> │   │
//! │  │ ScoreEntry │ fn(ctx)   │ -        │ fn(ctx)->Option<> │   │
//! │  │ ScoreBoard │ fn(ctx)   │ -        │ fn(ctx)->Option<> │   │
//! │  └────────────┴───────────┴──────────┴───────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** mode.
//! If it returns `Some(next)`, the engine runs `on_exit` for the
//! current mode, then `on_enter` for the next, and updates the
//! current pointer.  All functions receive `&mut GameContext`.

pub mod context;
pub mod states;

use context::GameContext;
use log::info;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// Enumeration of all game modes.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameMode {
    Menu = 0,
    Playing = 1,
    Paused = 2,
    ScoreEntry = 3,
    ScoreBoard = 4,
}

impl GameMode {
    /// Total number of modes: used to size the table array.
    pub const COUNT: usize = 5;

    /// Convert an index back to `GameMode`.  Panics on out-of-range in
    /// debug builds; returns `Menu` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Menu,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::ScoreEntry,
            4 => Self::ScoreBoard,
            _ => {
                debug_assert!(false, "invalid mode index: {idx}");
                Self::Menu
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type StateActionFn = fn(&mut GameContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut GameContext) -> Option<GameMode>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single mode.
pub struct StateDescriptor {
    pub id: GameMode,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine. Exactly one mode is active at a time;
/// there is no terminal mode.
pub struct Fsm {
    /// Fixed-size table indexed by `GameMode as usize`.
    table: [StateDescriptor; GameMode::COUNT],
    /// Index of the currently active mode.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; GameMode::COUNT], initial: GameMode) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting mode.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut GameContext) {
        info!("FSM starting in mode: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current mode.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut GameContext) {
        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// The current mode's identity.
    pub fn current_mode(&self) -> GameMode {
        GameMode::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: GameMode, ctx: &mut GameContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
