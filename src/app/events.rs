//! Outbound application events.
//!
//! The [`GameService`](super::service::GameService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, count them in a test,
//! and so on.

use crate::error::InputError;
use crate::fsm::GameMode;

/// Structured events emitted by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started(GameMode),

    /// The FSM transitioned between modes.
    ModeChanged { from: GameMode, to: GameMode },

    /// A fresh board was dealt and the preview began.
    NewGame,

    /// A face-down card was turned over by the player.
    CardFlipped { position: usize, value: Option<u8> },

    /// Two selected cards share a value.
    PairMatched { value: u8, points: u16, score: u16, combo: u16 },

    /// Two selected cards differ; the penalty has been applied.
    PairMismatched { first: usize, second: usize, score: u16 },

    /// The final pair was found.
    BoardCleared { score: u16 },

    /// A finished game's score was offered to the highscore table.
    /// `rank` is `None` when the score did not place.
    ScoreRecorded { score: u16, rank: Option<usize> },

    /// The joystick could not be read this tick.
    InputFault(InputError),
}
