//! Game rules: board, pair evaluation, scoring, highscores and cursors.
//!
//! Pure logic with no hardware or display dependencies. The FSM state
//! handlers in [`crate::fsm::states`] drive these types through
//! [`crate::fsm::context::GameContext`].

pub mod cursor;
pub mod grid;
pub mod highscore;
pub mod matching;
pub mod score;

pub use cursor::{GridCursor, MenuChoice, PauseChoice};
pub use grid::{Card, CardGrid, SelectOutcome, Selection};
pub use highscore::{HighscorePolicy, HighscoreTable};
pub use matching::{MatchEngine, MatchOutcome, PendingFlip};
pub use score::ScoreTracker;
