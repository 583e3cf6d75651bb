//! Pair evaluation.
//!
//! [`MatchEngine::evaluate`] runs exactly once per completed selection. A
//! match scores and leaves both cards up for good; a mismatch scores the
//! penalty and hands back a [`PendingFlip`] that the caller applies once
//! the display hold has elapsed.

use log::debug;

use super::grid::CardGrid;
use super::score::ScoreTracker;

/// A mismatched pair that is still face-up and must be turned back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFlip {
    pub first: usize,
    pub second: usize,
}

impl PendingFlip {
    /// Turn both cards face-down.
    pub fn conceal(self, grid: &mut CardGrid) {
        grid.flip_down(self.first);
        grid.flip_down(self.second);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Both cards share `value`. `board_cleared` is set on the final pair.
    Matched { value: u8, points: u16, board_cleared: bool },
    /// Values differ; the pair is concealed after the display hold.
    Mismatched(PendingFlip),
}

impl MatchOutcome {
    pub fn board_cleared(&self) -> bool {
        matches!(self, Self::Matched { board_cleared: true, .. })
    }
}

/// Stateless pair evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Evaluate the pending pair. Returns `None` (and changes nothing) unless
    /// two selections are pending.
    pub fn evaluate(grid: &mut CardGrid, score: &mut ScoreTracker) -> Option<MatchOutcome> {
        let (first, second) = grid.selection().pair()?;
        let a = grid.match_value(first);
        let b = grid.match_value(second);

        let outcome = match (a, b) {
            (Some(value), Some(other)) if value == other => {
                let points = score.apply_match();
                MatchOutcome::Matched {
                    value,
                    points,
                    board_cleared: grid.is_complete(),
                }
            }
            _ => {
                score.apply_mismatch();
                MatchOutcome::Mismatched(PendingFlip { first, second })
            }
        };

        grid.clear_selection();
        debug!("match: {first} vs {second} -> {outcome:?}");
        Some(outcome)
    }
}
