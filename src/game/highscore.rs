//! Session highscore table.
//!
//! Ten slots kept in non-increasing order, all zero at boot, living only
//! in RAM for the current power cycle.
//!
//! Two update policies are supported (see [`HighscorePolicy`]); both
//! re-establish the ordering with a bounded insertion sort.

use serde::{Deserialize, Serialize};

/// Rows in the table.
pub const HIGHSCORE_SLOTS: usize = 10;

/// How [`HighscoreTable::record`] treats a new score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HighscorePolicy {
    /// Keep the ten highest scores: a new score enters only if it beats the
    /// current lowest entry, which it then evicts.
    #[default]
    KeepHighest,
    /// Always overwrite the lowest slot with the newest score, then re-sort.
    /// A score below every entry still replaces the old minimum.
    OverwriteLowest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighscoreTable {
    scores: [u16; HIGHSCORE_SLOTS],
    policy: HighscorePolicy,
}

impl Default for HighscoreTable {
    fn default() -> Self {
        Self::new(HighscorePolicy::default())
    }
}

impl HighscoreTable {
    pub fn new(policy: HighscorePolicy) -> Self {
        Self {
            scores: [0; HIGHSCORE_SLOTS],
            policy,
        }
    }

    /// Record a finished game. Returns the 0-based rank the score landed on,
    /// or `None` if it did not make the table.
    pub fn record(&mut self, score: u16) -> Option<usize> {
        let lowest = HIGHSCORE_SLOTS - 1;
        match self.policy {
            HighscorePolicy::KeepHighest => {
                if score <= self.scores[lowest] {
                    return None;
                }
            }
            HighscorePolicy::OverwriteLowest => {}
        }
        self.scores[lowest] = score;
        Some(self.sift_up(lowest))
    }

    pub fn scores(&self) -> &[u16; HIGHSCORE_SLOTS] {
        &self.scores
    }

    pub fn best(&self) -> u16 {
        self.scores[0]
    }

    pub fn policy(&self) -> HighscorePolicy {
        self.policy
    }

    pub fn is_sorted(&self) -> bool {
        self.scores.windows(2).all(|w| w[0] >= w[1])
    }

    /// One insertion-sort pass for the entry at `idx`; the rest of the table is
    /// already ordered. Ties stay below existing equal scores.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 && self.scores[idx - 1] < self.scores[idx] {
            self.scores.swap(idx - 1, idx);
            idx -= 1;
        }
        idx
    }
}
