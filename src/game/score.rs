//! Score and combo arithmetic.
//!
//! A match is worth `100 + 50 * combo` before the combo increments; a
//! mismatch costs 50 and breaks the combo. The score is clamped to
//! `0..=SCORE_MAX` after every change. A perfect game of seven matches
//! totals 1750, so the cap is never reached in normal play.

/// Points for a match with no combo running.
pub const MATCH_BASE_POINTS: i32 = 100;
/// Extra points per consecutive match already in the combo.
pub const COMBO_BONUS_POINTS: i32 = 50;
/// Points removed on a mismatch.
pub const MISMATCH_PENALTY: i32 = 50;
/// Upper clamp for the score.
pub const SCORE_MAX: u16 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: u16,
    combo: u16,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a match. Returns the points actually added after clamping.
    pub fn apply_match(&mut self) -> u16 {
        let before = self.score;
        let award = MATCH_BASE_POINTS + COMBO_BONUS_POINTS * i32::from(self.combo);
        self.score = Self::clamp(i32::from(self.score) + award);
        self.combo = self.combo.saturating_add(1);
        self.score - before
    }

    /// Charge a mismatch and break the combo.
    pub fn apply_mismatch(&mut self) {
        self.score = Self::clamp(i32::from(self.score) - MISMATCH_PENALTY);
        self.combo = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn combo(&self) -> u16 {
        self.combo
    }

    fn clamp(value: i32) -> u16 {
        value.clamp(0, i32::from(SCORE_MAX)) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_escalates_match_value() {
        let mut s = ScoreTracker::new();
        assert_eq!(s.apply_match(), 100);
        assert_eq!((s.score(), s.combo()), (100, 1));
        assert_eq!(s.apply_match(), 150);
        assert_eq!((s.score(), s.combo()), (250, 2));
        assert_eq!(s.apply_match(), 200);
        assert_eq!((s.score(), s.combo()), (450, 3));
    }

    #[test]
    fn mismatch_breaks_combo_and_costs_fifty() {
        let mut s = ScoreTracker::new();
        for _ in 0..3 {
            s.apply_match();
        }
        s.apply_mismatch();
        assert_eq!((s.score(), s.combo()), (400, 0));
        assert_eq!(s.apply_match(), 100);
    }

    #[test]
    fn mismatch_never_goes_negative() {
        let mut s = ScoreTracker::new();
        s.apply_mismatch();
        assert_eq!(s.score(), 0);
        s.apply_match();
        s.apply_mismatch();
        s.apply_mismatch();
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn seven_straight_matches_total_1750() {
        let mut s = ScoreTracker::new();
        for _ in 0..7 {
            s.apply_match();
        }
        assert_eq!(s.score(), 1750);
        assert_eq!(s.combo(), 7);
    }

    #[test]
    fn score_is_capped() {
        let mut s = ScoreTracker::new();
        for _ in 0..20 {
            s.apply_match();
        }
        assert_eq!(s.score(), SCORE_MAX);
        assert_eq!(s.apply_match(), 0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut s = ScoreTracker::new();
        s.apply_match();
        s.apply_match();
        s.reset();
        assert_eq!(s, ScoreTracker::new());
    }
}
