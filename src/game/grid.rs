//! The 5×3 board model: fourteen playable cards and the fixed menu cell.
//!
//! ```text
//!   col →   0    1    2    3    4
//!  row 0 [  0 ][  1 ][  2 ][  3 ][  4 ]
//!  row 1 [  5 ][  6 ][MENU][  8 ][  9 ]
//!  row 2 [ 10 ][ 11 ][ 12 ][ 13 ][ 14 ]
//! ```
//!
//! Every operation here is total: out-of-range positions are clamped,
//! and selections that cannot apply are reported as
//! [`SelectOutcome::Ignored`] instead of failing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ShuffleStrategy;

/// Cards per row.
pub const GRID_COLUMNS: usize = 5;
/// Rows on the board.
pub const GRID_ROWS: usize = 3;
/// Total cells, menu cell included.
pub const CELL_COUNT: usize = GRID_COLUMNS * GRID_ROWS;
/// The non-playable cell in the centre that opens the pause menu.
pub const MENU_CELL: usize = 7;
/// Distinct match values (`0..PAIR_COUNT`), each placed on exactly two cards.
pub const PAIR_COUNT: u8 = 7;
/// Playable cards on the board.
pub const PLAYABLE_COUNT: usize = CELL_COUNT - 1;

/// Playable positions in board order.
pub fn playable_positions() -> impl Iterator<Item = usize> {
    (0..CELL_COUNT).filter(|&p| p != MENU_CELL)
}

/// Clamp an arbitrary index onto the board.
pub const fn clamp_position(position: usize) -> usize {
    if position >= CELL_COUNT {
        CELL_COUNT - 1
    } else {
        position
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub position: u8,
    /// Pair identity. Always `None` on the menu cell and after [`CardGrid::reset`].
    pub match_value: Option<u8>,
    pub face_up: bool,
}

impl Card {
    pub fn column(&self) -> usize {
        self.position as usize % GRID_COLUMNS
    }

    pub fn row(&self) -> usize {
        self.position as usize / GRID_COLUMNS
    }

    pub fn is_menu(&self) -> bool {
        self.position as usize == MENU_CELL
    }
}

/// Up to two pending card positions awaiting evaluation.
///
/// `first != second` whenever both are set, and only a face-down card can
/// become pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Both positions, once the pair is complete.
    pub fn pair(&self) -> Option<(usize, usize)> {
        Some((self.first?, self.second?))
    }

    pub fn contains(&self, position: usize) -> bool {
        self.first == Some(position) || self.second == Some(position)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result of [`CardGrid::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Menu cell, face-up card, pending card, or a pair already awaiting evaluation.
    Ignored,
    /// The card was flipped and is now the first pending selection.
    First(usize),
    /// The card was flipped as the second selection; the pair must be evaluated.
    PairReady(usize, usize),
}

/// The board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGrid {
    cards: [Card; CELL_COUNT],
    selection: Selection,
}

impl Default for CardGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGrid {
    /// An empty board: every card face-down, no values assigned.
    pub fn new() -> Self {
        Self {
            cards: core::array::from_fn(|i| Card {
                position: i as u8,
                match_value: None,
                face_up: false,
            }),
            selection: Selection::default(),
        }
    }

    /// Turn every card face-down, drop all value assignments and pending selections.
    pub fn reset(&mut self) {
        for card in &mut self.cards {
            card.face_up = false;
            card.match_value = None;
        }
        self.selection.clear();
    }

    /// Deal values `0..PAIR_COUNT` in board order, two consecutive playable
    /// cards per value, skipping the menu cell.
    pub fn assign_values(&mut self) {
        for (k, position) in playable_positions().enumerate() {
            self.cards[position].match_value = Some((k / 2) as u8);
        }
        self.cards[MENU_CELL].match_value = None;
    }

    /// Permute values across the playable cards. The menu cell is never touched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, strategy: ShuffleStrategy) {
        let mut positions = [0usize; PLAYABLE_COUNT];
        for (slot, position) in positions.iter_mut().zip(playable_positions()) {
            *slot = position;
        }

        match strategy {
            ShuffleStrategy::Uniform => {
                let mut values = positions.map(|p| self.cards[p].match_value);
                values.shuffle(rng);
                for (position, value) in positions.iter().zip(values) {
                    self.cards[*position].match_value = value;
                }
            }
            ShuffleStrategy::RandomSwaps { min, max } => {
                let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
                let swaps = rng.gen_range(lo..=hi);
                for _ in 0..swaps {
                    let a = rng.gen_range(0..PLAYABLE_COUNT);
                    let mut b = rng.gen_range(0..PLAYABLE_COUNT - 1);
                    if b >= a {
                        b += 1;
                    }
                    let (pa, pb) = (positions[a], positions[b]);
                    let tmp = self.cards[pa].match_value;
                    self.cards[pa].match_value = self.cards[pb].match_value;
                    self.cards[pb].match_value = tmp;
                }
            }
        }
    }

    /// Show every playable card (start-of-game preview).
    pub fn reveal_all(&mut self) {
        for position in playable_positions() {
            self.cards[position].face_up = true;
        }
    }

    /// Turn every card face-down again after the preview.
    pub fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.face_up = false;
        }
    }

    /// Flip the card under the cursor as part of a pair selection.
    pub fn select(&mut self, position: usize) -> SelectOutcome {
        let position = clamp_position(position);
        if position == MENU_CELL
            || self.cards[position].face_up
            || self.selection.contains(position)
            || self.selection.pair().is_some()
        {
            return SelectOutcome::Ignored;
        }

        match self.selection.first {
            None => {
                self.selection.first = Some(position);
                self.cards[position].face_up = true;
                SelectOutcome::First(position)
            }
            Some(first) => {
                self.selection.second = Some(position);
                self.cards[position].face_up = true;
                SelectOutcome::PairReady(first, position)
            }
        }
    }

    /// Turn one card face-down. Used to undo a mismatched pair.
    pub fn flip_down(&mut self, position: usize) {
        let position = clamp_position(position);
        self.cards[position].face_up = false;
    }

    /// All fourteen playable cards are face-up.
    pub fn is_complete(&self) -> bool {
        playable_positions().all(|p| self.cards[p].face_up)
    }

    pub fn face_up_count(&self) -> usize {
        playable_positions().filter(|&p| self.cards[p].face_up).count()
    }

    pub fn card(&self, position: usize) -> &Card {
        &self.cards[clamp_position(position)]
    }

    pub fn cards(&self) -> &[Card; CELL_COUNT] {
        &self.cards
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Value at `position`, or `None` for the menu cell / unassigned cards.
    pub fn match_value(&self, position: usize) -> Option<u8> {
        self.card(position).match_value
    }
}
