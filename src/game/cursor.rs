//! Cursor and menu-choice movement. Nothing wraps: a move off an edge is
//! a no-op reported as `false`.

use super::grid::{GRID_COLUMNS, GRID_ROWS, MENU_CELL, clamp_position};
use crate::drivers::joystick::Direction;

/// Highlight box over the board. Starts on the menu cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    position: usize,
}

impl Default for GridCursor {
    fn default() -> Self {
        Self { position: MENU_CELL }
    }
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: usize) -> Self {
        Self {
            position: clamp_position(position),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn column(&self) -> usize {
        self.position % GRID_COLUMNS
    }

    pub fn row(&self) -> usize {
        self.position / GRID_COLUMNS
    }

    /// Move one cell. Returns `true` if the cursor moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (col, row) = (self.column(), self.row());
        let next = match direction {
            Direction::Left if col > 0 => self.position - 1,
            Direction::Right if col + 1 < GRID_COLUMNS => self.position + 1,
            Direction::Up if row > 0 => self.position - GRID_COLUMNS,
            Direction::Down if row + 1 < GRID_ROWS => self.position + GRID_COLUMNS,
            _ => return false,
        };
        self.position = clamp_position(next);
        true
    }
}

/// Title-screen choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuChoice {
    #[default]
    Play,
    Scores,
}

impl MenuChoice {
    /// Left selects Play, Right selects Scores. Returns `true` on change.
    pub fn step(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Left => Self::Play,
            Direction::Right => Self::Scores,
            Direction::Up | Direction::Down => return false,
        };
        let moved = next != *self;
        *self = next;
        moved
    }
}

/// Pause-screen choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseChoice {
    #[default]
    Continue,
    Quit,
}

impl PauseChoice {
    /// Left selects Continue, Right selects Quit. Returns `true` on change.
    pub fn step(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Left => Self::Continue,
            Direction::Right => Self::Quit,
            Direction::Up | Direction::Down => return false,
        };
        let moved = next != *self;
        *self = next;
        moved
    }
}
