//! Game configuration parameters
//!
//! All tunable parameters for the memory game. Compiled in at build time;
//! nothing is read from or written to storage.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::highscore::HighscorePolicy;

/// Per-axis joystick calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoystickConfig {
    /// ADC reading with the stick at rest
    pub centre: u16,
    /// Distance from centre that still counts as "at rest"
    pub deadzone: u16,
    /// Swap Left/Right (stick mounted rotated)
    pub invert_horizontal: bool,
    /// Swap Up/Down
    pub invert_vertical: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            centre: 512,
            deadzone: 256,
            invert_horizontal: false,
            invert_vertical: false,
        }
    }
}

/// How the dealt values are permuted at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShuffleStrategy {
    /// Fisher–Yates over the fourteen playable cards.
    #[default]
    Uniform,
    /// Swap two random playable cards a random number of times in `min..=max`.
    RandomSwaps { min: u16, max: u16 },
}

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    // --- Input ---
    pub joystick: JoystickConfig,
    /// Quiet period after the stick returns to centre (milliseconds)
    pub settle_ms: u32,

    // --- Holds ---
    /// Start-of-game preview with every card face-up (milliseconds)
    pub reveal_ms: u32,
    /// How long a mismatched pair stays visible (milliseconds)
    pub mismatch_hold_ms: u32,

    // --- Rules ---
    pub shuffle: ShuffleStrategy,
    pub highscore_policy: HighscorePolicy,

    // --- Timing ---
    /// Main loop period (milliseconds)
    pub tick_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            joystick: JoystickConfig::default(),
            settle_ms: 100,

            reveal_ms: 4000,
            mismatch_hold_ms: 1000,

            shuffle: ShuffleStrategy::Uniform,
            highscore_policy: HighscorePolicy::KeepHighest,

            tick_interval_ms: 10, // 100 Hz
        }
    }
}

impl GameConfig {
    /// Reject values that would make the game unplayable.
    pub fn validate(&self) -> Result<(), Error> {
        if self.joystick.deadzone == 0 || self.joystick.deadzone >= self.joystick.centre {
            return Err(Error::Config("joystick deadzone must be within (0, centre)"));
        }
        if let ShuffleStrategy::RandomSwaps { min, max } = self.shuffle {
            if min > max {
                return Err(Error::Config("shuffle swap range is inverted"));
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick interval must be non-zero"));
        }
        Ok(())
    }

    /// The swap shuffle used by the first hardware revision.
    pub fn legacy() -> Self {
        Self {
            shuffle: ShuffleStrategy::RandomSwaps { min: 100, max: 200 },
            highscore_policy: HighscorePolicy::OverwriteLowest,
            ..Self::default()
        }
    }
}
