//! Joystick + push-button poller with release-gated debounce.
//!
//! ## Hardware
//!
//! Two analog axes (0 – 1023, centred near 512) and an active-low
//! momentary switch with pull-up. The main loop samples all three once
//! per tick and hands the levels to [`InputPoller::sample`], which turns
//! them into at most one discrete [`InputEvent`].
//!
//! ## Gates
//!
//! | Gate   | Sequence                                                      |
//! |--------|---------------------------------------------------------------|
//! | Axis   | `Ready` → deflect (event) → `WaitCentre` → centred → `Settling` → `settle_ms` → `Ready` |
//! | Button | `WaitRelease` → high → `Armed` → low (event) → `WaitRelease`  |
//!
//! One physical push or tilt therefore produces exactly one event, and
//! the stick springing back past centre cannot register a second move.

use crate::config::JoystickConfig;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete navigation event, one per sample at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEvent {
    #[default]
    None,
    Move(Direction),
    Select,
}

impl InputEvent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Move(d) => Some(d),
            _ => None,
        }
    }
}

/// Raw signal levels read from the hardware in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInput {
    pub horizontal: u16,
    pub vertical: u16,
    /// `true` while the switch pulls the line low.
    pub button_low: bool,
}

impl RawInput {
    /// Stick at rest, button released.
    pub const fn centred(centre: u16) -> Self {
        Self {
            horizontal: centre,
            vertical: centre,
            button_low: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisGate {
    Ready,
    WaitCentre,
    Settling { since_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonGate {
    WaitRelease,
    Armed,
}

/// Deflection of one axis past the deadzone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deflection {
    Low,
    High,
}

pub struct InputPoller {
    config: JoystickConfig,
    settle_ms: u32,
    axis: AxisGate,
    button: ButtonGate,
}

impl InputPoller {
    /// The button starts gated so a switch held at power-up never fires.
    pub fn new(config: JoystickConfig, settle_ms: u32) -> Self {
        Self {
            config,
            settle_ms,
            axis: AxisGate::Ready,
            button: ButtonGate::WaitRelease,
        }
    }

    /// Translate one tick of raw levels into at most one event.
    /// `now_ms` is the current monotonic time in milliseconds.
    pub fn sample(&mut self, raw: RawInput, now_ms: u32) -> InputEvent {
        let axis_event = self.sample_axes(raw, now_ms);
        let pressed = self.sample_button(raw.button_low, axis_event.is_none());

        match axis_event {
            Some(direction) => InputEvent::Move(direction),
            None if pressed => InputEvent::Select,
            None => InputEvent::None,
        }
    }

    fn sample_axes(&mut self, raw: RawInput, now_ms: u32) -> Option<Direction> {
        let horizontal = self.deflection(raw.horizontal, self.config.invert_horizontal);
        let vertical = self.deflection(raw.vertical, self.config.invert_vertical);
        let centred = horizontal.is_none() && vertical.is_none();

        match self.axis {
            AxisGate::Ready => {
                let direction = match (horizontal, vertical) {
                    (Some(Deflection::Low), _) => Direction::Left,
                    (Some(Deflection::High), _) => Direction::Right,
                    (None, Some(Deflection::Low)) => Direction::Up,
                    (None, Some(Deflection::High)) => Direction::Down,
                    (None, None) => return None,
                };
                self.axis = AxisGate::WaitCentre;
                Some(direction)
            }

            AxisGate::WaitCentre => {
                if centred {
                    self.axis = AxisGate::Settling { since_ms: now_ms };
                }
                None
            }

            AxisGate::Settling { since_ms } => {
                if !centred {
                    // Recoil past centre restarts the wait.
                    self.axis = AxisGate::WaitCentre;
                } else if now_ms.wrapping_sub(since_ms) >= self.settle_ms {
                    self.axis = AxisGate::Ready;
                }
                None
            }
        }
    }

    /// Returns `true` on an accepted press edge. When `may_fire` is false the
    /// press is left armed for a later tick.
    fn sample_button(&mut self, button_low: bool, may_fire: bool) -> bool {
        match self.button {
            ButtonGate::WaitRelease => {
                if !button_low {
                    self.button = ButtonGate::Armed;
                }
                false
            }
            ButtonGate::Armed => {
                if button_low && may_fire {
                    self.button = ButtonGate::WaitRelease;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn deflection(&self, value: u16, inverted: bool) -> Option<Deflection> {
        let centre = i32::from(self.config.centre);
        let deadzone = i32::from(self.config.deadzone);
        let value = i32::from(value);

        let d = if value < centre - deadzone {
            Deflection::Low
        } else if value > centre + deadzone {
            Deflection::High
        } else {
            return None;
        };

        Some(match (d, inverted) {
            (Deflection::Low, true) => Deflection::High,
            (Deflection::High, true) => Deflection::Low,
            (d, false) => d,
        })
    }
}
