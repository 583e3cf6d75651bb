//! Input drivers: joystick event gating and the raw peripheral layer.

pub mod hw_init;
pub mod joystick;
