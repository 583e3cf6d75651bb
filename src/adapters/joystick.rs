//! Joystick adapter: analog stick + push switch behind [`InputPort`].
//!
//! Generic over the axis source and an `embedded-hal` [`InputPin`], so the
//! same adapter runs on the board (ADC1 oneshot + GPIO) and in tests.
//!
//! The game calibrates against a 10-bit scale centred near 512; the
//! ESP32-S3 ADC is 12-bit, so [`Adc1Axis`] drops the two low bits.

use embedded_hal::digital::{ErrorType, InputPin};

use crate::app::ports::InputPort;
use crate::drivers::hw_init;
use crate::drivers::joystick::RawInput;
use crate::error::InputError;

/// One analog axis, reported on a 0 – 1023 scale.
pub trait AnalogAxis {
    fn read(&mut self) -> Result<u16, InputError>;
}

/// Concrete adapter combining both axes and the switch.
pub struct JoystickAdapter<H, V, B> {
    horizontal: H,
    vertical: V,
    button: B,
}

impl<H, V, B> JoystickAdapter<H, V, B> {
    pub fn new(horizontal: H, vertical: V, button: B) -> Self {
        Self {
            horizontal,
            vertical,
            button,
        }
    }
}

impl<H, V, B> InputPort for JoystickAdapter<H, V, B>
where
    H: AnalogAxis,
    V: AnalogAxis,
    B: InputPin,
{
    fn read_input(&mut self) -> Result<RawInput, InputError> {
        let horizontal = self.horizontal.read()?;
        let vertical = self.vertical.read()?;
        let button_low = self
            .button
            .is_low()
            .map_err(|_| InputError::GpioReadFailed)?;
        Ok(RawInput {
            horizontal,
            vertical,
            button_low,
        })
    }
}

// ── Board implementations ─────────────────────────────────────

/// An ADC1 oneshot channel scaled down to 10 bits.
pub struct Adc1Axis {
    channel: u32,
}

impl Adc1Axis {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl AnalogAxis for Adc1Axis {
    fn read(&mut self) -> Result<u16, InputError> {
        hw_init::adc1_read(self.channel).map(|raw| raw >> 2)
    }
}

/// A GPIO input configured by [`hw_init`], read through `gpio_get_level`.
pub struct GpioInput {
    pin: i32,
}

impl GpioInput {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl ErrorType for GpioInput {
    type Error = core::convert::Infallible;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.pin))
    }
}
