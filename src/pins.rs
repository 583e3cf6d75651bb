//! GPIO / peripheral pin assignments for the game board (ESP32-S3).
//!
//! Joystick and seed channels are read by number through `drivers::hw_init`.
//! The TFT SPI pins are typed peripherals taken in `main.rs`
//! (SCLK 12, MOSI 11, MISO 13, CS 10, DC 9, RST 8); only the bus clock lives here.

// ---------------------------------------------------------------------------
// Joystick (two analog axes + active-low push switch)
// ---------------------------------------------------------------------------

/// Horizontal axis: ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const JOY_HORIZ_ADC_CH: u32 = 3;
/// Vertical axis: ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const JOY_VERT_ADC_CH: u32 = 4;
/// Joystick push switch, pulled up; LOW = pressed.
pub const JOY_SEL_GPIO: i32 = 6;

/// The stick is mounted with its horizontal axis reversed: a low reading
/// means "right".
pub const JOY_INVERT_HORIZONTAL: bool = true;

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Unconnected ADC1 channel 0 (GPIO 1); left floating for seeding the RNG.
pub const SEED_ADC_CH: u32 = 0;

// ---------------------------------------------------------------------------
// ILI9341 TFT (SPI2)
// ---------------------------------------------------------------------------

/// SPI clock for the panel.
pub const TFT_SPI_HZ: u32 = 40_000_000;
