//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                          |
//! |----------------|--------------|--------------------------------------|
//! | `graphics`     | DisplayPort  | embedded-graphics target (ILI9341)   |
//! | `joystick`     | InputPort    | ESP32 ADC1 axes, button GPIO         |
//! | `log_sink`     | EventSink    | Serial log output                    |
//! | `time`         |:            | ESP32 system timer                   |

pub mod graphics;
pub mod joystick;
pub mod log_sink;
pub mod time;
