//! Memory-match game firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod pins;
pub mod ui;

// Adapters and drivers compile on the host too; the hardware-facing
// parts are stubbed by cfg attributes inside.
pub mod adapters;
pub mod drivers;
