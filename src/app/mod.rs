//! Application core: game orchestration, zero I/O.
//!
//! This module wires the rules in [`crate::game`] to the outside world:
//! the [`service::GameService`] drives the FSM each tick, and all
//! interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
