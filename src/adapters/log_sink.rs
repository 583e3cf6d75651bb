//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured game events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | initial_mode={:?}", mode);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::NewGame => {
                info!("GAME  | new board dealt");
            }
            AppEvent::CardFlipped { position, value } => {
                info!("GAME  | flip pos={} value={:?}", position, value);
            }
            AppEvent::PairMatched { value, points, score, combo } => {
                info!(
                    "GAME  | match value={} +{} | score={} combo={}",
                    value, points, score, combo
                );
            }
            AppEvent::PairMismatched { first, second, score } => {
                info!("GAME  | mismatch {} / {} | score={}", first, second, score);
            }
            AppEvent::BoardCleared { score } => {
                info!("GAME  | board cleared | final score={}", score);
            }
            AppEvent::ScoreRecorded { score, rank: Some(rank) } => {
                info!("SCORE | {} recorded at rank {}", score, rank + 1);
            }
            AppEvent::ScoreRecorded { score, rank: None } => {
                info!("SCORE | {} did not place", score);
            }
            AppEvent::InputFault(e) => {
                warn!("INPUT | {}", e);
            }
        }
    }
}
