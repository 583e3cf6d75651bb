//! Mock adapters for integration tests.
//!
//! A scripted joystick, a display that records every draw call, and an
//! event sink that keeps every event, so tests can assert on the full
//! history without touching real ADC/GPIO/SPI.

use memory_match::app::events::AppEvent;
use memory_match::app::ports::{Colour, DisplayPort, EventSink, InputPort};
use memory_match::drivers::joystick::{Direction, RawInput};
use memory_match::error::InputError;

pub const CENTRE: u16 = 512;

// ── ScriptedInput ─────────────────────────────────────────────

/// Returns whatever level the test last set, every read.
pub struct ScriptedInput {
    pub level: Result<RawInput, InputError>,
    pub reads: u32,
}

#[allow(dead_code)]
impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            level: Ok(RawInput::centred(CENTRE)),
            reads: 0,
        }
    }

    pub fn rest(&mut self) {
        self.level = Ok(RawInput::centred(CENTRE));
    }

    pub fn hold_button(&mut self) {
        self.level = Ok(RawInput {
            button_low: true,
            ..RawInput::centred(CENTRE)
        });
    }

    /// Full deflection in `direction` (low reading = Left / Up).
    pub fn tilt(&mut self, direction: Direction) {
        let mut raw = RawInput::centred(CENTRE);
        match direction {
            Direction::Left => raw.horizontal = 0,
            Direction::Right => raw.horizontal = 1023,
            Direction::Up => raw.vertical = 0,
            Direction::Down => raw.vertical = 1023,
        }
        self.level = Ok(raw);
    }

    pub fn fail(&mut self, error: InputError) {
        self.level = Err(error);
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for ScriptedInput {
    fn read_input(&mut self) -> Result<RawInput, InputError> {
        self.reads += 1;
        self.level
    }
}

// ── RecordingDisplay ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Colour),
    FillRect { x: i32, y: i32, w: u32, h: u32, colour: Colour },
    DrawRect { x: i32, y: i32, w: u32, h: u32, colour: Colour },
    FillCircle { cx: i32, cy: i32, radius: u32, colour: Colour },
    Print(String),
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DrawCall>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
    }

    pub fn printed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Print(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_printed(&self, text: &str) -> bool {
        self.printed().contains(&text)
    }

    pub fn full_repaints(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count()
    }

    pub fn outlines_in(&self, colour: Colour) -> Vec<(i32, i32, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::DrawRect { x, y, w, h, colour: drawn } if drawn == colour => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn clear(&mut self, colour: Colour) {
        self.calls.push(DrawCall::Clear(colour));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, colour });
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour) {
        self.calls.push(DrawCall::DrawRect { x, y, w, h, colour });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, colour: Colour) {
        self.calls.push(DrawCall::FillCircle { cx, cy, radius, colour });
    }

    fn set_cursor(&mut self, _x: i32, _y: i32) {}

    fn set_text_size(&mut self, _size: u8) {}

    fn set_text_colour(&mut self, _fg: Colour, _bg: Colour) {}

    fn print(&mut self, text: &str) {
        self.calls.push(DrawCall::Print(text.to_string()));
    }
}

// ── LogSink ───────────────────────────────────────────────────

/// Event sink that records all emitted events.
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn contains(&self, event: &AppEvent) -> bool {
        self.events.contains(event)
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
