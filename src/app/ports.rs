//! Port traits: the hexagonal boundary between game logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GameService (domain)
//! ```
//!
//! Driven adapters (joystick, panel, event sinks) implement these traits.
//! The [`GameService`](super::service::GameService) consumes them via
//! generics, so the game core never touches hardware directly.

use crate::drivers::joystick::RawInput;
use crate::error::InputError;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick.
pub trait InputPort {
    /// Sample both joystick axes and the push button.
    fn read_input(&mut self) -> Result<RawInput, InputError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

/// A 16-bit RGB565 colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(pub u16);

impl Colour {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const ORANGE: Self = Self(0xFD20);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const PURPLE: Self = Self(0x4810);
    pub const PINK: Self = Self(0xFC18);
    pub const OLIVE: Self = Self(0x0320);
}

/// Immediate-mode drawing surface, modelled on a text-cursor TFT library.
///
/// Draw calls are infallible from the domain's point of view. An adapter
/// whose panel rejects a call logs the failure and drops that primitive;
/// the next full repaint restores the screen.
pub trait DisplayPort {
    /// Fill the whole screen.
    fn clear(&mut self, colour: Colour);

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour);

    /// One-pixel outline.
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, colour: Colour);

    /// Move the text cursor (top-left of the next glyph).
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Integer glyph scale; 1 is the small font.
    fn set_text_size(&mut self, size: u8);

    /// Foreground and background for subsequent text. The background is
    /// painted behind each glyph so numbers overwrite cleanly.
    fn set_text_colour(&mut self, fg: Colour, bg: Colour);

    /// Print at the text cursor and advance it.
    fn print(&mut self, text: &str);

    /// Print a decimal number at the text cursor.
    fn print_number(&mut self, value: u32) {
        let mut buf: heapless::String<10> = heapless::String::new();
        if core::fmt::write(&mut buf, format_args!("{value}")).is_ok() {
            self.print(&buf);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
