//! Display adapter: [`DisplayPort`] over any `embedded-graphics` target.
//!
//! On the board the target is the `mipidsi` ILI9341 driver; in tests it is
//! an in-memory framebuffer. Text is drawn with the built-in mono fonts,
//! picked by the requested text size.
//!
//! A rejected draw call is logged and dropped; the loop keeps running and
//! the next full repaint restores the screen.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X18, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use crate::app::ports::{Colour, DisplayPort};
use crate::error::{DisplayError, Error};

impl From<Colour> for Rgb565 {
    fn from(c: Colour) -> Self {
        RawU16::new(c.0).into()
    }
}

/// Concrete adapter wrapping a colour draw target.
pub struct GraphicsDisplay<D> {
    target: D,
    cursor: Point,
    text_size: u8,
    fg: Colour,
    bg: Colour,
    draw_failures: u32,
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_size: 1,
            fg: Colour::WHITE,
            bg: Colour::BLACK,
            draw_failures: 0,
        }
    }

    /// Draw calls the target has rejected since boot.
    pub fn draw_failures(&self) -> u32 {
        self.draw_failures
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn font(&self) -> &'static MonoFont<'static> {
        match self.text_size {
            0 | 1 => &FONT_6X10,
            2 => &FONT_9X18,
            _ => &FONT_10X20,
        }
    }

    fn check<T>(&mut self, result: Result<T, D::Error>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(_) => {
                self.draw_failures = self.draw_failures.saturating_add(1);
                warn!("{}", Error::from(DisplayError::DrawFailed));
                None
            }
        }
    }

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }
}

impl<D> DisplayPort for GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self, colour: Colour) {
        let result = self.target.clear(colour.into());
        self.check(result);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour) {
        let result = Self::rect(x, y, w, h)
            .into_styled(PrimitiveStyle::with_fill(colour.into()))
            .draw(&mut self.target);
        self.check(result);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, colour: Colour) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(colour.into())
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let result = Self::rect(x, y, w, h).into_styled(style).draw(&mut self.target);
        self.check(result);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, colour: Colour) {
        let result = Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(colour.into()))
            .draw(&mut self.target);
        self.check(result);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }

    fn set_text_colour(&mut self, fg: Colour, bg: Colour) {
        self.fg = fg;
        self.bg = bg;
    }

    fn print(&mut self, text: &str) {
        let style = MonoTextStyleBuilder::new()
            .font(self.font())
            .text_color(self.fg.into())
            .background_color(self.bg.into())
            .build();
        let result = Text::with_baseline(text, self.cursor, style, Baseline::Top).draw(&mut self.target);
        if let Some(next) = self.check(result) {
            self.cursor = next;
        }
    }
}
