//! Centered text label.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::LABEL_DEFAULT;
use crate::mapper::DisplayText;
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT};

pub struct Label {
    anchor: Point,
    text: DisplayText,
    color: Rgb565,
    dirty: bool,
}

impl Label {
    /// Create a label centered on `anchor`. It starts dirty.
    pub fn new(
        anchor: Point,
        text: &str,
    ) -> Self {
        let mut label = Self {
            anchor,
            text: DisplayText::new(),
            color: LABEL_DEFAULT,
            dirty: true,
        };
        fill_truncated(&mut label.text, text);
        label
    }

    /// Replace the text. Text longer than the label capacity is cut at a
    /// character boundary.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        if self.text.as_str() != text {
            fill_truncated(&mut self.text, text);
            self.dirty = true;
        }
    }

    pub fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        if self.color != color {
            self.color = color;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    #[inline]
    pub const fn color(&self) -> Rgb565 { self.color }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub fn mark_clean(&mut self) { self.dirty = false; }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = MonoTextStyle::new(LABEL_FONT, self.color);
        Text::with_text_style(&self.text, self.anchor, style, CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}

fn fill_truncated(
    buf: &mut DisplayText,
    text: &str,
) {
    buf.clear();
    for c in text.chars() {
        if buf.push(c).is_err() {
            break;
        }
    }
}
