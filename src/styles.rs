//! Pre-computed static styles to avoid per-frame object construction.
//!
//! The label font is the ISO 8859-1 variant so the degree sign in `°C` has a
//! glyph. Label color changes with every bucket, so callers build
//! `MonoTextStyle::new(LABEL_FONT, color)` from the shared font reference.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};

use crate::colors::{BACKGROUND, GAUGE_INDICATOR, GAUGE_KNOB, GAUGE_TRACK};
use crate::config::GAUGE_STROKE;

// =============================================================================
// Text
// =============================================================================

/// Font for the temperature label.
pub const LABEL_FONT: &MonoFont<'static> = &FONT_10X20;

/// Centered horizontally and vertically on the anchor point.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Gauge
// =============================================================================

/// Background track of the arc, stroked inside the gauge diameter.
pub const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .stroke_color(GAUGE_TRACK)
    .stroke_width(GAUGE_STROKE)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();

/// Filled part of the arc.
pub const INDICATOR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .stroke_color(GAUGE_INDICATOR)
    .stroke_width(GAUGE_STROKE)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();

/// Knob at the indicator tip.
pub const KNOB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GAUGE_KNOB);

/// Fill used to erase the gauge area before a redraw.
pub const BACKGROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);
