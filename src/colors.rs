//! Color constants for the gauge display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Custom colors below are 24-bit palette values reduced to that format
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::mapper::ColorBucket;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure white. Screen background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black. Label text before the first reading.
pub const BLACK: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Label Palette
// =============================================================================

/// Material blue `0x2196F3`. Cold readings.
pub const PALETTE_BLUE: Rgb565 = Rgb565::new(4, 37, 30);

/// Material green `0x4CAF50`. Normal readings.
pub const PALETTE_GREEN: Rgb565 = Rgb565::new(9, 43, 10);

/// Material red `0xF44336`. Hot readings.
pub const PALETTE_RED: Rgb565 = Rgb565::new(30, 16, 6);

// =============================================================================
// Gauge Colors
// =============================================================================

/// Arc background track `0xE0E0E0`.
pub const GAUGE_TRACK: Rgb565 = Rgb565::new(28, 56, 28);

/// Arc indicator `0x666666`.
pub const GAUGE_INDICATOR: Rgb565 = Rgb565::new(12, 25, 12);

/// Knob at the indicator tip `0x333333`.
pub const GAUGE_KNOB: Rgb565 = Rgb565::new(6, 12, 6);

/// Screen background behind the widgets.
pub const BACKGROUND: Rgb565 = WHITE;

/// Label color before any reading has been applied.
pub const LABEL_DEFAULT: Rgb565 = BLACK;

/// Label text color for a color bucket.
pub const fn bucket_color(bucket: ColorBucket) -> Rgb565 {
    match bucket {
        ColorBucket::Cold => PALETTE_BLUE,
        ColorBucket::Normal => PALETTE_GREEN,
        ColorBucket::Hot => PALETTE_RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_colors_are_distinct() {
        assert_ne!(bucket_color(ColorBucket::Cold), bucket_color(ColorBucket::Normal));
        assert_ne!(bucket_color(ColorBucket::Normal), bucket_color(ColorBucket::Hot));
        assert_ne!(bucket_color(ColorBucket::Cold), bucket_color(ColorBucket::Hot));
    }

    #[test]
    fn test_bucket_colors_readable_on_background() {
        for bucket in [ColorBucket::Cold, ColorBucket::Normal, ColorBucket::Hot] {
            assert_ne!(bucket_color(bucket), BACKGROUND);
        }
    }

    #[test]
    fn test_palette_channel_dominance() {
        assert!(PALETTE_BLUE.b() > PALETTE_BLUE.r());
        assert!(PALETTE_GREEN.g() / 2 > PALETTE_GREEN.r());
        assert!(PALETTE_RED.r() > PALETTE_RED.b());
    }
}
