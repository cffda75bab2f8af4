//! Mapping from a temperature reading to what the widgets show.
//!
//! A reading turns into three values:
//! - a gauge position on the `GAUGE_MIN..=GAUGE_MAX` scale
//! - a [`ColorBucket`] for the label text
//! - the label text itself (`23.46°C`)
//!
//! None of these fail. Readings outside `MIN_TEMPERATURE..=MAX_TEMPERATURE`
//! map to positions outside the gauge scale; clamping is left to the widget.

use core::fmt::Write;

use heapless::String;

use crate::config::{GAUGE_MAX, GAUGE_MIN, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::thresholds::{COLD_MAX, NORMAL_MAX};

/// Capacity of [`DisplayText`]. Fits any finite `f32` at two decimals plus
/// the three bytes of `°C`.
pub const DISPLAY_TEXT_CAPACITY: usize = 48;

/// Formatted label text.
pub type DisplayText = String<DISPLAY_TEXT_CAPACITY>;

/// Unit appended to every label.
pub const DEGREE_CELSIUS: &str = "\u{00B0}C";

/// Visual category of a reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorBucket {
    Cold,
    Normal,
    Hot,
}

/// Everything derived from a single reading.
#[derive(Clone, PartialEq, Debug)]
pub struct MappedReading {
    pub reading: f32,
    pub position: i32,
    pub bucket: ColorBucket,
    pub text: DisplayText,
}

/// Map a reading onto the gauge scale.
///
/// The fractional part of the reading is dropped before mapping, so 22.9C and
/// 22.0C land on the same position. The result is rounded half away from zero
/// and is not clamped. NaN truncates to 0.
pub fn gauge_position(reading: f32) -> i32 {
    // `as` saturates out-of-range floats and maps NaN to 0
    let whole = i64::from(reading as i32);
    let rise = i64::from(GAUGE_MAX - GAUGE_MIN);
    let run = i64::from(MAX_TEMPERATURE - MIN_TEMPERATURE);
    let position = div_round((whole - i64::from(MIN_TEMPERATURE)) * rise, run) + i64::from(GAUGE_MIN);
    position.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Integer division rounding half away from zero. `den` must be positive.
const fn div_round(
    num: i64,
    den: i64,
) -> i64 {
    if num >= 0 { (num + den / 2) / den } else { (num - den / 2) / den }
}

/// Pick the label color bucket. Upper bounds are inclusive; NaN is Hot.
pub fn color_bucket(reading: f32) -> ColorBucket {
    if reading <= COLD_MAX {
        ColorBucket::Cold
    } else if reading <= NORMAL_MAX {
        ColorBucket::Normal
    } else {
        ColorBucket::Hot
    }
}

/// Format a reading with two decimals and the degree-Celsius suffix.
pub fn display_text(reading: f32) -> DisplayText {
    let mut text = DisplayText::new();
    // Capacity covers every f32, so this cannot overflow
    let _ = write!(text, "{reading:.2}{DEGREE_CELSIUS}");
    text
}

/// Derive the gauge position, bucket, and text for a reading.
pub fn map_reading(reading: f32) -> MappedReading {
    MappedReading {
        reading,
        position: gauge_position(reading),
        bucket: color_bucket(reading),
        text: display_text(reading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_position(reading: f32) -> i32 {
        let whole = reading.trunc() as f64;
        ((whole - 20.0) / 30.0 * 100.0).round() as i32
    }

    #[test]
    fn test_position_at_range_ends() {
        assert_eq!(gauge_position(20.0), 0);
        assert_eq!(gauge_position(50.0), 100);
        assert_eq!(gauge_position(35.0), 50);
    }

    #[test]
    fn test_position_matches_reference_formula_in_range() {
        let mut r = 20.0f32;
        while r <= 50.0 {
            assert_eq!(gauge_position(r), reference_position(r), "reading {r}");
            r += 0.25;
        }
    }

    #[test]
    fn test_position_monotonic_in_range() {
        let mut prev = gauge_position(20.0);
        let mut r = 20.0f32;
        while r <= 50.0 {
            let pos = gauge_position(r);
            assert!(pos >= prev, "position dropped at {r}: {pos} < {prev}");
            prev = pos;
            r += 0.1;
        }
    }

    #[test]
    fn test_position_discards_fraction() {
        assert_eq!(gauge_position(22.0), gauge_position(22.99));
        // 22 -> 6.67 rounds to 7, 21 -> 3.33 rounds to 3
        assert_eq!(gauge_position(22.5), 7);
        assert_eq!(gauge_position(21.9), 3);
    }

    #[test]
    fn test_position_unclamped_below_range() {
        assert_eq!(gauge_position(5.0), -50);
        assert_eq!(gauge_position(0.0), -67);
        assert_eq!(gauge_position(-10.0), -100);
    }

    #[test]
    fn test_position_unclamped_above_range() {
        assert_eq!(gauge_position(80.0), 200);
    }

    #[test]
    fn test_position_nan_and_extremes() {
        assert_eq!(gauge_position(f32::NAN), -67);
        // Saturating truncation keeps huge values finite
        assert!(gauge_position(f32::MAX) > 0);
        assert!(gauge_position(f32::MIN) < 0);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(color_bucket(10.0), ColorBucket::Cold);
        assert_eq!(color_bucket(10.0001), ColorBucket::Normal);
        assert_eq!(color_bucket(29.0), ColorBucket::Normal);
        assert_eq!(color_bucket(29.0001), ColorBucket::Hot);
    }

    #[test]
    fn test_bucket_ranges() {
        assert_eq!(color_bucket(-40.0), ColorBucket::Cold);
        assert_eq!(color_bucket(0.0), ColorBucket::Cold);
        assert_eq!(color_bucket(21.5), ColorBucket::Normal);
        assert_eq!(color_bucket(80.0), ColorBucket::Hot);
        assert_eq!(color_bucket(f32::NAN), ColorBucket::Hot);
    }

    #[test]
    fn test_display_text_two_decimals_with_unit() {
        assert_eq!(display_text(23.456).as_str(), "23.46°C");
        assert_eq!(display_text(5.0).as_str(), "5.00°C");
        assert_eq!(display_text(-12.3).as_str(), "-12.30°C");
    }

    #[test]
    fn test_display_text_fits_extremes() {
        assert!(display_text(f32::MIN).as_str().ends_with(DEGREE_CELSIUS));
        assert!(display_text(f32::MAX).as_str().ends_with(DEGREE_CELSIUS));
    }

    #[test]
    fn test_scenario_cold_reading() {
        let mapped = map_reading(5.0);
        assert_eq!(mapped.position, -50);
        assert_eq!(mapped.bucket, ColorBucket::Cold);
        assert_eq!(mapped.text.as_str(), "5.00°C");
    }

    #[test]
    fn test_scenario_hot_reading() {
        let mapped = map_reading(35.0);
        assert_eq!(mapped.position, 50);
        assert_eq!(mapped.bucket, ColorBucket::Hot);
        assert_eq!(mapped.text.as_str(), "35.00°C");
    }
}
