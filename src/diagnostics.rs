//! Line-oriented diagnostic output.
//!
//! The firmware routes lines to defmt over RTT, the simulator to stdout.
//! Lines carry no severity: a reading that came from a sensor fault prints
//! exactly like a measured one.

use core::fmt::Write;

use heapless::String;

/// Longest line produced by this module.
pub const LINE_CAPACITY: usize = 64;

/// A formatted diagnostic line.
pub type Line = String<LINE_CAPACITY>;

/// Prefix of the per-update reading line.
pub const READING_PREFIX: &str = "Temperature: ";

/// Receives diagnostic lines.
pub trait DiagnosticSink {
    fn write_line(
        &mut self,
        line: &str,
    );
}

/// Sink that drops every line.
#[cfg(test)]
pub struct NullSink;

#[cfg(test)]
impl DiagnosticSink for NullSink {
    fn write_line(
        &mut self,
        _line: &str,
    ) {
    }
}

/// Startup banner naming the firmware and its version.
pub fn banner() -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Thermo Gauge firmware v{}", env!("CARGO_PKG_VERSION"));
    line
}

/// `Temperature: 23.46°C`
pub fn reading_line(text: &str) -> Line {
    let mut line = Line::new();
    let _ = line.push_str(READING_PREFIX);
    let _ = line.push_str(text);
    line
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{DISPLAY_TEXT_CAPACITY, display_text};

    #[test]
    fn test_banner_contains_version() {
        let line = banner();
        assert!(line.starts_with("Thermo Gauge firmware v"));
        assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_reading_line_format() {
        assert_eq!(reading_line(&display_text(23.456)).as_str(), "Temperature: 23.46°C");
    }

    #[test]
    fn test_reading_line_fits_longest_text() {
        assert!(READING_PREFIX.len() + DISPLAY_TEXT_CAPACITY <= LINE_CAPACITY);
        let text = display_text(f32::MIN);
        assert!(reading_line(&text).ends_with(text.as_str()));
    }
}
