//! Display, mapping, and timing configuration constants.
//!
//! Everything the device does is fixed at compile time. Layout values are
//! pre-computed as `const` so drawing code never recalculates positions.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 in landscape: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Sensor Configuration
// =============================================================================

/// GPIO carrying the DHT22 data line.
pub const DHT_PIN: u8 = 27;

/// Minimum time between two DHT22 conversions. Reads inside this window
/// return the previous result.
pub const SENSOR_MIN_INTERVAL_MS: u64 = 2000;

// =============================================================================
// Value Mapping Configuration
// =============================================================================

/// Temperature mapped to the start of the gauge (degrees Celsius).
pub const MIN_TEMPERATURE: i32 = 20;

/// Temperature mapped to the end of the gauge (degrees Celsius).
pub const MAX_TEMPERATURE: i32 = 50;

/// Gauge position at `MIN_TEMPERATURE`.
pub const GAUGE_MIN: i32 = 0;

/// Gauge position at `MAX_TEMPERATURE`.
pub const GAUGE_MAX: i32 = 100;

const _: () = assert!(MIN_TEMPERATURE < MAX_TEMPERATURE);
const _: () = assert!(GAUGE_MIN < GAUGE_MAX);

// =============================================================================
// Loop Timing
// =============================================================================

/// Interval between two sensor-to-widget updates, in logical milliseconds.
pub const UPDATE_PERIOD_MS: u32 = 100;

/// Logical time added to the tick clock on every driving loop pass.
pub const LOOP_TICK_MS: u32 = 1;

const _: () = assert!(LOOP_TICK_MS > 0);
const _: () = assert!(UPDATE_PERIOD_MS >= LOOP_TICK_MS);

// =============================================================================
// Gauge Layout
// =============================================================================

/// Outer diameter of the arc gauge in pixels.
pub const GAUGE_DIAMETER: u32 = 210;

/// Stroke width of the arc track and indicator.
pub const GAUGE_STROKE: u32 = 10;

/// Diameter of the knob drawn at the indicator tip.
pub const GAUGE_KNOB_DIAMETER: u32 = 20;

/// Angle where the arc starts, clockwise from 3 o'clock.
pub const GAUGE_ROTATION_DEG: f32 = 135.0;

/// Full sweep of the arc background.
pub const GAUGE_SWEEP_DEG: f32 = 270.0;

/// Gauge and label are centered this far below the screen center.
pub const GAUGE_OFFSET_Y: i32 = 10;

/// Gauge center X coordinate.
pub const GAUGE_CENTER_X: i32 = CENTER_X;

/// Gauge center Y coordinate.
pub const GAUGE_CENTER_Y: i32 = CENTER_Y + GAUGE_OFFSET_Y;

/// Side of the square redrawn when the gauge changes. The knob overhangs the
/// arc stroke by half of the difference in widths.
pub const GAUGE_AREA_SIDE: u32 = GAUGE_DIAMETER + (GAUGE_KNOB_DIAMETER - GAUGE_STROKE);

const _: () = assert!(GAUGE_AREA_SIDE <= SCREEN_HEIGHT);
const _: () = assert!(GAUGE_KNOB_DIAMETER >= GAUGE_STROKE);

/// Text shown by the label before the first reading.
pub const LABEL_PLACEHOLDER: &str = "--.--";
