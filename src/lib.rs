//! Thermo gauge library - testable logic for the DHT22 temperature display.
//!
//! This crate contains everything between the sensor and the panel that can be
//! tested on the host machine. The firmware (`pico/`) and the desktop simulator
//! (`simulator/`) add the platform-specific sensor, display, and loop timing.
//!
//! - [`config`]: Display dimensions, mapping range, and loop timing constants
//! - [`thresholds`]: Color bucket thresholds
//! - [`colors`]: RGB565 palette
//! - [`styles`]: Pre-computed text and arc styles
//! - [`mapper`]: Reading to gauge position, color bucket, and display text
//! - [`sensor`]: Sensor seam, fault policy, and read throttling
//! - [`dht22`]: DHT22 single-wire frame decoding
//! - [`widgets`]: Arc gauge and label widgets
//! - [`session`]: Display session owning the widgets
//! - [`diagnostics`]: Line-oriented diagnostic output
//! - [`pipeline`]: Periodic sensor-to-widget update
//! - [`scheduler`]: Tick clock, periodic timer, and driving loop
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links this crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod dht22;
pub mod diagnostics;
pub mod mapper;
pub mod pipeline;
pub mod scheduler;
pub mod sensor;
pub mod session;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use mapper::{ColorBucket, MappedReading, map_reading};
pub use pipeline::UpdatePipeline;
pub use scheduler::DrivingLoop;
pub use sensor::{AbsorbFault, FaultPolicy, SensorError, TemperatureSensor};
pub use session::{DisplaySession, GaugeWidgets};
