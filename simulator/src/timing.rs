//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the library crate.

use std::time::Duration;

/// Target pass time (~50 FPS). The loop sleeps if a pass completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Logical milliseconds added to the driving loop clock per pass.
pub const FRAME_TICK_MS: u32 = FRAME_TIME.as_millis() as u32;

/// Period of one full sweep of the simulated temperature.
pub const SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Every this many sensor samples, the simulated sensor reports a fault.
pub const FAULT_EVERY: u32 = 15;
