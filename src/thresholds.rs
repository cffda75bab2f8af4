//! Color bucket thresholds for the temperature label.
//!
//! Upper bounds are inclusive: a reading equal to a threshold belongs to the
//! colder bucket.
//!
//! | Reading (C)      | Bucket | Label color |
//! |------------------|--------|-------------|
//! | `<= 10.0`        | Cold   | Blue        |
//! | `(10.0, 29.0]`   | Normal | Green       |
//! | `> 29.0`         | Hot    | Red         |

/// Highest reading still shown as Cold.
pub const COLD_MAX: f32 = 10.0;

/// Highest reading still shown as Normal. Anything above is Hot.
pub const NORMAL_MAX: f32 = 29.0;

const _: () = assert!(COLD_MAX < NORMAL_MAX);
