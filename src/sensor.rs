//! Sensor seam - reading temperature without knowing the hardware.
//!
//! - [`TemperatureSensor`]: the port a sensor adapter implements
//! - [`FaultPolicy`]: turns a failed read into the reading the pipeline uses
//! - [`ReadThrottle`]: enforces the sensor's minimum sampling interval
//!
//! # Fault Handling
//!
//! A failed read is not surfaced anywhere. [`AbsorbFault`] replaces it with
//! [`FAULT_READING`] and the pipeline carries on as if that value had been
//! measured: Cold label, gauge below zero, `0.00°C`. Swapping the policy is
//! the only change needed to treat faults differently.

/// Errors a temperature sensor can report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not drive the bus within the expected window.
    Timeout,
    /// The frame checksum did not match its payload.
    Checksum,
}

impl SensorError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::Checksum => "Checksum mismatch",
        }
    }
}

/// A single temperature sensor.
///
/// Reads are synchronous and may block for the sensor's bus latency.
pub trait TemperatureSensor {
    type Error;

    /// Prepare the sensor. Called once at startup.
    fn begin(&mut self) {}

    /// Read the current temperature in degrees Celsius.
    fn read_celsius(&mut self) -> Result<f32, Self::Error>;
}

// =============================================================================
// Fault Policy
// =============================================================================

/// Reading used in place of a failed sensor read.
pub const FAULT_READING: f32 = 0.0;

/// Decides what a failed read turns into.
pub trait FaultPolicy {
    fn resolve<E>(
        &mut self,
        result: Result<f32, E>,
    ) -> f32;
}

/// Treat a fault as a valid reading of a fixed substitute value.
#[derive(Clone, Copy, Debug)]
pub struct AbsorbFault {
    substitute: f32,
}

impl AbsorbFault {
    pub const fn new(substitute: f32) -> Self { Self { substitute } }

    pub const fn substitute(&self) -> f32 { self.substitute }
}

impl Default for AbsorbFault {
    fn default() -> Self { Self::new(FAULT_READING) }
}

impl FaultPolicy for AbsorbFault {
    fn resolve<E>(
        &mut self,
        result: Result<f32, E>,
    ) -> f32 {
        result.unwrap_or(self.substitute)
    }
}

// =============================================================================
// Read Throttle
// =============================================================================

/// Holds a slow sensor's last result between samples.
///
/// Slow sensors (the DHT22 needs 2 s between conversions) return garbage when
/// polled faster. Adapters route every read through
/// [`ReadThrottle::sample_with`], which only touches the bus once the interval
/// has passed and otherwise hands back the previous result, fault included.
#[derive(Clone, Copy, Debug)]
pub struct ReadThrottle {
    min_interval_ms: u64,
    last: Option<(u64, Result<f32, SensorError>)>,
}

impl ReadThrottle {
    pub const fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last: None,
        }
    }

    /// Run `read` if a new sample is due at `now_ms`, else return the cached
    /// result.
    ///
    /// The first call always samples. A clock that moves backwards also
    /// allows a sample rather than stalling the sensor.
    pub fn sample_with<F>(
        &mut self,
        now_ms: u64,
        read: F,
    ) -> Result<f32, SensorError>
    where
        F: FnOnce() -> Result<f32, SensorError>,
    {
        match self.last {
            Some((at, result)) if now_ms >= at && now_ms - at < self.min_interval_ms => result,
            _ => {
                let result = read();
                self.last = Some((now_ms, result));
                result
            }
        }
    }
}

/// Sensor that replays a fixed sequence of results, repeating the last one.
#[cfg(test)]
pub(crate) mod fake {
    use super::{SensorError, TemperatureSensor};

    pub struct ScriptedSensor {
        script: Vec<Result<f32, SensorError>>,
        next: usize,
        pub begun: bool,
        pub reads: usize,
    }

    impl ScriptedSensor {
        pub fn new(script: &[Result<f32, SensorError>]) -> Self {
            Self {
                script: script.to_vec(),
                next: 0,
                begun: false,
                reads: 0,
            }
        }
    }

    impl TemperatureSensor for ScriptedSensor {
        type Error = SensorError;

        fn begin(&mut self) { self.begun = true; }

        fn read_celsius(&mut self) -> Result<f32, Self::Error> {
            self.reads += 1;
            let idx = self.next.min(self.script.len() - 1);
            self.next += 1;
            self.script[idx]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SENSOR_MIN_INTERVAL_MS;

    #[test]
    fn test_absorb_fault_passes_readings_through() {
        let mut policy = AbsorbFault::default();
        assert_eq!(policy.resolve::<SensorError>(Ok(23.4)), 23.4);
        assert_eq!(policy.resolve::<SensorError>(Ok(-5.0)), -5.0);
    }

    #[test]
    fn test_absorb_fault_substitutes_low_reading() {
        let mut policy = AbsorbFault::default();
        assert_eq!(policy.resolve(Err(SensorError::Timeout)), FAULT_READING);
        assert_eq!(policy.resolve(Err(SensorError::Checksum)), FAULT_READING);
    }

    #[test]
    fn test_absorb_fault_custom_substitute() {
        let mut policy = AbsorbFault::new(-40.0);
        assert_eq!(policy.substitute(), -40.0);
        assert_eq!(policy.resolve(Err(())), -40.0);
    }

    /// Read through the throttle, counting how often the bus is touched.
    fn read_at(
        throttle: &mut ReadThrottle,
        now_ms: u64,
        result: Result<f32, SensorError>,
        samples: &mut usize,
    ) -> Result<f32, SensorError> {
        throttle.sample_with(now_ms, || {
            *samples += 1;
            result
        })
    }

    #[test]
    fn test_throttle_first_read_samples() {
        let mut throttle = ReadThrottle::new(2000);
        let mut samples = 0;
        assert_eq!(read_at(&mut throttle, 0, Ok(21.5), &mut samples), Ok(21.5));
        assert_eq!(samples, 1);
    }

    #[test]
    fn test_throttle_returns_cached_reading_inside_interval() {
        let mut throttle = ReadThrottle::new(SENSOR_MIN_INTERVAL_MS);
        let mut samples = 0;
        assert_eq!(read_at(&mut throttle, 1000, Ok(23.4), &mut samples), Ok(23.4));
        assert_eq!(read_at(&mut throttle, 1100, Ok(40.0), &mut samples), Ok(23.4));
        assert_eq!(read_at(&mut throttle, 2999, Err(SensorError::Timeout), &mut samples), Ok(23.4));
        assert_eq!(samples, 1);
    }

    #[test]
    fn test_throttle_returns_cached_fault_inside_interval() {
        let mut throttle = ReadThrottle::new(SENSOR_MIN_INTERVAL_MS);
        let mut samples = 0;
        assert_eq!(read_at(&mut throttle, 0, Ok(23.4), &mut samples), Ok(23.4));
        assert_eq!(read_at(&mut throttle, 2000, Err(SensorError::Checksum), &mut samples), Err(SensorError::Checksum));
        // The fault sticks until the next sample, the earlier reading does not come back
        assert_eq!(read_at(&mut throttle, 2500, Ok(30.0), &mut samples), Err(SensorError::Checksum));
        assert_eq!(read_at(&mut throttle, 3999, Ok(30.0), &mut samples), Err(SensorError::Checksum));
        assert_eq!(samples, 2);
    }

    #[test]
    fn test_throttle_samples_again_at_exact_interval() {
        let mut throttle = ReadThrottle::new(SENSOR_MIN_INTERVAL_MS);
        let mut samples = 0;
        read_at(&mut throttle, 1000, Ok(20.0), &mut samples).ok();
        assert_eq!(read_at(&mut throttle, 1000 + SENSOR_MIN_INTERVAL_MS - 1, Ok(25.0), &mut samples), Ok(20.0));
        assert_eq!(read_at(&mut throttle, 1000 + SENSOR_MIN_INTERVAL_MS, Ok(25.0), &mut samples), Ok(25.0));
        assert_eq!(read_at(&mut throttle, 1001 + SENSOR_MIN_INTERVAL_MS, Ok(30.0), &mut samples), Ok(25.0));
        assert_eq!(samples, 2);
    }

    #[test]
    fn test_throttle_recovers_from_clock_reset() {
        let mut throttle = ReadThrottle::new(2000);
        let mut samples = 0;
        read_at(&mut throttle, 5000, Ok(20.0), &mut samples).ok();
        assert_eq!(read_at(&mut throttle, 10, Ok(22.0), &mut samples), Ok(22.0));
        assert_eq!(samples, 2);
    }

    #[test]
    fn test_sensor_error_messages() {
        assert_eq!(SensorError::Timeout.as_str(), "Timeout");
        assert_eq!(SensorError::Checksum.as_str(), "Checksum mismatch");
    }
}
