//! Simulated DHT22 that sweeps the temperature range.
//!
//! The value follows a slow sine between -5C and 55C so every color bucket and
//! both out-of-range gauge ends show up. Samples are throttled like the real
//! sensor, and every `FAULT_EVERY`th sample fails with a timeout.

use std::f32::consts::TAU;
use std::time::Instant;

use thermo_gauge::config::SENSOR_MIN_INTERVAL_MS;
use thermo_gauge::sensor::ReadThrottle;
use thermo_gauge::{SensorError, TemperatureSensor};

use crate::timing::{FAULT_EVERY, SWEEP_PERIOD};

const SWEEP_MID: f32 = 25.0;
const SWEEP_AMPLITUDE: f32 = 30.0;

pub struct SimulatedSensor {
    sweep: Sweep,
    throttle: ReadThrottle,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self {
            sweep: Sweep::new(),
            throttle: ReadThrottle::new(SENSOR_MIN_INTERVAL_MS),
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self { Self::new() }
}

/// The simulated conversion behind the throttle.
struct Sweep {
    started: Instant,
    samples: u32,
}

impl Sweep {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            samples: 0,
        }
    }

    fn elapsed_ms(&self) -> u64 { self.started.elapsed().as_millis() as u64 }

    fn sample(&mut self) -> Result<f32, SensorError> {
        self.samples = self.samples.wrapping_add(1);
        if self.samples % FAULT_EVERY == 0 {
            eprintln!("[sim] injected sensor fault: {}", SensorError::Timeout.as_str());
            return Err(SensorError::Timeout);
        }
        let phase = self.started.elapsed().as_secs_f32() / SWEEP_PERIOD.as_secs_f32();
        let celsius = SWEEP_MID + SWEEP_AMPLITUDE * (phase * TAU).sin();
        // DHT22 resolution is 0.1C
        Ok((celsius * 10.0).round() / 10.0)
    }
}

impl TemperatureSensor for SimulatedSensor {
    type Error = SensorError;

    fn begin(&mut self) { self.sweep.started = Instant::now(); }

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        let now_ms = self.sweep.elapsed_ms();
        let sweep = &mut self.sweep;
        self.throttle.sample_with(now_ms, || sweep.sample())
    }
}
