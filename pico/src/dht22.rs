//! Bit-banged DHT22 driver on a single GPIO.
//!
//! The data line needs a pull-up (the internal one is enabled, an external
//! 4.7k-10k resistor is more reliable on long wires). The host pulls the line
//! low to request a conversion, releases it, then times the sensor's pulses
//! with interrupts disabled. Decoding and the checksum live in
//! `thermo_gauge::dht22`.
//!
//! A full transaction blocks for about 5ms. Reads closer together than
//! `SENSOR_MIN_INTERVAL_MS` return the previous result without touching the
//! bus.

use defmt::debug;
use embassy_rp::gpio::{Flex, Level, Pull};
use embassy_time::{Duration, Instant, block_for};
use thermo_gauge::config::SENSOR_MIN_INTERVAL_MS;
use thermo_gauge::dht22::{FRAME_BITS, LEVEL_TIMEOUT_US, Pulses, START_LOW_US, START_RELEASE_US, decode_frame};
use thermo_gauge::sensor::ReadThrottle;
use thermo_gauge::{SensorError, TemperatureSensor};

pub struct Dht22<'d> {
    pin: Flex<'d>,
    throttle: ReadThrottle,
}

impl<'d> Dht22<'d> {
    pub fn new(pin: Flex<'d>) -> Self {
        Self {
            pin,
            throttle: ReadThrottle::new(SENSOR_MIN_INTERVAL_MS),
        }
    }
}

/// Run one bus transaction.
fn sample(pin: &mut Flex<'_>) -> Result<f32, SensorError> {
    // Start request
    pin.set_as_output();
    pin.set_low();
    block_for(Duration::from_micros(START_LOW_US));

    let mut pulses: Pulses = [(0, 0); FRAME_BITS];
    cortex_m::interrupt::free(|_| {
        pin.set_as_input();
        block_for(Duration::from_micros(START_RELEASE_US));

        // Response: ~80us low, ~80us high
        level_width(pin, Level::Low)?;
        level_width(pin, Level::High)?;

        for pulse in pulses.iter_mut() {
            let low = level_width(pin, Level::Low)?;
            let high = level_width(pin, Level::High)?;
            *pulse = (low, high);
        }
        Ok::<(), SensorError>(())
    })?;

    let frame = decode_frame(&pulses)?;
    debug!("DHT22 frame {:02x}: {}C {}%RH", frame.bytes(), frame.temperature(), frame.humidity());
    Ok(frame.temperature())
}

/// Time how long the line stays at `level`, in microseconds.
fn level_width(
    pin: &Flex<'_>,
    level: Level,
) -> Result<u32, SensorError> {
    let start = Instant::now();
    while pin.get_level() == level {
        if start.elapsed().as_micros() > LEVEL_TIMEOUT_US {
            return Err(SensorError::Timeout);
        }
    }
    Ok(start.elapsed().as_micros() as u32)
}

impl TemperatureSensor for Dht22<'_> {
    type Error = SensorError;

    fn begin(&mut self) {
        self.pin.set_pull(Pull::Up);
        self.pin.set_as_input();
    }

    fn read_celsius(&mut self) -> Result<f32, Self::Error> {
        let pin = &mut self.pin;
        self.throttle.sample_with(Instant::now().as_millis(), || sample(pin))
    }
}
