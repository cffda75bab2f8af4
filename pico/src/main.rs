//! DHT22 Temperature Gauge Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads a DHT22 on GPIO27 and shows the temperature as an arc gauge with a
//! colored label on a 320x240 ST7789.
//!
//! # Architecture
//!
//! A single cooperative loop on one embassy task:
//! - dispatch the sensor-to-widget update when its periodic timer is due
//! - composite dirty widgets to the panel
//! - advance the logical clock by `LOOP_TICK_MS` and sleep that long
//!
//! The DHT22 read blocks the loop for a few milliseconds; nothing else needs
//! to run meanwhile.

#![no_std]
#![no_main]
#![allow(clippy::cast_possible_truncation)]

mod dht22;
mod display;
mod log_sink;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use thermo_gauge::config::{DHT_PIN, LOOP_TICK_MS, SCREEN_HEIGHT, SCREEN_WIDTH, UPDATE_PERIOD_MS};
use thermo_gauge::{AbsorbFault, DisplaySession, DrivingLoop, UpdatePipeline};
use {defmt_rtt as _, panic_probe as _};

use crate::dht22::Dht22;
use crate::display::{display_spi_config, init_display};
use crate::log_sink::DefmtSink;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"thermo-gauge"),
    embassy_rp::binary_info::rp_program_description!(c"DHT22 temperature arc gauge on ST7789"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Banner first, then the sensor, then the panel
    let sensor = Dht22::new(Flex::new(p.PIN_27));
    let mut pipeline = UpdatePipeline::new(sensor, AbsorbFault::default(), DefmtSink);
    pipeline.begin();
    info!("DHT22 on GPIO{}", DHT_PIN);

    // Initialize display pins
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High); // Turn on backlight

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let mut display = init_display(spi, cs, dc);
    info!("Display initialized: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut session = DisplaySession::new();
    let mut driver = DrivingLoop::new();

    info!("Starting driving loop (update every {} ms)", UPDATE_PERIOD_MS);

    loop {
        driver.service(&mut pipeline, &mut session, &mut display);
        driver.tick(LOOP_TICK_MS);
        Timer::after_millis(u64::from(LOOP_TICK_MS)).await;
    }
}
