//! Thermo Gauge Simulator for Desktop.
//!
//! Runs the same pipeline, widgets, and driving loop as the firmware inside an
//! embedded-graphics-simulator window, fed by a simulated DHT22.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod sensor;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use thermo_gauge::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use thermo_gauge::diagnostics::DiagnosticSink;
use thermo_gauge::{AbsorbFault, DisplaySession, DrivingLoop, UpdatePipeline};

use crate::sensor::SimulatedSensor;
use crate::timing::{FRAME_TICK_MS, FRAME_TIME};

/// Diagnostic lines to stdout.
struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(
        &mut self,
        line: &str,
    ) {
        println!("{line}");
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Thermo Gauge Sim", &output_settings);

    let mut pipeline = UpdatePipeline::new(SimulatedSensor::new(), AbsorbFault::default(), StdoutSink);
    pipeline.begin();

    let mut session = DisplaySession::new();
    let mut driver = DrivingLoop::new();

    loop {
        let frame_start = Instant::now();

        driver.service(&mut pipeline, &mut session, &mut display);
        window.update(&display);

        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                return;
            }
        }

        driver.tick(FRAME_TICK_MS);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
