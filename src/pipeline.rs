//! Periodic sensor-to-widget update.
//!
//! One run of [`UpdatePipeline::run`] does, in order:
//! 1. read the sensor (blocking for its bus latency)
//! 2. resolve a failed read through the fault policy
//! 3. map the reading
//! 4. set the label color
//! 5. set the gauge position
//! 6. set the label text
//! 7. write `Temperature: <text>` to the diagnostic sink
//!
//! The pipeline never decides when it runs; the driving loop's periodic timer
//! does.

use crate::diagnostics::{DiagnosticSink, banner, reading_line};
use crate::mapper::{MappedReading, map_reading};
use crate::sensor::{FaultPolicy, TemperatureSensor};
use crate::session::GaugeWidgets;

pub struct UpdatePipeline<S, P, K> {
    sensor: S,
    policy: P,
    sink: K,
}

impl<S, P, K> UpdatePipeline<S, P, K>
where
    S: TemperatureSensor,
    P: FaultPolicy,
    K: DiagnosticSink,
{
    pub const fn new(
        sensor: S,
        policy: P,
        sink: K,
    ) -> Self {
        Self { sensor, policy, sink }
    }

    /// Print the banner and initialize the sensor. Call once at startup.
    pub fn begin(&mut self) {
        self.sink.write_line(&banner());
        self.sensor.begin();
    }

    /// Run one update against `widgets` and return what was applied.
    pub fn run<W>(
        &mut self,
        widgets: &mut W,
    ) -> MappedReading
    where
        W: GaugeWidgets,
    {
        let reading = self.policy.resolve(self.sensor.read_celsius());
        let mapped = map_reading(reading);

        widgets.set_label_color(mapped.bucket);
        widgets.set_gauge_position(mapped.position);
        widgets.set_label_text(&mapped.text);

        self.sink.write_line(&reading_line(&mapped.text));
        mapped
    }

    #[inline]
    pub fn sensor(&self) -> &S { &self.sensor }

    #[inline]
    pub fn sensor_mut(&mut self) -> &mut S { &mut self.sensor }

    #[inline]
    pub fn sink(&self) -> &K { &self.sink }
}
