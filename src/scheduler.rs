//! Tick clock, periodic timer, and the driving loop that ties them together.
//!
//! The loop owns a logical millisecond clock. Platforms advance it by a fixed
//! step per pass (`LOOP_TICK_MS`) and then yield for roughly that long, so the
//! clock tracks wall time only as well as the loop keeps up. A slow sensor read
//! stretches one pass; the clock does not see the extra time.
//!
//! ```ignore
//! loop {
//!     driver.service(&mut pipeline, &mut session, &mut display);
//!     driver.tick(LOOP_TICK_MS);
//!     sleep(LOOP_TICK_MS);
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::UPDATE_PERIOD_MS;
use crate::diagnostics::DiagnosticSink;
use crate::pipeline::UpdatePipeline;
use crate::sensor::{FaultPolicy, TemperatureSensor};
use crate::session::DisplaySession;

// =============================================================================
// Tick Clock
// =============================================================================

/// Logical millisecond clock. Wraps after ~49 days.
#[derive(Clone, Copy, Default, Debug)]
pub struct TickClock {
    now_ms: u32,
}

impl TickClock {
    pub const fn new() -> Self { Self { now_ms: 0 } }

    /// Advance the clock by `ms`.
    #[inline]
    pub fn inc(
        &mut self,
        ms: u32,
    ) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    #[inline]
    pub const fn now(&self) -> u32 { self.now_ms }
}

// =============================================================================
// Periodic Timer
// =============================================================================

/// Fixed-interval timer that repeats forever.
///
/// The first period starts when the timer is created. Every fire re-arms the
/// timer one interval after the previous due time, keeping the cadence
/// steady. If the loop fell more than a whole period behind, the missed
/// periods are skipped instead of fired back to back.
#[derive(Clone, Copy, Debug)]
pub struct PeriodicTimer {
    interval_ms: u32,
    next_due_ms: u32,
    fired: u32,
}

impl PeriodicTimer {
    /// Create a timer whose first fire is `interval_ms` after `now_ms`.
    pub const fn new(
        interval_ms: u32,
        now_ms: u32,
    ) -> Self {
        Self {
            interval_ms,
            next_due_ms: now_ms.wrapping_add(interval_ms),
            fired: 0,
        }
    }

    /// Returns `true` at most once per call when the timer is due.
    pub fn poll(
        &mut self,
        now_ms: u32,
    ) -> bool {
        // Wrapping difference: due when now is at or past next_due
        let late = now_ms.wrapping_sub(self.next_due_ms);
        if late >= u32::MAX / 2 {
            return false;
        }

        let skipped = if self.interval_ms == 0 { 0 } else { late / self.interval_ms };
        self.next_due_ms = self
            .next_due_ms
            .wrapping_add(self.interval_ms.wrapping_mul(skipped + 1));
        self.fired = self.fired.wrapping_add(1);
        true
    }

    #[inline]
    pub const fn next_due_ms(&self) -> u32 { self.next_due_ms }

    /// Number of times the timer has fired.
    #[inline]
    pub const fn fired(&self) -> u32 { self.fired }
}

// =============================================================================
// Driving Loop
// =============================================================================

/// One cooperative loop: dispatch a due update, then composite.
pub struct DrivingLoop {
    clock: TickClock,
    update_timer: PeriodicTimer,
}

impl DrivingLoop {
    /// Driving loop firing updates every `UPDATE_PERIOD_MS`.
    pub const fn new() -> Self { Self::with_period(UPDATE_PERIOD_MS) }

    pub const fn with_period(period_ms: u32) -> Self {
        Self {
            clock: TickClock::new(),
            update_timer: PeriodicTimer::new(period_ms, 0),
        }
    }

    /// Run one pass. Returns `true` if the update pipeline ran.
    ///
    /// All widget mutations of the pipeline run are applied before the
    /// composite in the same pass reads them.
    pub fn service<S, P, K, D>(
        &mut self,
        pipeline: &mut UpdatePipeline<S, P, K>,
        session: &mut DisplaySession,
        display: &mut D,
    ) -> bool
    where
        S: TemperatureSensor,
        P: FaultPolicy,
        K: DiagnosticSink,
        D: DrawTarget<Color = Rgb565>,
    {
        let updated = self.update_timer.poll(self.clock.now());
        if updated {
            pipeline.run(session);
        }
        session.render(display);
        updated
    }

    /// Advance the logical clock.
    #[inline]
    pub fn tick(
        &mut self,
        ms: u32,
    ) {
        self.clock.inc(ms);
    }
}

impl Default for DrivingLoop {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOOP_TICK_MS;
    use crate::diagnostics::NullSink;
    use crate::sensor::fake::ScriptedSensor;
    use crate::sensor::{AbsorbFault, SensorError};
    use crate::widgets::canvas::TestCanvas;

    #[test]
    fn test_clock_wraps() {
        let mut clock = TickClock::new();
        clock.inc(u32::MAX);
        clock.inc(2);
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn test_timer_fires_once_per_interval() {
        let mut timer = PeriodicTimer::new(100, 0);
        let mut fires = 0;
        for now in 0..1000 {
            if timer.poll(now) {
                fires += 1;
            }
        }
        // Due at 100, 200, ..., 900
        assert_eq!(fires, 9);
        assert_eq!(timer.fired(), 9);
        assert_eq!(timer.next_due_ms(), 1000);
    }

    #[test]
    fn test_timer_not_due_early() {
        let mut timer = PeriodicTimer::new(100, 0);
        assert!(!timer.poll(0));
        assert!(!timer.poll(99));
        assert!(timer.poll(100));
        assert!(!timer.poll(100));
    }

    #[test]
    fn test_timer_keeps_cadence_when_late() {
        let mut timer = PeriodicTimer::new(100, 0);
        assert!(timer.poll(130));
        assert_eq!(timer.next_due_ms(), 200);
    }

    #[test]
    fn test_timer_skips_missed_periods() {
        let mut timer = PeriodicTimer::new(100, 0);
        assert!(timer.poll(450));
        assert!(!timer.poll(451));
        assert_eq!(timer.next_due_ms(), 500);
    }

    #[test]
    fn test_timer_across_clock_wrap() {
        let start = u32::MAX - 50;
        let mut timer = PeriodicTimer::new(100, start);
        assert!(!timer.poll(u32::MAX));
        assert!(!timer.poll(48));
        assert!(timer.poll(49));
    }

    #[test]
    fn test_driving_loop_updates_on_period() {
        let mut driver = DrivingLoop::new();
        let mut pipeline = UpdatePipeline::new(
            ScriptedSensor::new(&[Ok(26.0)]),
            AbsorbFault::default(),
            NullSink,
        );
        let mut session = DisplaySession::new();
        let mut canvas = TestCanvas::new();

        let mut updates = 0;
        for _ in 0..1000 {
            if driver.service(&mut pipeline, &mut session, &mut canvas) {
                updates += 1;
            }
            driver.tick(LOOP_TICK_MS);
        }

        assert_eq!(updates, 1000 / UPDATE_PERIOD_MS as usize - 1);
        assert_eq!(pipeline.sensor().reads, updates);
        assert_eq!(session.label().text(), "26.00°C");
        assert!(!session.needs_redraw());
    }

    #[test]
    fn test_driving_loop_composites_every_pass() {
        let mut driver = DrivingLoop::with_period(10);
        let mut pipeline = UpdatePipeline::new(
            ScriptedSensor::new(&[Ok(20.0), Err(SensorError::Timeout)]),
            AbsorbFault::default(),
            NullSink,
        );
        let mut session = DisplaySession::new();
        let mut canvas = TestCanvas::new();

        // First pass: nothing due, but the screen still gets its first draw
        assert!(!driver.service(&mut pipeline, &mut session, &mut canvas));
        assert!(!session.needs_redraw());

        driver.tick(10);
        assert!(driver.service(&mut pipeline, &mut session, &mut canvas));
        assert_eq!(session.label().text(), "20.00°C");

        driver.tick(10);
        assert!(driver.service(&mut pipeline, &mut session, &mut canvas));
        assert_eq!(session.label().text(), "0.00°C");
        assert!(!session.needs_redraw());
    }
}
