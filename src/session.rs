//! Display session - the one gauge and one label on screen.
//!
//! The session owns both widgets for the lifetime of the program. The update
//! pipeline mutates them through [`GaugeWidgets`]; the driving loop composites
//! them with [`DisplaySession::render`].
//!
//! # Update Strategy
//!
//! | Element      | When drawn                                | Strategy            |
//! |--------------|-------------------------------------------|---------------------|
//! | Background   | First composite                           | Full screen clear   |
//! | Gauge+label  | When either widget is dirty               | Erase box, redraw   |
//!
//! The label sits inside the arc, so both are redrawn together whenever one
//! of them changes.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{BACKGROUND, bucket_color};
use crate::config::{GAUGE_CENTER_X, GAUGE_CENTER_Y, LABEL_PLACEHOLDER};
use crate::mapper::ColorBucket;
use crate::styles::BACKGROUND_FILL;
use crate::widgets::{ArcGauge, Label};

/// Widget mutations driven by the update pipeline.
pub trait GaugeWidgets {
    fn set_label_color(
        &mut self,
        bucket: ColorBucket,
    );

    fn set_gauge_position(
        &mut self,
        position: i32,
    );

    fn set_label_text(
        &mut self,
        text: &str,
    );
}

pub struct DisplaySession {
    gauge: ArcGauge,
    label: Label,
    screen_cleared: bool,
}

impl DisplaySession {
    /// Create the gauge screen: empty arc, placeholder label.
    pub fn new() -> Self {
        let center = Point::new(GAUGE_CENTER_X, GAUGE_CENTER_Y);
        Self {
            gauge: ArcGauge::new(center),
            label: Label::new(center, LABEL_PLACEHOLDER),
            screen_cleared: false,
        }
    }

    #[inline]
    pub const fn gauge(&self) -> &ArcGauge { &self.gauge }

    #[inline]
    pub const fn label(&self) -> &Label { &self.label }

    /// Check if the next composite will draw anything.
    pub const fn needs_redraw(&self) -> bool { !self.screen_cleared || self.gauge.is_dirty() || self.label.is_dirty() }

    /// Draw whatever changed since the last composite.
    ///
    /// Returns `true` if anything was drawn.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.screen_cleared {
            display.clear(BACKGROUND).ok();
            self.screen_cleared = true;
            self.gauge.mark_dirty();
        }

        if !self.gauge.is_dirty() && !self.label.is_dirty() {
            return false;
        }

        self.gauge
            .bounding_box()
            .into_styled(BACKGROUND_FILL)
            .draw(display)
            .ok();
        self.gauge.draw(display);
        self.label.draw(display);

        self.gauge.mark_clean();
        self.label.mark_clean();
        true
    }
}

impl Default for DisplaySession {
    fn default() -> Self { Self::new() }
}

impl GaugeWidgets for DisplaySession {
    fn set_label_color(
        &mut self,
        bucket: ColorBucket,
    ) {
        self.label.set_color(bucket_color(bucket));
    }

    fn set_gauge_position(
        &mut self,
        position: i32,
    ) {
        self.gauge.set_value(position);
    }

    fn set_label_text(
        &mut self,
        text: &str,
    ) {
        self.label.set_text(text);
    }
}
