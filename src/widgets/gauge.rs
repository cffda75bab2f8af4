//! Arc gauge widget.
//!
//! A 270° arc opening downwards. The indicator grows clockwise from the
//! bottom-left end, and a round knob marks its tip.
//!
//! Positions outside `GAUGE_MIN..=GAUGE_MAX` are clamped when stored, so the
//! arc never over- or under-fills no matter what the mapper produced.

#[allow(unused_imports)] // inherent f32 methods shadow these when std is linked
use micromath::F32Ext;

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Rectangle};

use crate::config::{
    GAUGE_AREA_SIDE,
    GAUGE_DIAMETER,
    GAUGE_KNOB_DIAMETER,
    GAUGE_MAX,
    GAUGE_MIN,
    GAUGE_ROTATION_DEG,
    GAUGE_STROKE,
    GAUGE_SWEEP_DEG,
};
use crate::styles::{INDICATOR_STYLE, KNOB_STYLE, TRACK_STYLE};

/// Radius of the stroke centerline, where the knob sits.
const KNOB_TRACK_RADIUS: f32 = (GAUGE_DIAMETER - GAUGE_STROKE) as f32 / 2.0;

pub struct ArcGauge {
    center: Point,
    value: i32,
    dirty: bool,
}

impl ArcGauge {
    /// Create an empty gauge. It starts dirty so the first composite draws it.
    pub const fn new(center: Point) -> Self {
        Self {
            center,
            value: GAUGE_MIN,
            dirty: true,
        }
    }

    /// Set the gauge position, clamped to the gauge scale.
    pub fn set_value(
        &mut self,
        position: i32,
    ) {
        let value = position.clamp(GAUGE_MIN, GAUGE_MAX);
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }

    #[inline]
    pub const fn value(&self) -> i32 { self.value }

    #[inline]
    pub const fn center(&self) -> Point { self.center }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub fn mark_clean(&mut self) { self.dirty = false; }

    /// Angle covered by the indicator, `0..=GAUGE_SWEEP_DEG`.
    pub fn indicator_sweep_deg(&self) -> f32 {
        GAUGE_SWEEP_DEG * (self.value - GAUGE_MIN) as f32 / (GAUGE_MAX - GAUGE_MIN) as f32
    }

    /// Center of the knob at the indicator tip.
    pub fn knob_center(&self) -> Point {
        let angle = (GAUGE_ROTATION_DEG + self.indicator_sweep_deg()).to_radians();
        let dx = (KNOB_TRACK_RADIUS * angle.cos()).round() as i32;
        let dy = (KNOB_TRACK_RADIUS * angle.sin()).round() as i32;
        self.center + Point::new(dx, dy)
    }

    /// Square covering the arc and the knob overhang.
    pub fn bounding_box(&self) -> Rectangle { Rectangle::with_center(self.center, Size::new_equal(GAUGE_AREA_SIDE)) }

    /// Draw track, indicator, and knob. Does not erase what was there before.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let start = Angle::from_degrees(GAUGE_ROTATION_DEG);

        Arc::with_center(self.center, GAUGE_DIAMETER, start, Angle::from_degrees(GAUGE_SWEEP_DEG))
            .into_styled(TRACK_STYLE)
            .draw(display)
            .ok();

        let sweep = self.indicator_sweep_deg();
        if sweep > 0.0 {
            Arc::with_center(self.center, GAUGE_DIAMETER, start, Angle::from_degrees(sweep))
                .into_styled(INDICATOR_STYLE)
                .draw(display)
                .ok();
        }

        Circle::with_center(self.knob_center(), GAUGE_KNOB_DIAMETER)
            .into_styled(KNOB_STYLE)
            .draw(display)
            .ok();
    }
}
