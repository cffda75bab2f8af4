//! Retained-mode widgets for the gauge screen.
//!
//! Widgets hold their own state and a dirty flag; mutation never draws.
//! All drawing is generic over `DrawTarget<Color = Rgb565>` for platform
//! independence.

mod gauge;
mod label;

pub use gauge::ArcGauge;
pub use label::Label;
