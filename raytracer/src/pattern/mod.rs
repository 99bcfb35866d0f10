//! Procedural surface patterns.

mod checker;
mod gradient;
mod ring;
mod stripe;

pub use checker::Checker;
pub use gradient::Gradient;
pub use ring::Ring;
pub use stripe::Stripe;

use crate::color::Color;
use crate::transform::Transform;
use nalgebra::Point3;
use serde::Deserialize;

/// All built-in pattern kinds, dispatched without a heap allocation.
#[enum_dispatch::enum_dispatch]
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum PatternEnum {
    /// Alternating solid stripes along x.
    Stripe,
    /// A linear blend between two colors along x.
    Gradient,
    /// Concentric rings alternating in the xz plane.
    Ring,
    /// A 3D checkerboard.
    Checker,
}

/// A procedural color field in its own pattern space.
#[enum_dispatch::enum_dispatch(PatternEnum)]
pub trait Pattern {
    /// This pattern's own transform, pattern space to object space.
    fn transform(&self) -> &Transform;
    /// Sample the pattern at a point already expressed in pattern space.
    fn local_color_at(&self, pattern_point: Point3<f64>) -> Color;
}

/// Sample `pattern` at a point given in the owning shape's object space:
/// maps through the pattern's own inverse transform first.
pub fn color_at_object(pattern: &PatternEnum, object_point: Point3<f64>) -> Color {
    let pattern_point = pattern.transform().inverse().transform_point(&object_point);
    pattern.local_color_at(pattern_point)
}
