use super::Pattern;
use crate::color::Color;
use crate::transform::Transform;
use nalgebra::Point3;
use serde::Deserialize;

/// A linear blend from `a` to `b` along the x axis.
#[derive(Debug, Clone, Deserialize)]
pub struct Gradient {
    a: Color,
    b: Color,
    #[serde(skip, default = "Transform::identity")]
    transform: Transform,
}

impl Gradient {
    /// A new gradient pattern blending from `a` to `b`.
    pub fn new(a: Color, b: Color) -> Self {
        Gradient {
            a,
            b,
            transform: Transform::identity(),
        }
    }

    /// Override the pattern's transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Pattern for Gradient {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_color_at(&self, pattern_point: Point3<f64>) -> Color {
        let distance = self.b - self.a;
        let fraction = pattern_point.x - pattern_point.x.floor();
        self.a + distance * fraction
    }
}
