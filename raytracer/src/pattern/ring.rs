use super::Pattern;
use crate::color::Color;
use crate::transform::Transform;
use nalgebra::Point3;
use serde::Deserialize;

/// Concentric rings, alternating in the xz plane.
#[derive(Debug, Clone, Deserialize)]
pub struct Ring {
    a: Color,
    b: Color,
    #[serde(skip, default = "Transform::identity")]
    transform: Transform,
}

impl Ring {
    /// A new ring pattern alternating between `a` and `b`.
    pub fn new(a: Color, b: Color) -> Self {
        Ring {
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

impl Pattern for Ring {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_color_at(&self, pattern_point: Point3<f64>) -> Color {
        let distance = (pattern_point.x * pattern_point.x + pattern_point.z * pattern_point.z).sqrt();
        if distance.floor() as i64 % 2 == 0 {
            self.a
        } else {
            self.b
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ring_extends_in_both_x_and_z() {
        let pattern = Ring::new(Color::white(), Color::black());
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 0.)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(1., 0., 0.)),
            Color::black()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 1.)),
            Color::black()
        );
    }
}
