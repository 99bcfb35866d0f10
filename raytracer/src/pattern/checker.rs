use super::Pattern;
use crate::color::Color;
use crate::transform::Transform;
use nalgebra::Point3;
use serde::Deserialize;

/// A 3D checkerboard, alternating whenever the sum of the floored
/// coordinates changes parity.
#[derive(Debug, Clone, Deserialize)]
pub struct Checker {
    a: Color,
    b: Color,
    #[serde(skip, default = "Transform::identity")]
    transform: Transform,
}

impl Checker {
    /// A new checker pattern alternating between `a` and `b`.
    pub fn new(a: Color, b: Color) -> Self {
        Checker {
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

impl Pattern for Checker {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_color_at(&self, pattern_point: Point3<f64>) -> Color {
        let sum = pattern_point.x.floor() + pattern_point.y.floor() + pattern_point.z.floor();
        if sum as i64 % 2 == 0 {
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
    fn checkers_repeat_in_x() {
        let pattern = Checker::new(Color::white(), Color::black());
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 0.)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(0.99, 0., 0.)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(1.01, 0., 0.)),
            Color::black()
        );
    }

    #[test]
    fn checkers_repeat_in_z() {
        let pattern = Checker::new(Color::white(), Color::black());
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 0.99)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 1.01)),
            Color::black()
        );
    }
}
