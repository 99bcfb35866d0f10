use super::Pattern;
use crate::color::Color;
use crate::transform::Transform;
use nalgebra::Point3;
use serde::Deserialize;

/// Alternating solid stripes perpendicular to the x axis.
#[derive(Debug, Clone, Deserialize)]
pub struct Stripe {
    a: Color,
    b: Color,
    #[serde(skip, default = "Transform::identity")]
    transform: Transform,
}

impl Stripe {
    /// A new stripe pattern alternating between `a` and `b`.
    pub fn new(a: Color, b: Color) -> Self {
        Stripe {
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

impl Pattern for Stripe {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_color_at(&self, pattern_point: Point3<f64>) -> Color {
        if pattern_point.x.floor() as i64 % 2 == 0 {
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
    fn stripe_is_constant_in_y_and_z() {
        let pattern = Stripe::new(Color::white(), Color::black());
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 1., 0.)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(0., 0., 1.)),
            Color::white()
        );
    }

    #[test]
    fn stripe_alternates_in_x() {
        let pattern = Stripe::new(Color::white(), Color::black());
        assert_eq!(
            pattern.local_color_at(Point3::new(0.9, 0., 0.)),
            Color::white()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(1.0, 0., 0.)),
            Color::black()
        );
        assert_eq!(
            pattern.local_color_at(Point3::new(-0.1, 0., 0.)),
            Color::black()
        );
    }
}
