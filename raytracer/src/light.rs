//! Point light sources.

use crate::color::Color;
use nalgebra::Point3;
use serde::Deserialize;

/// A single point light: a position and an intensity, with no size or falloff.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointLight {
    pub position: Point3<f64>,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Point3<f64>, intensity: Color) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_point_light_has_a_position_and_intensity() {
        let intensity = Color::white();
        let position = Point3::origin();
        let light = PointLight::new(position, intensity);
        assert_eq!(light.position, position);
        assert_eq!(light.intensity, intensity);
    }
}
