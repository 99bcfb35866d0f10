//! Color definition and operations, in the linear RGB colorspace.

use derive_more::{Add, AddAssign, Neg, Sub, SubAssign, Sum};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Add, AddAssign, Sub, SubAssign, Neg, Sum, Deserialize)]
/// A color in the linear RGB colorspace, components not bound to `[0, 1]`
/// until the final quantization step.
pub struct Color {
    /// The color's red component.
    pub r: f64,
    /// The color's green component.
    pub g: f64,
    /// The color's blue component.
    pub b: f64,
}

impl Color {
    /// The color black, used as the accumulator's starting point.
    pub fn black() -> Self {
        Color {
            r: 0.,
            g: 0.,
            b: 0.,
        }
    }

    /// The color white.
    pub fn white() -> Self {
        Color {
            r: 1.,
            g: 1.,
            b: 1.,
        }
    }

    /// Creates a new `Color`.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    #[must_use]
    /// Clamps the color's RGB components between 0.0 and 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raytracer::color::Color;
    /// #
    /// let color = Color::new(1.5, -1.0, 0.5);
    /// assert_eq!(color.clamp(), Color::new(1.0, 0.0, 0.5))
    /// ```
    pub fn clamp(self) -> Self {
        fn clamp(v: f64) -> f64 {
            v.max(0.0).min(1.0)
        }
        Color::new(clamp(self.r), clamp(self.g), clamp(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Componentwise color multiplication, used to modulate light intensity
/// by surface color (per spec §4.6's Phong terms).
impl std::ops::Mul for Color {
    type Output = Color;

    fn mul(self, other: Self) -> Self::Output {
        Color {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl std::ops::Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scalar: f64) -> Self::Output {
        Color::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }
}

impl std::ops::MulAssign<f64> for Color {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f64> for Color {
    type Output = Color;

    fn div(self, scalar: f64) -> Self::Output {
        Color::new(self.r / scalar, self.g / scalar, self.b / scalar)
    }
}

/// Clamps a color channel to `[0, 1]` and quantizes it by truncation, not
/// rounding, to match the reference renderer's PPM output byte-for-byte.
pub(crate) fn quantize(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.) as u8
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([quantize(color.r), quantize(color.g), quantize(color.b)])
    }
}
