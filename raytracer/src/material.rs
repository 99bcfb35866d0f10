//! Surface material and the Phong illumination model.

use crate::color::Color;
use crate::light::PointLight;
use crate::pattern::{color_at_object, PatternEnum};
use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// A surface's optical properties: a base color (or pattern), and the four
/// Phong coefficients plus the two properties that drive recursive
/// reflection and refraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Material {
    /// The flat base color, used when no pattern overrides it.
    #[serde(default = "Color::white")]
    pub color: Color,
    /// An optional procedural pattern overriding `color`.
    #[serde(default)]
    pub pattern: Option<PatternEnum>,
    /// The fraction of ambient light always contributed, shadow or not.
    #[serde(default = "default_ambient")]
    pub ambient: f64,
    /// The Lambertian diffuse coefficient.
    #[serde(default = "default_diffuse")]
    pub diffuse: f64,
    /// The specular highlight's intensity.
    #[serde(default = "default_specular")]
    pub specular: f64,
    /// The specular highlight's tightness.
    #[serde(default = "default_shininess")]
    pub shininess: f64,
    /// How much of `reflected_color` contributes, `0` for a matte surface.
    #[serde(default)]
    pub reflective: f64,
    /// How much of `refracted_color` contributes, `0` for an opaque surface.
    #[serde(default)]
    pub transparency: f64,
    /// The index of refraction, `1.0` for a vacuum.
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f64,
}

fn default_ambient() -> f64 {
    0.1
}
fn default_diffuse() -> f64 {
    0.9
}
fn default_specular() -> f64 {
    0.9
}
fn default_shininess() -> f64 {
    200.0
}
fn default_refractive_index() -> f64 {
    1.0
}

impl Material {
    /// A glass preset: fully transparent, refractive index 1.5, matching
    /// ordinary window glass.
    pub fn glass() -> Self {
        Material {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Material::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: Color::white(),
            pattern: None,
            ambient: default_ambient(),
            diffuse: default_diffuse(),
            specular: default_specular(),
            shininess: default_shininess(),
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: default_refractive_index(),
        }
    }
}

/// Evaluate the Phong illumination model at a point on a shape's surface.
///
/// `world_point` drives the light vector and shadow test; `object_point` is
/// the same point mapped through the shape's full ancestor chain, and is
/// what a pattern is sampled at. For a shape with no parent group the two
/// coincide. `in_shadow` is the caller's responsibility to compute via a
/// shadow feeler; this function only combines it with the geometric terms.
#[allow(clippy::too_many_arguments)]
pub fn lighting(
    material: &Material,
    world_point: Point3<f64>,
    object_point: Point3<f64>,
    light: &PointLight,
    eyev: Vector3<f64>,
    normalv: Vector3<f64>,
    in_shadow: bool,
) -> Color {
    let base = match &material.pattern {
        Some(pattern) => color_at_object(pattern, object_point),
        None => material.color,
    };

    let effective = base * light.intensity;
    let ambient = effective * material.ambient;

    if in_shadow {
        return ambient;
    }

    let lightv = (light.position - world_point).normalize();
    let light_dot_normal = lightv.dot(&normalv);

    let black = Color::black();
    let (diffuse, specular) = if light_dot_normal < 0.0 {
        (black, black)
    } else {
        let diffuse = effective * material.diffuse * light_dot_normal;

        let reflectv = crate::tuple::reflect(-lightv, normalv);
        let reflect_dot_eye = reflectv.dot(&eyev);

        let specular = if reflect_dot_eye <= 0.0 {
            black
        } else {
            let factor = reflect_dot_eye.powf(material.shininess);
            light.intensity * material.specular * factor
        };

        (diffuse, specular)
    };

    ambient + diffuse + specular
}
