use super::{Hit, Shape, ShapeData, ShapeId};
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

/// A unit sphere centered on the object-space origin.
#[derive(Debug, Clone)]
pub struct Sphere {
    base: ShapeData,
}

impl Sphere {
    /// A sphere with an identity transform and default material.
    pub fn new() -> Self {
        Sphere {
            base: ShapeData::new(),
        }
    }

    /// A sphere built with the given transform and material.
    pub fn with(transform: Transform, material: Material) -> Self {
        Sphere {
            base: ShapeData::new()
                .with_transform(transform)
                .with_material(material),
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Sphere {
    fn id(&self) -> ShapeId {
        self.base.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.base.id = id;
    }

    fn parent(&self) -> Option<ShapeId> {
        self.base.parent
    }

    fn set_parent(&mut self, parent: ShapeId) {
        self.base.parent = Some(parent);
    }

    fn transform(&self) -> &Transform {
        &self.base.transform
    }

    fn material(&self) -> Option<&Material> {
        Some(&self.base.material)
    }

    fn local_intersect(&self, local_ray: &Ray) -> Vec<(f64, Hit)> {
        let sphere_to_ray = local_ray.origin - Point3::origin();
        let d = local_ray.direction;
        let a = d.dot(&d);
        let b = 2.0 * d.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrt_disc = discriminant.sqrt();
        vec![
            ((-b - sqrt_disc) / (2.0 * a), Hit::default()),
            ((-b + sqrt_disc) / (2.0 * a), Hit::default()),
        ]
    }

    fn local_normal(&self, local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        local_point - Point3::origin()
    }

    fn local_bounds(&self) -> Bounds {
        Bounds::with_bounds(Point3::new(-1., -1., -1.), Point3::new(1., 1., 1.))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ray_intersects_sphere_at_two_points() {
        let s = Sphere::new();
        let r = Ray::new(Point3::new(0., 0., -5.), Vector3::new(0., 0., 1.));
        let xs = s.local_intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].0, 4.0);
        assert_eq!(xs[1].0, 6.0);
    }

    #[test]
    fn ray_misses_sphere() {
        let s = Sphere::new();
        let r = Ray::new(Point3::new(0., 2., -5.), Vector3::new(0., 0., 1.));
        assert!(s.local_intersect(&r).is_empty());
    }

    #[test]
    fn ray_originates_inside_sphere() {
        let s = Sphere::new();
        let r = Ray::new(Point3::origin(), Vector3::new(0., 0., 1.));
        let xs = s.local_intersect(&r);
        assert_eq!(xs[0].0, -1.0);
        assert_eq!(xs[1].0, 1.0);
    }

    #[test]
    fn normal_on_axis_points_outward() {
        let s = Sphere::new();
        assert_eq!(
            s.local_normal(Point3::new(1., 0., 0.), Hit::default()),
            Vector3::new(1., 0., 0.)
        );
    }
}
