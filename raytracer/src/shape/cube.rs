use super::{Hit, Shape, ShapeData, ShapeId};
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

/// A unit cube spanning `[-1, 1]` on every axis.
#[derive(Debug, Clone)]
pub struct Cube {
    base: ShapeData,
}

impl Cube {
    /// A cube with an identity transform and default material.
    pub fn new() -> Self {
        Cube {
            base: ShapeData::new(),
        }
    }

    /// A cube built with the given transform and material.
    pub fn with(transform: Transform, material: Material) -> Self {
        Cube {
            base: ShapeData::new()
                .with_transform(transform)
                .with_material(material),
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Return `(t_min, t_max)` for one axis of the slab test.
fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;

    let (tmin, tmax) = if direction.abs() >= f64::EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (
            tmin_numerator * f64::INFINITY,
            tmax_numerator * f64::INFINITY,
        )
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

impl Shape for Cube {
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
        let (xtmin, xtmax) = check_axis(local_ray.origin.x, local_ray.direction.x);
        let (ytmin, ytmax) = check_axis(local_ray.origin.y, local_ray.direction.y);
        let (ztmin, ztmax) = check_axis(local_ray.origin.z, local_ray.direction.z);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);

        if tmin > tmax {
            Vec::new()
        } else {
            vec![(tmin, Hit::default()), (tmax, Hit::default())]
        }
    }

    fn local_normal(&self, local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        let ax = local_point.x.abs();
        let ay = local_point.y.abs();
        let az = local_point.z.abs();
        let maxc = ax.max(ay).max(az);

        if maxc == ax {
            Vector3::new(local_point.x, 0., 0.)
        } else if maxc == ay {
            Vector3::new(0., local_point.y, 0.)
        } else {
            Vector3::new(0., 0., local_point.z)
        }
    }

    fn local_bounds(&self) -> Bounds {
        Bounds::with_bounds(Point3::new(-1., -1., -1.), Point3::new(1., 1., 1.))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ray_hits_cube_face() {
        let c = Cube::new();
        let r = Ray::new(Point3::new(5., 0.5, 0.), Vector3::new(-1., 0., 0.));
        let xs = c.local_intersect(&r);
        assert_eq!((xs[0].0, xs[1].0), (4.0, 6.0));
    }

    #[test]
    fn ray_misses_cube() {
        let c = Cube::new();
        let r = Ray::new(Point3::new(-2., 0., 0.), Vector3::new(0.2673, 0.5345, 0.8018));
        assert!(c.local_intersect(&r).is_empty());
    }

    #[test]
    fn normal_on_a_face() {
        let c = Cube::new();
        assert_eq!(
            c.local_normal(Point3::new(1., 0.5, -0.8), Hit::default()),
            Vector3::new(1., 0., 0.)
        );
    }
}
