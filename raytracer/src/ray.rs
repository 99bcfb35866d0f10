//! A ray and the machinery to transform it between coordinate spaces.

use crate::transform::Transform;
use nalgebra::{Point3, Vector3};

/// A ray, with an origin and a direction.
///
/// The direction is kept exactly as given, never renormalized: a scaling
/// transform changes its length, and that length feeds directly into `t`
/// so that `position(t)` stays correct after the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the ray starts.
    pub origin: Point3<f64>,
    /// The ray's direction, not necessarily of unit length.
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Build a new [`Ray`].
    ///
    /// [`Ray`]: struct.Ray.html
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Ray { origin, direction }
    }

    /// The point at parameter `t` along the ray.
    pub fn position(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// Map the ray through a [`Transform`]'s matrix.
    ///
    /// Does not renormalize the direction: see the struct-level note.
    ///
    /// [`Transform`]: ../transform/struct.Transform.html
    pub fn transform(&self, transform: &Transform) -> Self {
        Ray {
            origin: transform.matrix().transform_point(&self.origin),
            direction: transform.matrix().transform_vector(&self.direction),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transform;

    #[test]
    fn position_computes_point_from_distance() {
        let r = Ray::new(Point3::new(2., 3., 4.), Vector3::new(1., 0., 0.));
        assert_eq!(r.position(0.), Point3::new(2., 3., 4.));
        assert_eq!(r.position(1.), Point3::new(3., 3., 4.));
        assert_eq!(r.position(-1.), Point3::new(1., 3., 4.));
        assert_eq!(r.position(2.5), Point3::new(4.5, 3., 4.));
    }

    #[test]
    fn translating_a_ray_only_moves_the_origin() {
        let r = Ray::new(Point3::new(1., 2., 3.), Vector3::new(0., 1., 0.));
        let t = transform::translation(3., 4., 5.);
        let r2 = r.transform(&t);
        assert_eq!(r2.origin, Point3::new(4., 6., 8.));
        assert_eq!(r2.direction, Vector3::new(0., 1., 0.));
    }

    #[test]
    fn scaling_a_ray_scales_the_direction_without_renormalizing() {
        let r = Ray::new(Point3::new(1., 2., 3.), Vector3::new(0., 1., 0.));
        let t = transform::scaling(2., 3., 4.);
        let r2 = r.transform(&t);
        assert_eq!(r2.origin, Point3::new(2., 6., 12.));
        assert_eq!(r2.direction, Vector3::new(0., 3., 0.));
    }
}
