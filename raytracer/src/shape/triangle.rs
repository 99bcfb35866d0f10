use super::{Hit, Shape, ShapeData, ShapeId};
use crate::error::RenderError;
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

const EPSILON: f64 = 1e-5;

/// A flat-shaded triangle, with its edges and face normal precomputed once
/// at construction time since they never change afterwards.
#[derive(Debug, Clone)]
pub struct Triangle {
    base: ShapeData,
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    e1: Vector3<f64>,
    e2: Vector3<f64>,
    normal: Vector3<f64>,
}

impl Triangle {
    /// Build a triangle from its three vertices, failing if they're
    /// colinear (the cross product of the edges would be zero, leaving no
    /// well-defined face normal).
    pub fn try_new(p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Result<Self, RenderError> {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let cross = e1.cross(&e2);
        if cross.norm() < EPSILON {
            return Err(RenderError::DegenerateGeometry(
                format!("{:?}", p1),
                format!("{:?}", p2),
                format!("{:?}", p3),
            ));
        }
        Ok(Triangle {
            base: ShapeData::new(),
            p1,
            p2,
            p3,
            e1,
            e2,
            normal: cross.normalize(),
        })
    }

    /// Override the transform and material of an already-built triangle.
    pub fn with(mut self, transform: Transform, material: Material) -> Self {
        self.base = self.base.with_transform(transform).with_material(material);
        self
    }
}

impl Shape for Triangle {
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
        // Moller-Trumbore.
        let dir_cross_e2 = local_ray.direction.cross(&self.e2);
        let det = self.e1.dot(&dir_cross_e2);
        if det.abs() < EPSILON {
            return Vec::new();
        }

        let f = 1.0 / det;
        let p1_to_origin = local_ray.origin - self.p1;
        let u = f * p1_to_origin.dot(&dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return Vec::new();
        }

        let origin_cross_e1 = p1_to_origin.cross(&self.e1);
        let v = f * local_ray.direction.dot(&origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return Vec::new();
        }

        let t = f * self.e2.dot(&origin_cross_e1);
        vec![(t, Hit { u, v })]
    }

    fn local_normal(&self, _local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        self.normal
    }

    fn local_bounds(&self) -> Bounds {
        Bounds::empty()
            .grow(&self.p1)
            .grow(&self.p2)
            .grow(&self.p3)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> Triangle {
        Triangle::try_new(
            Point3::new(0., 1., 0.),
            Point3::new(-1., 0., 0.),
            Point3::new(1., 0., 0.),
        )
        .unwrap()
    }

    #[test]
    fn colinear_vertices_are_rejected() {
        let t = Triangle::try_new(
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(2., 0., 0.),
        );
        assert!(t.is_err());
    }

    #[test]
    fn normal_is_constant_across_surface() {
        let t = triangle();
        assert_eq!(
            t.local_normal(Point3::new(0., 0.5, 0.), Hit::default()),
            t.normal
        );
    }

    #[test]
    fn ray_parallel_to_triangle_misses() {
        let t = triangle();
        let r = Ray::new(Point3::new(0., -1., -2.), Vector3::new(0., 1., 0.));
        assert!(t.local_intersect(&r).is_empty());
    }

    #[test]
    fn ray_strikes_triangle() {
        let t = triangle();
        let r = Ray::new(Point3::new(0., 0.5, -2.), Vector3::new(0., 0., 1.));
        let xs = t.local_intersect(&r);
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].0, 2.0);
    }
}
