use super::{Hit, Shape, ShapeData, ShapeId};
use crate::error::RenderError;
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

const EPSILON: f64 = 1e-5;

/// A triangle with a per-vertex normal at each corner, interpolated across
/// the face by the hit's barycentric coordinates for smooth (Phong) shading.
#[derive(Debug, Clone)]
pub struct SmoothTriangle {
    base: ShapeData,
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    n1: Vector3<f64>,
    n2: Vector3<f64>,
    n3: Vector3<f64>,
    e1: Vector3<f64>,
    e2: Vector3<f64>,
}

impl SmoothTriangle {
    /// Build a smooth triangle from its vertices and per-vertex normals,
    /// failing if the vertices are colinear.
    pub fn try_new(
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
        n1: Vector3<f64>,
        n2: Vector3<f64>,
        n3: Vector3<f64>,
    ) -> Result<Self, RenderError> {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        if e1.cross(&e2).norm() < EPSILON {
            return Err(RenderError::DegenerateGeometry(
                format!("{:?}", p1),
                format!("{:?}", p2),
                format!("{:?}", p3),
            ));
        }
        Ok(SmoothTriangle {
            base: ShapeData::new(),
            p1,
            p2,
            p3,
            n1,
            n2,
            n3,
            e1,
            e2,
        })
    }

    /// Override the transform and material of an already-built triangle.
    pub fn with(mut self, transform: Transform, material: Material) -> Self {
        self.base = self.base.with_transform(transform).with_material(material);
        self
    }
}

impl Shape for SmoothTriangle {
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

    fn local_normal(&self, _local_point: Point3<f64>, hit: Hit) -> Vector3<f64> {
        (self.n2 * hit.u + self.n3 * hit.v + self.n1 * (1.0 - hit.u - hit.v)).normalize()
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

    fn triangle() -> SmoothTriangle {
        SmoothTriangle::try_new(
            Point3::new(0., 1., 0.),
            Point3::new(-1., 0., 0.),
            Point3::new(1., 0., 0.),
            Vector3::new(0., 1., 0.),
            Vector3::new(-1., 0., 0.),
            Vector3::new(1., 0., 0.),
        )
        .unwrap()
    }

    #[test]
    fn intersection_records_barycentric_coordinates() {
        let t = triangle();
        let r = Ray::new(Point3::new(-0.2, 0.3, -2.), Vector3::new(0., 0., 1.));
        let xs = t.local_intersect(&r);
        assert!((xs[0].1.u - 0.45).abs() < 1e-4);
        assert!((xs[0].1.v - 0.25).abs() < 1e-4);
    }

    #[test]
    fn normal_interpolates_vertex_normals() {
        let t = triangle();
        let n = t.local_normal(Point3::origin(), Hit { u: 0.45, v: 0.25 });
        assert!((n - Vector3::new(-0.5547, 0.83205, 0.)).norm() < 1e-3);
    }
}
