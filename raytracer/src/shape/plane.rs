use super::{Hit, Shape, ShapeData, ShapeId};
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

const EPSILON: f64 = 1e-5;

/// The infinite xz plane at `y = 0`.
#[derive(Debug, Clone)]
pub struct Plane {
    base: ShapeData,
}

impl Plane {
    /// A plane with an identity transform and default material.
    pub fn new() -> Self {
        Plane {
            base: ShapeData::new(),
        }
    }

    /// A plane built with the given transform and material.
    pub fn with(transform: Transform, material: Material) -> Self {
        Plane {
            base: ShapeData::new()
                .with_transform(transform)
                .with_material(material),
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Plane {
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
        if local_ray.direction.y.abs() < EPSILON {
            return Vec::new();
        }
        let t = -local_ray.origin.y / local_ray.direction.y;
        vec![(t, Hit::default())]
    }

    fn local_normal(&self, _local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        Vector3::new(0., 1., 0.)
    }

    fn local_bounds(&self) -> Bounds {
        Bounds::with_bounds(
            Point3::new(f64::NEG_INFINITY, 0., f64::NEG_INFINITY),
            Point3::new(f64::INFINITY, 0., f64::INFINITY),
        )
    }
}
