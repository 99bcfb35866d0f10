use super::{Hit, Shape, ShapeData, ShapeId};
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

const EPSILON: f64 = 1e-5;

/// A double-napped cone, canonical along the y axis, truncated to
/// `(minimum, maximum)` and optionally capped at both ends.
#[derive(Debug, Clone)]
pub struct Cone {
    base: ShapeData,
    /// Exclusive lower bound on y.
    pub minimum: f64,
    /// Exclusive upper bound on y.
    pub maximum: f64,
    /// Whether the top and bottom discs are part of the surface.
    pub closed: bool,
}

impl Cone {
    /// An unbounded, open cone with an identity transform.
    pub fn new() -> Self {
        Cone {
            base: ShapeData::new(),
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        }
    }

    /// A cone truncated to `(minimum, maximum)`, capped if `closed`.
    pub fn with(
        transform: Transform,
        material: Material,
        minimum: f64,
        maximum: f64,
        closed: bool,
    ) -> Self {
        Cone {
            base: ShapeData::new()
                .with_transform(transform)
                .with_material(material),
            minimum,
            maximum,
            closed,
        }
    }

    fn check_cap(local_ray: &Ray, t: f64, radius: f64) -> bool {
        let x = local_ray.origin.x + t * local_ray.direction.x;
        let z = local_ray.origin.z + t * local_ray.direction.z;
        x * x + z * z <= radius * radius
    }

    fn intersect_caps(&self, local_ray: &Ray, xs: &mut Vec<(f64, Hit)>) {
        if !self.closed || local_ray.direction.y.abs() < EPSILON {
            return;
        }

        let t = (self.minimum - local_ray.origin.y) / local_ray.direction.y;
        if Self::check_cap(local_ray, t, self.minimum.abs()) {
            xs.push((t, Hit::default()));
        }

        let t = (self.maximum - local_ray.origin.y) / local_ray.direction.y;
        if Self::check_cap(local_ray, t, self.maximum.abs()) {
            xs.push((t, Hit::default()));
        }
    }
}

impl Default for Cone {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Cone {
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
        let mut xs = Vec::new();

        let d = local_ray.direction;
        let o = local_ray.origin;
        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2.0 * (o.x * d.x - o.y * d.y + o.z * d.z);
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        if a.abs() < EPSILON {
            if b.abs() > EPSILON {
                let t = -c / (2.0 * b);
                let y = o.y + t * d.y;
                if self.minimum < y && y < self.maximum {
                    xs.push((t, Hit::default()));
                }
            }
        } else {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let sqrt_disc = discriminant.sqrt();
                let mut t0 = (-b - sqrt_disc) / (2.0 * a);
                let mut t1 = (-b + sqrt_disc) / (2.0 * a);
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }

                for &t in &[t0, t1] {
                    let y = o.y + t * d.y;
                    if self.minimum < y && y < self.maximum {
                        xs.push((t, Hit::default()));
                    }
                }
            }
        }

        self.intersect_caps(local_ray, &mut xs);
        xs
    }

    fn local_normal(&self, local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        let dist = local_point.x * local_point.x + local_point.z * local_point.z;

        if dist < 1.0 && local_point.y >= self.maximum - EPSILON {
            Vector3::new(0., 1., 0.)
        } else if dist < 1.0 && local_point.y <= self.minimum + EPSILON {
            Vector3::new(0., -1., 0.)
        } else {
            let mut y = dist.sqrt();
            if local_point.y > 0.0 {
                y = -y;
            }
            Vector3::new(local_point.x, y, local_point.z)
        }
    }

    fn local_bounds(&self) -> Bounds {
        let limit = self.minimum.abs().max(self.maximum.abs());
        Bounds::with_bounds(
            Point3::new(-limit, self.minimum, -limit),
            Point3::new(limit, self.maximum, limit),
        )
    }
}
