//! Polymorphic scene-graph shapes.
//!
//! Every concrete primitive is a unit shape centered on the object-space
//! origin; the outer layer defined here applies the shape's own transform
//! to move rays into object space and lift normals back out to world
//! space, so each primitive only has to implement its own local geometry.

mod base;
mod cone;
mod cube;
mod cylinder;
mod group;
mod plane;
mod smooth_triangle;
mod sphere;
mod triangle;

pub use base::ShapeData;
pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use group::Group;
pub use plane::Plane;
pub use smooth_triangle::SmoothTriangle;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

/// A stable, non-owning reference to a shape stored in a [`World`]'s arena.
///
/// Groups hold their children's ids rather than owning them directly, and
/// every shape holds its parent's id the same way: an index is Copy, needs
/// no lifetime, and can't form an ownership cycle the way a parent-owning
/// `Rc` would.
///
/// [`World`]: ../world/struct.World.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// Barycentric hit coordinates, meaningful only for [`SmoothTriangle`]; every
/// other shape ignores them.
///
/// [`SmoothTriangle`]: struct.SmoothTriangle.html
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hit {
    /// The `u` barycentric coordinate.
    pub u: f64,
    /// The `v` barycentric coordinate.
    pub v: f64,
}

/// One ray-shape intersection, recorded by object-space parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The distance along the ray at which the hit occurs.
    pub t: f64,
    /// The shape that was hit.
    pub shape: ShapeId,
    /// Barycentric coordinates of the hit, populated for smooth triangles.
    pub hit: Hit,
}

impl Intersection {
    /// Build a plain intersection with no barycentric data.
    pub fn new(t: f64, shape: ShapeId) -> Self {
        Intersection {
            t,
            shape,
            hit: Hit::default(),
        }
    }
}

/// Pick the intersection with the smallest strictly positive `t`, i.e. the
/// first surface the ray actually reaches going forward.
pub fn hit(xs: &[Intersection]) -> Option<Intersection> {
    xs.iter()
        .filter(|i| i.t > 0.0)
        .copied()
        .min_by(|a, b| a.t.partial_cmp(&b.t).expect("t is never NaN"))
}

/// The object-space contract every concrete shape implements.
///
/// The world-space behavior (transforming rays in, normals out, and
/// chaining through ancestor groups) is written once, outside this trait,
/// against [`ShapeId`] lookups into the owning [`World`]'s arena.
///
/// [`ShapeId`]: struct.ShapeId.html
/// [`World`]: ../world/struct.World.html
pub trait Shape {
    /// This shape's own id.
    fn id(&self) -> ShapeId;
    /// Assign this shape's own id, done once at scene-assembly time.
    fn set_id(&mut self, id: ShapeId);
    /// The enclosing group's id, if any.
    fn parent(&self) -> Option<ShapeId>;
    /// Record the enclosing group's id, done once when the child is added.
    fn set_parent(&mut self, parent: ShapeId);
    /// This shape's own transform, object space to its parent's space.
    fn transform(&self) -> &Transform;
    /// This shape's material, or `None` for a [`Group`], which has none of
    /// its own.
    ///
    /// [`Group`]: struct.Group.html
    fn material(&self) -> Option<&Material>;
    /// Intersect a ray already expressed in this shape's object space.
    fn local_intersect(&self, local_ray: &Ray) -> Vec<(f64, Hit)>;
    /// The object-space normal at an object-space point on the surface.
    fn local_normal(&self, local_point: Point3<f64>, hit: Hit) -> Vector3<f64>;
    /// The tight object-space bounding box.
    fn local_bounds(&self) -> Bounds;
}

/// The tagged sum of every concrete shape kind.
///
/// `enum_dispatch` is not used here: the enum is recursive ([`Group`] holds
/// child ids rather than values, but several dispatch methods still need a
/// `match` to reach per-variant fields enum_dispatch can't see through), so
/// the trait is implemented by hand exactly once below.
///
/// [`Group`]: struct.Group.html
#[derive(Debug, Clone)]
pub enum ShapeEnum {
    /// A unit sphere.
    Sphere(Sphere),
    /// The xz plane.
    Plane(Plane),
    /// A unit cube.
    Cube(Cube),
    /// A canonical cylinder along y.
    Cylinder(Cylinder),
    /// A canonical double-napped cone along y.
    Cone(Cone),
    /// A flat-shaded triangle.
    Triangle(Triangle),
    /// A triangle with per-vertex normals.
    SmoothTriangle(SmoothTriangle),
    /// A group of child shapes.
    Group(Group),
}

macro_rules! dispatch {
    ($self:ident, $method:ident($($arg:expr),*)) => {
        match $self {
            ShapeEnum::Sphere(s) => s.$method($($arg),*),
            ShapeEnum::Plane(s) => s.$method($($arg),*),
            ShapeEnum::Cube(s) => s.$method($($arg),*),
            ShapeEnum::Cylinder(s) => s.$method($($arg),*),
            ShapeEnum::Cone(s) => s.$method($($arg),*),
            ShapeEnum::Triangle(s) => s.$method($($arg),*),
            ShapeEnum::SmoothTriangle(s) => s.$method($($arg),*),
            ShapeEnum::Group(s) => s.$method($($arg),*),
        }
    };
}

impl Shape for ShapeEnum {
    fn id(&self) -> ShapeId {
        dispatch!(self, id())
    }

    fn set_id(&mut self, id: ShapeId) {
        dispatch!(self, set_id(id))
    }

    fn parent(&self) -> Option<ShapeId> {
        dispatch!(self, parent())
    }

    fn set_parent(&mut self, parent: ShapeId) {
        dispatch!(self, set_parent(parent))
    }

    fn transform(&self) -> &Transform {
        dispatch!(self, transform())
    }

    fn material(&self) -> Option<&Material> {
        dispatch!(self, material())
    }

    fn local_intersect(&self, local_ray: &Ray) -> Vec<(f64, Hit)> {
        dispatch!(self, local_intersect(local_ray))
    }

    fn local_normal(&self, local_point: Point3<f64>, hit: Hit) -> Vector3<f64> {
        dispatch!(self, local_normal(local_point, hit))
    }

    fn local_bounds(&self) -> Bounds {
        dispatch!(self, local_bounds())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hit_picks_smallest_nonnegative_t() {
        let xs = vec![
            Intersection::new(-1.0, ShapeId(0)),
            Intersection::new(2.0, ShapeId(0)),
            Intersection::new(1.0, ShapeId(0)),
        ];
        assert_eq!(hit(&xs).unwrap().t, 1.0);
    }

    #[test]
    fn hit_is_none_when_all_negative() {
        let xs = vec![
            Intersection::new(-2.0, ShapeId(0)),
            Intersection::new(-1.0, ShapeId(0)),
        ];
        assert!(hit(&xs).is_none());
    }
}
