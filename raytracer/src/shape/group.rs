use super::{Hit, Shape, ShapeId};
use crate::material::Material;
use crate::ray::Ray;
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use raybox::Bounds;

/// An ordered collection of child shapes, transformed together as a unit.
///
/// A group has no surface and no material of its own; intersecting it is
/// handled by the world's recursive traversal, which tests the group's
/// cached bounds before ever visiting a child, rather than by
/// [`Shape::local_intersect`] (which would have no id to tag a hit with,
/// since the hit belongs to whichever descendant the ray actually struck).
///
/// [`Shape::local_intersect`]: trait.Shape.html#tymethod.local_intersect
#[derive(Debug, Clone)]
pub struct Group {
    id: ShapeId,
    parent: Option<ShapeId>,
    transform: Transform,
    children: Vec<ShapeId>,
    bounds: Bounds,
}

impl Group {
    /// An empty group with an identity transform.
    pub fn new() -> Self {
        Group {
            id: ShapeId(0),
            parent: None,
            transform: Transform::identity(),
            children: Vec::new(),
            bounds: Bounds::empty(),
        }
    }

    /// A group built with the given transform.
    pub fn with_transform(transform: Transform) -> Self {
        Group {
            transform,
            ..Self::new()
        }
    }

    /// Record a child already inserted into the world's arena, growing the
    /// cached bounds by the child's box mapped into this group's frame.
    pub fn push_child(&mut self, id: ShapeId, child_bounds_in_group_space: Bounds) {
        self.children.push(id);
        self.bounds.union_mut(&child_bounds_in_group_space);
    }

    /// The ids of this group's direct children, in insertion order.
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }

    /// Whether `local_ray` can possibly hit anything inside this group,
    /// checked before recursing into any child.
    pub fn bounds_hit(&self, local_ray: &Ray) -> bool {
        self.bounds.intersects(&local_ray.origin, &local_ray.direction)
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: ShapeId) {
        self.parent = Some(parent);
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn material(&self) -> Option<&Material> {
        None
    }

    fn local_intersect(&self, _local_ray: &Ray) -> Vec<(f64, Hit)> {
        Vec::new()
    }

    fn local_normal(&self, _local_point: Point3<f64>, _hit: Hit) -> Vector3<f64> {
        Vector3::new(0., 1., 0.)
    }

    fn local_bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_group_is_empty() {
        let g = Group::new();
        assert!(g.children().is_empty());
        assert!(g.local_bounds().is_empty());
    }

    #[test]
    fn pushing_a_child_grows_the_bounds() {
        let mut g = Group::new();
        let child_bounds = Bounds::with_bounds(Point3::new(-1., -1., -1.), Point3::new(1., 1., 1.));
        g.push_child(ShapeId(1), child_bounds);
        assert_eq!(g.local_bounds(), child_bounds);
    }
}
