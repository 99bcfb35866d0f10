//! An axis-aligned bounding box.

use crate::{Axis, Matrix, Point, Vector};
use std::fmt::{Display, Formatter, Result};

/// An axis-aligned bounding box, described by its two opposite corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// The corner with the lowest (x, y, z) coordinates.
    pub min: Point,
    /// The corner with the highest (x, y, z) coordinates.
    pub max: Point,
}

impl Bounds {
    /// Create a new, empty [`Bounds`].
    ///
    /// Uses `+inf`/`-inf` sentinels (not the smallest positive float) so that
    /// growing this box by any real point or union always produces the
    /// correct result, including when every coordinate involved is negative.
    ///
    /// [`Bounds`]: struct.Bounds.html
    #[must_use]
    pub fn empty() -> Self {
        Bounds {
            min: Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create a [`Bounds`] from its two corners.
    ///
    /// [`Bounds`]: struct.Bounds.html
    #[must_use]
    pub fn with_bounds(min: Point, max: Point) -> Self {
        debug_assert!(min.x <= max.x);
        debug_assert!(min.y <= max.y);
        debug_assert!(min.z <= max.z);
        Bounds { min, max }
    }

    /// Return a new bounding box containing both `self` and the given [`Point`].
    ///
    /// [`Point`]: type.Point.html
    #[must_use]
    pub fn grow(&self, point: &Point) -> Self {
        let mut ans = *self;
        ans.grow_mut(point);
        ans
    }

    /// Grow the bounding box in place to accommodate a new [`Point`].
    ///
    /// [`Point`]: type.Point.html
    pub fn grow_mut(&mut self, point: &Point) -> &mut Self {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
        self
    }

    /// Return whether the box contains the given [`Point`].
    ///
    /// [`Point`]: type.Point.html
    pub fn contains(&self, point: &Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    /// Return a new box enclosing `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut ans = *self;
        ans.union_mut(other);
        ans
    }

    /// Grow `self` in place to enclose `other`.
    pub fn union_mut(&mut self, other: &Self) -> &mut Self {
        self.grow_mut(&other.min);
        self.grow_mut(&other.max);
        self
    }

    /// Return the diagonal vector from `min` to `max`.
    pub fn diagonal(&self) -> Vector {
        self.max - self.min
    }

    /// Return the centroid of the box.
    pub fn centroid(&self) -> Point {
        self.min + self.diagonal() / 2.
    }

    /// Return whether the box is empty (inverted on at least one axis).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Return the axis along which the box is the largest.
    pub fn largest_axis(&self) -> Axis {
        let diagonal = self.diagonal();
        if diagonal.x >= diagonal.y && diagonal.x >= diagonal.z {
            Axis::X
        } else if diagonal.y >= diagonal.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Refit the box to a new frame by mapping its eight corners through
    /// `matrix` and taking the union of the results.
    ///
    /// Used whenever a shape with a cached object-space box needs its
    /// world-space box recomputed after a transform change, since an
    /// axis-aligned box is not itself preserved by an arbitrary affine map.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix) -> Self {
        let corners = [
            Point::new(self.min.x, self.min.y, self.min.z),
            Point::new(self.min.x, self.min.y, self.max.z),
            Point::new(self.min.x, self.max.y, self.min.z),
            Point::new(self.min.x, self.max.y, self.max.z),
            Point::new(self.max.x, self.min.y, self.min.z),
            Point::new(self.max.x, self.min.y, self.max.z),
            Point::new(self.max.x, self.max.y, self.min.z),
            Point::new(self.max.x, self.max.y, self.max.z),
        ];
        let mut ans = Bounds::empty();
        for corner in &corners {
            let transformed = matrix.transform_point(corner);
            ans.grow_mut(&transformed);
        }
        ans
    }

    /// Test for intersection against a ray given by `origin` and `direction`,
    /// using the branchless slab method. Handles unbounded boxes (containing
    /// `+-inf`) correctly through plain IEEE-754 arithmetic, as long as
    /// `direction` has no zero component paired with `origin` exactly on a
    /// slab boundary (the degenerate NaN case is not special-cased).
    pub fn intersects(&self, origin: &Point, direction: &Vector) -> bool {
        let mut tmin = f64::NEG_INFINITY;
        let mut tmax = f64::INFINITY;

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let inv_d = 1.0 / direction[axis];
            let mut t0 = (self.min[axis] - origin[axis]) * inv_d;
            let mut t1 = (self.max[axis] - origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            tmin = if t0 > tmin { t0 } else { tmin };
            tmax = if t1 < tmax { t1 } else { tmax };
        }

        tmax >= tmin.max(0.0) && tmin < f64::INFINITY
    }
}

/// Display implementation for [`Bounds`].
///
/// [`Bounds`]: struct.Bounds.html
impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "min: {}, max: {}", self.min, self.max)
    }
}

/// An empty [`Bounds`] is the default.
///
/// [`Bounds`]: struct.Bounds.html
impl Default for Bounds {
    fn default() -> Self {
        Bounds::empty()
    }
}
