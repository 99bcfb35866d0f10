use crate::{Bounds, Point};

/// A trait for objects that can report their own bounding box.
pub trait Bounded {
    /// Return the [`Bounds`] surrounding self.
    ///
    /// [`Bounds`]: struct.Bounds.html
    fn bounds(&self) -> Bounds;
    /// Return the centroid of self.
    fn centroid(&self) -> Point {
        self.bounds().centroid()
    }
}

/// [`Bounded`] implementation for [`Bounds`] itself.
impl Bounded for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }

    fn centroid(&self) -> Point {
        Bounds::centroid(self)
    }
}

/// [`Bounded`] implementation for a bare [`Point`].
impl Bounded for Point {
    fn bounds(&self) -> Bounds {
        Bounds::with_bounds(*self, *self)
    }

    fn centroid(&self) -> Point {
        *self
    }
}
