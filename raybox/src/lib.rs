#![warn(missing_docs)]

//! Axis-aligned bounding box primitives shared by the shapes of a scene graph.

/// The point type used to describe an [`Bounds`]'s corners.
///
/// [`Bounds`]: struct.Bounds.html
pub type Point = nalgebra::Point3<f64>;

/// The vector type used for diagonals and directions.
pub type Vector = nalgebra::Vector3<f64>;

/// The 4x4 homogeneous transform used to refit a [`Bounds`] to a new frame.
///
/// [`Bounds`]: struct.Bounds.html
pub type Matrix = nalgebra::Matrix4<f64>;

mod axis;
mod bounded;
mod bounds;

pub use axis::Axis;
pub use bounded::Bounded;
pub use bounds::Bounds;
