#![warn(missing_docs)]

//! A raytracing crate: scene description, geometric intersection, Phong
//! shading with reflection and refraction, and image encoding.

/// 3D points and vectors.
pub use raybox::{Point, Vector};

pub mod camera;
pub mod canvas;
pub mod color;
pub mod error;
pub mod light;
pub mod material;
pub mod obj;
pub mod pattern;
pub mod ray;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod tuple;
pub mod world;

pub use camera::Camera;
pub use canvas::Canvas;
pub use color::Color;
pub use error::RenderError;
pub use ray::Ray;
pub use transform::Transform;
pub use world::World;
