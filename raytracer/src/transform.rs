//! 4x4 affine transforms, with a cached inverse and inverse-transpose.

use crate::error::RenderError;
use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

/// A transform matrix together with its inverse, computed once up front so
/// that every later use (ray transform, normal transform, bounds refit)
/// is a plain matrix multiply instead of a fresh linear solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f64>,
    inverse: Matrix4<f64>,
}

impl Transform {
    /// Build a [`Transform`] from a raw matrix, failing if it has no inverse.
    ///
    /// [`Transform`]: struct.Transform.html
    pub fn try_new(matrix: Matrix4<f64>) -> Result<Self, RenderError> {
        let inverse = matrix.try_inverse().ok_or(RenderError::SingularMatrix)?;
        Ok(Transform { matrix, inverse })
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Transform {
            matrix: Matrix4::identity(),
            inverse: Matrix4::identity(),
        }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// The cached inverse matrix.
    pub fn inverse(&self) -> &Matrix4<f64> {
        &self.inverse
    }

    /// The transpose of the inverse, used to map normals from object space
    /// to world space so that non-uniform scaling doesn't skew them.
    pub fn inverse_transpose(&self) -> Matrix4<f64> {
        self.inverse.transpose()
    }

    /// Compose `self` with `other`, applying `other` first (`self * other`).
    #[must_use]
    pub fn then(&self, other: &Transform) -> Self {
        Transform {
            matrix: self.matrix * other.matrix,
            inverse: other.inverse * self.inverse,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// A translation by `(x, y, z)`. Always invertible.
pub fn translation(x: f64, y: f64, z: f64) -> Transform {
    Transform::try_new(Matrix4::new_translation(&Vector3::new(x, y, z)))
        .expect("translation is always invertible")
}

/// A scaling by `(x, y, z)`. Invertible as long as no factor is zero.
pub fn scaling(x: f64, y: f64, z: f64) -> Transform {
    Transform::try_new(Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z)))
        .expect("non-degenerate scaling is always invertible")
}

/// A rotation of `radians` around the X axis. Always invertible.
pub fn rotation_x(radians: f64) -> Transform {
    let (sin, cos) = radians.sin_cos();
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        1.0, 0.0,  0.0, 0.0,
        0.0, cos, -sin, 0.0,
        0.0, sin,  cos, 0.0,
        0.0, 0.0,  0.0, 1.0,
    );
    Transform::try_new(matrix).expect("rotation is always invertible")
}

/// A rotation of `radians` around the Y axis. Always invertible.
pub fn rotation_y(radians: f64) -> Transform {
    let (sin, cos) = radians.sin_cos();
    #[rustfmt::skip]
    let matrix = Matrix4::new(
         cos, 0.0, sin, 0.0,
         0.0, 1.0, 0.0, 0.0,
        -sin, 0.0, cos, 0.0,
         0.0, 0.0, 0.0, 1.0,
    );
    Transform::try_new(matrix).expect("rotation is always invertible")
}

/// A rotation of `radians` around the Z axis. Always invertible.
pub fn rotation_z(radians: f64) -> Transform {
    let (sin, cos) = radians.sin_cos();
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        cos, -sin, 0.0, 0.0,
        sin,  cos, 0.0, 0.0,
        0.0,  0.0, 1.0, 0.0,
        0.0,  0.0, 0.0, 1.0,
    );
    Transform::try_new(matrix).expect("rotation is always invertible")
}

/// A rotation of `radians` around an arbitrary `axis`, used to orbit a
/// camera's `from` point around a fixed target for a circular animation.
/// Always invertible.
pub fn rotation_about_axis(axis: Vector3<f64>, radians: f64) -> Transform {
    let matrix = Rotation3::from_axis_angle(&Unit::new_normalize(axis), radians).to_homogeneous();
    Transform::try_new(matrix).expect("rotation is always invertible")
}

/// A shearing transform, each parameter controlling how much one axis moves
/// in proportion to another. Always invertible.
#[allow(clippy::too_many_arguments)]
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Transform {
    #[rustfmt::skip]
    let matrix = Matrix4::new(
        1.0, xy,  xz,  0.0,
        yx,  1.0, yz,  0.0,
        zx,  zy,  1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    Transform::try_new(matrix).expect("shearing is always invertible")
}

/// Build the view transform that places the camera at `from`, looking
/// towards `to`, with `up` defining the camera's vertical axis.
pub fn view_transform(from: Point3<f64>, to: Point3<f64>, up: Vector3<f64>) -> Transform {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);

    #[rustfmt::skip]
    let orientation = Matrix4::new(
        left.x,     left.y,     left.z,     0.0,
        true_up.x,  true_up.y,  true_up.z,  0.0,
        -forward.x, -forward.y, -forward.z, 0.0,
        0.0,        0.0,        0.0,        1.0,
    );

    Transform::try_new(orientation).expect("orthonormal basis is always invertible")
        .then(&translation(-from.x, -from.y, -from.z))
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Point3;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = translation(5., -3., 2.);
        let p = t.matrix().transform_point(&Point3::new(-3., 4., 5.));
        assert_eq!(p, Point3::new(2., 1., 7.));
    }

    #[test]
    fn inverse_translation_moves_the_opposite_way() {
        let t = translation(5., -3., 2.);
        let p = t.inverse().transform_point(&Point3::new(-3., 4., 5.));
        assert_eq!(p, Point3::new(-8., 7., 3.));
    }

    #[test]
    fn scaling_a_vector_scales_its_components() {
        let t = scaling(2., 3., 4.);
        let v = t.matrix().transform_vector(&Vector3::new(-4., 6., 8.));
        assert_eq!(v, Vector3::new(-8., 18., 32.));
    }

    #[test]
    fn rotating_a_point_around_x_by_half_quarter() {
        let t = rotation_x(std::f64::consts::FRAC_PI_4);
        let p = t.matrix().transform_point(&Point3::new(0., 1., 0.));
        assert_close(p.y, 2f64.sqrt() / 2.);
        assert_close(p.z, 2f64.sqrt() / 2.);
    }

    #[test]
    fn rotation_about_y_axis_matches_rotation_y() {
        let generic = rotation_about_axis(Vector3::new(0., 1., 0.), std::f64::consts::FRAC_PI_2);
        let specific = rotation_y(std::f64::consts::FRAC_PI_2);
        let p = Point3::new(1., 0., 0.);
        let a = generic.matrix().transform_point(&p);
        let b = specific.matrix().transform_point(&p);
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
        assert_close(a.z, b.z);
    }

    #[test]
    fn view_transform_looking_in_default_direction_is_identity() {
        let t = view_transform(
            Point3::new(0., 0., 0.),
            Point3::new(0., 0., -1.),
            Vector3::new(0., 1., 0.),
        );
        assert_eq!(*t.matrix(), Matrix4::identity());
    }

    #[test]
    fn view_transform_looking_in_positive_z_flips_for_a_mirror() {
        let t = view_transform(
            Point3::new(0., 0., 0.),
            Point3::new(0., 0., 1.),
            Vector3::new(0., 1., 0.),
        );
        assert_eq!(*t.matrix(), scaling(-1., 1., -1.).matrix().clone());
    }

    #[test]
    fn view_transform_moves_the_world() {
        let t = view_transform(
            Point3::new(0., 0., 8.),
            Point3::new(0., 0., 0.),
            Vector3::new(0., 1., 0.),
        );
        assert_eq!(*t.matrix(), translation(0., 0., -8.).matrix().clone());
    }
}
