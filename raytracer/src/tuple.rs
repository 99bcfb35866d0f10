//! Small free-standing vector helpers that don't belong to any one type.

use nalgebra::Vector3;

/// Reflect `incident` about `normal`, as if bouncing off a mirror.
pub fn reflect(incident: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    incident - normal * 2.0 * incident.dot(&normal)
}
