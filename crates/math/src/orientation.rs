//! Orientation from a surface normal.

use crate::matrix::Matrix4;
use crate::vector::Vector3;

/// Below this, the first-column length `sy` counts as gimbal lock.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 1e-6;

/// Builds a basis from `normal` and an `up` reference.
///
/// The columns are `normal × up`, `normalize(normal × up) × normal` and
/// `normal`, with the W row and column fixed to (0, 0, 0, 1). The first
/// column is left unnormalized. When `normal` is parallel to `up` the two
/// tangent columns collapse to zero.
pub fn normal_to_rotation_matrix(normal: Vector3, up: Vector3) -> Matrix4 {
    let tangent_a = normal.cross(up);
    let tangent_b = tangent_a.safe_normalize().cross(normal);
    Matrix4::from_row_major([
        tangent_a.x, tangent_b.x, normal.x, 0.0, //
        tangent_a.y, tangent_b.y, normal.y, 0.0, //
        tangent_a.z, tangent_b.z, normal.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Euler angles (pitch, yaw, roll) in radians of the basis built by
/// [`normal_to_rotation_matrix`], decomposed as `Rz(roll) · Ry(yaw) · Rx(pitch)`.
///
/// At gimbal lock roll cannot be told apart from pitch, so it is reported
/// as exactly zero and pitch absorbs the whole rotation.
pub fn normal_to_euler(normal: Vector3, up: Vector3) -> Vector3 {
    let r = normal_to_rotation_matrix(normal, up);

    let sy = (r.at(0, 0) * r.at(0, 0) + r.at(1, 0) * r.at(1, 0)).sqrt();
    let singular = sy < GIMBAL_LOCK_THRESHOLD;

    let yaw = (-r.at(2, 0)).atan2(sy);
    if singular {
        log::trace!("Euler extraction at gimbal lock (sy = {sy:e}); roll fixed to zero");
        let pitch = (-r.at(1, 2)).atan2(r.at(1, 1));
        Vector3::new(pitch, yaw, 0.0)
    } else {
        let pitch = r.at(2, 1).atan2(r.at(2, 2));
        let roll = r.at(1, 0).atan2(r.at(0, 0));
        Vector3::new(pitch, yaw, roll)
    }
}
