//! View and projection matrix builders.
//!
//! All builders follow the row-vector convention of [`Matrix4`]: a point is
//! taken to clip space as `p · view · projection`.

use crate::matrix::Matrix4;
use crate::scalar::to_radians;
use crate::vector::Vector3;

/// World-to-view matrix for an object seen from a camera.
///
/// `camera_rotation_punch` is a transient offset added to the camera
/// rotation, e.g. for recoil or shake. Both transforms use unit scale.
/// The result is `inverse(camera · object)`, so a degenerate camera gives a
/// non-finite matrix.
pub fn view_matrix(
    object_position: Vector3,
    object_rotation: Vector3,
    camera_position: Vector3,
    camera_rotation: Vector3,
    camera_rotation_punch: Vector3,
) -> Matrix4 {
    let punched_camera_rotation = camera_rotation + camera_rotation_punch;
    let inner = Matrix4::make_rigid_transform(object_position, object_rotation);
    let outer = Matrix4::make_rigid_transform(camera_position, punched_camera_rotation);
    outer.multiply(&inner).inverse()
}

/// Right-handed perspective projection with OpenGL-style depth.
///
/// Points at `z = -z_near` land on clip depth -1 and points at `z = -z_far`
/// on +1 after the perspective divide. `fov_degrees` is the vertical field
/// of view. `z_near == z_far` and a field of view of 0 or 180 degrees give
/// non-finite elements.
pub fn perspective_matrix(fov_degrees: f64, aspect_ratio: f64, z_near: f64, z_far: f64) -> Matrix4 {
    let y_scale = 1.0 / to_radians(fov_degrees / 2.0).tan();
    let x_scale = y_scale / aspect_ratio;
    let frustum_length = z_far - z_near;

    let mut elements = [0.0; 16];
    elements[0] = x_scale;
    elements[5] = y_scale;
    elements[10] = -((z_far + z_near) / frustum_length);
    elements[11] = -1.0;
    elements[14] = -((2.0 * z_far * z_near) / frustum_length);
    Matrix4::from_row_major(elements)
}

/// World-to-camera matrix looking from `eye` toward `target`.
///
/// The camera basis sits in the first three columns and the last row holds
/// `-basis · eye`, so no inversion is needed. Degenerate when `up` is
/// parallel to the view direction.
pub fn look_at_matrix(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
    let z = eye.subtract(target).normalize();
    let initial_x = up.cross(z);
    let y = z.cross(initial_x).normalize();
    let x = initial_x.normalize();

    Matrix4::from_row_major([
        x.x, y.x, z.x, 0.0, //
        x.y, y.y, z.y, 0.0, //
        x.z, y.z, z.z, 0.0, //
        -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
    ])
}
