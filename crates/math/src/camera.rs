use crate::view::{look_at_matrix, perspective_matrix};
use crate::{Matrix4, Vector3};

/// Simple perspective camera (right-handed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fov_y_degrees: f64,
    pub z_near: f64,
    pub z_far: f64,
    pub aspect: f64,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new_perspective(
        eye: Vector3,
        target: Vector3,
        up: Vector3,
        fov_y_degrees: f64,
        z_near: f64,
        z_far: f64,
        aspect: f64,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_degrees,
            z_near,
            z_far,
            aspect,
        }
    }

    #[inline]
    pub fn view(&self) -> Matrix4 {
        look_at_matrix(self.eye, self.target, self.up)
    }

    /// OpenGL-style projection (depth in [-1, 1]).
    #[inline]
    pub fn proj(&self) -> Matrix4 {
        perspective_matrix(
            self.fov_y_degrees,
            self.aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    /// View first, then projection: `p · view · proj`.
    #[inline]
    pub fn view_proj(&self) -> Matrix4 {
        self.view() * self.proj()
    }

    #[inline]
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }
}
