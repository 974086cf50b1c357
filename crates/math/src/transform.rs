use crate::{Matrix4, Vector3};

/// Placement of an object: translation, Euler rotation and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vector3,
    /// Euler angles in radians as (pitch, yaw, roll).
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }

    #[inline]
    pub fn from_trs(translation: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Unit scale.
    #[inline]
    pub fn from_translation_rotation(translation: Vector3, rotation: Vector3) -> Self {
        Self::from_trs(translation, rotation, Vector3::ONE)
    }

    /// Build matrix = Rz * Ry * Rx * ST (row-vector convention, see [`Matrix4`]).
    #[inline]
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::make_transform(self.translation, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
