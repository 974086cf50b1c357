//! Conversions to and from `glam` double-precision types.
//!
//! A row-major matrix used with row vectors has exactly the element order of
//! a column-major matrix used with column vectors, so the 16 elements are
//! copied as they are: `v · m` here equals `DMat4::from(m) * v` in glam.

use crate::{Matrix4, Vector3, Vector4};
use glam::{DMat4, DVec3, DVec4};

impl From<Matrix4> for DMat4 {
    fn from(m: Matrix4) -> Self {
        DMat4::from_cols_array(m.as_row_major())
    }
}

impl From<DMat4> for Matrix4 {
    fn from(m: DMat4) -> Self {
        Matrix4::from_row_major(m.to_cols_array())
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for DVec4 {
    fn from(v: Vector4) -> Self {
        DVec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<DVec4> for Vector4 {
    fn from(v: DVec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}
