//! Linear algebra kernel: vectors, 4x4 matrices, transforms and cameras.
//!
//! Matrices are row-major and act on row vectors (`v · M`); see [`matrix`].

#[macro_use]
mod macros;

pub mod camera;
pub mod gpu;
pub mod interop;
pub mod matrix;
pub mod orientation;
pub mod parse;
pub mod scalar;
pub mod transform;
pub mod vector;
pub mod view;

pub use matrix::Matrix4;
pub use orientation::{normal_to_euler, normal_to_rotation_matrix};
pub use vector::{Vector2, Vector3, Vector4};
pub use view::{look_at_matrix, perspective_matrix, view_matrix};
