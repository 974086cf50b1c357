//! Packing matrices for GPU uniform buffers.

use crate::Matrix4;
use bytemuck::{Pod, Zeroable};

/// Matrix UBO (16-byte aligned, `mat4x4<f32>` layout).
///
/// Shaders multiply column vectors (`M * v`), so column `i` of the uniform
/// is row `i` of the row-vector [`Matrix4`]; both give the same result.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MatrixUniform {
    pub columns: [[f32; 4]; 4],
}

impl MatrixUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&Matrix4> for MatrixUniform {
    fn from(matrix: &Matrix4) -> Self {
        let m = matrix.as_row_major();
        let mut columns = [[0.0f32; 4]; 4];
        for (i, column) in columns.iter_mut().enumerate() {
            for (j, value) in column.iter_mut().enumerate() {
                *value = m[i * 4 + j] as f32;
            }
        }
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector3, Vector4};

    #[test]
    fn uniform_is_64_bytes() {
        let uniform = MatrixUniform::from(&Matrix4::IDENTITY);
        assert_eq!(uniform.as_bytes().len(), 64);
        assert_eq!(std::mem::align_of::<MatrixUniform>(), 4);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let m = Matrix4::make_rigid_transform(Vector3::new(1.0, 2.0, 3.0), Vector3::ZERO);
        let uniform = MatrixUniform::from(&m);
        assert_eq!(uniform.columns[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn column_major_multiply_matches_row_vector_transform() {
        let m = Matrix4::make_transform(
            Vector3::new(1.0, -2.0, 0.5),
            Vector3::new(0.3, 0.2, -0.1),
            Vector3::splat(2.0),
        );
        let v = Vector4::new(0.5, 1.0, -1.5, 1.0);
        let expected = m.transform_vector4(v);

        let uniform = MatrixUniform::from(&m);
        let input = [v.x as f32, v.y as f32, v.z as f32, v.w as f32];
        for (row, want) in expected.to_array().iter().enumerate() {
            let got: f32 = (0..4).map(|k| uniform.columns[k][row] * input[k]).sum();
            assert!((got - *want as f32).abs() < 1e-5);
        }
    }
}
