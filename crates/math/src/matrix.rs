//! 4x4 matrices.
//!
//! # Convention
//! - Storage is **row-major**: element (row, column) lives at `row * 4 + column`.
//! - Vectors are **row vectors** on the left: `v' = v · M`
//!   (see [`Matrix4::transform_vector4`]).
//! - Translation is stored in the **last row**.
//! - Products chain **left-to-right**: `v · A · B` applies A first, then B.
//!
//! Nothing here reports errors. Singular or otherwise degenerate input flows
//! through as NaN or infinite elements, which callers can test with
//! [`Matrix4::is_finite`].

use crate::vector::{Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Index, Mul};

/// Flat index of the element at (`row`, `column`).
#[inline]
pub const fn index(row: usize, column: usize) -> usize {
    row * 4 + column
}

/// A 4x4 matrix of 16 row-major `f64` elements.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    elements: [f64; 16],
}

/// The 2x2 sub-determinants of the top two rows (`a`) and bottom two rows
/// (`b`), paired so that `a[i]` and `b[5 - i]` span complementary columns.
struct CofactorBlocks {
    a: [f64; 6],
    b: [f64; 6],
}

impl CofactorBlocks {
    fn new(m: &[f64; 16]) -> Self {
        let a = [
            m[0] * m[5] - m[1] * m[4],
            m[0] * m[6] - m[2] * m[4],
            m[0] * m[7] - m[3] * m[4],
            m[1] * m[6] - m[2] * m[5],
            m[1] * m[7] - m[3] * m[5],
            m[2] * m[7] - m[3] * m[6],
        ];
        let b = [
            m[8] * m[13] - m[9] * m[12],
            m[8] * m[14] - m[10] * m[12],
            m[8] * m[15] - m[11] * m[12],
            m[9] * m[14] - m[10] * m[13],
            m[9] * m[15] - m[11] * m[13],
            m[10] * m[15] - m[11] * m[14],
        ];
        Self { a, b }
    }

    /// Laplace expansion along the top two rows.
    fn determinant(&self) -> f64 {
        let Self { a, b } = self;
        a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0]
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_row_major([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const ZERO: Self = Self::from_row_major([0.0; 16]);

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn from_row_major(elements: [f64; 16]) -> Self {
        Self { elements }
    }

    #[inline]
    pub const fn to_row_major(&self) -> [f64; 16] {
        self.elements
    }

    #[inline]
    pub const fn as_row_major(&self) -> &[f64; 16] {
        &self.elements
    }

    /// Element at (`row`, `column`).
    ///
    /// # Panics
    /// If `row` or `column` is outside `0..4`.
    #[inline]
    pub fn at(&self, row: usize, column: usize) -> f64 {
        assert!(row < 4 && column < 4, "matrix index ({row}, {column}) out of range");
        self.elements[index(row, column)]
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::new(
            self.at(row, 0),
            self.at(row, 1),
            self.at(row, 2),
            self.at(row, 3),
        )
    }

    #[inline]
    pub fn column(&self, column: usize) -> Vector4 {
        Vector4::new(
            self.at(0, column),
            self.at(1, column),
            self.at(2, column),
            self.at(3, column),
        )
    }

    pub fn transpose(&self) -> Self {
        let mut elements = [0.0; 16];
        for row in 0..4 {
            for column in 0..4 {
                elements[index(column, row)] = self.elements[index(row, column)];
            }
        }
        Self::from_row_major(elements)
    }

    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|e| e.is_finite())
    }

    /// Standard matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut elements = [0.0; 16];
        for row in 0..4 {
            for column in 0..4 {
                elements[index(row, column)] = (0..4)
                    .map(|k| self.elements[index(row, k)] * other.elements[index(k, column)])
                    .sum();
            }
        }
        Self::from_row_major(elements)
    }

    /// Row-vector transform `v · self`: component `c` of the result is the
    /// dot product of `v` with column `c`.
    pub fn transform_vector4(&self, v: Vector4) -> Vector4 {
        let input = v.to_array();
        let mut output = [0.0; 4];
        for (column, out) in output.iter_mut().enumerate() {
            *out = (0..4)
                .map(|row| input[row] * self.elements[index(row, column)])
                .sum();
        }
        Vector4::from(output)
    }

    pub fn determinant(&self) -> f64 {
        CofactorBlocks::new(&self.elements).determinant()
    }

    /// Closed-form inverse from the 2x2 cofactor blocks.
    ///
    /// A singular matrix is not rejected: the reciprocal determinant becomes
    /// infinite and the result is full of non-finite elements. Check
    /// [`determinant`](Self::determinant) first when that matters.
    pub fn inverse(&self) -> Self {
        let m = &self.elements;
        let blocks = CofactorBlocks::new(m);
        let det = blocks.determinant();
        if det == 0.0 {
            log::debug!("Inverting a singular matrix; elements will be non-finite");
        }
        let inv_det = 1.0 / det;
        let CofactorBlocks { a, b } = blocks;

        let adjugate = [
            m[5] * b[5] - m[6] * b[4] + m[7] * b[3],
            -m[1] * b[5] + m[2] * b[4] - m[3] * b[3],
            m[13] * a[5] - m[14] * a[4] + m[15] * a[3],
            -m[9] * a[5] + m[10] * a[4] - m[11] * a[3],
            -m[4] * b[5] + m[6] * b[2] - m[7] * b[1],
            m[0] * b[5] - m[2] * b[2] + m[3] * b[1],
            -m[12] * a[5] + m[14] * a[2] - m[15] * a[1],
            m[8] * a[5] - m[10] * a[2] + m[11] * a[1],
            m[4] * b[4] - m[5] * b[2] + m[7] * b[0],
            -m[0] * b[4] + m[1] * b[2] - m[3] * b[0],
            m[12] * a[4] - m[13] * a[2] + m[15] * a[0],
            -m[8] * a[4] + m[9] * a[2] - m[11] * a[0],
            -m[4] * b[3] + m[5] * b[1] - m[6] * b[0],
            m[0] * b[3] - m[1] * b[1] + m[2] * b[0],
            -m[12] * a[3] + m[13] * a[1] - m[14] * a[0],
            m[8] * a[3] - m[9] * a[1] + m[10] * a[0],
        ];

        Self::from_row_major(adjugate.map(|e| e * inv_det))
    }

    /// Rotation about the X axis (pitch).
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about the Y axis (yaw).
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about the Z axis (roll).
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Scale on the diagonal, translation in the last row.
    pub fn scale_translation(scale: Vector3, translation: Vector3) -> Self {
        Self::from_row_major([
            scale.x, 0.0, 0.0, 0.0, //
            0.0, scale.y, 0.0, 0.0, //
            0.0, 0.0, scale.z, 0.0, //
            translation.x, translation.y, translation.z, 1.0,
        ])
    }

    /// Builds `Rz(roll) · Ry(yaw) · Rx(pitch) · ST`, where `ST` carries the
    /// scale on its diagonal and `position` in its last row.
    ///
    /// `rotation` is (pitch, yaw, roll) in radians.
    pub fn make_transform(position: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        let rx = Self::rotation_x(rotation.x);
        let ry = Self::rotation_y(rotation.y);
        let rz = Self::rotation_z(rotation.z);

        let scale_translation = Self::scale_translation(scale, position);
        let rotated = rz.multiply(&ry.multiply(&rx));

        rotated.multiply(&scale_translation)
    }

    /// [`make_transform`](Self::make_transform) with unit scale.
    pub fn make_rigid_transform(position: Vector3, rotation: Vector3) -> Self {
        Self::make_transform(position, rotation, Vector3::ONE)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(row < 4 && column < 4, "matrix index ({row}, {column}) out of range");
        &self.elements[index(row, column)]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    #[inline]
    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        self.multiply(rhs)
    }
}

/// Four bracketed rows. Honors a precision such as `{:.3}`.
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for column in 0..4 {
                if column > 0 {
                    write!(f, ", ")?;
                }
                let value = self.elements[index(row, column)];
                match f.precision() {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.elements
        .iter()
        .zip(b.elements.iter())
        .all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.elements
        .iter()
        .zip(b.elements.iter())
        .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    /// Gauss-Jordan elimination with partial pivoting, used as an
    /// independent reference for [`Matrix4::inverse`].
    pub(crate) fn gauss_jordan_inverse(m: &Matrix4) -> Option<Matrix4> {
        let mut left = m.to_row_major();
        let mut right = Matrix4::IDENTITY.to_row_major();

        for pivot in 0..4 {
            let best = (pivot..4).max_by(|&r1, &r2| {
                left[index(r1, pivot)]
                    .abs()
                    .total_cmp(&left[index(r2, pivot)].abs())
            })?;
            if left[index(best, pivot)].abs() < 1e-12 {
                return None;
            }
            for column in 0..4 {
                left.swap(index(pivot, column), index(best, column));
                right.swap(index(pivot, column), index(best, column));
            }
            let p = left[index(pivot, pivot)];
            for column in 0..4 {
                left[index(pivot, column)] /= p;
                right[index(pivot, column)] /= p;
            }
            for row in (0..4).filter(|&r| r != pivot) {
                let factor = left[index(row, pivot)];
                for column in 0..4 {
                    left[index(row, column)] -= factor * left[index(pivot, column)];
                    right[index(row, column)] -= factor * right[index(pivot, column)];
                }
            }
        }

        Some(Matrix4::from_row_major(right))
    }

    pub(crate) fn sample_matrix() -> Matrix4 {
        Matrix4::from_row_major([
            2.0, -1.0, 0.0, 3.0, //
            1.0, 4.0, -2.0, 0.5, //
            0.0, 1.5, 3.0, -1.0, //
            -2.0, 0.0, 1.0, 5.0,
        ])
    }

    prop_compose! {
        fn matrix_strategy()(elements in prop::array::uniform16(-10.0..10.0f64)) -> Matrix4 {
            Matrix4::from_row_major(elements)
        }
    }

    prop_compose! {
        /// Diagonally dominant, hence comfortably invertible.
        fn invertible_matrix_strategy()(
            elements in prop::array::uniform16(-1.0..1.0f64),
            diagonal in prop::array::uniform4(5.0..10.0f64),
        ) -> Matrix4 {
            let mut elements = elements;
            for (i, d) in diagonal.iter().enumerate() {
                elements[index(i, i)] = *d;
            }
            Matrix4::from_row_major(elements)
        }
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(index(0, 0), 0);
        assert_eq!(index(1, 2), 6);
        assert_eq!(index(3, 3), 15);
        let m = sample_matrix();
        assert_eq!(m.at(1, 2), -2.0);
        assert_eq!(m[(3, 0)], -2.0);
        assert_eq!(m.row(2), Vector4::new(0.0, 1.5, 3.0, -1.0));
        assert_eq!(m.column(3), Vector4::new(3.0, 0.5, -1.0, 5.0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let _ = Matrix4::IDENTITY.at(4, 0);
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let m = Matrix4::identity();
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(m.at(row, column), if row == column { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(Matrix4::default(), m);
    }

    #[test]
    fn multiply_is_not_commutative() {
        let a = Matrix4::from_row_major([
            1.0, 2.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let b = Matrix4::from_row_major([
            1.0, 0.0, 0.0, 0.0, //
            3.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(a.multiply(&b).at(0, 0), 7.0);
        assert_eq!(b.multiply(&a).at(0, 0), 1.0);
        assert_eq!(a * b, a.multiply(&b));
        assert_eq!(&a * &b, a.multiply(&b));
    }

    #[test]
    fn transform_vector4_uses_row_vector_convention() {
        let translate = Matrix4::scale_translation(Vector3::ONE, Vector3::new(1.0, 2.0, 3.0));
        let point = translate.transform_vector4(Vector4::new(10.0, 20.0, 30.0, 1.0));
        assert_eq!(point, Vector4::new(11.0, 22.0, 33.0, 1.0));

        let direction = translate.transform_vector4(Vector4::new(10.0, 20.0, 30.0, 0.0));
        assert_eq!(direction, Vector4::new(10.0, 20.0, 30.0, 0.0));
    }

    #[test]
    fn determinant_of_known_matrices() {
        assert_eq!(Matrix4::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix4::ZERO.determinant(), 0.0);
        let scale = Matrix4::scale_translation(Vector3::new(2.0, 3.0, 4.0), Vector3::splat(7.0));
        assert_abs_diff_eq!(scale.determinant(), 24.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Matrix4::rotation_y(0.7).determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn determinant_matches_glam() {
        let m = sample_matrix();
        let reference = glam::DMat4::from(m).determinant();
        assert_relative_eq!(m.determinant(), reference, max_relative = 1e-12);
    }

    #[test]
    fn inverse_matches_gauss_jordan_reference() {
        let m = sample_matrix();
        let reference = gauss_jordan_inverse(&m).expect("sample matrix is invertible");
        assert_abs_diff_eq!(m.inverse(), reference, epsilon = EPSILON);
        assert_abs_diff_eq!(m.multiply(&m.inverse()), Matrix4::IDENTITY, epsilon = EPSILON);
    }

    #[test]
    fn inverse_of_singular_matrix_is_non_finite() {
        let singular = Matrix4::from_row_major([
            1.0, 2.0, 3.0, 4.0, //
            2.0, 4.0, 6.0, 8.0, //
            0.0, 1.0, 0.0, 1.0, //
            1.0, 0.0, 1.0, 0.0,
        ]);
        assert_eq!(singular.determinant(), 0.0);
        assert!(!singular.inverse().is_finite());
        assert!(!Matrix4::ZERO.inverse().is_finite());
    }

    #[test]
    fn rotation_matrices_are_right_handed() {
        let p = Vector4::new(0.0, 1.0, 0.0, 1.0);
        let rotated = Matrix4::rotation_x(FRAC_PI_2).transpose().transform_vector4(p);
        assert_abs_diff_eq!(rotated, Vector4::new(0.0, 0.0, 1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn make_transform_with_no_rotation_or_scale_is_translation() {
        let p = Vector3::new(3.0, -4.0, 5.5);
        let m = Matrix4::make_transform(p, Vector3::ZERO, Vector3::ONE);
        let origin = m.transform_vector4(Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(origin, Vector4::new(3.0, -4.0, 5.5, 1.0));
        assert_eq!(m, Matrix4::scale_translation(Vector3::ONE, p));
    }

    #[test]
    fn make_transform_composes_rotation_before_scale_translation() {
        let position = Vector3::new(1.0, 2.0, 3.0);
        let rotation = Vector3::new(0.3, -1.1, 2.0);
        let scale = Vector3::new(2.0, 0.5, 1.5);

        let expected = Matrix4::rotation_z(rotation.z)
            .multiply(&Matrix4::rotation_y(rotation.y))
            .multiply(&Matrix4::rotation_x(rotation.x))
            .multiply(&Matrix4::scale_translation(scale, position));
        let m = Matrix4::make_transform(position, rotation, scale);

        assert_abs_diff_eq!(m, expected, epsilon = EPSILON);
        assert_eq!(m.row(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_abs_diff_eq!(m.determinant(), 1.5, epsilon = EPSILON);
        assert_eq!(
            Matrix4::make_rigid_transform(position, rotation),
            Matrix4::make_transform(position, rotation, Vector3::ONE)
        );
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = sample_matrix();
        assert_eq!(m.transpose().row(0), m.column(0));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn display_prints_four_rows() {
        let text = format!("{:.1}", Matrix4::IDENTITY);
        assert_eq!(
            text,
            "[1.0, 0.0, 0.0, 0.0]\n[0.0, 1.0, 0.0, 0.0]\n[0.0, 0.0, 1.0, 0.0]\n[0.0, 0.0, 0.0, 1.0]"
        );
        assert_eq!(format!("{}", Matrix4::IDENTITY).lines().count(), 4);
    }

    proptest! {
        #[test]
        fn multiplying_by_identity_is_a_no_op(m in matrix_strategy()) {
            prop_assert!(m.multiply(&Matrix4::IDENTITY).abs_diff_eq(&m, EPSILON));
            prop_assert!(Matrix4::IDENTITY.multiply(&m).abs_diff_eq(&m, EPSILON));
        }

        #[test]
        fn inverse_is_a_two_sided_inverse(m in invertible_matrix_strategy()) {
            let inv = m.inverse();
            prop_assert!(m.multiply(&inv).abs_diff_eq(&Matrix4::IDENTITY, EPSILON));
            prop_assert!(inv.multiply(&m).abs_diff_eq(&Matrix4::IDENTITY, EPSILON));
        }

        #[test]
        fn inverse_agrees_with_gauss_jordan(m in invertible_matrix_strategy()) {
            let reference = gauss_jordan_inverse(&m).unwrap();
            prop_assert!(m.inverse().abs_diff_eq(&reference, EPSILON));
        }

        #[test]
        fn determinant_of_inverse_is_reciprocal(m in invertible_matrix_strategy()) {
            prop_assert!(m.inverse().determinant().relative_eq(&(1.0 / m.determinant()), EPSILON, 1e-9));
        }

        #[test]
        fn inverting_twice_restores_matrix(m in invertible_matrix_strategy()) {
            prop_assert!(m.inverse().inverse().abs_diff_eq(&m, 1e-8));
        }

        #[test]
        fn determinant_agrees_with_glam(m in matrix_strategy()) {
            let reference = glam::DMat4::from(m).determinant();
            prop_assert!(m.determinant().abs_diff_eq(&reference, 1e-6));
        }
    }
}
