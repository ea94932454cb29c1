// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{Vec2, Vec4};

/// Row‑major 4×4 matrix.
///
/// - Stored as four [`Vec4`] rows; `m[r][c]` reads row `r`, column `c`.
/// - Vectors are columns and multiply on the right (`M * v`): each output
///   component is one row dotted with `v`.
/// - `M * N` is the standard row-by-column product, so `(A * B) * v` applies
///   `B` first.
///
/// # Examples
/// ```
/// use plotter_math::{Mat4, Vec4};
/// let m = Mat4::diagonal(2.0);
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!((m * v).to_array(), [2.0, 4.0, 6.0, 2.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    rows: [Vec4; 4],
}

impl Mat4 {
    /// Multiplicative identity (`diagonal(1.0)`).
    pub const IDENTITY: Self = Self::diagonal(1.0);

    /// All zeros.
    pub const ZERO: Self = Self::diagonal(0.0);

    /// Places `scalar` on the diagonal and zero elsewhere.
    ///
    /// This is not a uniform fill: `diagonal(1.0)` is the identity.
    pub const fn diagonal(scalar: f32) -> Self {
        Self {
            rows: [
                Vec4::new(scalar, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scalar, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scalar, 0.0),
                Vec4::new(0.0, 0.0, 0.0, scalar),
            ],
        }
    }

    /// Builds a matrix from four rows, top to bottom.
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Returns row `idx`.
    pub const fn row(&self, idx: usize) -> Vec4 {
        self.rows[idx]
    }

    /// Returns column `idx` as a vector.
    pub fn column(&self, idx: usize) -> Vec4 {
        Vec4::new(
            self.rows[0][idx],
            self.rows[1][idx],
            self.rows[2][idx],
            self.rows[3][idx],
        )
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use plotter_math::{scale, Mat4};
    /// let s = scale(3.0);
    /// assert_eq!(Mat4::IDENTITY.multiply(&s), s);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                out.rows[r][c] = self.rows[r].dot(&rhs.column(c));
            }
        }
        out
    }

    /// Applies the matrix to a column vector (`self * v`).
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
            self.rows[3].dot(v),
        )
    }

    /// Maps a plane point as the homogeneous `(x, y, 0, 1)` and drops `z`/`w`.
    ///
    /// No perspective divide; intended for affine model matrices.
    pub fn transform_point2(&self, point: Vec2) -> Vec2 {
        Vec2::from(self.transform(&Vec4::from_xy_z_w(point, 0.0, 1.0)))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2), self.column(3))
    }

    /// Flattens row by row.
    pub fn to_rows_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (r, row) in self.rows.iter().enumerate() {
            out[r * 4..r * 4 + 4].copy_from_slice(&row.to_array());
        }
        out
    }

    /// Flattens column by column, the layout GPU uniform uploads expect
    /// without a transpose flag.
    pub fn to_cols_array(self) -> [f32; 16] {
        self.transpose().to_rows_array()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(
            Vec4::from(rows[0]),
            Vec4::from(rows[1]),
            Vec4::from(rows[2]),
            Vec4::from(rows[3]),
        )
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    fn index(&self, idx: usize) -> &Vec4 {
        &self.rows[idx]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, idx: usize) -> &mut Vec4 {
        &mut self.rows[idx]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(&rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_not_a_uniform_fill() {
        let m = Mat4::diagonal(3.0);
        for r in 0..4 {
            for c in 0..4 {
                let expected = if r == c { 3.0 } else { 0.0 };
                assert_eq!(m.at(r, c), expected, "({r},{c})");
            }
        }
    }

    #[test]
    fn row_index_is_mutable() {
        let mut m = Mat4::IDENTITY;
        m[3] = Vec4::new(4.0, 5.0, 6.0, 1.0);
        m[0][1] = 9.0;
        assert_eq!(m.row(3), Vec4::new(4.0, 5.0, 6.0, 1.0));
        assert_eq!(m.at(0, 1), 9.0);
    }

    #[test]
    fn cols_array_is_transposed_rows_array() {
        let m = Mat4::from([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let cols = m.to_cols_array();
        assert_eq!(&cols[0..4], &[1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.to_rows_array()[4..8], [5.0, 6.0, 7.0, 8.0]);
    }
}
