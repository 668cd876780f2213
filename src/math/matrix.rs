use super::Point;
use num_traits::AsPrimitive;
use std::ops::{Mul, MulAssign};

/// 3x3 affine transform stored row-major as
///
/// ```text
/// a  b  0
/// c  d  0
/// tx ty 1
/// ```
///
/// Points are row vectors, so `p * (A * B)` applies `A` first and `B` second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix33(pub [f32; 9]);

impl Matrix33 {
    pub fn identity() -> Matrix33 {
        Matrix33([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    pub fn translate(tx: f32, ty: f32) -> Matrix33 {
        Matrix33([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0])
    }

    pub fn scale(sx: f32, sy: f32) -> Matrix33 {
        Matrix33([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Rotation by `a` radians.
    pub fn rotate(a: f32) -> Matrix33 {
        let cs = a.cos();
        let sn = a.sin();
        Matrix33([cs, sn, 0.0, -sn, cs, 0.0, 0.0, 0.0, 1.0])
    }

    /// Builds a matrix from a column-major array: the value at `t[row * 3 + col]`
    /// lands in storage cell `(col, row)`.
    pub fn from_column_major(t: &[f32; 9]) -> Matrix33 {
        let mut m = Matrix33::identity();
        for row in 0..3 {
            for col in 0..3 {
                m.set(col, row, t[(row * 3) + col]);
            }
        }
        m
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 3 + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        self.0[row * 3 + col] = v;
    }

    pub fn set_identity(&mut self) {
        *self = Matrix33::identity();
    }

    /// `rhs * self`: `rhs` is applied before the existing transform.
    pub fn pre_multiply(self, rhs: Self) -> Self {
        rhs * self
    }

    /// `self * rhs`: `rhs` is applied after the existing transform.
    pub fn post_multiply(self, rhs: Self) -> Self {
        self * rhs
    }

    pub fn transpose(self) -> Matrix33 {
        let mut t = Matrix33::identity();
        for row in 0..3 {
            for col in 0..3 {
                t.set(col, row, self.get(row, col));
            }
        }
        t
    }

    pub fn transform_point(&self, pt: Point) -> Point {
        let t = &self.0;
        Point::new(
            pt.x * t[0] + pt.y * t[3] + t[6],
            pt.x * t[1] + pt.y * t[4] + t[7],
        )
    }

    pub fn average_scale(&self) -> f32 {
        let t = &self.0;
        let sx = (t[0] * t[0] + t[3] * t[3]).sqrt();
        let sy = (t[1] * t[1] + t[4] * t[4]).sqrt();
        (sx * sy).sqrt()
    }
}

impl Default for Matrix33 {
    fn default() -> Self {
        Matrix33::identity()
    }
}

impl Mul for Matrix33 {
    type Output = Matrix33;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut r = [0f32; 9];
        for row in 0..3 {
            for col in 0..3 {
                r[row * 3 + col] = (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        Matrix33(r)
    }
}

impl MulAssign for Matrix33 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: AsPrimitive<f32>> From<[T; 9]> for Matrix33 {
    fn from(values: [T; 9]) -> Self {
        let mut values2 = [0.0; 9];
        for i in 0..9 {
            values2[i] = values[i].as_();
        }
        Matrix33(values2)
    }
}
