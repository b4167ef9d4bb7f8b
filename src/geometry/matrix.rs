// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array,
    ops::{Index, IndexMut, Mul},
};

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

/// Generic row-major matrix R x C
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

/// Affine model matrix. Points are column vectors, so the translation lives
/// in the last column.
pub type Mat4<T> = Matrix<T, 4, 4>;

// ---------- Basics ----------
impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn new(data: [[T; C]; R]) -> Self {
        Matrix(data)
    }

    #[inline]
    pub fn zero() -> Self {
        Matrix([[T::zero(); C]; R])
    }

    /// Transpose into C x R.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|j| array::from_fn(|i| self[i][j])))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    #[inline]
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    pub fn from_translation(t: &Vector3<T>) -> Self {
        let mut m = Self::identity();
        m[0][3] = t.x;
        m[1][3] = t.y;
        m[2][3] = t.z;
        m
    }

    pub fn from_scale(s: &Vector3<T>) -> Self {
        let mut m = Self::identity();
        m[0][0] = s.x;
        m[1][1] = s.y;
        m[2][2] = s.z;
        m
    }

    /// Applies the full affine transform to a point (w = 1).
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        let row = |r: usize| self[r][0] * p.x + self[r][1] * p.y + self[r][2] * p.z + self[r][3];
        let (x, y, z, w) = (row(0), row(1), row(2), row(3));
        if w == T::one() || w == T::zero() {
            Vector3::new(x, y, z)
        } else {
            Vector3::new(x / w, y / w, z / w)
        }
    }

    /// Applies only the linear part (w = 0).
    pub fn transform_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        let row = |r: usize| self[r][0] * v.x + self[r][1] * v.y + self[r][2] * v.z;
        Vector3::new(row(0), row(1), row(2))
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}
impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ---------- Product ----------
impl<'a, 'b, T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&'b Matrix<T, K, C>>
    for &'a Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: &'b Matrix<T, K, C>) -> Self::Output {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| {
                let mut acc = T::zero();
                for k in 0..K {
                    acc = acc + self[i][k] * rhs[k][j];
                }
                acc
            })
        }))
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        <&Matrix<T, R, K> as Mul<&Matrix<T, K, C>>>::mul(&self, &rhs)
    }
}
