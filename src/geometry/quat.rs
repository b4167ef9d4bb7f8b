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

use crate::{
    geometry::{matrix::Mat4, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Rotation quaternion stored as `(x, y, z, w)` with `w` the scalar part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quat<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians about `axis`. A zero-length axis yields the
    /// identity.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let Some(axis) = axis.try_normalized() else {
            return Self::identity();
        };
        let (sin_half, cos_half) = (angle * T::half()).sin_cos();
        let s = axis.scale(sin_half);
        Self::new(s.x, s.y, s.z, cos_half)
    }

    pub fn norm_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Unit quaternion; a zero quaternion normalizes to the identity.
    pub fn normalized(&self) -> Self {
        let n = self.norm_squared().sqrt();
        if n > T::zero() && n.is_finite() {
            Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
        } else {
            Self::identity()
        }
    }

    /// Hamilton product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Rotation matrix of the normalized quaternion.
    pub fn to_mat4(&self) -> Mat4<T> {
        let q = self.normalized();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let one = T::one();
        let two = one + one;
        let zero = T::zero();

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::new([
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy), zero],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx), zero],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy), zero],
            [zero, zero, zero, one],
        ])
    }

    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        self.to_mat4().transform_vector(v)
    }
}
