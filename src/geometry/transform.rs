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
    geometry::{matrix::Mat4, quat::Quat, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Rigid transform with non-uniform scale, used to place hulls and boxes in
/// world space.
///
/// Conventions:
/// - `translation` is in world units.
/// - `rotation` is normalized when converted to a matrix.
/// - `scale` is applied first, then rotation, then translation
///   (`M = T * R * S`). Negative scales flip handedness; boxes transformed
///   through them are re-fixed by [`Aabb::transformed`].
///
/// [`Aabb::transformed`]: crate::geometry::aabb::Aabb::transformed
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform<T: Scalar> {
    translation: Vector3<T>,
    rotation: Quat<T>,
    scale: Vector3<T>,
}

impl<T: Scalar> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Transform<T> {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Quat::identity(),
            scale: Vector3::splat(T::one()),
        }
    }

    pub fn new(translation: Vector3<T>, rotation: Quat<T>, scale: Vector3<T>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn from_translation(translation: Vector3<T>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    pub fn from_rotation(rotation: Quat<T>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    pub fn translation(&self) -> Vector3<T> {
        self.translation
    }

    pub fn rotation(&self) -> Quat<T> {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<T> {
        self.scale
    }

    /// Model matrix `T * R * S`.
    pub fn to_mat4(&self) -> Mat4<T> {
        let s = Mat4::from_scale(&self.scale);
        let r = self.rotation.to_mat4();
        let t = Mat4::from_translation(&self.translation);
        &(&t * &r) * &s
    }

    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.to_mat4().transform_point(p)
    }
}
