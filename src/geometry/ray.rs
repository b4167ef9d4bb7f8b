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
    config::Tolerances,
    geometry::{
        intersection::Intersection,
        triangle::Triangle,
        vector::{Point3, Vector3},
    },
    numeric::scalar::Scalar,
};

/// A half-line from `origin` along `direction`.
///
/// `direction` need not be unit length; hit parameters are measured in
/// multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Scalar> {
    pub origin: Point3<T>,
    pub direction: Vector3<T>,
}

impl<T: Scalar> Ray<T> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }

    /// Ray between two points; `at(1)` is `to`.
    pub fn through(from: Point3<T>, to: Point3<T>) -> Self {
        Self::new(from, to - from)
    }

    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction.scale(t)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.direction)
    }
}

/// Möller–Trumbore hit parameter, or `None` when the ray is parallel to the
/// triangle, misses it, or would hit at or behind its origin.
pub fn ray_triangle_parameter<T: Scalar>(
    tri: &Triangle<T>,
    ray: &Ray<T>,
    tol: &Tolerances<T>,
) -> Option<T> {
    let [p0, p1, p2] = &tri.0;
    let ab = p1 - p0;
    let ac = p2 - p0;

    let h = ray.direction.cross(&ac);
    let a = ab.dot(&h);
    if a.abs() <= tol.ray_parallel {
        return None;
    }

    let f = T::one() / a;
    let s = ray.origin - *p0;
    let u = f * s.dot(&h);
    if u < T::zero() || u > T::one() {
        return None;
    }

    let q = s.cross(&ab);
    let v = f * ray.direction.dot(&q);
    if v < T::zero() || u + v > T::one() {
        return None;
    }

    let t = f * ac.dot(&q);
    if t < tol.ray_min_distance {
        return None;
    }
    Some(t)
}

pub fn intersect_ray_triangle<T: Scalar>(tri: &Triangle<T>, ray: &Ray<T>) -> Intersection<T> {
    intersect_ray_triangle_with(tri, ray, &Tolerances::default())
}

pub fn intersect_ray_triangle_with<T: Scalar>(
    tri: &Triangle<T>,
    ray: &Ray<T>,
    tol: &Tolerances<T>,
) -> Intersection<T> {
    ray_triangle_parameter(tri, ray, tol)
        .map(|t| ray.at(t))
        .into()
}
