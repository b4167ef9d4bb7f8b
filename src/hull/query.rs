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

use tracing::trace;

use crate::{
    config::Tolerances,
    geometry::{
        intersection::Intersection,
        ray::{Ray, ray_triangle_parameter},
        tri_tri_intersect::intersect_triangles_with,
    },
    hull::hull::Hull,
    numeric::scalar::Scalar,
};

/// Tests every triangle of `a` against every triangle of `b` (after applying
/// each hull's transform) and returns the first intersection found.
///
/// No spatial pruning happens here: the cost is `O(|a| * |b|)`.
pub fn intersect_hulls<T: Scalar>(a: &Hull<'_, T>, b: &Hull<'_, T>) -> Intersection<T> {
    intersect_hulls_with(a, b, &Tolerances::default())
}

pub fn intersect_hulls_with<T: Scalar>(
    a: &Hull<'_, T>,
    b: &Hull<'_, T>,
    tol: &Tolerances<T>,
) -> Intersection<T> {
    let model_b = b.model_matrix();
    for (i, ta) in a.world_triangles().enumerate() {
        for (j, tb) in b.triangles().enumerate() {
            let tb = match &model_b {
                Some(m) => tb.transformed(m),
                None => tb,
            };
            let hit = intersect_triangles_with(&ta, &tb, tol);
            if hit.occurred() {
                trace!(triangle_a = i, triangle_b = j, "hull/hull hit");
                return hit;
            }
        }
    }
    Intersection::None
}

/// Casts `ray` against the hull's (transformed) triangles in storage order.
///
/// The first triangle that reports a hit wins, which is not necessarily the
/// closest one; use [`raycast_hull_closest`] for that.
pub fn raycast_hull<T: Scalar>(hull: &Hull<'_, T>, ray: &Ray<T>) -> Intersection<T> {
    raycast_hull_with(hull, ray, &Tolerances::default())
}

pub fn raycast_hull_with<T: Scalar>(
    hull: &Hull<'_, T>,
    ray: &Ray<T>,
    tol: &Tolerances<T>,
) -> Intersection<T> {
    for (i, tri) in hull.world_triangles().enumerate() {
        if let Some(t) = ray_triangle_parameter(&tri, ray, tol) {
            trace!(triangle = i, "hull raycast hit");
            return Intersection::Point(ray.at(t));
        }
    }
    Intersection::None
}

/// Like [`raycast_hull`], but scans every triangle and keeps the hit with the
/// smallest parameter. Ties keep the earlier triangle.
pub fn raycast_hull_closest<T: Scalar>(
    hull: &Hull<'_, T>,
    ray: &Ray<T>,
    tol: &Tolerances<T>,
) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (i, tri) in hull.world_triangles().enumerate() {
        if let Some(t) = ray_triangle_parameter(&tri, ray, tol) {
            if best.is_none_or(|(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }
    best
}
