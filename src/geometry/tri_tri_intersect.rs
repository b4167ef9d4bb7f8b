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

use tracing::debug;

use crate::{
    config::Tolerances,
    geometry::{
        intersection::Intersection,
        triangle::{Projection, Triangle, edges_2d, point_in_tri_2d},
        vector::{Point3, Vector3},
    },
    numeric::scalar::Scalar,
};

/// Decides whether triangles `a` and `b` intersect, using the separating-plane
/// method with the default [`Tolerances`].
///
/// The returned point is representative only: a point on the crossing of the
/// two edges (co-planar), the centroid of the contained triangle (co-planar,
/// nested), or a point on the line where the two planes meet.
pub fn intersect_triangles<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Intersection<T> {
    intersect_triangles_with(a, b, &Tolerances::default())
}

pub fn intersect_triangles_with<T: Scalar>(
    a: &Triangle<T>,
    b: &Triangle<T>,
    tol: &Tolerances<T>,
) -> Intersection<T> {
    if a.is_degenerate(tol.degeneracy) || b.is_degenerate(tol.degeneracy) {
        debug!("zero-area triangle in tri/tri test");
        return Intersection::None;
    }
    let (n_a, d_a) = a.plane_equation();
    let (n_b, d_b) = b.plane_equation();

    // 1) signed distances of a's vertices to b's plane
    let dist_a = a.0.map(|p| tol.snap(n_b.dot(&p) + d_b));
    if strictly_one_side(&dist_a) {
        return Intersection::None;
    }

    // 2) and the other way round
    let dist_b = b.0.map(|p| tol.snap(n_a.dot(&p) + d_a));
    if strictly_one_side(&dist_b) {
        return Intersection::None;
    }

    let zero = T::zero();
    if dist_a.iter().all(|d| *d == zero) || dist_b.iter().all(|d| *d == zero) {
        return coplanar_intersection(a, b, tol);
    }

    let planes = PlanePair {
        n_a,
        h_a: -d_a,
        n_b,
        h_b: -d_b,
    };
    crossing_intersection(a, b, &planes, &dist_a, &dist_b, tol)
}

/// No vertex on the plane and all on the same side.
fn strictly_one_side<T: Scalar>(d: &[T; 3]) -> bool {
    let s = d.map(|x| x.sign());
    s[0] != 0 && s[0] == s[1] && s[1] == s[2]
}

fn coplanar_intersection<T: Scalar>(
    a: &Triangle<T>,
    b: &Triangle<T>,
    tol: &Tolerances<T>,
) -> Intersection<T> {
    let proj = Projection::dominant(a, b);
    let ta = a.project(proj);
    let tb = b.project(proj);
    let edges_a = edges_2d(&ta);
    let edges_b = edges_2d(&tb);

    // a) first edge/edge crossing, lifted back onto a's 3-D edge
    for (edge, &(i, j)) in edges_a.iter().zip(Triangle::<T>::EDGES.iter()) {
        for other in &edges_b {
            if let Some(hit) = edge.intersect(other, tol.degeneracy) {
                return Intersection::Point(a.0[i].lerp(&a.0[j], hit.s));
            }
        }
    }

    // b) one triangle nested in the other
    if ta.iter().all(|p| point_in_tri_2d(p, &tb, tol.degeneracy)) {
        return Intersection::Point(a.centroid());
    }
    if tb.iter().all(|p| point_in_tri_2d(p, &ta, tol.degeneracy)) {
        return Intersection::Point(b.centroid());
    }
    Intersection::None
}

/// Both supporting planes as `n · x = h`.
struct PlanePair<T: Scalar> {
    n_a: Vector3<T>,
    h_a: T,
    n_b: Vector3<T>,
    h_b: T,
}

fn crossing_intersection<T: Scalar>(
    a: &Triangle<T>,
    b: &Triangle<T>,
    planes: &PlanePair<T>,
    dist_a: &[T; 3],
    dist_b: &[T; 3],
    tol: &Tolerances<T>,
) -> Intersection<T> {
    let dir = planes.n_a.cross(&planes.n_b);
    let len2 = dir.norm_squared();
    // |D|² = |n_a|² |n_b|² sin²θ
    if len2 <= tol.degeneracy * planes.n_a.norm_squared() * planes.n_b.norm_squared() {
        debug!("near-parallel planes in tri/tri test");
        return Intersection::None;
    }
    let origin = (planes.n_b.cross(&dir).scale(planes.h_a)
        + dir.cross(&planes.n_a).scale(planes.h_b))
        / len2;

    let (Some(ia), Some(ib)) = (
        line_interval(a, dist_a, &dir, &origin),
        line_interval(b, dist_b, &dir, &origin),
    ) else {
        return Intersection::None;
    };

    if ranges_overlap(ia, ib) {
        Intersection::Point(origin)
    } else {
        Intersection::None
    }
}

/// The stretch of `dir` (relative to `origin`) covered by the triangle where it
/// crosses the other plane. Vertices are reordered so the one alone on its
/// side sits at index 1; the interval ends are then found on edges 0-1 and 1-2.
fn line_interval<T: Scalar>(
    tri: &Triangle<T>,
    dist: &[T; 3],
    dir: &Vector3<T>,
    origin: &Point3<T>,
) -> Option<(T, T)> {
    let order = lone_vertex_order(dist)?;
    let p = order.map(|i| dir.dot(&(tri.0[i] - *origin)));
    let d = order.map(|i| dist[i]);

    let t0 = crossing_param(p[0], p[1], d[0], d[1])?;
    let t1 = crossing_param(p[1], p[2], d[1], d[2])?;
    Some((t0.min(t1), t0.max(t1)))
}

/// Vertex order `[i, lone, j]`. `None` when every distance is zero.
fn lone_vertex_order<T: Scalar>(d: &[T; 3]) -> Option<[usize; 3]> {
    let s = d.map(|x| x.sign());
    let lone = if s[0] * s[1] > 0 {
        2
    } else if s[0] * s[2] > 0 {
        1
    } else if s[1] * s[2] > 0 || s[0] != 0 {
        0
    } else if s[1] != 0 {
        1
    } else if s[2] != 0 {
        2
    } else {
        return None;
    };
    Some(match lone {
        0 => [1, 0, 2],
        1 => [0, 1, 2],
        _ => [0, 2, 1],
    })
}

/// Position on the line where edge `(p0, p1)` crosses the plane, from the
/// vertices' signed distances `d0`, `d1`.
fn crossing_param<T: Scalar>(p0: T, p1: T, d0: T, d1: T) -> Option<T> {
    let denom = d0 - d1;
    if denom == T::zero() {
        return None;
    }
    Some(p0 + (p1 - p0) * (d0 / denom))
}

fn ranges_overlap<T: Scalar>(a: (T, T), b: (T, T)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}
