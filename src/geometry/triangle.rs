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
    geometry::{
        matrix::Mat4,
        plane::Plane,
        point_2::{Point2, orient2d},
        segment::Segment2,
        vector::{Point3, Vector3},
    },
    numeric::scalar::Scalar,
};

/// Axis-aligned projection plane used to reduce co-planar problems to 2-D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Drop z.
    Xy,
    /// Drop y.
    Xz,
    /// Drop x.
    Yz,
}

impl Projection {
    pub const ALL: [Projection; 3] = [Projection::Xy, Projection::Xz, Projection::Yz];

    /// Indices of the two kept axes.
    pub fn axes(self) -> (usize, usize) {
        match self {
            Projection::Xy => (0, 1),
            Projection::Xz => (0, 2),
            Projection::Yz => (1, 2),
        }
    }

    pub fn project<T: Scalar>(self, p: &Point3<T>) -> Point2<T> {
        let (i0, i1) = self.axes();
        Point2::new(p[i0], p[i1])
    }

    /// The projection in which `a` and `b` together cover the most area.
    /// Ties keep the earlier entry of [`Projection::ALL`].
    pub fn dominant<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Projection {
        let mut best = Projection::Xy;
        let mut best_area = T::neg_infinity();
        for proj in Projection::ALL {
            let area = a.projected_area(proj).abs() + b.projected_area(proj).abs();
            if area > best_area {
                best = proj;
                best_area = area;
            }
        }
        best
    }
}

/// Three ordered points. The winding decides the normal's sign only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle<T: Scalar>(pub [Point3<T>; 3]);

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Triangle([a, b, c])
    }

    pub fn vertices(&self) -> &[Point3<T>; 3] {
        &self.0
    }

    /// Unnormalized normal `(v1 - v0) x (v2 - v0)`; its length is twice the area.
    pub fn normal(&self) -> Vector3<T> {
        let [a, b, c] = &self.0;
        (b - a).cross(&(c - a))
    }

    /// Zero-area test relative to the triangle's size: the squared sine of
    /// the angle at vertex 0 is at most `eps`. Coincident vertices always
    /// count as degenerate.
    pub fn is_degenerate(&self, eps: T) -> bool {
        let [a, b, c] = &self.0;
        let (ab, ac) = (b - a, c - a);
        ab.cross(&ac).norm_squared() <= eps * ab.norm_squared() * ac.norm_squared()
    }

    pub fn area(&self) -> T {
        self.normal().norm() * T::half()
    }

    /// Plane equation `n · x + d = 0` with the unnormalized normal.
    pub fn plane_equation(&self) -> (Vector3<T>, T) {
        let n = self.normal();
        let d = -n.dot(&self.0[0]);
        (n, d)
    }

    pub fn plane(&self) -> Plane<T> {
        Plane::from_points(&self.0[0], &self.0[1], &self.0[2])
    }

    pub fn centroid(&self) -> Point3<T> {
        let [a, b, c] = self.0;
        (a + b + c).scale(T::third())
    }

    /// Signed area of the triangle after dropping one axis.
    pub fn projected_area(&self, proj: Projection) -> T {
        let [a, b, c] = self.0.map(|p| proj.project(&p));
        orient2d(&a, &b, &c) * T::half()
    }

    pub fn project(&self, proj: Projection) -> [Point2<T>; 3] {
        self.0.map(|p| proj.project(&p))
    }

    /// Edges `0→1`, `1→2`, `2→0` as index pairs.
    pub const EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

    pub fn transformed(&self, m: &Mat4<T>) -> Self {
        Triangle(self.0.map(|p| m.transform_point(&p)))
    }
}

/// Edges of a projected triangle, in [`Triangle::EDGES`] order.
pub fn edges_2d<T: Scalar>(t: &[Point2<T>; 3]) -> [Segment2<T>; 3] {
    Triangle::<T>::EDGES.map(|(i, j)| Segment2::new(t[i], t[j]))
}

/// Return true if 2D point `p` lies inside (or on) the triangle `tri`.
/// The three edge orientations must not disagree in sign; zero counts as
/// either side. Triangles that are degenerate under `eps` (same measure as
/// [`Triangle::is_degenerate`]) contain nothing.
pub fn point_in_tri_2d<T: Scalar>(p: &Point2<T>, tri: &[Point2<T>; 3], eps: T) -> bool {
    let area = orient2d(&tri[0], &tri[1], &tri[2]);
    let ab = tri[1] - tri[0];
    let ac = tri[2] - tri[0];
    if area * area <= eps * ab.norm_squared() * ac.norm_squared() {
        return false;
    }
    let d0 = orient2d(&tri[0], &tri[1], p);
    let d1 = orient2d(&tri[1], &tri[2], p);
    let d2 = orient2d(&tri[2], &tri[0], p);

    let zero = T::zero();
    let has_neg = d0 < zero || d1 < zero || d2 < zero;
    let has_pos = d0 > zero || d1 > zero || d2 > zero;
    !(has_neg && has_pos)
}
