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

use crate::{geometry::point_2::Point2, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

/// Where two 2-D segments cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit<T: Scalar> {
    /// Parameter along the first segment, in `[0, 1]`.
    pub s: T,
    /// Parameter along the second segment, in `[0, 1]`.
    pub u: T,
    pub point: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> Point2<T> {
        self.b - self.a
    }

    /// Determinant-based parametric line intersection. Both parameters must
    /// land in `[0, 1]`. Segments whose squared sine of the angle between
    /// them is within `eps` count as parallel and never intersect here, as do
    /// zero-length segments.
    pub fn intersect(&self, other: &Segment2<T>, eps: T) -> Option<SegmentHit<T>> {
        let da = self.direction();
        let db = other.direction();
        let denom = da.perp_dot(&db);
        if denom * denom <= eps * da.norm_squared() * db.norm_squared() {
            return None;
        }

        let diff = other.a - self.a;
        let s = diff.perp_dot(&db) / denom;
        let u = diff.perp_dot(&da) / denom;

        let unit = |t: T| t >= T::zero() && t <= T::one();
        if unit(s) && unit(u) {
            Some(SegmentHit {
                s,
                u,
                point: self.a.lerp(&self.b, s),
            })
        } else {
            None
        }
    }
}
