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
    geometry::{transform::Transform, vector::Point3},
    numeric::scalar::Scalar,
};

/// An axis‐aligned bounding box.
///
/// Every constructor fixes the corners so that `min[i] <= max[i]`. The
/// corners stay public, so [`Aabb::overlaps`] and [`Aabb::union`] fix their
/// inputs again before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Builds a box from two opposite corners given in any order.
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Aabb {
            min: a.component_min(&b),
            max: a.component_max(&b),
        }
    }

    pub fn from_center_half_extents(center: Point3<T>, half: Point3<T>) -> Self {
        Self::new(center - half, center + half)
    }

    /// Smallest box containing all `points`; `None` when empty.
    pub fn from_points(points: &[Point3<T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.component_min(p);
            max = max.component_max(p);
        }
        Some(Aabb { min, max })
    }

    pub fn min(&self) -> &Point3<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &Point3<T> {
        &self.max
    }

    /// Componentwise min/max of the corners. Idempotent.
    pub fn fix(&self) -> Self {
        Self::new(self.min, self.max)
    }

    /// Do the boxes overlap on all three axes? Touching faces count.
    pub fn overlaps(&self, other: &Aabb<T>) -> bool {
        let a = self.fix();
        let b = other.fix();
        (0..3).all(|i| a.min[i] <= b.max[i] && b.min[i] <= a.max[i])
    }

    pub fn union(&self, other: &Aabb<T>) -> Aabb<T> {
        let a = self.fix();
        let b = other.fix();
        Aabb {
            min: a.min.component_min(&b.min),
            max: a.max.component_max(&b.max),
        }
    }

    pub fn contains_point(&self, p: &Point3<T>) -> bool {
        let a = self.fix();
        (0..3).all(|i| a.min[i] <= p[i] && p[i] <= a.max[i])
    }

    pub fn center(&self) -> Point3<T> {
        (self.min + self.max).scale(T::half())
    }

    pub fn extents(&self) -> Point3<T> {
        let a = self.fix();
        a.max - a.min
    }

    /// Transforms only the `min` and `max` corners and re-fixes the result.
    ///
    /// Under rotation this under-approximates the true bounds of the box;
    /// use [`Aabb::transformed_all_corners`] for the tight refit.
    pub fn transformed(&self, transform: &Transform<T>) -> Self {
        let m = transform.to_mat4();
        Self::new(m.transform_point(&self.min), m.transform_point(&self.max))
    }

    /// Bounds of all eight transformed corners.
    pub fn transformed_all_corners(&self, transform: &Transform<T>) -> Self {
        let m = transform.to_mat4();
        let (lo, hi) = (self.min, self.max);
        let corners: [Point3<T>; 8] = std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        });
        let mut min = m.transform_point(&corners[0]);
        let mut max = min;
        for c in &corners[1..] {
            let p = m.transform_point(c);
            min = min.component_min(&p);
            max = max.component_max(&p);
        }
        Aabb { min, max }
    }
}

pub fn fix_aabb<T: Scalar>(aabb: &Aabb<T>) -> Aabb<T> {
    aabb.fix()
}

pub fn overlap_aabb<T: Scalar>(a: &Aabb<T>, b: &Aabb<T>) -> bool {
    a.overlaps(b)
}

pub fn union_aabb<T: Scalar>(a: &Aabb<T>, b: &Aabb<T>) -> Aabb<T> {
    a.union(b)
}

pub fn transform_aabb<T: Scalar>(aabb: &Aabb<T>, transform: &Transform<T>) -> Aabb<T> {
    aabb.transformed(transform)
}
