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

//! Numeric tolerances for the intersection tests.
//!
//! Every `*_with` operation in the crate takes a [`Tolerances`]. The plain
//! variants use [`Tolerances::default()`], whose values come from
//! [`Scalar`]:
//!
//! | field | default |
//! |---|---|
//! | `plane` | `T::epsilon()` |
//! | `snap` | `1e-8` |
//! | `ray_parallel` | `1e-8` |
//! | `ray_min_distance` | `1e-8` |
//! | `degeneracy` | `T::epsilon()²` |
//!
//! # Example
//!
//! ```
//! use trihull::config::Tolerances;
//!
//! let tol = Tolerances::<f64>::default().with_snap(1e-6);
//! assert_eq!(tol.snap, 1e-6);
//! ```

use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T: Scalar> {
    /// Half-width of the `On` band when classifying against a plane.
    pub plane: T,

    /// Triangle/plane distances below this magnitude are treated as exactly
    /// zero. Distances are measured against unnormalized triangle normals, so
    /// this scales with triangle area.
    pub snap: T,

    /// Rays whose determinant against a triangle falls within this band are
    /// parallel to it.
    pub ray_parallel: T,

    /// Hits with a parameter below this value are behind or at the origin.
    pub ray_min_distance: T,

    /// Bound on the squared sine of an angle: between two triangle edges
    /// (zero-area triangles), between two planes (parallel planes) and
    /// between two 2-D edges (parallel edges). Independent of scale.
    pub degeneracy: T,
}

impl<T: Scalar> Default for Tolerances<T> {
    fn default() -> Self {
        Self {
            plane: T::plane_tolerance(),
            snap: T::snap_tolerance(),
            ray_parallel: T::ray_parallel_tolerance(),
            ray_min_distance: T::ray_min_distance(),
            degeneracy: T::degeneracy_tolerance(),
        }
    }
}

impl<T: Scalar> Tolerances<T> {
    #[must_use]
    pub fn with_plane(mut self, plane: T) -> Self {
        self.plane = plane;
        self
    }

    #[must_use]
    pub fn with_snap(mut self, snap: T) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_ray_parallel(mut self, ray_parallel: T) -> Self {
        self.ray_parallel = ray_parallel;
        self
    }

    #[must_use]
    pub fn with_ray_min_distance(mut self, ray_min_distance: T) -> Self {
        self.ray_min_distance = ray_min_distance;
        self
    }

    #[must_use]
    pub fn with_degeneracy(mut self, degeneracy: T) -> Self {
        self.degeneracy = degeneracy;
        self
    }

    /// Snaps `d` to exactly zero when it lies inside the snap band.
    #[inline]
    pub fn snap(&self, d: T) -> T {
        if d.abs() < self.snap { T::zero() } else { d }
    }
}
