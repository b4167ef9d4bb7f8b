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

//! Intersection queries over triangle soups ("hulls").
//!
//! The crate answers yes/no questions with a representative contact point:
//! plane half-space tests, box overlap, triangle/triangle and ray/triangle
//! intersection, and the same tests lifted to whole hulls placed in the world
//! by a translation/rotation/scale [`Transform`](geometry::Transform).
//!
//! ```
//! use trihull::geometry::{Point3, Triangle, tri_tri_intersect::intersect_triangles};
//!
//! let a = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let b = Triangle::new(
//!     Point3::new(0.5, 0.0, -0.5),
//!     Point3::new(0.5, 0.0, 0.5),
//!     Point3::new(0.5, 0.5, 0.0),
//! );
//! assert!(intersect_triangles(&a, &b).occurred());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod kernel;
pub mod numeric;

pub use config::Tolerances;
pub use error::{HullError, HullResult};
pub use geometry::{Aabb, Intersection, Point3, Ray, Transform, Triangle, Vector3};
pub use hull::Hull;
pub use numeric::Scalar;
