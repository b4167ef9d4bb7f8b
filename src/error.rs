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

//! Error types for hull construction.
//!
//! The intersection tests themselves never fail: degenerate or
//! non-intersecting input reports [`Intersection::None`].
//!
//! [`Intersection::None`]: crate::geometry::intersection::Intersection::None

use thiserror::Error;

/// Errors raised while validating a hull's point list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HullError {
    /// The point count is not a multiple of three.
    #[error("hull point list of length {len} is not a whole number of triangles")]
    RaggedTriangleList {
        /// Number of points supplied.
        len: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("hull point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the flat list.
        index: usize,
    },
}

/// Result type for hull construction.
pub type HullResult<T> = Result<T, HullError>;
