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

use crate::{geometry::vector::Point3, numeric::scalar::Scalar};

/// Outcome of an intersection test: either nothing, or a single point
/// describing where the contact was detected. This is not a contact
/// manifold; the point is only representative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Intersection<T: Scalar> {
    #[default]
    None,
    Point(Point3<T>),
}

impl<T: Scalar> Intersection<T> {
    pub fn occurred(&self) -> bool {
        matches!(self, Intersection::Point(_))
    }

    pub fn point(&self) -> Option<Point3<T>> {
        match self {
            Intersection::Point(p) => Some(*p),
            Intersection::None => None,
        }
    }
}

impl<T: Scalar> From<Option<Point3<T>>> for Intersection<T> {
    fn from(p: Option<Point3<T>>) -> Self {
        p.map_or(Intersection::None, Intersection::Point)
    }
}
