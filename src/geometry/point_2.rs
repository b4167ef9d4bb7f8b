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

use crate::numeric::scalar::Scalar;
use std::ops::{Add, Sub};

/// A point (or offset) in one of the axis-aligned projection planes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Z component of the 3-D cross product of two planar vectors.
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn lerp(&self, other: &Self, t: T) -> Self {
        Point2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Point2<T>;
    fn sub(self, rhs: Point2<T>) -> Point2<T> {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Add for Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: Point2<T>) -> Point2<T> {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (*b - *a).perp_dot(&(*c - *a))
}
