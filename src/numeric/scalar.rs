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

use num_traits::Float;

use std::fmt::Debug;

/// Floating-point coordinate type used throughout the crate.
///
/// The default tolerances live here so that `f32` and `f64` callers get
/// the same numeric policy without passing a [`Tolerances`] around.
///
/// [`Tolerances`]: crate::config::Tolerances
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Converts a literal; values outside the type's range saturate to infinity.
    fn lit(value: f64) -> Self;

    /// Band around zero used when classifying points against a plane.
    fn plane_tolerance() -> Self {
        Self::epsilon()
    }

    /// Plane distances below this magnitude are snapped to exactly zero.
    fn snap_tolerance() -> Self {
        Self::lit(1e-8)
    }

    /// Determinant magnitude below which a ray counts as parallel to a triangle.
    fn ray_parallel_tolerance() -> Self {
        Self::lit(1e-8)
    }

    /// Smallest accepted ray hit parameter.
    fn ray_min_distance() -> Self {
        Self::lit(1e-8)
    }

    /// Squared-sine threshold below which two directions count as parallel.
    fn degeneracy_tolerance() -> Self {
        Self::epsilon() * Self::epsilon()
    }

    fn half() -> Self {
        Self::from_num_den(1, 2)
    }

    fn third() -> Self {
        Self::from_num_den(1, 3)
    }

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if *self > Self::zero() {
            1
        } else if *self < Self::zero() {
            -1
        } else {
            0
        }
    }
}

impl Scalar for f32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }

    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn lit(value: f64) -> Self {
        value
    }
}
