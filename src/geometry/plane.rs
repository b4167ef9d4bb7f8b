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
    geometry::vector::{Point3, Vector3},
    numeric::scalar::Scalar,
};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Halfspace {
    /// Strictly on the side the normal points to.
    Front,
    /// Within the tolerance band around the plane.
    On,
    Back,
}

/// How a plane's position is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneRepr<T: Scalar> {
    /// Signed distance from the origin along the normalized normal.
    Distance(T),
    /// Any point lying on the plane.
    Point(Point3<T>),
}

/// A plane given by a normal and either a distance or a point.
///
/// The normal does not need to be unit length; every query normalizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub repr: PlaneRepr<T>,
}

impl<T: Scalar> Plane<T> {
    pub fn new(normal: Vector3<T>, repr: PlaneRepr<T>) -> Self {
        Plane { normal, repr }
    }

    pub fn from_distance(normal: Vector3<T>, distance: T) -> Self {
        Plane::new(normal, PlaneRepr::Distance(distance))
    }

    pub fn from_point(normal: Vector3<T>, point: Point3<T>) -> Self {
        Plane::new(normal, PlaneRepr::Point(point))
    }

    /// Plane through a triangle; the normal follows the winding `p1, p2, p3`.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1));
        Plane::from_point(normal, *p1)
    }

    pub fn unit_normal(&self) -> Vector3<T> {
        self.normal.normalized()
    }

    /// The plane's canonical point: `n̂ · distance`, or the stored point.
    pub fn origin(&self) -> Point3<T> {
        match self.repr {
            PlaneRepr::Distance(d) => self.unit_normal().scale(d),
            PlaneRepr::Point(p) => p,
        }
    }

    /// Signed distance of `p` along the normalized normal. A zero normal
    /// reports zero for every point.
    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.unit_normal().dot(&(p - &self.origin()))
    }

    pub fn classify_point(&self, p: &Point3<T>) -> Halfspace {
        self.classify_point_with(p, T::plane_tolerance())
    }

    pub fn classify_point_with(&self, p: &Point3<T>, eps: T) -> Halfspace {
        let d = self.signed_distance(p);
        if d.abs() <= eps {
            Halfspace::On
        } else if d > eps {
            Halfspace::Front
        } else {
            Halfspace::Back
        }
    }
}

/// Classifies `point` against `plane` using the platform float epsilon.
pub fn classify_point<T: Scalar>(plane: &Plane<T>, point: &Point3<T>) -> Halfspace {
    plane.classify_point(point)
}
