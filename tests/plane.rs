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

use approx::assert_relative_eq;
use trihull::geometry::plane::{Halfspace, Plane, classify_point};
use trihull::geometry::{Point3, Triangle, Vector3};

#[test]
fn test_classify_distance_plane() {
    let plane = Plane::from_distance(Vector3::new(0.0, 0.0, 1.0), 2.0);

    assert_eq!(classify_point(&plane, &Point3::new(0.0, 0.0, 3.0)), Halfspace::Front);
    assert_eq!(classify_point(&plane, &Point3::new(5.0, -4.0, 2.0)), Halfspace::On);
    assert_eq!(classify_point(&plane, &Point3::new(0.0, 0.0, 1.0)), Halfspace::Back);
}

#[test]
fn test_normal_is_normalized_before_use() {
    let short = Plane::from_distance(Vector3::new(0.0, 1.0, 0.0), 1.0);
    let long = Plane::from_distance(Vector3::new(0.0, 10.0, 0.0), 1.0);

    let p = Point3::new(0.0, 3.0, 0.0);
    assert_relative_eq!(short.signed_distance(&p), 2.0);
    assert_relative_eq!(long.signed_distance(&p), 2.0);
    assert_eq!(long.classify_point(&Point3::new(0.0, 1.0, 0.0)), Halfspace::On);
}

#[test]
fn test_classify_point_plane() {
    let plane = Plane::from_point(Vector3::new(1.0, 1.0, 0.0), Point3::new(1.0, 0.0, 0.0));

    assert_eq!(plane.classify_point(&Point3::new(0.0, 1.0, 7.0)), Halfspace::On);
    assert_eq!(plane.classify_point(&Point3::new(1.0, 1.0, 0.0)), Halfspace::Front);
    assert_eq!(plane.classify_point(&Point3::new(0.0, 0.0, 0.0)), Halfspace::Back);
}

#[test]
fn test_classify_with_wider_band() {
    let plane = Plane::from_distance(Vector3::new(0.0, 0.0, 1.0), 0.0);
    let p = Point3::new(0.0, 0.0, 1e-3);

    assert_eq!(plane.classify_point(&p), Halfspace::Front);
    assert_eq!(plane.classify_point_with(&p, 1e-2), Halfspace::On);
    assert_eq!(plane.classify_point_with(&-p, 1e-4), Halfspace::Back);
}

#[test]
fn test_zero_normal_puts_everything_on_plane() {
    let plane = Plane::from_distance(Vector3::zero(), 5.0);
    assert_eq!(plane.classify_point(&Point3::new(1.0, 2.0, 3.0)), Halfspace::On);
}

#[test]
fn test_plane_from_triangle_follows_winding() {
    let tri = Triangle::new(
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    );
    let plane = tri.plane();
    assert_eq!(plane.unit_normal(), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(plane.classify_point(&Point3::new(0.3, 0.3, 2.0)), Halfspace::Front);

    let flipped = Triangle::new(tri.0[0], tri.0[2], tri.0[1]).plane();
    assert_eq!(flipped.classify_point(&Point3::new(0.3, 0.3, 2.0)), Halfspace::Back);
}

#[test]
fn test_f32_planes() {
    let plane = Plane::<f32>::from_distance(Vector3::new(1.0, 0.0, 0.0), -1.0);
    assert_eq!(plane.classify_point(&Point3::new(-1.0, 9.0, 9.0)), Halfspace::On);
    assert_eq!(plane.classify_point(&Point3::new(0.0, 0.0, 0.0)), Halfspace::Front);
}
