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
use trihull::config::Tolerances;
use trihull::geometry::ray::{
    Ray, intersect_ray_triangle, intersect_ray_triangle_with, ray_triangle_parameter,
};
use trihull::geometry::{Point3, Triangle, Vector3};

fn unit_xy() -> Triangle<f64> {
    Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
}

#[test]
fn test_ray_through_centroid_hits() {
    let t = unit_xy();
    let c = t.centroid();
    let ray = Ray::new(c + Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));

    let param = ray_triangle_parameter(&t, &ray, &Tolerances::default()).unwrap();
    assert!(param > 0.0);
    assert_relative_eq!(param, 2.0, epsilon = 1e-12);

    let p = intersect_ray_triangle(&t, &ray).point().unwrap();
    assert_relative_eq!(p.x, c.x, epsilon = 1e-12);
    assert_relative_eq!(p.y, c.y, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_reversed_ray_misses() {
    let t = unit_xy();
    let ray = Ray::new(t.centroid() + Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
    assert!(!intersect_ray_triangle(&t, &ray.reversed()).occurred());
}

#[test]
fn test_parallel_ray_misses() {
    let t = unit_xy();
    let in_plane = Ray::new(Point3::new(-1.0, 0.2, 0.0), Vector3::new(1.0, 0.0, 0.0));
    let above = Ray::new(Point3::new(-1.0, 0.2, 0.5), Vector3::new(1.0, 0.0, 0.0));

    assert!(!intersect_ray_triangle(&t, &in_plane).occurred());
    assert!(!intersect_ray_triangle(&t, &above).occurred());
}

#[test]
fn test_ray_outside_triangle_misses() {
    let t = unit_xy();
    let ray = Ray::new(Point3::new(0.8, 0.8, 1.0), Vector3::new(0.0, 0.0, -1.0));
    assert!(!intersect_ray_triangle(&t, &ray).occurred());
}

#[test]
fn test_hit_too_close_to_origin_is_rejected() {
    let t = unit_xy();
    let ray = Ray::new(Point3::new(0.25, 0.25, 1e-10), Vector3::new(0.0, 0.0, -1.0));

    assert!(!intersect_ray_triangle(&t, &ray).occurred());

    let loose = Tolerances::default().with_ray_min_distance(0.0);
    assert!(intersect_ray_triangle_with(&t, &ray, &loose).occurred());
}

#[test]
fn test_direction_length_scales_parameter() {
    let t = unit_xy();
    let ray = Ray::through(Point3::new(0.25, 0.25, 4.0), Point3::new(0.25, 0.25, 2.0));

    let param = ray_triangle_parameter(&t, &ray, &Tolerances::default()).unwrap();
    assert_relative_eq!(param, 2.0, epsilon = 1e-12);
    assert_relative_eq!(ray.at(param).z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_back_face_is_hit() {
    let t = unit_xy();
    let ray = Ray::new(Point3::new(0.25, 0.25, -3.0), Vector3::new(0.0, 0.0, 1.0));
    assert!(intersect_ray_triangle(&t, &ray).occurred());
}

#[test]
fn test_oblique_ray() {
    let t = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
    );
    let ray = Ray::through(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    let p = intersect_ray_triangle(&t, &ray).point().unwrap();
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.5, epsilon = 1e-12);
}
