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
use std::f64::consts::FRAC_PI_4;
use trihull::geometry::aabb::{Aabb, fix_aabb, overlap_aabb, transform_aabb, union_aabb};
use trihull::geometry::{Point3, Quat, Transform, Vector3};

fn unit_box() -> Aabb<f64> {
    Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}

#[test]
fn test_new_orders_corners() {
    let a = Aabb::new(Point3::new(2.0, -1.0, 5.0), Point3::new(0.0, 1.0, 3.0));
    assert_eq!(a.min, Point3::new(0.0, -1.0, 3.0));
    assert_eq!(a.max, Point3::new(2.0, 1.0, 5.0));
}

#[test]
fn test_fix_is_idempotent() {
    let raw = Aabb {
        min: Point3::new(3.0, -2.0, 1.0),
        max: Point3::new(-1.0, 4.0, 0.0),
    };
    let once = fix_aabb(&raw);
    let twice = fix_aabb(&once);
    assert_eq!(once, twice);
    assert_eq!(once.min, Point3::new(-1.0, -2.0, 0.0));
    assert_eq!(once.max, Point3::new(3.0, 4.0, 1.0));
}

#[test]
fn test_overlap_disjoint_and_overlapping() {
    let a = unit_box();
    let far = Aabb::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
    let near = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(1.5, 1.5, 1.5));

    assert!(!overlap_aabb(&a, &far));
    assert!(overlap_aabb(&a, &near));
}

#[test]
fn test_overlap_is_symmetric() {
    let boxes = [
        unit_box(),
        Aabb::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0)),
        Aabb::new(Point3::new(0.5, -1.0, 0.5), Point3::new(0.6, 2.0, 0.6)),
        Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0)),
    ];
    for a in &boxes {
        for b in &boxes {
            assert_eq!(a.overlaps(b), b.overlaps(a));
        }
    }
}

#[test]
fn test_touching_faces_overlap() {
    let a = unit_box();
    let b = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&b));
}

#[test]
fn test_overlap_fixes_unordered_corners() {
    let a = unit_box();
    let swapped = Aabb {
        min: Point3::new(1.5, 1.5, 1.5),
        max: Point3::new(0.5, 0.5, 0.5),
    };
    assert!(a.overlaps(&swapped));
}

#[test]
fn test_union_covers_both() {
    let a = unit_box();
    let b = Aabb::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(0.5, 3.0, 0.7));
    let u = union_aabb(&a, &b);

    assert_eq!(u.min, Point3::new(-1.0, 0.0, 0.0));
    assert_eq!(u.max, Point3::new(1.0, 3.0, 1.0));
    assert!(u.contains_point(&Point3::new(-0.5, 2.5, 0.6)));
    assert!(u.contains_point(&Point3::new(0.9, 0.1, 0.1)));
}

#[test]
fn test_from_points() {
    assert!(Aabb::<f64>::from_points(&[]).is_none());

    let b = Aabb::from_points(&[
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(-1.0, 5.0, 0.0),
        Point3::new(0.0, 0.0, 4.0),
    ])
    .unwrap();
    assert_eq!(b.min, Point3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.max, Point3::new(1.0, 5.0, 4.0));
    assert_eq!(b.center(), Point3::new(0.0, 2.5, 2.0));
    assert_eq!(b.extents(), Point3::new(2.0, 5.0, 4.0));
}

#[test]
fn test_transform_translation_and_scale() {
    let t = Transform::new(
        Vector3::new(10.0, 0.0, -2.0),
        Quat::identity(),
        Vector3::new(2.0, 3.0, 1.0),
    );
    let b = transform_aabb(&unit_box(), &t);
    assert_eq!(b.min, Point3::new(10.0, 0.0, -2.0));
    assert_eq!(b.max, Point3::new(12.0, 3.0, -1.0));
}

#[test]
fn test_transform_negative_scale_is_refixed() {
    let t = Transform::new(
        Vector3::zero(),
        Quat::identity(),
        Vector3::new(-1.0, 1.0, 1.0),
    );
    let b = unit_box().transformed(&t);
    assert_eq!(b.min, Point3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.max, Point3::new(0.0, 1.0, 1.0));
}

#[test]
fn test_transform_two_corners_vs_all_corners() {
    let rot = Quat::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_4);
    let t = Transform::from_rotation(rot);
    let h = 2.0_f64.sqrt() / 2.0;

    // Only min and max are moved: the box collapses to x = 0.
    let cheap = unit_box().transformed(&t);
    assert_relative_eq!(cheap.min.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(cheap.max.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(cheap.max.y, 2.0 * h, epsilon = 1e-12);

    let tight = unit_box().transformed_all_corners(&t);
    assert_relative_eq!(tight.min.x, -h, epsilon = 1e-12);
    assert_relative_eq!(tight.max.x, h, epsilon = 1e-12);
    assert_relative_eq!(tight.min.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(tight.max.y, 2.0 * h, epsilon = 1e-12);
    assert_relative_eq!(tight.min.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(tight.max.z, 1.0, epsilon = 1e-12);
}
