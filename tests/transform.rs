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
use std::f64::consts::{FRAC_PI_2, PI};
use trihull::geometry::{Mat4, Point3, Quat, Transform, Triangle, Vector3};

fn assert_point_eq(a: Point3<f64>, b: Point3<f64>) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
}

#[test]
fn test_identity() {
    let t = Transform::<f64>::default();
    assert_eq!(t.to_mat4(), Mat4::identity());
    let p = Point3::new(1.5, -2.0, 3.25);
    assert_eq!(t.transform_point(&p), p);
}

#[test]
fn test_scale_then_rotate_then_translate() {
    let t = Transform::new(
        Vector3::new(10.0, 0.0, 0.0),
        Quat::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2),
        Vector3::new(2.0, 1.0, 1.0),
    );
    // (1,0,0) -> scale (2,0,0) -> rotate (0,2,0) -> translate (10,2,0)
    assert_point_eq(t.transform_point(&Point3::new(1.0, 0.0, 0.0)), Point3::new(10.0, 2.0, 0.0));
    assert_point_eq(t.transform_point(&Point3::new(0.0, 1.0, 0.0)), Point3::new(9.0, 0.0, 0.0));
}

#[test]
fn test_rotation_is_normalized() {
    let q = Quat::new(0.0, 0.0, 2.0, 0.0);
    let t = Transform::from_rotation(q);
    // half turn about z
    assert_point_eq(t.transform_point(&Point3::new(1.0, 2.0, 3.0)), Point3::new(-1.0, -2.0, 3.0));
}

#[test]
fn test_quat_composition() {
    let z = Vector3::new(0.0, 0.0, 1.0);
    let quarter = Quat::from_axis_angle(z, FRAC_PI_2);
    let half = quarter.multiply(&quarter);
    let direct = Quat::from_axis_angle(z, PI);

    let v = Vector3::new(1.0, 0.0, 0.0);
    assert_point_eq(half.rotate(&v), direct.rotate(&v));
    assert_point_eq(half.rotate(&v), Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_zero_axis_is_identity() {
    let q = Quat::from_axis_angle(Vector3::<f64>::zero(), 1.0);
    assert_eq!(q, Quat::identity());
}

#[test]
fn test_matrix_product_and_transpose() {
    let t = Mat4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
    let s = Mat4::from_scale(&Vector3::new(2.0, 2.0, 2.0));
    let ts = &t * &s;
    assert_eq!(ts.transform_point(&Point3::new(1.0, 1.0, 1.0)), Point3::new(3.0, 4.0, 5.0));
    assert_eq!(ts.transform_vector(&Vector3::new(1.0, 1.0, 1.0)), Vector3::new(2.0, 2.0, 2.0));

    let st = s * t;
    assert_eq!(st.transform_point(&Point3::new(0.0, 0.0, 0.0)), Point3::new(2.0, 4.0, 6.0));

    assert_eq!(t.transpose().transpose(), t);
    assert_eq!(t.transpose()[3][0], 1.0);
}

#[test]
fn test_triangle_transformed() {
    let tri = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let m = Transform::from_translation(Vector3::new(0.0, 0.0, 4.0)).to_mat4();
    let moved = tri.transformed(&m);
    assert!(moved.vertices().iter().all(|v| v.z == 4.0));
    assert_relative_eq!(moved.area(), 0.5);
}

#[test]
fn test_vector_basics() {
    let a = Vector3::new(1.0, 0.0, 0.0);
    let b = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(a.dot(&b), 0.0);
    assert_eq!((a + b)[1], 1.0);
    assert_eq!(-a, Vector3::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(Vector3::new(3.0, 4.0, 0.0).norm(), 5.0);
    assert_eq!(Vector3::<f64>::zero().normalized(), Vector3::zero());
    assert!(Vector3::<f64>::zero().try_normalized().is_none());
    assert_eq!(a.lerp(&b, 0.5), Vector3::new(0.5, 0.5, 0.0));
}
