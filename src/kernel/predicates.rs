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

//! Exact orientation predicates over `rug::Rational`.
//!
//! Every finite `f32`/`f64` is a dyadic rational, so converting the inputs
//! loses nothing and the signs below are exact. These are slow; the float
//! routines in [`crate::geometry`] are what callers should use. The predicates
//! here are the reference they are checked against.

use std::cmp::Ordering;

use rug::Rational;

use crate::{
    geometry::{point_2::Point2, triangle::Triangle, vector::Point3},
    numeric::scalar::Scalar,
};

type Exact3 = [Rational; 3];

fn exact<T: Scalar>(x: T) -> Option<Rational> {
    Rational::from_f64(x.to_f64()?)
}

fn exact3<T: Scalar>(p: &Point3<T>) -> Option<Exact3> {
    Some([exact(p.x)?, exact(p.y)?, exact(p.z)?])
}

fn sub(a: &Rational, b: &Rational) -> Rational {
    let mut r = a.clone();
    r -= b;
    r
}

fn mul(a: &Rational, b: &Rational) -> Rational {
    let mut r = a.clone();
    r *= b;
    r
}

fn sub3(a: &Exact3, b: &Exact3) -> Exact3 {
    [sub(&a[0], &b[0]), sub(&a[1], &b[1]), sub(&a[2], &b[2])]
}

fn cross3(a: &Exact3, b: &Exact3) -> Exact3 {
    [
        sub(&mul(&a[1], &b[2]), &mul(&a[2], &b[1])),
        sub(&mul(&a[2], &b[0]), &mul(&a[0], &b[2])),
        sub(&mul(&a[0], &b[1]), &mul(&a[1], &b[0])),
    ]
}

fn dot3(a: &Exact3, b: &Exact3) -> Rational {
    let mut r = mul(&a[0], &b[0]);
    r += mul(&a[1], &b[1]);
    r += mul(&a[2], &b[2]);
    r
}

fn orient3d_exact(a: &Exact3, b: &Exact3, c: &Exact3, d: &Exact3) -> Ordering {
    let ab = sub3(b, a);
    let ac = sub3(c, a);
    let ad = sub3(d, a);
    dot3(&cross3(&ab, &ac), &ad).cmp0()
}

/// Sign of `(b - a) × (c - a) · (d - a)`.
///
/// `Greater` means `d` lies on the side the normal of `abc` points to, the
/// same convention as [`Triangle::plane_equation`]. `None` if any coordinate
/// is not finite.
pub fn orient3d<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    d: &Point3<T>,
) -> Option<Ordering> {
    Some(orient3d_exact(&exact3(a)?, &exact3(b)?, &exact3(c)?, &exact3(d)?))
}

/// Sign of `(b - a) ⊥· (c - a)`: `Greater` for a counter-clockwise turn.
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Option<Ordering> {
    let (ax, ay) = (exact(a.x)?, exact(a.y)?);
    let abx = sub(&exact(b.x)?, &ax);
    let aby = sub(&exact(b.y)?, &ay);
    let acx = sub(&exact(c.x)?, &ax);
    let acy = sub(&exact(c.y)?, &ay);
    Some(sub(&mul(&abx, &acy), &mul(&aby, &acx)).cmp0())
}

/// Side of `tri`'s supporting plane each vertex of `other` falls on.
pub fn plane_sides<T: Scalar>(tri: &Triangle<T>, other: &Triangle<T>) -> Option<[Ordering; 3]> {
    let [a, b, c] = exact_tri(tri)?;
    let [p, q, r] = exact_tri(other)?;
    Some([
        orient3d_exact(&a, &b, &c, &p),
        orient3d_exact(&a, &b, &c, &q),
        orient3d_exact(&a, &b, &c, &r),
    ])
}

/// True when the vertices of one triangle lie strictly on one side of the
/// other's plane, in either direction. Degenerate triangles span no plane
/// and never separate.
pub fn separated_by_plane<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Option<bool> {
    let one_side = |s: [Ordering; 3]| s[0] != Ordering::Equal && s[0] == s[1] && s[1] == s[2];
    Some(one_side(plane_sides(b, a)?) || one_side(plane_sides(a, b)?))
}

/// All six vertices on one plane (and neither triangle degenerate).
pub fn coplanar<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Option<bool> {
    if is_degenerate(a)? || is_degenerate(b)? {
        return Some(false);
    }
    Some(plane_sides(a, b)?.iter().all(|s| *s == Ordering::Equal))
}

/// Exact zero-area test.
pub fn is_degenerate<T: Scalar>(tri: &Triangle<T>) -> Option<bool> {
    let [a, b, c] = exact_tri(tri)?;
    let n = cross3(&sub3(&b, &a), &sub3(&c, &a));
    Some(n.iter().all(|x| x.cmp0() == Ordering::Equal))
}

/// Exact intersection test for triangles in general position.
///
/// Answers only when neither triangle is degenerate and no vertex of either
/// lies exactly on the other's plane; `None` otherwise. In that setting two
/// triangles meet exactly when an edge of one pierces the other.
pub fn triangles_intersect_generic<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Option<bool> {
    if is_degenerate(a)? || is_degenerate(b)? {
        return None;
    }
    let ea = exact_tri(a)?;
    let eb = exact_tri(b)?;
    let on_plane = |t: &[Exact3; 3], o: &[Exact3; 3]| {
        o.iter()
            .any(|p| orient3d_exact(&t[0], &t[1], &t[2], p) == Ordering::Equal)
    };
    if on_plane(&ea, &eb) || on_plane(&eb, &ea) {
        return None;
    }
    Some(edges_pierce(&ea, &eb) || edges_pierce(&eb, &ea))
}

fn edges_pierce(edges_of: &[Exact3; 3], tri: &[Exact3; 3]) -> bool {
    Triangle::<f64>::EDGES
        .iter()
        .any(|&(i, j)| segment_pierces(&edges_of[i], &edges_of[j], tri))
}

/// `p` and `q` lie strictly on opposite sides of `tri`'s plane here.
fn segment_pierces(p: &Exact3, q: &Exact3, tri: &[Exact3; 3]) -> bool {
    let [a, b, c] = tri;
    if orient3d_exact(a, b, c, p) == orient3d_exact(a, b, c, q) {
        return false;
    }
    let s = [
        orient3d_exact(p, q, a, b),
        orient3d_exact(p, q, b, c),
        orient3d_exact(p, q, c, a),
    ];
    s.iter().all(|o| *o != Ordering::Less) || s.iter().all(|o| *o != Ordering::Greater)
}

fn exact_tri<T: Scalar>(tri: &Triangle<T>) -> Option<[Exact3; 3]> {
    let [a, b, c] = &tri.0;
    Some([exact3(a)?, exact3(b)?, exact3(c)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        assert_eq!(orient2d(&a, &b, &c), Some(Ordering::Greater));
        assert_eq!(orient2d(&a, &c, &b), Some(Ordering::Less));
    }

    #[test]
    fn orientation_3d_signs() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let above = Point3::new(0.0, 0.0, 1.0);
        let below = Point3::new(0.0, 0.0, -1.0);
        let inside = Point3::new(1.0, 1.0, 0.0);

        assert_eq!(orient3d(&a, &b, &c, &above), Some(Ordering::Greater));
        assert_eq!(orient3d(&a, &b, &c, &below), Some(Ordering::Less));
        assert_eq!(orient3d(&a, &b, &c, &inside), Some(Ordering::Equal));
    }

    #[test]
    fn near_coplanar_is_not_rounded_away() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.3, 0.3, f64::MIN_POSITIVE);

        assert_eq!(orient3d(&a, &b, &c, &d), Some(Ordering::Greater));
    }

    #[test]
    fn non_finite_input_has_no_sign() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let d = Point3::new(f64::NAN, 0.0, 0.0);
        assert_eq!(orient3d(&a, &a, &a, &d), None);
    }
}
