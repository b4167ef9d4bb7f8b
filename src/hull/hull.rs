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

use std::borrow::Cow;

use crate::{
    error::{HullError, HullResult},
    geometry::{
        aabb::Aabb,
        matrix::Mat4,
        transform::Transform,
        triangle::Triangle,
        vector::Point3,
    },
    numeric::scalar::Scalar,
};

/// A triangle soup: a flat point list read in runs of three, plus an optional
/// transform placing it in world space.
///
/// The points are either owned or borrowed from the caller; nothing here
/// outlives the hull itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<'a, T: Scalar> {
    points: Cow<'a, [Point3<T>]>,
    transform: Option<Transform<T>>,
}

impl<T: Scalar> Hull<'static, T> {
    /// Takes ownership of `points`.
    pub fn new(points: Vec<Point3<T>>) -> HullResult<Self> {
        validate(&points)?;
        Ok(Hull {
            points: Cow::Owned(points),
            transform: None,
        })
    }

    /// Owned hull from triangles; validated like [`Hull::new`].
    pub fn from_triangles(triangles: &[Triangle<T>]) -> HullResult<Self> {
        Self::new(triangles.iter().flat_map(|t| t.0).collect())
    }
}

impl<'a, T: Scalar> Hull<'a, T> {
    /// Borrows `points` for the lifetime of the hull.
    pub fn borrowed(points: &'a [Point3<T>]) -> HullResult<Self> {
        validate(points)?;
        Ok(Hull {
            points: Cow::Borrowed(points),
            transform: None,
        })
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform<T>) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn transform(&self) -> Option<&Transform<T>> {
        self.transform.as_ref()
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Triangle `i` in the hull's own space; `None` past the end.
    pub fn triangle(&self, i: usize) -> Option<Triangle<T>> {
        let run = self.points.get(3 * i..3 * i + 3)?;
        Some(Triangle::new(run[0], run[1], run[2]))
    }

    /// Triangles in local space, in storage order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<T>> + '_ {
        self.points
            .chunks_exact(3)
            .map(|run| Triangle::new(run[0], run[1], run[2]))
    }

    /// The model matrix, if the hull carries a transform.
    pub fn model_matrix(&self) -> Option<Mat4<T>> {
        self.transform.as_ref().map(Transform::to_mat4)
    }

    /// Triangles in world space, in storage order. The model matrix is built
    /// once per call.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle<T>> + '_ {
        let model = self.model_matrix();
        self.triangles().map(move |t| match &model {
            Some(m) => t.transformed(m),
            None => t,
        })
    }

    /// Bounds of the world-space points; `None` for an empty hull.
    pub fn world_aabb(&self) -> Option<Aabb<T>> {
        let model = self.model_matrix();
        self.points
            .iter()
            .map(|p| match &model {
                Some(m) => m.transform_point(p),
                None => *p,
            })
            .fold(None, |acc: Option<Aabb<T>>, p| {
                Some(match acc {
                    Some(b) => Aabb {
                        min: b.min.component_min(&p),
                        max: b.max.component_max(&p),
                    },
                    None => Aabb { min: p, max: p },
                })
            })
    }

    /// Detaches the hull from any borrowed storage.
    pub fn into_owned(self) -> Hull<'static, T> {
        Hull {
            points: Cow::Owned(self.points.into_owned()),
            transform: self.transform,
        }
    }
}

fn validate<T: Scalar>(points: &[Point3<T>]) -> HullResult<()> {
    if points.len() % 3 != 0 {
        return Err(HullError::RaggedTriangleList { len: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(HullError::NonFiniteCoordinate { index });
    }
    Ok(())
}
