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
    error::GeometryResult,
    geometry::{point_3::Point3, vector::VectorOps, vector_3::Vector3},
    numeric::scalar::Scalar,
};

/// Plane `{ p : p · normal = d }` with a unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Plane { normal, d }
    }

    /// Plane through three points with normal `normalize((p2 - p0) × (p1 - p0))`.
    /// Fails if the points are collinear or coincident.
    pub fn from_points(p0: &Point3<T>, p1: &Point3<T>, p2: &Point3<T>) -> GeometryResult<Self> {
        let e0 = *p1 - *p0;
        let e2 = *p2 - *p0;
        let normal = e2.cross(&e0).normalized()?;
        let d = p0.as_vector().dot(&normal);
        Ok(Plane::new(normal, d))
    }

    /// Positive on the side the normal points to, zero on the plane.
    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        p.as_vector().dot(&self.normal) - self.d
    }

    /// Orthogonal projection of `p` given its already computed signed distance.
    pub fn project(&self, p: &Point3<T>, signed_distance: T) -> Point3<T> {
        *p - self.normal * signed_distance
    }
}
