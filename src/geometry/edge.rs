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

/// Identifies one side of a [`Triangle`](crate::geometry::Triangle).
///
/// The order is fixed: `E0 = (v0, v1)`, `E1 = (v1, v2)`, `E2 = (v0, v2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeId {
    E0,
    E1,
    E2,
}

impl EdgeId {
    pub const ALL: [EdgeId; 3] = [EdgeId::E0, EdgeId::E1, EdgeId::E2];

    pub fn index(self) -> usize {
        match self {
            EdgeId::E0 => 0,
            EdgeId::E1 => 1,
            EdgeId::E2 => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexId {
    V0,
    V1,
    V2,
}

impl VertexId {
    pub const ALL: [VertexId; 3] = [VertexId::V0, VertexId::V1, VertexId::V2];

    pub fn index(self) -> usize {
        match self {
            VertexId::V0 => 0,
            VertexId::V1 => 1,
            VertexId::V2 => 2,
        }
    }
}

/// One side of a triangle: two endpoints and the vector between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T: Scalar> {
    v0: Point3<T>,
    v1: Point3<T>,
    direction: Vector3<T>,
}

impl<T: Scalar> Edge<T> {
    pub fn new(v0: Point3<T>, v1: Point3<T>) -> Self {
        Self {
            v0,
            v1,
            direction: v1 - v0,
        }
    }

    pub fn v0(&self) -> &Point3<T> {
        &self.v0
    }

    pub fn v1(&self) -> &Point3<T> {
        &self.v1
    }

    /// `v1 - v0`, not normalized.
    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    /// Unit vector from `v0` towards `v1`. Fails if the endpoints coincide.
    pub fn normal(&self) -> GeometryResult<Vector3<T>> {
        self.direction.normalized()
    }

    pub fn length(&self) -> T {
        self.direction.norm()
    }

    /// Distance from `point` to its perpendicular foot on this edge, or
    /// `None` unless the foot lies strictly between the two endpoints.
    pub fn interior_distance_to(&self, point: &Point3<T>) -> Option<T> {
        let dir = self.normal().ok()?;
        let seg_len = self.length();
        let to_point = *point - self.v0;

        // signed length of the projection onto the edge line
        let t = dir.dot(&to_point);
        if t > T::zero() && t < seg_len {
            let closest = self.v0 + dir * t;
            Some(closest.distance_to(point))
        } else {
            None
        }
    }
}
