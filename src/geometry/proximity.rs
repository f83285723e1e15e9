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

//! Point-to-triangle proximity: query configuration and the decision report.

use crate::{
    geometry::edge::{EdgeId, VertexId},
    numeric::scalar::Scalar,
};

/// Options for [`Triangle::inspect_point`](crate::geometry::Triangle::inspect_point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProximityConfig {
    /// Measure the distance to the nearest vertex when the projected point
    /// lies beyond a vertex, or beyond an edge whose interior it cannot
    /// reach. Off by default, in which case those cases are never within
    /// reach.
    pub refine_vertices: bool,
}

impl ProximityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_refine_vertices(mut self, refine: bool) -> Self {
        self.refine_vertices = refine;
        self
    }
}

/// Which branch of the proximity test decided the outcome, with the
/// distances measured along the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity<T: Scalar> {
    /// Farther from the infinite plane than the threshold.
    OffPlane { plane_distance: T },
    /// Projection lands inside the triangle or on its boundary.
    Inside { plane_distance: T },
    /// Projection lands past one edge. `distance` is `None` when the
    /// perpendicular foot misses the edge's interior.
    NearEdge {
        edge: EdgeId,
        distance: Option<T>,
        nearest_vertex: Option<(VertexId, T)>,
    },
    /// Projection lands past two edges.
    NearVertex { nearest_vertex: Option<(VertexId, T)> },
}

impl<T: Scalar> Proximity<T> {
    pub fn is_within(&self, threshold: T) -> bool {
        let reaches = |d: Option<T>| d.is_some_and(|d| d <= threshold);
        match *self {
            Proximity::OffPlane { .. } => false,
            Proximity::Inside { .. } => true,
            Proximity::NearEdge {
                distance,
                nearest_vertex,
                ..
            } => reaches(distance) || reaches(nearest_vertex.map(|(_, d)| d)),
            Proximity::NearVertex { nearest_vertex } => reaches(nearest_vertex.map(|(_, d)| d)),
        }
    }
}
