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

use crate::{geometry::edge::EdgeId, numeric::scalar::Scalar};

/// Where a point on the triangle's plane falls relative to the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarycentricRegion {
    /// Inside the triangle or on its boundary.
    Inside,
    /// Outside, past exactly one edge.
    NearEdge(EdgeId),
    /// Outside, past two edges at once (beyond a shared vertex).
    NearVertex,
}

/// Barycentric weights `(v, w, u)` of a planar point.
///
/// With `e2 = v2 - v0` and `e0 = v1 - v0`, the point is
/// `v0 + v * e2 + w * e0`, so `v` weighs `v2`, `w` weighs `v1` and
/// `u = 1 - v - w` weighs `v0`. Component indices 0, 1, 2 refer to
/// `v`, `w`, `u` and map onto [`EdgeId::E0`], [`EdgeId::E1`],
/// [`EdgeId::E2`] when classifying.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Barycentric<T: Scalar> {
    pub v: T,
    pub w: T,
    pub u: T,
}

impl<T: Scalar> Barycentric<T> {
    pub fn new(v: T, w: T, u: T) -> Self {
        Self { v, w, u }
    }

    /// Builds the triple from the two solved weights; `u = 1 - v - w`.
    pub fn from_vw(v: T, w: T) -> Self {
        Self::new(v, w, T::one() - v - w)
    }

    pub fn components(&self) -> [T; 3] {
        [self.v, self.w, self.u]
    }

    pub fn sum(&self) -> T {
        self.v + self.w + self.u
    }

    /// Number of strictly negative weights.
    pub fn negative_count(&self) -> usize {
        self.components()
            .iter()
            .filter(|c| **c < T::zero())
            .count()
    }

    /// A NaN weight has no sign; it is reported as `NearVertex` so that
    /// it never counts as inside.
    pub fn classify(&self) -> BarycentricRegion {
        if self.components().iter().any(|c| c.is_nan()) {
            return BarycentricRegion::NearVertex;
        }
        match self.negative_count() {
            0 => BarycentricRegion::Inside,
            1 => {
                let comps = self.components();
                let mut min_idx = 0;
                for i in 1..comps.len() {
                    if comps[i] < comps[min_idx] {
                        min_idx = i;
                    }
                }
                match EdgeId::from_index(min_idx) {
                    Some(edge) => BarycentricRegion::NearEdge(edge),
                    None => unreachable!("component index {min_idx} out of range"),
                }
            }
            2 => BarycentricRegion::NearVertex,
            _ => unreachable!(
                "barycentric weights {:?} are all negative but must sum to one",
                self
            ),
        }
    }
}
