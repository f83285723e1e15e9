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

//! Point-to-triangle proximity queries in three dimensions.
//!
//! A [`Triangle`] is built once from three vertices, precomputing its edges
//! and supporting plane, and then answers whether query points lie within a
//! distance threshold of its surface:
//!
//! ```
//! use triprox::{Point3, Triangle};
//!
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! )
//! .unwrap();
//!
//! assert!(tri.examine_point(&Point3::new(0.25, 0.25, 0.0), 0.01));
//! assert!(!tri.examine_point(&Point3::new(0.25, 0.25, 5.0), 0.01));
//! ```

pub mod error;
pub mod geometry;
pub mod numeric;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{
    Barycentric, BarycentricRegion, Edge, EdgeId, Plane, Point3, Proximity, ProximityConfig,
    Triangle, Vector3, VectorOps, VertexId,
};
pub use numeric::Scalar;
