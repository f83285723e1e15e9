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

use tracing::{debug, trace};

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::{
        barycentric::{Barycentric, BarycentricRegion},
        edge::{Edge, EdgeId, VertexId},
        plane::Plane,
        point_3::Point3,
        proximity::{Proximity, ProximityConfig},
        vector::VectorOps,
        vector_3::Vector3,
    },
    numeric::scalar::Scalar,
};

/// An immutable triangle with its edges and supporting plane precomputed.
///
/// Edges are stored as `E0 = (v0, v1)`, `E1 = (v1, v2)`, `E2 = (v0, v2)`.
/// The unit normal is `normalize((v2 - v0) × (v1 - v0))`, which fixes
/// which side of the plane counts as positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<T: Scalar> {
    vertices: [Point3<T>; 3],
    edges: [Edge<T>; 3],
    plane: Plane<T>,
    // largest distance of a vertex from the origin
    extent: T,
    // |e0| |e2| / |e2 × e0|, the inverse sine of the angle at v0
    skew: T,
}

/// Relative rounding error allowed for a handful of chained operations.
fn rounding_unit<T: Scalar>() -> T {
    T::epsilon() * T::from_num_den(16, 1)
}

impl<T: Scalar> Triangle<T> {
    /// Fails with [`GeometryError::DegenerateInput`] if a coordinate is not
    /// finite or the vertices are collinear.
    pub fn new(v0: Point3<T>, v1: Point3<T>, v2: Point3<T>) -> GeometryResult<Self> {
        if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
            debug!(?v0, ?v1, ?v2, "rejecting triangle with non-finite vertex");
            return Err(GeometryError::degenerate("triangle vertex is not finite"));
        }

        let edges = [Edge::new(v0, v1), Edge::new(v1, v2), Edge::new(v0, v2)];
        let plane = Plane::from_points(&v0, &v1, &v2).map_err(|_| {
            debug!(?v0, ?v1, ?v2, "rejecting triangle with collinear vertices");
            GeometryError::degenerate("triangle vertices are collinear")
        })?;

        let e2 = *edges[2].direction();
        let e0 = *edges[0].direction();
        let extent = [v0, v1, v2]
            .iter()
            .map(|v| v.as_vector().norm())
            .fold(T::zero(), T::max);
        let skew = e0.norm() * e2.norm() / e2.cross(&e0).norm();

        let triangle = Self {
            vertices: [v0, v1, v2],
            edges,
            plane,
            extent,
            skew,
        };

        // The normal can survive a sliver whose Gram determinant still
        // rounds to zero; barycentric() divides by it.
        let denom = triangle.gram_determinant();
        if !(denom > T::zero() && denom.is_finite()) {
            debug!(?v0, ?v1, ?v2, ?denom, "rejecting triangle with vanishing area");
            return Err(GeometryError::degenerate(
                "triangle is too thin for barycentric coordinates",
            ));
        }

        Ok(triangle)
    }

    pub fn vertices(&self) -> &[Point3<T>; 3] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> &Point3<T> {
        &self.vertices[id.index()]
    }

    pub fn edges(&self) -> &[Edge<T>; 3] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<T> {
        &self.edges[id.index()]
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.plane.normal
    }

    /// `d` such that every point `p` on the plane has `p · normal = d`.
    pub fn plane_offset(&self) -> T {
        self.plane.d
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    pub fn area(&self) -> T {
        let e2 = self.edges[2].direction();
        let e0 = self.edges[0].direction();
        e2.cross(e0).norm() * T::from_num_den(1, 2)
    }

    pub fn centroid(&self) -> Point3<T> {
        let [v0, v1, v2] = self.vertices;
        let three = T::from_num_den(3, 1);
        Point3::new(
            (v0.x + v1.x + v2.x) / three,
            (v0.y + v1.y + v2.y) / three,
            (v0.z + v1.z + v2.z) / three,
        )
    }

    fn gram_determinant(&self) -> T {
        let e2 = self.edges[2].direction();
        let e0 = self.edges[0].direction();
        let d00 = e2.dot(e2);
        let d01 = e2.dot(e0);
        let d11 = e0.dot(e0);
        d00 * d11 - d01 * d01
    }

    /// Upper bound on the rounding error of `distance_to_plane(p)`.
    fn plane_slack(&self, p: &Point3<T>) -> T {
        let reach = p.as_vector().norm() + self.extent;
        rounding_unit::<T>() * reach * (T::one() + self.skew)
    }

    /// Lifts weights that are negative only through rounding back to zero,
    /// so points on a vertex or an edge are not pushed outside.
    fn settle_rounding(&self, coord: Barycentric<T>, ip: &Point3<T>) -> Barycentric<T> {
        let l2 = self.edges[2].length();
        let l0 = self.edges[0].length();
        let reach = (*ip - self.vertices[0]).norm() + self.extent;
        let unit = rounding_unit::<T>();
        let scaled = unit * T::from_num_den(2, 1) * reach / self.gram_determinant();

        let slack_v = scaled * l0 * l0 * l2;
        let slack_w = scaled * l2 * l2 * l0;
        let slack_u = slack_v + slack_w + unit;
        let settle = |c: T, slack: T| {
            if c < T::zero() && -c <= slack {
                T::zero()
            } else {
                c
            }
        };
        Barycentric::new(
            settle(coord.v, slack_v),
            settle(coord.w, slack_w),
            settle(coord.u, slack_u),
        )
    }

    /// Signed distance from `p` to the triangle's plane.
    pub fn distance_to_plane(&self, p: &Point3<T>) -> T {
        self.plane.signed_distance(p)
    }

    pub fn project_to_plane(&self, p: &Point3<T>, signed_distance: T) -> Point3<T> {
        self.plane.project(p, signed_distance)
    }

    /// Barycentric weights of `ip`, which must already lie on the plane.
    ///
    /// Construction rejects triangles whose denominator vanishes, but very
    /// thin triangles can still lose most of their precision here.
    pub fn barycentric(&self, ip: &Point3<T>) -> Barycentric<T> {
        let e2 = self.edges[2].direction();
        let e0 = self.edges[0].direction();
        let qp = *ip - self.vertices[0];

        let d00 = e2.dot(e2);
        let d01 = e2.dot(e0);
        let d11 = e0.dot(e0);
        let d20 = qp.dot(e2);
        let d21 = qp.dot(e0);

        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Barycentric::from_vw(v, w)
    }

    pub fn examine_barycentric(&self, coord: &Barycentric<T>) -> BarycentricRegion {
        coord.classify()
    }

    /// Distance from `p` to the interior of edge `id`, or `None` when the
    /// perpendicular foot does not land strictly between its endpoints.
    pub fn distance_to_edge(&self, id: EdgeId, p: &Point3<T>) -> Option<T> {
        self.edge(id).interior_distance_to(p)
    }

    pub fn distance_to_vertex(&self, id: VertexId, p: &Point3<T>) -> T {
        self.vertex(id).distance_to(p)
    }

    /// The closest vertex and its distance; ties go to the lower index.
    pub fn nearest_vertex(&self, p: &Point3<T>) -> (VertexId, T) {
        let mut best = (VertexId::V0, self.distance_to_vertex(VertexId::V0, p));
        for id in VertexId::ALL.into_iter().skip(1) {
            let d = self.distance_to_vertex(id, p);
            if d < best.1 {
                best = (id, d);
            }
        }
        best
    }

    /// Walks the proximity test for `p` and reports the deciding branch.
    pub fn inspect_point(
        &self,
        p: &Point3<T>,
        threshold: T,
        config: &ProximityConfig,
    ) -> Proximity<T> {
        let plane_distance = self.distance_to_plane(p);
        trace!(point = ?p, ?plane_distance, ?threshold, "plane distance");
        if !p.is_finite() || !(plane_distance.abs() <= threshold + self.plane_slack(p)) {
            return Proximity::OffPlane { plane_distance };
        }

        let ip = self.project_to_plane(p, plane_distance);
        let coord = self.settle_rounding(self.barycentric(&ip), &ip);
        let region = self.examine_barycentric(&coord);
        trace!(?coord, ?region, "classified projection");

        let refined = || config.refine_vertices.then(|| self.nearest_vertex(p));
        match region {
            BarycentricRegion::Inside => Proximity::Inside { plane_distance },
            BarycentricRegion::NearVertex => Proximity::NearVertex {
                nearest_vertex: refined(),
            },
            BarycentricRegion::NearEdge(edge) => {
                let distance = self.distance_to_edge(edge, p);
                trace!(?edge, ?distance, "edge distance");
                let nearest_vertex = match distance {
                    Some(d) if d <= threshold => None,
                    _ => refined(),
                };
                Proximity::NearEdge {
                    edge,
                    distance,
                    nearest_vertex,
                }
            }
        }
    }

    /// Whether `p` lies within `threshold` of the triangle, using the
    /// default [`ProximityConfig`].
    ///
    /// Points projecting beyond a vertex are never reported as within
    /// reach, and neither are points whose edge distance exceeds the
    /// threshold. The plane distance and the barycentric signs are tested
    /// with an allowance for rounding that scales with the coordinates and
    /// the shape of the triangle, so vertices and points on the surface
    /// match even at a zero threshold. Non-finite points never match.
    pub fn examine_point(&self, p: &Point3<T>, threshold: T) -> bool {
        self.examine_point_with(p, threshold, &ProximityConfig::default())
    }

    pub fn examine_point_with(
        &self,
        p: &Point3<T>,
        threshold: T,
        config: &ProximityConfig,
    ) -> bool {
        self.inspect_point(p, threshold, config).is_within(threshold)
    }
}
