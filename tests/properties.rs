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

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use triprox::{EdgeId, Point3, Triangle, Vector3, VectorOps};

const CASES: usize = 500;

fn random_point(rng: &mut StdRng) -> Point3<f64> {
    Point3::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    )
}

/// Random triangle with a comfortable area so barycentric weights stay accurate.
fn random_triangle(rng: &mut StdRng) -> Triangle<f64> {
    loop {
        let (a, b, c) = (random_point(rng), random_point(rng), random_point(rng));
        if let Ok(tri) = Triangle::new(a, b, c) {
            if tri.area() > 1.0 {
                return tri;
            }
        }
    }
}

/// Any non-degenerate triangle, slivers included.
fn random_any_triangle(rng: &mut StdRng) -> Triangle<f64> {
    loop {
        let (a, b, c) = (random_point(rng), random_point(rng), random_point(rng));
        if let Ok(tri) = Triangle::new(a, b, c) {
            return tri;
        }
    }
}

/// Nearly collinear triangle: the third vertex sits within `1e-9..1e-2`
/// of the segment between the first two.
fn random_sliver(rng: &mut StdRng) -> Triangle<f64> {
    loop {
        let (a, b) = (random_point(rng), random_point(rng));
        let t: f64 = rng.random_range(0.1..0.9);
        let h = 10f64.powf(rng.random_range(-9.0..-2.0));
        let jitter = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let c = a + (b - a) * t + jitter * h;
        if let Ok(tri) = Triangle::new(c, a, b) {
            return tri;
        }
    }
}

#[test]
fn test_vertices_within_zero_threshold() {
    let mut rng = StdRng::seed_from_u64(0x7121);
    for _ in 0..CASES * 4 {
        let tri = random_any_triangle(&mut rng);
        for v in tri.vertices() {
            assert!(tri.examine_point(v, 0.0), "{v:?} not on {tri:?}");
        }
    }
}

#[test]
fn test_sliver_vertices_within_zero_threshold() {
    let mut rng = StdRng::seed_from_u64(0x511e);
    for _ in 0..CASES * 4 {
        let tri = random_sliver(&mut rng);
        for v in tri.vertices() {
            assert!(tri.examine_point(v, 0.0), "{v:?} not on {tri:?}");
        }
        assert!(tri.examine_point(&tri.centroid(), 0.0));
    }
}

#[test]
fn test_centroid_within_any_threshold() {
    let mut rng = StdRng::seed_from_u64(0xce47);
    for _ in 0..CASES * 4 {
        let tri = random_any_triangle(&mut rng);
        let c = tri.centroid();
        assert!(tri.examine_point(&c, 0.0), "{c:?} not on {tri:?}");
        assert!(tri.examine_point(&c, rng.random_range(0.0..5.0)));
    }
}

#[test]
fn test_barycentric_weights_sum_to_one() {
    let mut rng = StdRng::seed_from_u64(0xba7c);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let [v0, v1, v2] = *tri.vertices();
        let a = rng.random_range(-3.0..3.0);
        let b = rng.random_range(-3.0..3.0);
        let ip = v0 + (v1 - v0) * a + (v2 - v0) * b;

        let coord = tri.barycentric(&ip);
        assert_abs_diff_eq!(coord.sum(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(coord.w, a, epsilon = 1e-6);
        assert_abs_diff_eq!(coord.v, b, epsilon = 1e-6);
    }
}

#[test]
fn test_distance_to_plane_is_linear_along_normal() {
    let mut rng = StdRng::seed_from_u64(0x9a7e);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let p = random_point(&mut rng);
        let k = rng.random_range(-10.0..10.0);
        let shifted = p + *tri.normal() * k;
        assert_abs_diff_eq!(
            tri.distance_to_plane(&shifted),
            tri.distance_to_plane(&p) + k,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_projection_lands_on_plane() {
    let mut rng = StdRng::seed_from_u64(0x90e1);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let p = random_point(&mut rng);
        let ip = tri.project_to_plane(&p, tri.distance_to_plane(&p));
        assert_abs_diff_eq!(tri.distance_to_plane(&ip), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_distance_to_edge_only_on_interior() {
    let mut rng = StdRng::seed_from_u64(0xed9e);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let id = EdgeId::ALL[rng.random_range(0..3usize)];
        let edge = tri.edge(id);
        let dir = edge.normal().unwrap();
        let len = edge.length();
        let side = tri.normal().cross(&dir);
        let offset: f64 = rng.random_range(-2.0..2.0);
        let lift: f64 = rng.random_range(-2.0..2.0);
        let off_axis = side * offset + *tri.normal() * lift;

        let t: f64 = rng.random_range(0.01..0.99) * len;
        let p = *edge.v0() + dir * t + off_axis;
        let d = tri.distance_to_edge(id, &p).unwrap();
        assert_abs_diff_eq!(d, off_axis.norm(), epsilon = 1e-9);

        let before: f64 = -rng.random_range(0.01..5.0);
        let p = *edge.v0() + dir * before + off_axis;
        assert_eq!(tri.distance_to_edge(id, &p), None);

        let after: f64 = len + rng.random_range(0.01..5.0);
        let p = *edge.v0() + dir * after + off_axis;
        assert_eq!(tri.distance_to_edge(id, &p), None);
    }
}

#[test]
fn test_inside_points_follow_plane_distance() {
    let mut rng = StdRng::seed_from_u64(0x1b5d);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let [v0, v1, v2] = *tri.vertices();
        let a: f64 = rng.random_range(0.05..0.9);
        let b: f64 = rng.random_range(0.05..(0.95 - a).max(0.051));
        let on_surface = v0 + (v1 - v0) * a + (v2 - v0) * b;

        let threshold = rng.random_range(0.1..1.0);
        let near = on_surface + *tri.normal() * (threshold * 0.5);
        let far = on_surface - *tri.normal() * (threshold * 1.5);
        assert!(tri.examine_point(&near, threshold));
        assert!(!tri.examine_point(&far, threshold));
    }
}

#[test]
fn test_unit_normal() {
    let mut rng = StdRng::seed_from_u64(0x0a11);
    for _ in 0..CASES {
        let tri = random_triangle(&mut rng);
        let n: Vector3<f64> = *tri.normal();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
        for e in tri.edges() {
            assert_abs_diff_eq!(n.dot(e.direction()) / e.length(), 0.0, epsilon = 1e-9);
        }
        for v in tri.vertices() {
            assert_abs_diff_eq!(v.as_vector().dot(&n), tri.plane_offset(), epsilon = 1e-9);
        }
    }
}
