//! # Geometry Kernel
//!
//! Stateless triangle/ray primitives backing point classification.
//!
//! Everything here is plain f64 with exact zero tie-breaks; there is no
//! epsilon tolerance and no exact-arithmetic fallback. A probe that grazes a
//! shared edge sees that edge once per adjacent triangle, so boundary hits
//! carry half weight and the halves sum back to whole crossings.

use glam::DVec3;

use crate::mesh::Triangle;

/// Position of a point relative to a triangle, as seen by the crossing
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Not in the triangle, or the triangle is degenerate
    Outside,
    /// Exactly on an edge or corner
    Boundary,
    /// Strictly inside
    Interior,
}

impl Containment {
    /// Weight this result contributes to a ray-crossing count.
    #[inline]
    pub fn crossing_weight(self) -> f64 {
        match self {
            Self::Outside => 0.0,
            Self::Boundary => 0.5,
            Self::Interior => 1.0,
        }
    }
}

/// Computes the triangle's normal as the cross product of its edges.
///
/// Direction-only: the result is not normalized, and callers must not rely
/// on its magnitude. Degenerate triangles produce the zero vector.
#[inline]
pub fn triangle_normal(tri: &Triangle) -> DVec3 {
    (tri.v1 - tri.v0).cross(tri.v2 - tri.v0)
}

/// Intersects the ray from `origin` toward `far` with the triangle's plane.
///
/// The ray direction is `far - origin`; `r = n·(v0 - origin) / n·(far - origin)`
/// locates the plane along it. A hit requires `r >= 0` (the plane may sit at
/// or beyond the origin, never behind it) and is reported at `origin + r * far`:
/// the displacement scales the far endpoint itself, so reported points sit off
/// the plane by `r` times the origin. An origin on the plane reports itself
/// (`r = 0`), and hits from the coordinate origin land on the plane exactly.
/// The parity vote in point classification depends on that offset: a probe
/// grazing a remote face edge reports a point beside the edge rather than
/// exactly on it, and collects no boundary weight there.
///
/// Returns `None` when the ray is parallel to the plane. A ray lying inside
/// the plane is parallel too and reports no hit.
pub fn ray_plane_intersection(tri: &Triangle, origin: DVec3, far: DVec3) -> Option<DVec3> {
    let normal = triangle_normal(tri);
    let direction = far - origin;

    let denominator = normal.dot(direction);
    if denominator == 0.0 {
        return None;
    }

    let r = normal.dot(tri.v0 - origin) / denominator;
    if r < 0.0 {
        return None;
    }

    Some(origin + r * far)
}

/// Locates a point relative to a triangle using edge-parametric coordinates.
///
/// With `u = v1 - v0`, `v = v2 - v0`, `w = point - v0`, the coordinates
///
/// ```text
/// s = [(u·v)(w·v) - (v·v)(w·u)] / [(u·v)² - (u·u)(v·v)]
/// t = [(u·v)(w·u) - (u·u)(w·v)] / [(u·v)² - (u·u)(v·v)]
/// ```
///
/// place the point inside iff `s >= 0`, `t >= 0`, `s + t <= 1`, and exactly on
/// the boundary when any of those holds with equality. A zero denominator
/// means the triangle is degenerate; such triangles contain nothing.
///
/// The point is assumed to lie in the triangle's plane; callers feed it the
/// output of [`ray_plane_intersection`].
pub fn point_in_triangle(tri: &Triangle, point: DVec3) -> Containment {
    let u = tri.v1 - tri.v0;
    let v = tri.v2 - tri.v0;
    let w = point - tri.v0;

    let uv = u.dot(v);
    let uu = u.dot(u);
    let vv = v.dot(v);
    let wu = w.dot(u);
    let wv = w.dot(v);

    let denominator = uv * uv - uu * vv;
    if denominator == 0.0 {
        return Containment::Outside;
    }

    let s = (uv * wv - vv * wu) / denominator;
    let t = (uv * wu - uu * wv) / denominator;

    if s >= 0.0 && t >= 0.0 && s + t <= 1.0 {
        if s == 0.0 || t == 0.0 || s + t == 1.0 {
            Containment::Boundary
        } else {
            Containment::Interior
        }
    } else {
        Containment::Outside
    }
}
