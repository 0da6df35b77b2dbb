//! # Point Classification
//!
//! Decides whether a point lies inside a mesh by ray-casting parity.
//!
//! Six axis-aligned probes leave the point (+x, -x, +y, -y, +z, -z), each
//! reaching far enough to clear the whole mesh. Every triangle crossed along
//! a probe adds its containment weight to that probe's count; the first probe
//! whose count is not even declares the point inside. If every probe count
//! comes back even the point is outside.
//!
//! Probe hits that land exactly on a retained vertex of the mesh are skipped:
//! such a hit is shared by every triangle around that vertex and would
//! otherwise be counted once per triangle. Hit points scale the probe's far
//! endpoint, so most remote hits sit slightly off the surface; exact
//! coincidence arises chiefly from `r = 0` self-hits, when the probed point
//! is itself a mesh vertex.

use config::constants::RAY_CLEARANCE_FACTOR;
use glam::DVec3;

use crate::geom;
use crate::mesh::Mesh;

/// Returns true if `point` lies inside `mesh`.
///
/// The probe reach is derived from the mesh's z extent,
/// `(|min z| + |max z|) * RAY_CLEARANCE_FACTOR`. A mesh that is flat in z
/// has zero reach, every probe degenerates, and all points classify outside;
/// a sheet encloses no volume.
///
/// An empty mesh contains nothing.
pub fn is_inside(mesh: &Mesh, point: DVec3) -> bool {
    let bounds = match mesh.bounds() {
        Some(bounds) => bounds,
        None => return false,
    };
    let reach = (bounds.min.z.abs() + bounds.max.z.abs()) * RAY_CLEARANCE_FACTOR;

    let probes = [
        DVec3::new(point.x + reach, point.y, point.z),
        DVec3::new(point.x - reach, point.y, point.z),
        DVec3::new(point.x, point.y + reach, point.z),
        DVec3::new(point.x, point.y - reach, point.z),
        DVec3::new(point.x, point.y, point.z + reach),
        DVec3::new(point.x, point.y, point.z - reach),
    ];

    probes
        .into_iter()
        .any(|far| probe_crossings(mesh, point, far) % 2.0 != 0.0)
}

/// Accumulates the crossing count along one probe.
///
/// Boundary grazes contribute 0.5 per adjacent triangle, so a probe passing
/// through a shared edge still counts one whole crossing.
fn probe_crossings(mesh: &Mesh, origin: DVec3, far: DVec3) -> f64 {
    let mut crossings = 0.0;
    for tri in mesh.triangles() {
        if let Some(hit) = geom::ray_plane_intersection(tri, origin, far) {
            // A hit exactly on a mesh vertex is shared by every triangle
            // around that vertex; count none of them.
            if mesh.contains_vertex(hit) {
                continue;
            }
            crossings += geom::point_in_triangle(tri, hit).crossing_weight();
        }
    }
    crossings
}
