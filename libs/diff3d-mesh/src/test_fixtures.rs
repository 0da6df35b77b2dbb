//! Shared geometry fixtures for the test modules.

use glam::DVec3;

use crate::mesh::{Mesh, Triangle};

/// Axis-aligned cube around `center` with the given half edge length,
/// triangulated as two triangles per face with outward winding.
pub(crate) fn cube(center: DVec3, half: f64) -> Mesh {
    let x0 = center.x - half;
    let x1 = center.x + half;
    let y0 = center.y - half;
    let y1 = center.y + half;
    let z0 = center.z - half;
    let z1 = center.z + half;

    let p000 = DVec3::new(x0, y0, z0);
    let p001 = DVec3::new(x0, y0, z1);
    let p010 = DVec3::new(x0, y1, z0);
    let p011 = DVec3::new(x0, y1, z1);
    let p100 = DVec3::new(x1, y0, z0);
    let p101 = DVec3::new(x1, y0, z1);
    let p110 = DVec3::new(x1, y1, z0);
    let p111 = DVec3::new(x1, y1, z1);

    let triangles = vec![
        // -z face
        Triangle::new(p000, p010, p110),
        Triangle::new(p000, p110, p100),
        // +z face
        Triangle::new(p001, p101, p111),
        Triangle::new(p001, p111, p011),
        // -y face
        Triangle::new(p000, p100, p101),
        Triangle::new(p000, p101, p001),
        // +y face
        Triangle::new(p010, p011, p111),
        Triangle::new(p010, p111, p110),
        // -x face
        Triangle::new(p000, p001, p011),
        Triangle::new(p000, p011, p010),
        // +x face
        Triangle::new(p100, p110, p111),
        Triangle::new(p100, p111, p101),
    ];

    Mesh::from_triangles(triangles).unwrap()
}

/// Same cube with every triangle's winding reversed.
pub(crate) fn cube_reversed(center: DVec3, half: f64) -> Mesh {
    let flipped = cube(center, half)
        .triangles()
        .iter()
        .map(|tri| Triangle::new(tri.v0, tri.v2, tri.v1))
        .collect();
    Mesh::from_triangles(flipped).unwrap()
}
