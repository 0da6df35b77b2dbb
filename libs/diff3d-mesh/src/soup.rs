//! # Triangle Soup (De)serialization
//!
//! Converts between raw ASCII records and [`Mesh`] values.
//!
//! The reader scans records for the `vertex` keyword and ignores everything
//! else, so any ASCII STL-like text parses without a full grammar: `solid`,
//! `facet`, `outer loop` and stray lines are simply skipped. Every three
//! vertex records form one triangle in encounter order; leftover records at
//! the end still become vertices.
//!
//! The writer emits the conventional `solid`/`facet` block layout with
//! normals recomputed from winding, so results can be handed back to other
//! mesh tools and re-read by this parser.

use std::fmt::Write;

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::geom;
use crate::mesh::{Mesh, Triangle};

/// Parses raw soup records into a mesh.
///
/// Records are whitespace-tokenized. A record whose first token is `vertex`
/// must carry three parseable coordinate fields; extra trailing fields are
/// ignored. Non-vertex records are skipped. Fails when a vertex record is
/// malformed or when no vertex records are present at all.
///
/// # Example
///
/// ```rust
/// use diff3d_mesh::soup_to_mesh;
///
/// let text = "solid part\n\
///             vertex 0 0 0\n\
///             vertex 1 0 0\n\
///             vertex 0 1 0\n\
///             endsolid part";
/// let mesh = soup_to_mesh(text.lines())?;
/// assert_eq!(mesh.triangle_count(), 1);
/// # Ok::<(), diff3d_mesh::MeshError>(())
/// ```
pub fn soup_to_mesh<I, S>(records: I) -> MeshResult<Mesh>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = Vec::new();
    let mut triangles = Vec::new();
    let mut pending: Vec<DVec3> = Vec::with_capacity(3);

    for record in records {
        if let Some(vertex) = parse_vertex(record.as_ref())? {
            candidates.push(vertex);
            pending.push(vertex);
            if pending.len() == 3 {
                triangles.push(Triangle::new(pending[0], pending[1], pending[2]));
                pending.clear();
            }
        }
    }

    log::debug!(
        "soup parse: {} vertex records, {} triangles",
        candidates.len(),
        triangles.len()
    );

    Mesh::build(candidates, triangles)
}

/// Parses one record; `None` for records that are not vertex records.
fn parse_vertex(record: &str) -> MeshResult<Option<DVec3>> {
    let mut tokens = record.split_whitespace();
    if tokens.next() != Some("vertex") {
        return Ok(None);
    }

    let mut coords = [0.0f64; 3];
    for coord in &mut coords {
        let token = tokens.next().ok_or_else(|| MeshError::TruncatedRecord {
            record: record.to_string(),
        })?;
        *coord = token.parse().map_err(|_| MeshError::InvalidCoordinate {
            token: token.to_string(),
            record: record.to_string(),
        })?;
    }
    Ok(Some(DVec3::from_array(coords)))
}

/// Serializes a mesh back to ASCII soup text.
///
/// Facet normals are recomputed from triangle winding; degenerate triangles
/// get a zero normal. The output is parseable by [`soup_to_mesh`].
pub fn mesh_to_soup(mesh: &Mesh) -> String {
    let mut out = String::new();
    out.push_str("solid diff\n");
    for tri in mesh.triangles() {
        let normal = geom::triangle_normal(tri).normalize_or_zero();
        let _ = writeln!(out, "  facet normal {} {} {}", normal.x, normal.y, normal.z);
        out.push_str("    outer loop\n");
        for corner in tri.corners() {
            let _ = writeln!(out, "      vertex {} {} {}", corner.x, corner.y, corner.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str("endsolid diff\n");
    out
}
