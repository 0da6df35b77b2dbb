//! # Diff3d Mesh
//!
//! Vertex-level comparison of triangulated meshes, built for checking a
//! printed or scanned part against its source model. One mesh acts as the
//! reference volume; the subject mesh's vertices are classified against it
//! by ray parity, and the vertices that fall outside form the difference
//! mesh together with the subject triangles they fully support.
//!
//! ## Architecture
//!
//! ```text
//! soup      parse and emit ASCII triangle soup
//! mesh      vertex pool, triangles, bounds
//! geom      ray and triangle primitives
//! classify  six-probe ray parity containment test
//! ops       vertex-level mesh difference
//! ```
//!
//! ## Example
//!
//! ```rust
//! use diff3d_mesh::{DiffSummary, difference, soup_to_mesh};
//!
//! let reference = soup_to_mesh(
//!     "vertex 0 0 0\nvertex 4 0 0\nvertex 0 4 0\n\
//!      vertex 0 0 0\nvertex 4 0 0\nvertex 0 0 4\n\
//!      vertex 0 0 0\nvertex 0 4 0\nvertex 0 0 4\n\
//!      vertex 4 0 0\nvertex 0 4 0\nvertex 0 0 4\n"
//!         .lines(),
//! )?;
//! let subject = soup_to_mesh(
//!     "vertex 9 9 9\nvertex 10 9 9\nvertex 9 10 9\n".lines(),
//! )?;
//!
//! let result = difference(&reference, &subject);
//! let summary = DiffSummary::new(&reference, &subject, &result);
//! assert!(!summary.no_difference());
//! # Ok::<(), diff3d_mesh::MeshError>(())
//! ```

pub mod classify;
pub mod error;
pub mod geom;
pub mod mesh;
pub mod ops;
pub mod soup;

#[cfg(test)]
mod test_fixtures;

use std::path::Path;

pub use classify::is_inside;
pub use error::{MeshError, MeshResult};
pub use geom::Containment;
pub use mesh::{BoundingBox, Mesh, Triangle};
pub use ops::{DiffSummary, difference};
pub use soup::{mesh_to_soup, soup_to_mesh};

/// Reads a mesh from an ASCII soup file on disk.
///
/// # Example
///
/// ```rust,ignore
/// let mesh = diff3d_mesh::load_mesh("model.stl")?;
/// println!("{} vertices", mesh.vertex_count());
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P) -> MeshResult<Mesh> {
    let lines = diff3d_import::read_lines(path)?;
    soup_to_mesh(&lines)
}

/// Loads a model and a scan from disk and computes their difference.
///
/// The model acts as the reference volume and the scan as the subject.
/// Returns the difference mesh together with a summary of how many scan
/// vertices were shared, retained and dropped.
///
/// # Example
///
/// ```rust,ignore
/// let (diff, summary) = diff3d_mesh::load_and_diff("model.stl", "scan.stl")?;
/// if summary.no_difference() {
///     println!("scan matches the model");
/// } else {
///     std::fs::write("diff.stl", diff3d_mesh::mesh_to_soup(&diff))?;
/// }
/// ```
pub fn load_and_diff<P: AsRef<Path>, Q: AsRef<Path>>(
    model_path: P,
    scan_path: Q,
) -> MeshResult<(Mesh, DiffSummary)> {
    let reference = load_mesh(model_path)?;
    let subject = load_mesh(scan_path)?;
    log::info!(
        "diff: model {} vertices / {} triangles, scan {} vertices / {} triangles",
        reference.vertex_count(),
        reference.triangle_count(),
        subject.vertex_count(),
        subject.triangle_count()
    );
    let result = difference(&reference, &subject);
    let summary = DiffSummary::new(&reference, &subject, &result);
    Ok((result, summary))
}
