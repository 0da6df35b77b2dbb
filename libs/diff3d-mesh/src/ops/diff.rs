//! # Difference Operation
//!
//! Computes the part of a scanned mesh lying outside a reference model.
//!
//! The operation works at the vertex level: a subject vertex survives when it
//! is neither a vertex of the reference nor inside it. The surviving vertices
//! rebuild the subject through its vertex-subset derivation, which keeps only
//! triangles whose three corners all survived. Cut boundaries are not
//! re-triangulated; triangles straddling the reference surface simply drop.
//!
//! Vertices are classified independently, so the scan runs across the rayon
//! pool with the reference shared read-only. Output order matches subject
//! vertex order.

use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;

use crate::classify;
use crate::mesh::Mesh;

/// Report of one difference run.
///
/// This is the inspection verdict: how much of the subject fell outside the
/// reference. Serializable for pipeline consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Vertices in the subject mesh
    pub subject_vertices: usize,
    /// Subject vertices that coincide exactly with reference vertices
    pub shared_vertices: usize,
    /// Vertices surviving in the difference mesh
    pub retained_vertices: usize,
    /// Triangles surviving in the difference mesh
    pub retained_triangles: usize,
}

impl DiffSummary {
    /// Builds the summary for a finished difference run.
    pub fn new(reference: &Mesh, subject: &Mesh, result: &Mesh) -> Self {
        let shared_vertices = subject
            .vertices()
            .iter()
            .filter(|&&vertex| reference.contains_vertex(vertex))
            .count();
        Self {
            subject_vertices: subject.vertex_count(),
            shared_vertices,
            retained_vertices: result.vertex_count(),
            retained_triangles: result.triangle_count(),
        }
    }

    /// True when nothing of the subject lies outside the reference.
    pub fn no_difference(&self) -> bool {
        self.retained_vertices == 0
    }
}

/// Computes the difference mesh of `subject` against `reference`.
///
/// A subject vertex is retained iff it is not a reference vertex and not
/// inside the reference. The result is the subject rebuilt over the retained
/// vertices: matching geometry vanishes, and an empty result means the
/// subject lies entirely on or in the reference.
///
/// # Example
///
/// ```rust,ignore
/// let diff = difference(&model, &scan);
/// let summary = DiffSummary::new(&model, &scan, &diff);
/// ```
pub fn difference(reference: &Mesh, subject: &Mesh) -> Mesh {
    let retained: Vec<DVec3> = subject
        .vertices()
        .par_iter()
        .copied()
        .filter(|&vertex| {
            !reference.contains_vertex(vertex) && !classify::is_inside(reference, vertex)
        })
        .collect();

    log::debug!(
        "difference retained {} of {} subject vertices",
        retained.len(),
        subject.vertex_count()
    );

    subject.with_vertices(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;
    use crate::test_fixtures::cube;

    #[test]
    fn test_difference_with_itself_is_empty() {
        let mesh = cube(DVec3::ZERO, 1.0);
        let diff = difference(&mesh, &mesh);
        assert!(diff.is_empty());
        assert_eq!(diff.triangle_count(), 0);
        assert!(diff.bounds().is_none());

        let summary = DiffSummary::new(&mesh, &mesh, &diff);
        assert!(summary.no_difference());
        assert_eq!(summary.shared_vertices, 8);
        assert_eq!(summary.subject_vertices, 8);
    }

    #[test]
    fn test_disjoint_subject_is_preserved() {
        let reference = cube(DVec3::ZERO, 1.0);
        let subject = cube(DVec3::new(10.0, 10.0, 10.0), 1.0);
        let diff = difference(&reference, &subject);

        assert_eq!(diff.vertex_count(), 8);
        assert_eq!(diff.triangle_count(), 12);
        assert_eq!(diff.vertices(), subject.vertices());
        assert_eq!(diff.triangles(), subject.triangles());
    }

    #[test]
    fn test_disjoint_subject_on_face_planes_is_preserved() {
        // The subject clears the reference bounds in x, but half its vertices
        // lie exactly on the reference's z face planes with y inside the face
        // span. The grazing probes must not misclassify them as inside.
        let reference = cube(DVec3::ZERO, 1.0);
        let subject = cube(DVec3::new(10.0, 1.0, 0.0), 1.0);
        let diff = difference(&reference, &subject);

        assert_eq!(diff.vertex_count(), 8);
        assert_eq!(diff.triangle_count(), 12);
        assert_eq!(diff.vertices(), subject.vertices());
    }

    #[test]
    fn test_engulfed_subject_vanishes() {
        let reference = cube(DVec3::ZERO, 3.0);
        let subject = cube(DVec3::ZERO, 1.0);
        let diff = difference(&reference, &subject);

        assert!(diff.is_empty());
        let summary = DiffSummary::new(&reference, &subject, &diff);
        assert!(summary.no_difference());
        assert_eq!(summary.shared_vertices, 0);
    }

    #[test]
    fn test_partial_overlap_keeps_clear_face() {
        // Reference spans x in [0, 4]; the subject cube pokes out of it on
        // the -x side only.
        let reference = cube(DVec3::new(2.0, 0.0, 0.0), 2.0);
        let subject = cube(DVec3::ZERO, 1.0);
        let diff = difference(&reference, &subject);

        let expected: Vec<DVec3> = subject
            .vertices()
            .iter()
            .copied()
            .filter(|v| v.x == -1.0)
            .collect();
        assert_eq!(diff.vertices(), expected.as_slice());
        assert_eq!(diff.vertex_count(), 4);
        // Only the -x face has all three corners clear
        assert_eq!(diff.triangle_count(), 2);
        for tri in diff.triangles() {
            for corner in tri.corners() {
                assert_eq!(corner.x, -1.0);
            }
        }
    }

    #[test]
    fn test_partial_overlap_summary() {
        let reference = cube(DVec3::new(2.0, 0.0, 0.0), 2.0);
        let subject = cube(DVec3::ZERO, 1.0);
        let diff = difference(&reference, &subject);
        let summary = DiffSummary::new(&reference, &subject, &diff);

        assert_eq!(summary.subject_vertices, 8);
        assert_eq!(summary.shared_vertices, 0);
        assert_eq!(summary.retained_vertices, 4);
        assert_eq!(summary.retained_triangles, 2);
        assert!(!summary.no_difference());
    }

    #[test]
    fn test_lone_degenerate_subject_is_classified() {
        let reference = cube(DVec3::ZERO, 1.0);
        let p = DVec3::new(10.0, 10.0, 10.0);
        let subject = Mesh::from_triangles(vec![Triangle::new(p, p, p)]).unwrap();
        let diff = difference(&reference, &subject);

        // The lone vertex is outside, so it and its degenerate triangle stay
        assert_eq!(diff.vertex_count(), 1);
        assert_eq!(diff.triangle_count(), 1);
    }

    #[test]
    fn test_shared_bounds_shrink_to_survivors() {
        let reference = cube(DVec3::new(2.0, 0.0, 0.0), 2.0);
        let subject = cube(DVec3::ZERO, 1.0);
        let diff = difference(&reference, &subject);

        let bounds = diff.bounds().unwrap();
        assert_eq!(bounds.min, DVec3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, DVec3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = DiffSummary {
            subject_vertices: 8,
            shared_vertices: 1,
            retained_vertices: 4,
            retained_triangles: 2,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["subject_vertices"], 8);
        assert_eq!(json["shared_vertices"], 1);
        assert_eq!(json["retained_vertices"], 4);
        assert_eq!(json["retained_triangles"], 2);
    }
}
