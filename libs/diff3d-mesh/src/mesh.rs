//! # Mesh Data Structure
//!
//! Core mesh representation: deduplicated vertices, coordinate-triple
//! triangles, bounds, and an exact-coordinate membership set.
//!
//! Two construction paths exist. The *full build* (`from_triangles`, or
//! `soup::soup_to_mesh`) takes raw triangle data and must produce a non-empty
//! vertex set, because it derives the bounding box. The *derived build*
//! (`with_vertices`) replaces the vertex set of an existing mesh and may
//! legitimately end up empty, which is the "no difference detected" terminal
//! state of the inspection pipeline.

use std::collections::HashSet;

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// A triangle stored as three vertex coordinates.
///
/// Coordinates are stored directly rather than as indices into a vertex
/// buffer; a triangle survives a vertex-set rebuild exactly when all three
/// of its corner coordinates do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub v0: DVec3,
    /// Second corner
    pub v1: DVec3,
    /// Third corner
    pub v2: DVec3,
}

impl Triangle {
    /// Creates a triangle from three corner coordinates.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Returns the three corners in order.
    #[inline]
    pub fn corners(&self) -> [DVec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Axis-aligned bounding box.
///
/// # Fields
///
/// - `min`: Minimum corner of the box
/// - `max`: Maximum corner of the box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a new bounding box from min/max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Computes the component-wise bounds of a vertex list.
    ///
    /// Returns `None` for an empty list; bounds are never derived from an
    /// empty vertex set.
    pub fn from_vertices(vertices: &[DVec3]) -> Option<Self> {
        let first = *vertices.first()?;
        let mut bounds = Self::new(first, first);
        for v in &vertices[1..] {
            bounds.min = bounds.min.min(*v);
            bounds.max = bounds.max.max(*v);
        }
        Some(bounds)
    }
}

/// Hashable identity of a vertex coordinate.
///
/// Vertices are identical exactly when their coordinates are bitwise equal,
/// except that `-0.0` is normalized to `0.0` so numerically equal zeros
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u64; 3]);

impl VertexKey {
    fn of(vertex: DVec3) -> Self {
        fn bits(coord: f64) -> u64 {
            if coord == 0.0 {
                0u64
            } else {
                coord.to_bits()
            }
        }
        Self([bits(vertex.x), bits(vertex.y), bits(vertex.z)])
    }
}

/// A triangle mesh with deduplicated vertices and membership tracking.
///
/// The vertex list keeps every distinct coordinate in first-seen order; the
/// membership set answers "is this coordinate currently a vertex of this
/// mesh" in O(1). Both views always describe the same coordinate set.
///
/// # Example
///
/// ```rust
/// use diff3d_mesh::{Mesh, Triangle};
/// use glam::DVec3;
///
/// let tri = Triangle::new(
///     DVec3::ZERO,
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// );
/// let mesh = Mesh::from_triangles(vec![tri])?;
/// assert_eq!(mesh.vertex_count(), 3);
/// assert!(mesh.contains_vertex(DVec3::ZERO));
/// # Ok::<(), diff3d_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Deduplicated vertex positions in first-seen order
    vertices: Vec<DVec3>,
    /// Triangles as coordinate triples
    triangles: Vec<Triangle>,
    /// Bounds of the current vertex set; `None` iff the mesh is empty
    bounds: Option<BoundingBox>,
    /// Exact-coordinate membership of the current vertex set
    membership: HashSet<VertexKey>,
}

impl Mesh {
    /// Builds a mesh from grouped triangle data.
    ///
    /// Corner coordinates are deduplicated into the vertex list in encounter
    /// order. Fails with [`MeshError::EmptyMesh`] when no triangles are given
    /// (a full build must derive a bounding box) and with the size-cap errors
    /// when the input exceeds the configured limits.
    pub fn from_triangles(triangles: Vec<Triangle>) -> MeshResult<Self> {
        let candidates = triangles
            .iter()
            .flat_map(Triangle::corners)
            .collect::<Vec<_>>();
        Self::build(candidates, triangles)
    }

    /// Builds a mesh from an ordered vertex candidate list plus triangles.
    ///
    /// The candidate list may contain coordinates that belong to no triangle
    /// (trailing soup records); they still become vertices and still shape
    /// the bounds.
    pub(crate) fn build(candidates: Vec<DVec3>, triangles: Vec<Triangle>) -> MeshResult<Self> {
        let (vertices, membership) = dedup_in_order(candidates);

        if vertices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        check_caps(vertices.len(), triangles.len(), MAX_VERTICES, MAX_TRIANGLES)?;

        let bounds = BoundingBox::from_vertices(&vertices);
        Ok(Self {
            vertices,
            triangles,
            bounds,
            membership,
        })
    }

    /// Derives a mesh whose vertex set is replaced by `candidates`.
    ///
    /// Candidates are deduplicated in order, the membership set is rebuilt,
    /// bounds are recomputed, and only triangles whose three corners are all
    /// still present survive. An empty candidate list yields an empty mesh
    /// with no bounds, the terminal state for a clean difference result.
    ///
    /// Replacing a mesh's vertex set with its own vertex list is a no-op.
    pub fn with_vertices(&self, candidates: Vec<DVec3>) -> Self {
        let (vertices, membership) = dedup_in_order(candidates);
        let bounds = BoundingBox::from_vertices(&vertices);

        let triangles = self
            .triangles
            .iter()
            .filter(|tri| {
                tri.corners()
                    .iter()
                    .all(|&corner| membership.contains(&VertexKey::of(corner)))
            })
            .copied()
            .collect();

        Self {
            vertices,
            triangles,
            bounds,
            membership,
        }
    }

    /// Returns true if `vertex` is exactly a vertex of this mesh.
    #[inline]
    pub fn contains_vertex(&self, vertex: DVec3) -> bool {
        self.membership.contains(&VertexKey::of(vertex))
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the bounding box, or `None` for an empty mesh.
    #[inline]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }
}

/// Checks deduplicated build sizes against the configured limits.
fn check_caps(
    vertex_count: usize,
    triangle_count: usize,
    max_vertices: usize,
    max_triangles: usize,
) -> MeshResult<()> {
    if vertex_count > max_vertices {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: max_vertices,
        });
    }
    if triangle_count > max_triangles {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: max_triangles,
        });
    }
    Ok(())
}

/// Deduplicates coordinates preserving first-seen order.
fn dedup_in_order(candidates: Vec<DVec3>) -> (Vec<DVec3>, HashSet<VertexKey>) {
    let mut membership = HashSet::with_capacity(candidates.len());
    let mut vertices = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if membership.insert(VertexKey::of(candidate)) {
            vertices.push(candidate);
        }
    }
    (vertices, membership)
}
