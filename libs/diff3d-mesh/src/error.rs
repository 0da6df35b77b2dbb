//! # Mesh Errors
//!
//! Error types for mesh construction and the difference pipeline.

use thiserror::Error;

/// Errors that can occur while building or differencing meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Ingestion failure from the import layer
    #[error("Import error: {0}")]
    Import(#[from] diff3d_import::ImportError),

    /// Vertex record with fewer than three coordinate fields
    #[error("Truncated vertex record: {record:?}")]
    TruncatedRecord {
        /// The offending record text
        record: String,
    },

    /// Vertex record field that does not parse as a number
    #[error("Invalid coordinate {token:?} in record {record:?}")]
    InvalidCoordinate {
        /// The unparseable field
        token: String,
        /// The record it appeared in
        record: String,
    },

    /// Full mesh build with no vertex records; a bounding box cannot be
    /// derived from an empty vertex set
    #[error("No vertex records found; cannot build an empty mesh")]
    EmptyMesh,

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of unique vertices in the build
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Number of triangles in the build
        count: usize,
        /// Configured limit
        max: usize,
    },
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
