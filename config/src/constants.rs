//! # Configuration Constants
//!
//! Centralized constants for the diff3d inspection pipeline. Ray-casting
//! parameters and input safety limits are defined here.
//!
//! ## Categories
//!
//! - **Ray Casting**: Probe reach scaling for point classification
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// RAY CASTING CONSTANTS
// =============================================================================

/// Scale factor applied to a mesh's axial extent to produce the probe reach.
///
/// Classification rays must terminate well outside the target mesh so that
/// every surface crossing along the probe direction is counted. The reach is
/// computed as `(|min z| + |max z|) * RAY_CLEARANCE_FACTOR`, which clears the
/// model by two orders of magnitude.
///
/// # Example
///
/// ```rust
/// use config::constants::RAY_CLEARANCE_FACTOR;
///
/// let bounds_min_z: f64 = -2.0;
/// let bounds_max_z: f64 = 3.0;
/// let reach = (bounds_min_z.abs() + bounds_max_z.abs()) * RAY_CLEARANCE_FACTOR;
/// assert_eq!(reach, 500.0);
/// ```
pub const RAY_CLEARANCE_FACTOR: f64 = 100.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Maximum file size for imported files (in bytes).
///
/// Prevents loading extremely large files that could cause memory issues.
/// 100 MB default.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
