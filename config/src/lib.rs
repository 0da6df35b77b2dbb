//! # Config Crate
//!
//! Centralized configuration constants for the diff3d inspection pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RAY_CLEARANCE_FACTOR, MAX_VERTICES};
//!
//! // Scale a mesh extent into a ray reach that clears the whole model
//! let z_extent = 4.0 + 6.0; // |min z| + |max z|
//! let reach = z_extent * RAY_CLEARANCE_FACTOR;
//! assert!(reach > z_extent);
//!
//! // Guard mesh sizes against runaway inputs
//! let vertex_count = 1_000;
//! assert!(vertex_count < MAX_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: No platform-specific or environment-derived values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
