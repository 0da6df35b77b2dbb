//! # Mesh Operations
//!
//! Operations deriving new meshes from existing ones.

pub mod diff;

pub use diff::{DiffSummary, difference};
