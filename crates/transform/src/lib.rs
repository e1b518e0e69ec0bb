//! Transform composition: scale, rotation, translation, camera and
//! perspective stages folded into one world-view-projection matrix.
//!
//! # Invariants
//! - Composition order is fixed: `Projection * View * Translation * Rz * Ry * Rx * Scale`.
//! - Every stage defaults to identity.
//! - Matrices are rebuilt from parameters on each call; nothing accumulates.

pub mod matrix;
mod pipeline;

pub use pipeline::{Perspective, Pipeline};

pub fn crate_info() -> &'static str {
    "tetraview-transform v0.1.0"
}
