//! Input mapping: window-backend keys translated to viewer actions.
//!
//! # Invariants
//! - No window backend types cross this boundary.
//! - Key bindings are fixed; every key maps to exactly one action.

pub mod action;

pub use action::{Action, CameraKey, Key};

pub fn crate_info() -> &'static str {
    "tetraview-input v0.1.0"
}
