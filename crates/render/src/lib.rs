//! Rendering adapter: the owned frame context and a renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read finished frames; they never mutate camera or scene state.
//! - Each frame runs the camera render hook before composing its matrix.
//!
//! The debug text renderer stands in for a GPU backend in headless runs and
//! tests. The trait is stable; backends plug in without changing consumers.

pub mod mesh;
mod renderer;
mod scene;

pub use mesh::{TETRAHEDRON_INDICES, TETRAHEDRON_VERTICES};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{Frame, Scene};

pub fn crate_info() -> &'static str {
    "tetraview-render v0.1.0"
}
