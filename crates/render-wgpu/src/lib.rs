//! wgpu render backend for tetraview.
//!
//! Compiles the mesh shader, uploads the static tetrahedron buffers once and
//! draws them every frame with the frame's WVP matrix as the only uniform.
//!
//! # Invariants
//! - Renderer never mutates scene or camera state.
//! - Setup failures are returned as [`RenderError`]; callers treat them as fatal.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, RenderError};
pub use gpu::TetraRenderer;
