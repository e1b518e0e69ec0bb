//! Camera controller: mouse look, edge panning and arrow-key movement.
//!
//! # Invariants
//! - Target and up are unit length and perpendicular after every update.
//! - Edge-pan state only changes on mouse moves; render ticks only apply it.
//! - Camera motion is single-threaded; the owner drives every mutation.

mod controller;
mod edge;

pub use controller::CameraController;
pub use edge::EdgePan;

pub fn crate_info() -> &'static str {
    "tetraview-camera v0.1.0"
}
