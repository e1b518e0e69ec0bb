//! Shared types and configuration for the tetraview workspace.

mod config;
mod types;

pub use config::{
    CameraConfig, ConfigError, ProjectionConfig, SceneConfig, ViewerConfig, WindowConfig,
};
pub use types::{CameraPose, Viewport};

pub fn crate_info() -> &'static str {
    "tetraview-common v0.1.0"
}
