//! Viewer configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock 1024x768 viewer.

use crate::types::Viewport;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "tetraview".into(),
            fullscreen: false,
        }
    }
}

/// Camera controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Width of the edge band, in pixels, that triggers auto-panning.
    pub margin: u32,
    /// Degrees rotated per render tick while panning.
    pub edge_pan_step: f32,
    /// Pixels of cursor travel per degree of rotation.
    pub mouse_sensitivity: f32,
    /// Distance moved per key press.
    pub key_step: f32,
    /// Ask the window to put the cursor back in the middle after each pan tick.
    pub recenter_on_pan: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            margin: 10,
            edge_pan_step: 0.1,
            mouse_sensitivity: 20.0,
            key_step: 0.1,
            recenter_on_pan: true,
        }
    }
}

/// Perspective frustum parameters. Viewport size comes from the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Placement and animation of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Degrees added to the Y rotation every frame.
    pub rotation_step: f32,
    pub world_position: Vec3,
    pub scale: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_step: 0.1,
            world_position: Vec3::new(0.0, 0.0, 3.0),
            scale: Vec3::ONE,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub scene: SceneConfig,
}

impl ViewerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width, self.window.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let p = &self.projection;
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov must be in (0, 180) degrees, got {}",
                p.fov_degrees
            )));
        }
        if p.near <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "near plane must be positive, got {}",
                p.near
            )));
        }
        if p.far <= p.near {
            return Err(ConfigError::Invalid(format!(
                "far plane ({}) must lie beyond near plane ({})",
                p.far, p.near
            )));
        }
        let cam = &self.camera;
        if !(cam.mouse_sensitivity.is_finite() && cam.mouse_sensitivity > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "mouse sensitivity must be positive, got {}",
                cam.mouse_sensitivity
            )));
        }
        let steps = [
            ("camera.edge_pan_step", cam.edge_pan_step),
            ("camera.key_step", cam.key_step),
            ("scene.rotation_step", self.scene.rotation_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
