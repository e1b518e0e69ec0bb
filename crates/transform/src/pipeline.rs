use crate::matrix;
use glam::{Mat4, Vec3};
use tetraview_common::{CameraPose, ProjectionConfig, Viewport};

/// Perspective frustum: vertical field of view plus viewport and clip planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_degrees: f32,
    pub width: f32,
    pub height: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn from_config(config: &ProjectionConfig, viewport: Viewport) -> Self {
        Self {
            fov_degrees: config.fov_degrees,
            width: viewport.width as f32,
            height: viewport.height as f32,
            near: config.near,
            far: config.far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        matrix::perspective(self.fov_degrees, self.width, self.height, self.near, self.far)
    }
}

/// Composes one world-view-projection matrix from independent stages.
///
/// The product is `Projection * View * Translation * Rz * Ry * Rx * Scale`,
/// applied to column vectors. The view stage is the camera basis rotation
/// followed by a translation that moves the camera position to the origin.
/// Stages that were never configured are identity, so `transform()` is
/// always safe to call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    scale: Vec3,
    rotation: Vec3,
    world_pos: Vec3,
    camera: Option<CameraPose>,
    perspective: Option<Perspective>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            world_pos: Vec3::ZERO,
            camera: None,
            perspective: None,
        }
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    /// Rotation angles in degrees about X, Y and Z.
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn world_pos(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.world_pos = Vec3::new(x, y, z);
        self
    }

    pub fn set_camera(&mut self, pose: CameraPose) -> &mut Self {
        self.camera = Some(pose);
        self
    }

    pub fn set_perspective(&mut self, perspective: Perspective) -> &mut Self {
        self.perspective = Some(perspective);
        self
    }

    /// Object space to world space: `Translation * Rz * Ry * Rx * Scale`.
    pub fn world_transform(&self) -> Mat4 {
        matrix::translation(self.world_pos)
            * matrix::rotation(self.rotation)
            * matrix::scale(self.scale)
    }

    /// World space to camera space, or identity without a camera.
    pub fn view_transform(&self) -> Mat4 {
        match &self.camera {
            Some(pose) => {
                matrix::view(pose.target, pose.up) * matrix::translation(-pose.position)
            }
            None => Mat4::IDENTITY,
        }
    }

    /// Camera space to clip space, or identity without a frustum.
    pub fn projection_transform(&self) -> Mat4 {
        self.perspective
            .as_ref()
            .map_or(Mat4::IDENTITY, Perspective::matrix)
    }

    /// The full world-view-projection product.
    pub fn transform(&self) -> Mat4 {
        let wvp = self.projection_transform() * self.view_transform() * self.world_transform();
        tracing::trace!(?wvp, "composed transform");
        wvp
    }
}
