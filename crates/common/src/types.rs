use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

/// Camera placement: where the eye sits and which way it faces.
///
/// `target` is a direction, not a look-at point. Both `target` and `up` are
/// expected to be unit length and not parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::Z,
            up: Vec3::Y,
        }
    }
}

/// Window client area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Middle of the window in cursor coordinates.
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_faces_forward() {
        let pose = CameraPose::default();
        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.target, Vec3::Z);
        assert_eq!(pose.up, Vec3::Y);
    }

    #[test]
    fn viewport_center() {
        assert_eq!(Viewport::new(1024, 768).center(), IVec2::new(512, 384));
        assert_eq!(Viewport::new(801, 601).center(), IVec2::new(400, 300));
    }
}
