//! Standalone transform builders.
//!
//! Angles are in degrees. Model rotations are right-handed about each axis.
//! The view and projection stages use the camera-looks-down-+Z convention,
//! so a pose facing `Vec3::Z` produces an identity view.

use glam::{Mat4, Vec3, Vec4};

pub fn scale(s: Vec3) -> Mat4 {
    Mat4::from_scale(s)
}

pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

pub fn rotation_x(degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(degrees.to_radians())
}

pub fn rotation_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(degrees.to_radians())
}

pub fn rotation_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(degrees.to_radians())
}

/// Euler rotation applied X first, then Y, then Z: `Rz * Ry * Rx`.
pub fn rotation(degrees: Vec3) -> Mat4 {
    rotation_z(degrees.z) * rotation_y(degrees.y) * rotation_x(degrees.x)
}

/// Change of basis into camera space.
///
/// `up` is made perpendicular to `target` before use, and right is
/// `up × forward`. No translation is included. A `target` parallel to `up`
/// has no defined basis and yields NaNs.
pub fn view(target: Vec3, up: Vec3) -> Mat4 {
    let forward = target.normalize();
    let up = (up - forward * up.dot(forward)).normalize();
    let right = up.cross(forward);

    // Rows are right, up, forward.
    Mat4::from_cols(
        Vec4::new(right.x, up.x, forward.x, 0.0),
        Vec4::new(right.y, up.y, forward.y, 0.0),
        Vec4::new(right.z, up.z, forward.z, 0.0),
        Vec4::W,
    )
}

/// Symmetric perspective frustum from a vertical field of view.
///
/// Depth maps `near..far` onto `0..1`.
pub fn perspective(fov_degrees: f32, width: f32, height: f32, near: f32, far: f32) -> Mat4 {
    let aspect = width / height.max(f32::EPSILON);
    Mat4::perspective_lh(fov_degrees.to_radians(), aspect, near, far)
}

/// Sixteen floats, one row after another. Pair with a "transpose on upload"
/// flag when feeding column-major APIs.
pub fn row_major(m: &Mat4) -> [f32; 16] {
    m.transpose().to_cols_array()
}

/// Sixteen floats, one column after another, ready for WGSL/GLSL uniforms.
pub fn column_major(m: &Mat4) -> [f32; 16] {
    m.to_cols_array()
}
