use crate::edge::EdgePan;
use glam::{IVec2, Quat, Vec3};
use tetraview_common::{CameraConfig, CameraPose, Viewport};
use tetraview_input::CameraKey;

/// Mouse-look camera driven by cursor position, edge panning and arrow keys.
///
/// Orientation is stored as two accumulated angles in degrees. `angle_h`
/// turns about the world Y axis and is kept in `[0, 360)`; `angle_v` tilts
/// about the horizontal axis and is kept in `[-90, 90]`, positive looking
/// down. Target and up are rebuilt from the angles after every change, so
/// they are always unit length and perpendicular.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    angle_h: f32,
    angle_v: f32,
    mouse: IVec2,
    viewport: Viewport,
    edge: EdgePan,
    settings: CameraConfig,
    /// Cursor warp we asked for but whose echo event has not arrived yet.
    pending_warp: Option<IVec2>,
}

impl CameraController {
    /// Camera at the origin facing +Z with default tuning.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(Viewport::new(width, height), CameraConfig::default())
    }

    pub fn with_config(viewport: Viewport, settings: CameraConfig) -> Self {
        Self::with_pose(viewport, settings, CameraPose::default())
    }

    /// Start from an explicit pose. The angles are derived from `pose.target`.
    pub fn with_pose(viewport: Viewport, settings: CameraConfig, pose: CameraPose) -> Self {
        let mut camera = Self {
            position: pose.position,
            target: pose.target,
            up: pose.up,
            angle_h: 0.0,
            angle_v: 0.0,
            mouse: viewport.center(),
            viewport,
            edge: EdgePan::Idle,
            settings,
            pending_warp: None,
        };
        camera.reset_angles(pose.target);
        camera
    }

    /// Reset to the default pose for a window of the given size.
    pub fn initialize(&mut self, width: u32, height: u32) {
        *self = Self::with_config(Viewport::new(width, height), self.settings);
        tracing::debug!(width, height, "camera initialized");
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
            up: self.up,
        }
    }

    pub fn angle_h(&self) -> f32 {
        self.angle_h
    }

    pub fn angle_v(&self) -> f32 {
        self.angle_v
    }

    pub fn edge_pan(&self) -> EdgePan {
        self.edge
    }

    pub fn mouse_position(&self) -> IVec2 {
        self.mouse
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new window size. The pan state is re-evaluated on the next
    /// mouse move.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Apply one arrow-key move. Nothing is retained afterwards.
    pub fn on_key(&mut self, key: CameraKey) {
        let step = self.settings.key_step;
        match key {
            CameraKey::Forward => self.position += self.target * step,
            CameraKey::Backward => self.position -= self.target * step,
            CameraKey::StrafeLeft => {
                let left = self.target.cross(self.up).normalize();
                self.position += left * step;
            }
            CameraKey::StrafeRight => {
                let right = self.up.cross(self.target).normalize();
                self.position += right * step;
            }
        }
        tracing::trace!(?key, position = ?self.position, "camera moved");
    }

    /// Record where the cursor actually is without turning the view.
    ///
    /// Used when the window cannot place the cursor at the center on startup,
    /// so the first real move is measured from the true pointer position.
    pub fn sync_mouse(&mut self, x: i32, y: i32) {
        self.mouse = IVec2::new(x, y);
        self.pending_warp = None;
    }

    /// The window could not perform the last requested warp. The cursor is
    /// still where the last mouse move left it.
    pub fn cancel_warp(&mut self) {
        if self.pending_warp.take().is_some() {
            tracing::debug!("cursor warp dropped");
        }
    }

    /// Turn the view by the cursor delta and recompute the pan state.
    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        let pos = IVec2::new(x, y);
        if self.pending_warp.take() == Some(pos) {
            // Echo of our own recentering; not user motion.
            self.mouse = pos;
            return;
        }

        let delta = pos - self.mouse;
        self.mouse = pos;

        self.angle_h += delta.x as f32 / self.settings.mouse_sensitivity;
        self.angle_v += delta.y as f32 / self.settings.mouse_sensitivity;

        let edge = EdgePan::classify(x, y, self.viewport, self.settings.margin);
        if edge != self.edge {
            tracing::debug!(from = ?self.edge, to = ?edge, "edge pan state changed");
            self.edge = edge;
        }

        self.update();
    }

    /// Advance edge panning by one frame.
    ///
    /// Returns the cursor position the window should warp to, if the camera
    /// panned and recentering is enabled.
    pub fn on_render_tick(&mut self) -> Option<IVec2> {
        let step = self.settings.edge_pan_step;
        let panned = match self.edge {
            EdgePan::Idle => false,
            EdgePan::Left => {
                self.angle_h -= step;
                true
            }
            EdgePan::Right => {
                self.angle_h += step;
                true
            }
            EdgePan::Up if self.angle_v > -90.0 => {
                self.angle_v -= step;
                true
            }
            EdgePan::Down if self.angle_v < 90.0 => {
                self.angle_v += step;
                true
            }
            EdgePan::Up | EdgePan::Down => false,
        };

        if !panned {
            return None;
        }
        self.update();

        if !self.settings.recenter_on_pan {
            return None;
        }
        // `mouse` moves only once the echo confirms the warp happened.
        let center = self.viewport.center();
        self.pending_warp = Some(center);
        Some(center)
    }

    fn reset_angles(&mut self, target: Vec3) {
        let target = target.normalize();
        let horizontal = Vec3::new(target.x, 0.0, target.z);
        self.angle_h = (-horizontal.z).atan2(horizontal.x).to_degrees();
        self.angle_v = -target.y.clamp(-1.0, 1.0).asin().to_degrees();
        self.update();
    }

    /// Rebuild target and up from the angles.
    fn update(&mut self) {
        self.angle_h = self.angle_h.rem_euclid(360.0);
        self.angle_v = self.angle_v.clamp(-90.0, 90.0);

        let v_axis = Vec3::Y;
        let view = Quat::from_axis_angle(v_axis, self.angle_h.to_radians()) * Vec3::X;
        let h_axis = v_axis.cross(view).normalize();
        let view = Quat::from_axis_angle(h_axis, self.angle_v.to_radians()) * view;

        self.target = view.normalize();
        self.up = self.target.cross(h_axis).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(cam: &CameraController) {
        assert!((cam.target().length() - 1.0).abs() < EPS);
        assert!((cam.up().length() - 1.0).abs() < EPS);
        assert!(cam.target().dot(cam.up()).abs() < EPS);
    }

    #[test]
    fn initialize_sets_default_pose() {
        let cam = CameraController::new(1024, 768);
        assert_eq!(cam.position(), Vec3::ZERO);
        assert!(cam.target().abs_diff_eq(Vec3::Z, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert!((cam.angle_h() - 270.0).abs() < EPS);
        assert!(cam.angle_v().abs() < EPS);
        assert_eq!(cam.mouse_position(), IVec2::new(512, 384));
        assert_eq!(cam.edge_pan(), EdgePan::Idle);
    }

    #[test]
    fn initialize_resets_moved_camera() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_key(CameraKey::Forward);
        cam.on_mouse_move(100, 100);
        cam.initialize(800, 600);
        assert_eq!(cam.position(), Vec3::ZERO);
        assert!(cam.target().abs_diff_eq(Vec3::Z, EPS));
        assert_eq!(cam.mouse_position(), IVec2::new(400, 300));
        assert_eq!(cam.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn forward_key_steps_along_target() {
        let mut cam = CameraController::new(1024, 768);
        let start = cam.position();
        cam.on_key(CameraKey::Forward);
        let expected = start + cam.target() * CameraConfig::default().key_step;
        assert!(cam.position().abs_diff_eq(expected, EPS));
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.1), EPS));
    }

    #[test]
    fn strafe_and_backward_keys() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_key(CameraKey::StrafeLeft);
        assert!(cam.position().abs_diff_eq(Vec3::new(-0.1, 0.0, 0.0), EPS));
        cam.on_key(CameraKey::StrafeRight);
        cam.on_key(CameraKey::StrafeRight);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), EPS));
        cam.on_key(CameraKey::Backward);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.1, 0.0, -0.1), EPS));
    }

    #[test]
    fn keys_do_not_change_orientation() {
        let mut cam = CameraController::new(1024, 768);
        let target = cam.target();
        cam.on_key(CameraKey::Forward);
        cam.on_key(CameraKey::StrafeLeft);
        assert_eq!(cam.target(), target);
        assert_eq!(cam.edge_pan(), EdgePan::Idle);
    }

    #[test]
    fn mouse_delta_turns_view() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(512 + 40, 384 + 20);
        assert!((cam.angle_h() - 272.0).abs() < EPS);
        assert!((cam.angle_v() - 1.0).abs() < EPS);
        // Positive vertical angle looks down.
        assert!(cam.target().y < 0.0);
    }

    #[test]
    fn horizontal_angle_wraps_into_range() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(512 + 2000, 384);
        assert!((cam.angle_h() - 10.0).abs() < 1e-3);
        cam.on_mouse_move(512 - 2000, 384);
        assert!((cam.angle_h() - 170.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_angle_is_clamped() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(512, 384 + 5000);
        assert_eq!(cam.angle_v(), 90.0);
        assert!(cam.target().abs_diff_eq(Vec3::NEG_Y, EPS));
        assert_orthonormal(&cam);
    }

    #[test]
    fn orientation_stays_orthonormal() {
        let mut cam = CameraController::new(1024, 768);
        let path = [
            (600, 300),
            (5, 384),
            (1020, 700),
            (512, 2),
            (-40, 900),
            (333, 765),
            (512, 384),
            (1500, -200),
        ];
        for (i, &(x, y)) in path.iter().enumerate() {
            cam.on_mouse_move(x, y);
            assert_orthonormal(&cam);
            for _ in 0..(i * 7) {
                cam.on_render_tick();
                assert_orthonormal(&cam);
            }
        }
    }

    #[test]
    fn left_band_enters_pan_left() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(9, 384);
        assert_eq!(cam.edge_pan(), EdgePan::Left);
        cam.on_mouse_move(11, 384);
        assert_eq!(cam.edge_pan(), EdgePan::Idle);
    }

    #[test]
    fn pan_left_ticks_decrease_horizontal_angle() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(5, 384);
        assert_eq!(cam.edge_pan(), EdgePan::Left);

        let start = cam.angle_h();
        let ticks = 50;
        for _ in 0..ticks {
            assert_eq!(cam.on_render_tick(), Some(IVec2::new(512, 384)));
        }
        let expected = (start - ticks as f32 * 0.1).rem_euclid(360.0);
        assert!((cam.angle_h() - expected).abs() < 1e-2);
        assert_eq!(cam.edge_pan(), EdgePan::Left);
    }

    #[test]
    fn pan_right_wraps_past_full_turn() {
        let settings = CameraConfig {
            edge_pan_step: 30.0,
            ..CameraConfig::default()
        };
        let mut cam = CameraController::with_config(Viewport::new(1024, 768), settings);
        cam.on_mouse_move(1020, 384);
        let start = cam.angle_h();
        for _ in 0..5 {
            cam.on_render_tick();
        }
        let expected = (start + 150.0).rem_euclid(360.0);
        assert!((cam.angle_h() - expected).abs() < 1e-3);
        assert!(cam.angle_h() < 360.0);
    }

    #[test]
    fn pan_state_survives_recenter_echo() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(3, 384);
        let warp = cam.on_render_tick().unwrap();
        let angle = cam.angle_h();

        cam.on_mouse_move(warp.x, warp.y);
        assert_eq!(cam.edge_pan(), EdgePan::Left);
        assert_eq!(cam.angle_h(), angle);

        cam.on_mouse_move(300, 384);
        assert_eq!(cam.edge_pan(), EdgePan::Idle);
        assert_eq!(cam.on_render_tick(), None);
    }

    #[test]
    fn failed_warp_keeps_last_cursor_position() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(3, 384);
        assert_eq!(cam.on_render_tick(), Some(IVec2::new(512, 384)));
        assert_eq!(cam.mouse_position(), IVec2::new(3, 384));

        // No echo arrives; the next real event is a one-pixel nudge.
        let before = cam.angle_h();
        cam.on_mouse_move(4, 384);
        let turned = (cam.angle_h() - before + 180.0).rem_euclid(360.0) - 180.0;
        assert!((turned - 0.05).abs() < 1e-3);
    }

    #[test]
    fn cancelled_warp_does_not_swallow_center_move() {
        let mut cam = CameraController::new(1024, 768);
        cam.on_mouse_move(3, 384);
        cam.on_render_tick();
        cam.cancel_warp();

        let before = cam.angle_h();
        cam.on_mouse_move(512, 384);
        assert!(cam.angle_h() != before);
        assert_eq!(cam.mouse_position(), IVec2::new(512, 384));
        assert_eq!(cam.edge_pan(), EdgePan::Idle);
    }

    #[test]
    fn synced_cursor_does_not_turn_view() {
        let mut cam = CameraController::new(1024, 768);
        let pose = cam.pose();
        cam.sync_mouse(100, 100);
        assert_eq!(cam.pose(), pose);
        assert_eq!(cam.mouse_position(), IVec2::new(100, 100));

        cam.on_mouse_move(101, 100);
        assert!((cam.angle_h() - 270.05).abs() < 1e-3);
        assert!(cam.angle_v().abs() < EPS);
    }

    #[test]
    fn no_warp_when_recentering_disabled() {
        let settings = CameraConfig {
            recenter_on_pan: false,
            ..CameraConfig::default()
        };
        let mut cam = CameraController::with_config(Viewport::new(1024, 768), settings);
        cam.on_mouse_move(1023, 384);
        let before = cam.angle_h();
        assert_eq!(cam.on_render_tick(), None);
        assert!((cam.angle_h() - (before + 0.1)).abs() < 1e-3);
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut cam = CameraController::new(1024, 768);
        let pose = cam.pose();
        assert_eq!(cam.on_render_tick(), None);
        assert_eq!(cam.pose(), pose);
    }

    #[test]
    fn upward_pan_stops_at_vertical() {
        let settings = CameraConfig {
            edge_pan_step: 10.0,
            ..CameraConfig::default()
        };
        let mut cam = CameraController::with_config(Viewport::new(1024, 768), settings);
        cam.on_mouse_move(512, 2);
        assert_eq!(cam.edge_pan(), EdgePan::Up);
        for _ in 0..20 {
            cam.on_render_tick();
        }
        assert_eq!(cam.angle_v(), -90.0);
        assert_eq!(cam.on_render_tick(), None);
        assert!(cam.target().abs_diff_eq(Vec3::Y, EPS));
        assert_orthonormal(&cam);
    }

    #[test]
    fn angles_derived_from_initial_target() {
        let pose = CameraPose {
            target: Vec3::X,
            ..CameraPose::default()
        };
        let cam = CameraController::with_pose(Viewport::default(), CameraConfig::default(), pose);
        assert!(cam.angle_h().abs() < EPS || (cam.angle_h() - 360.0).abs() < EPS);
        assert!(cam.target().abs_diff_eq(Vec3::X, EPS));

        let target = Vec3::new(-1.0, -0.5, -1.0).normalize();
        let cam = CameraController::with_pose(
            Viewport::default(),
            CameraConfig::default(),
            CameraPose {
                target,
                ..CameraPose::default()
            },
        );
        assert!(cam.target().abs_diff_eq(target, EPS));
        assert_orthonormal(&cam);
    }
}
