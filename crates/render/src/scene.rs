use glam::{IVec2, Mat4};
use tetraview_camera::CameraController;
use tetraview_common::{CameraPose, ProjectionConfig, SceneConfig, ViewerConfig, Viewport};
use tetraview_input::{Action, Key};
use tetraview_transform::{Perspective, Pipeline};

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Frames produced so far, starting at 1.
    pub index: u64,
    /// Mesh Y rotation in degrees.
    pub rotation: f32,
    pub pose: CameraPose,
    pub wvp: Mat4,
    /// Where the window should move the cursor, if the camera asked for it.
    pub cursor_warp: Option<IVec2>,
}

/// Owned viewer state: camera, mesh rotation and frame settings.
///
/// Input handlers mutate the scene between frames; [`Scene::advance_frame`]
/// folds the pending effects into the next matrix.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: CameraController,
    viewport: Viewport,
    projection: ProjectionConfig,
    settings: SceneConfig,
    rotation: f32,
    frame_index: u64,
    quit_requested: bool,
}

impl Scene {
    pub fn new(config: &ViewerConfig) -> Self {
        let viewport = config.viewport();
        Self {
            camera: CameraController::with_config(viewport, config.camera),
            viewport,
            projection: config.projection,
            settings: config.scene,
            rotation: 0.0,
            frame_index: 0,
            quit_requested: false,
        }
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Map a key to its action and apply it.
    pub fn handle_key(&mut self, key: Key) -> Action {
        let action = Action::from_key(key);
        self.apply(action);
        action
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Camera(key) => self.camera.on_key(key),
            Action::Quit => {
                tracing::info!("quit requested");
                self.quit_requested = true;
            }
            Action::Noop => {}
        }
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        self.camera.on_mouse_move(x, y);
    }

    /// Adopt the real cursor position without turning the camera.
    pub fn sync_cursor(&mut self, x: i32, y: i32) {
        self.camera.sync_mouse(x, y);
    }

    /// Tell the camera the window could not honor the frame's cursor warp.
    pub fn cancel_cursor_warp(&mut self) {
        self.camera.cancel_warp();
    }

    /// Track a new window size. Zero-sized (minimized) windows are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.camera.set_viewport(self.viewport);
        tracing::debug!(width, height, "scene resized");
    }

    /// Run the camera's render hook, advance the mesh rotation and compose
    /// the frame's matrix.
    pub fn advance_frame(&mut self) -> Frame {
        let cursor_warp = self.camera.on_render_tick();

        self.rotation = (self.rotation + self.settings.rotation_step).rem_euclid(360.0);
        self.frame_index += 1;

        let pose = self.camera.pose();
        let scale = self.settings.scale;
        let world = self.settings.world_position;
        let mut pipeline = Pipeline::new();
        pipeline
            .scale(scale.x, scale.y, scale.z)
            .rotate(0.0, self.rotation, 0.0)
            .world_pos(world.x, world.y, world.z)
            .set_camera(pose)
            .set_perspective(Perspective::from_config(&self.projection, self.viewport));

        Frame {
            index: self.frame_index,
            rotation: self.rotation,
            pose,
            wvp: pipeline.transform(),
            cursor_warp,
        }
    }
}
