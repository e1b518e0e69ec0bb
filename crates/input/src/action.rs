/// A key as delivered by whatever window backend is in use.
///
/// Backends translate their own key events into this type so the camera and
/// scene never see platform types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A printable character key.
    Char(char),
    /// Anything the viewer does not bind.
    Other,
}

/// One-shot camera moves triggered by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    /// Step along the view direction.
    Forward,
    /// Step against the view direction.
    Backward,
    /// Strafe along `forward × up`.
    StrafeLeft,
    /// Strafe along `up × forward`.
    StrafeRight,
}

/// A high-level action produced from raw key input.
///
/// The scene consumes actions, never raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Camera(CameraKey),
    /// End the program.
    Quit,
    /// Unbound key.
    Noop,
}

impl Action {
    /// Fixed key bindings: arrows move the camera, `q` quits.
    pub fn from_key(key: Key) -> Self {
        let action = match key {
            Key::ArrowUp => Action::Camera(CameraKey::Forward),
            Key::ArrowDown => Action::Camera(CameraKey::Backward),
            Key::ArrowLeft => Action::Camera(CameraKey::StrafeLeft),
            Key::ArrowRight => Action::Camera(CameraKey::StrafeRight),
            Key::Char('q') => Action::Quit,
            Key::Char(_) | Key::Other => Action::Noop,
        };
        tracing::trace!(?key, ?action, "mapped key");
        action
    }
}
