use tetraview_common::Viewport;

/// Where the cursor sits relative to the edge bands of the window.
///
/// Each band is `margin` pixels wide. A cursor in a band auto-pans the camera
/// on every render tick until a later mouse move takes it out of the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePan {
    #[default]
    Idle,
    Left,
    Right,
    Up,
    Down,
}

impl EdgePan {
    /// Pick the band containing `(x, y)`.
    ///
    /// Corners resolve to the horizontal band.
    pub fn classify(x: i32, y: i32, viewport: Viewport, margin: u32) -> Self {
        let margin = margin as i32;
        let width = viewport.width as i32;
        let height = viewport.height as i32;

        if x < margin {
            EdgePan::Left
        } else if x >= width - margin {
            EdgePan::Right
        } else if y < margin {
            EdgePan::Up
        } else if y >= height - margin {
            EdgePan::Down
        } else {
            EdgePan::Idle
        }
    }
}
