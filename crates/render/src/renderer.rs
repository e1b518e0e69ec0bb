use crate::scene::Frame;
use std::fmt::Write;
use tetraview_transform::matrix;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a finished [`Frame`]; it never touches camera or scene
/// state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for headless runs and logs.
///
/// Prints the camera pose and the world-view-projection matrix row by row.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let p = frame.pose;
        let _ = writeln!(
            out,
            "=== Frame {} (rotation={:.2}) ===",
            frame.index, frame.rotation
        );
        let _ = writeln!(
            out,
            "Camera: pos=({:.3}, {:.3}, {:.3}) target=({:.3}, {:.3}, {:.3}) up=({:.3}, {:.3}, {:.3})",
            p.position.x,
            p.position.y,
            p.position.z,
            p.target.x,
            p.target.y,
            p.target.z,
            p.up.x,
            p.up.y,
            p.up.z
        );
        let rows = matrix::row_major(&frame.wvp);
        for row in rows.chunks(4) {
            let _ = writeln!(
                out,
                "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
                row[0], row[1], row[2], row[3]
            );
        }
        if let Some(warp) = frame.cursor_warp {
            let _ = writeln!(out, "  cursor -> ({}, {})", warp.x, warp.y);
        }
        out
    }
}
