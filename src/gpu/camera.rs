//! Orthographic camera over the particle plane.

use glam::Mat4;

/// Pixel-aligned orthographic camera: origin at the bottom-left, right and
/// top bounds equal to the viewport size.
pub struct Camera {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Camera {
    /// Camera covering a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            right: width,
            bottom: 0.0,
            top: height,
        }
    }

    /// Match the visible bounds to a new viewport size.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.right = width;
        self.top = height;
    }

    /// Projection matrix for rendering. The particle plane sits at z = 0.
    pub fn view_proj(&self) -> Mat4 {
        Mat4::orthographic_rh(self.left, self.right, self.bottom, self.top, -100.0, 100.0)
    }
}
