//! Viewport size tracking and the field anchor.
//!
//! The particle field's local origin sits at the image center; on screen it
//! is anchored to the viewport center. Every pointer coordinate is
//! translated by this anchor before influence testing, and the camera's
//! visible bounds follow the viewport one-to-one (one field unit per pixel).

use glam::Vec2;

use crate::gpu::Camera;

/// Current window/container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Record a new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// On-screen offset of the particle field's local origin: the viewport
    /// center.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Point the camera at this viewport: origin bottom-left, one unit per
    /// pixel.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.set_bounds(self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_the_viewport_center() {
        let mut viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.anchor(), Vec2::new(400.0, 300.0));

        viewport.resize(1280.0, 720.0);
        assert_eq!(viewport.anchor(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn resize_updates_the_camera_bounds() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let mut camera = Camera::new(800.0, 600.0);

        viewport.resize(1024.0, 768.0);
        viewport.apply_to(&mut camera);
        assert_eq!(camera.right, 1024.0);
        assert_eq!(camera.top, 768.0);
        assert_eq!(camera.left, 0.0);
        assert_eq!(camera.bottom, 0.0);
    }
}
