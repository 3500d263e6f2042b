//! Contentful-pixel extraction from decoded image buffers.
//!
//! A particle field reproduces its source image one particle per "contentful"
//! pixel: any pixel whose RGB channel sum clears a small threshold. Near-black
//! pixels (and therefore fully transparent pixels composited on black) carry
//! no visual information and are skipped, which typically discards the bulk
//! of a logo or line-art source.
//!
//! Sampling is a pure function of the buffer. Output order is row-major by
//! source index and becomes each particle's stable index for the lifetime of
//! the field.

use glam::Vec2;
use image::RgbaImage;

/// Minimum r+g+b channel sum for a pixel to become a particle seed.
///
/// Low enough to tolerate compression noise around genuine content, high
/// enough to drop near-black backgrounds.
pub const CONTENTFUL_PIXEL_THRESHOLD: u32 = 6;

/// A single particle seed sampled from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSeed {
    /// Pixel x coordinate in the source buffer.
    pub x: u32,
    /// Pixel y coordinate converted to Y-up: `height - row`.
    pub y: u32,
    /// Raw RGB channels of the source pixel.
    pub color: [u8; 3],
}

impl PixelSeed {
    /// Seed position as a vector, still in (Y-up) image coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Extract contentful pixels from row-major RGBA bytes.
///
/// `data` holds `width * height` pixels, 4 bytes each; any trailing partial
/// pixel is ignored. Rows are scanned top to bottom, and the row index is
/// flipped so that seed coordinates are Y-up (row 0 maps to `y = height`).
pub fn contentful_pixels(width: u32, height: u32, data: &[u8]) -> Vec<PixelSeed> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let pixel_count = width as usize * height as usize;
    let mut seeds = Vec::new();
    for (index, px) in data.chunks_exact(4).take(pixel_count).enumerate() {
        let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
        if sum < CONTENTFUL_PIXEL_THRESHOLD {
            continue;
        }
        let index = index as u32;
        seeds.push(PixelSeed {
            x: index % width,
            y: height - index / width,
            color: [px[0], px[1], px[2]],
        });
    }
    seeds
}

/// Sample a decoded [`image::RgbaImage`] directly.
pub fn from_image(image: &RgbaImage) -> Vec<PixelSeed> {
    contentful_pixels(image.width(), image.height(), image.as_raw())
}
