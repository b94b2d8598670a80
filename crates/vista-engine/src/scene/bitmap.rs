use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::coords::Vec2;

/// Shared handle to decoded pixel data (straight-alpha RGBA8).
///
/// Cloning is cheap; decoding and loading stay with the host application.
#[derive(Debug, Clone)]
pub struct Bitmap(Arc<RgbaImage>);

impl Bitmap {
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Single-colour bitmap, handy for placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Size in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.0.width() as f32, self.0.height() as f32)
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }
}

/// Two handles are equal when they share the same pixel buffer.
impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
