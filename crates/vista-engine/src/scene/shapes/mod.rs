pub(crate) mod image;
pub(crate) mod rect;
pub(crate) mod text;

pub use self::image::ImageCmd;
pub use self::rect::RectCmd;
pub use self::text::TextCmd;

use crate::paint::Color;

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
