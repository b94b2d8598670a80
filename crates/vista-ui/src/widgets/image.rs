use vista_engine::coords::{Rect, Vec2};
use vista_engine::scene::{Bitmap, Layer};

/// A bitmap drawn at a fixed canvas position.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    label: String,
    pos: Vec2,
    bitmap: Bitmap,
    visible: bool,
}

impl Image {
    pub fn new(label: impl Into<String>, pos: Vec2, bitmap: Bitmap) -> Self {
        Self { label: label.into(), pos, bitmap, visible: true }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn set_bitmap(&mut self, bitmap: Bitmap) {
        self.bitmap = bitmap;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.bitmap.size())
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn draw(&self, layer: &mut Layer) {
        if self.visible {
            layer.push_image(&self.bitmap, self.pos);
        }
    }
}
