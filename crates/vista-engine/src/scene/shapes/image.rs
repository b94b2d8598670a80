use crate::coords::Vec2;
use crate::scene::{Bitmap, DrawCmd, Layer};

/// Bitmap draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub bitmap: Bitmap,
    /// Top-left of the bitmap in layer pixels.
    pub origin: Vec2,
}

impl Layer {
    /// Records a bitmap draw command.
    pub fn push_image(&mut self, bitmap: &Bitmap, origin: Vec2) {
        self.push(DrawCmd::Image(ImageCmd { bitmap: bitmap.clone(), origin }));
    }
}
