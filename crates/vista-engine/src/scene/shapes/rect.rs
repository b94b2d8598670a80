use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, Layer};

use super::Stroke;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub stroke: Option<Stroke>,
}

impl Layer {
    /// Records a filled rectangle with an optional stroke.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color, stroke: Option<Stroke>) {
        self.push(DrawCmd::Rect(RectCmd { rect, color, stroke }));
    }
}
