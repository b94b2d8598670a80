use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::DrawCmd;

/// Fixed-size offscreen compositing layer with per-pixel alpha.
///
/// A cleared layer is fully transparent. Commands are kept in insertion
/// order, which is paint order: later commands cover earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    size: Vec2,
    cmds: Vec<DrawCmd>,
}

impl Layer {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height), cmds: Vec::new() }
    }

    /// Layer size in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.size)
    }

    /// Resets the layer to fully transparent. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// True when nothing has been drawn since the last [`clear`](Self::clear).
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Recorded commands in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Floods the whole layer with `color`.
    #[inline]
    pub fn fill(&mut self, color: Color) {
        self.push(DrawCmd::Fill(color));
    }
}
