use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, Layer};
use crate::text::GlyphRun;

use super::Renderer;

/// One call received by a [`CommandRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Rect { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Polygon { points: Vec<Vec2>, color: Color },
    Text { text: String, origin: Vec2 },
    Blit { origin: Vec2, size: Vec2, commands: Vec<DrawCmd> },
}

/// Renderer that records every call instead of drawing.
///
/// Used by tests and by headless tooling that wants to inspect a frame.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    ops: Vec<RenderOp>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in arrival order.
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Returns the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Renderer for CommandRecorder {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(RenderOp::Rect { rect, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(RenderOp::Circle { center, radius, color });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ops.push(RenderOp::Line { from, to, color, width });
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        self.ops.push(RenderOp::Polygon { points: points.to_vec(), color });
    }

    fn draw_text(&mut self, run: &GlyphRun, origin: Vec2) {
        self.ops.push(RenderOp::Text { text: run.text.clone(), origin });
    }

    fn blit(&mut self, layer: &Layer, origin: Vec2) {
        self.ops.push(RenderOp::Blit {
            origin,
            size: layer.size(),
            commands: layer.commands().to_vec(),
        });
    }
}
