//! The renderer capability.
//!
//! The camera and canvas never touch pixels themselves: every primitive ends
//! up as a call on a [`Renderer`] supplied by the host. Coordinates handed to
//! a renderer are always screen pixels (top-left origin, +Y down).

mod record;

pub use record::{CommandRecorder, RenderOp};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::Layer;
use crate::text::GlyphRun;

/// Pixel-space drawing backend.
pub trait Renderer {
    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    fn draw_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draws a measured glyph run with its top-left corner at `origin`.
    fn draw_text(&mut self, run: &GlyphRun, origin: Vec2);

    /// Composites an offscreen layer with its top-left corner at `origin`.
    fn blit(&mut self, layer: &Layer, origin: Vec2);
}
