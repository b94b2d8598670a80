use crate::paint::Color;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command, in layer pixel coordinates.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Covers the whole layer.
    Fill(Color),
    Rect(RectCmd),
    Text(TextCmd),
    Image(ImageCmd),
}
