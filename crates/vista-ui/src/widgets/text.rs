use std::fmt;
use std::rc::Rc;

use vista_engine::coords::{Rect, Vec2};
use vista_engine::paint::{Color, Rgb};
use vista_engine::scene::Layer;
use vista_engine::text::{FontSpec, GlyphRun, Typesetter};

/// A single line of text.
///
/// The glyph run is measured once per [`render`](Self::render) call, not
/// per frame.
pub struct Text {
    label: String,
    pos: Vec2,
    font: FontSpec,
    colour: Rgb,
    run: GlyphRun,
    visible: bool,
    typesetter: Rc<dyn Typesetter>,
}

impl Text {
    pub fn new(
        label: impl Into<String>,
        pos: Vec2,
        font: FontSpec,
        text: &str,
        colour: Rgb,
        typesetter: Rc<dyn Typesetter>,
    ) -> Self {
        let run = typesetter.layout(&font, text, Color::from_rgb(colour, 1.0));
        Self { label: label.into(), pos, font, colour, run, visible: true, typesetter }
    }

    /// Replaces the displayed string, optionally switching colour. The colour
    /// sticks for later renders.
    pub fn render(&mut self, text: &str, colour: Option<Rgb>) {
        if let Some(colour) = colour {
            self.colour = colour;
        }
        self.run = self.typesetter.layout(&self.font, text, Color::from_rgb(self.colour, 1.0));
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.run.text
    }

    #[inline]
    pub fn run(&self) -> &GlyphRun {
        &self.run
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    #[inline]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Area covered by the measured run.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.run.size)
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
            layer.push_text(&self.run, self.pos);
        }
    }

    /// Draws at `pos + self.pos`; used by widgets that embed a text.
    pub(crate) fn draw_at(&self, layer: &mut Layer, origin: Vec2) {
        if self.visible {
            layer.push_text(&self.run, origin + self.pos);
        }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("label", &self.label)
            .field("pos", &self.pos)
            .field("text", &self.run.text)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
