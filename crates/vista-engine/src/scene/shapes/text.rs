use crate::coords::Vec2;
use crate::scene::{DrawCmd, Layer};
use crate::text::GlyphRun;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub run: GlyphRun,
    /// Top-left of the text block in layer pixels.
    pub origin: Vec2,
}

impl Layer {
    /// Records a text draw command.
    pub fn push_text(&mut self, run: &GlyphRun, origin: Vec2) {
        self.push(DrawCmd::Text(TextCmd { run: run.clone(), origin }));
    }
}
