use crate::coords::Vec2;
use crate::paint::Color;

/// Font descriptor: family name and pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Font size in pixels.
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size }
    }
}

/// A measured, ready-to-draw piece of text.
///
/// Stands in for a rendered glyph surface: renderers receive the string, the
/// font and the colour, and `size` is what layout code positions against.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    pub size: Vec2,
}

impl GlyphRun {
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Measures text for a font descriptor.
///
/// Injected into text-bearing widgets at construction so they never reach
/// for ambient font state.
pub trait Typesetter {
    /// Bounding box of `text` set in `font`, in pixels.
    fn measure(&self, font: &FontSpec, text: &str) -> Vec2;

    /// Measures `text` and bundles it into a [`GlyphRun`].
    fn layout(&self, font: &FontSpec, text: &str, color: Color) -> GlyphRun {
        GlyphRun {
            text: text.to_string(),
            font: font.clone(),
            color,
            size: self.measure(font, text),
        }
    }
}

/// Fixed-advance typesetter.
///
/// Every character advances by `size * advance`; lines are `size * line_height`
/// tall. Deterministic, so it doubles as the test typesetter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceTypesetter {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceTypesetter {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for MonospaceTypesetter {
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl Typesetter for MonospaceTypesetter {
    fn measure(&self, font: &FontSpec, text: &str) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(chars * font.size * self.advance, font.size * self.line_height)
    }
}
