//! Text measurement.
//!
//! Glyph rasterisation belongs to the host renderer. The engine only needs to
//! know how large a string will be, which is what a [`Typesetter`] provides.

mod typesetter;

pub use typesetter::{FontSpec, GlyphRun, MonospaceTypesetter, Typesetter};
