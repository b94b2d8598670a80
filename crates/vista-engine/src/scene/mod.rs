//! Offscreen layers and the draw commands recorded into them.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod bitmap;
mod cmd;
mod layer;

pub mod shapes;

pub use bitmap::Bitmap;
pub use cmd::DrawCmd;
pub use layer::Layer;
pub use shapes::Stroke;
