//! Coordinate and geometry types shared across the camera, layers and UI.
//!
//! Canonical CPU space:
//! - origin top-left
//! - +X right, +Y down
//!
//! The same types are used for world units and screen pixels; which space a
//! value lives in is decided by the API that produced it.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
