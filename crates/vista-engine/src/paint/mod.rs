//! Colour model shared between widgets, the camera and renderers.
//!
//! - [`Rgb`]: validated 8-bit RGB as supplied by callers
//! - [`Color`]: linear premultiplied RGBA handed to renderers

pub mod color;
pub mod rgb;

pub use color::Color;
pub use rgb::{ChannelOutOfRange, Rgb};
