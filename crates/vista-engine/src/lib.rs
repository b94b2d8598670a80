//! Vista engine crate.
//!
//! Geometry, colours, offscreen layers and the camera that maps world space
//! onto the screen. Everything that touches real pixels is reached through the
//! [`render::Renderer`] capability; the crate itself performs no pixel I/O.

pub mod camera;
pub mod coords;
pub mod input;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
