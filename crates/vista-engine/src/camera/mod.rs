//! 2D camera: world ↔ screen transforms, pan/zoom/follow and view culling.
//!
//! World space uses the same axis convention as screen space (+Y down). The
//! camera position is the world point shown at the centre of the viewport,
//! and zoom is the number of screen pixels per world unit.

mod controller;
pub mod transform;

pub use controller::{BoundEdges, Bounds, Camera, CameraConfig, ZoomChange, MAX_ZOOM, MIN_ZOOM};
