//! Translation from windowing libraries into engine input events.

pub mod winit;
