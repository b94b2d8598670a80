//! Vista UI: retained widgets composited through the camera.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vista_ui::prelude::*;
//!
//! let typesetter: Rc<dyn Typesetter> = Rc::new(MonospaceTypesetter::default());
//! let mut canvas = Canvas::new(800.0, 600.0);
//! canvas.add_element(Fill::new("fill", Rgb::BLACK, 0.0)?);
//! canvas.add_element(
//!     Button::builder("ok", Vec2::new(200.0, 100.0))
//!         .size(120.0, 60.0)
//!         .text(Text::new("caption", Vec2::zero(), font, "OK", Rgb::BLACK, typesetter.clone()))
//!         .colour(Rgb::new(200, 200, 200))
//!         .on_click(|| println!("ok"))
//!         .build()?,
//! );
//!
//! // Per frame:
//! for input in events {
//!     canvas.handle_input(&input, &mut EventCtx::new(clock.now(), &mut clipboard));
//! }
//! canvas.update(&camera, &mut renderer, &clock);
//! ```

pub mod canvas;
pub mod clipboard;
pub mod error;
pub mod event;
pub mod widget;
pub mod widgets;

pub use canvas::Canvas;
pub use error::UiError;
pub use widget::Widget;

/// Everything needed to build a canvas, including the engine types that
/// appear in widget constructors.
pub mod prelude {
    pub use std::rc::Rc;

    pub use crate::canvas::Canvas;
    pub use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
    pub use crate::error::UiError;
    pub use crate::event::{Capability, EventCtx, UiEvent};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        Button, ButtonFrame, ButtonLook, Fade, Fill, Focus, Image, Text, TextBox,
    };

    pub use vista_engine::camera::{Camera, CameraConfig};
    pub use vista_engine::coords::{Rect, Vec2, Viewport};
    pub use vista_engine::paint::{Color, Rgb};
    pub use vista_engine::render::Renderer;
    pub use vista_engine::scene::Bitmap;
    pub use vista_engine::text::{FontSpec, MonospaceTypesetter, Typesetter};
    pub use vista_engine::time::{Clock, ManualClock, SystemClock};
}
