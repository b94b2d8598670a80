//! Input subsystem.
//!
//! Public API is platform-agnostic. Platform adapters (see [`platform`])
//! translate window system events into `InputEvent`s.

pub mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyEvent,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
