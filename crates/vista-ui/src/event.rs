use vista_engine::coords::Vec2;
use vista_engine::input::KeyEvent;

use crate::clipboard::Clipboard;

/// What a widget can do. Events are routed only to widgets that support the
/// matching capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Draw,
    Hover,
    Click,
    KeyInput,
}

/// Input events routed to widgets, positions in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer moved to `pos`.
    Hover { pos: Vec2 },
    /// Primary button pressed at `pos`.
    Click { pos: Vec2 },
    /// Key pressed.
    Key(KeyEvent),
}

impl UiEvent {
    #[inline]
    pub fn capability(&self) -> Capability {
        match self {
            UiEvent::Hover { .. } => Capability::Hover,
            UiEvent::Click { .. } => Capability::Click,
            UiEvent::Key(_) => Capability::KeyInput,
        }
    }
}

/// Per-dispatch context handed to widgets alongside the event.
pub struct EventCtx<'a> {
    /// Current clock reading in seconds.
    pub now: f64,
    pub clipboard: &'a mut dyn Clipboard,
}

impl<'a> EventCtx<'a> {
    pub fn new(now: f64, clipboard: &'a mut dyn Clipboard) -> Self {
        Self { now, clipboard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_engine::input::{Key, Modifiers};

    #[test]
    fn events_map_to_capabilities() {
        let pos = Vec2::zero();
        assert_eq!(UiEvent::Hover { pos }.capability(), Capability::Hover);
        assert_eq!(UiEvent::Click { pos }.capability(), Capability::Click);
        assert_eq!(
            UiEvent::Key(KeyEvent::pressed(Key::Enter, Modifiers::NONE)).capability(),
            Capability::KeyInput
        );
    }
}
