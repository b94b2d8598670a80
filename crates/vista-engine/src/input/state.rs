use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position so that
/// platform adapters can attach them to events that lack them.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in screen pixels.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key(key) => {
                self.modifiers = key.modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x: 4.0,
            y: 8.0,
            modifiers: Modifiers::NONE,
        })
    }

    #[test]
    fn pointer_move_updates_position() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        assert_eq!(state.pointer_pos, Some(Vec2::new(1.0, 2.0)));
        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn buttons_track_press_and_release() {
        let mut state = InputState::default();
        state.apply_event(&press(MouseButton::Left, MouseButtonState::Pressed));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(4.0, 8.0)));
        state.apply_event(&press(MouseButton::Left, MouseButtonState::Released));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut state = InputState::default();
        state.apply_event(&press(MouseButton::Right, MouseButtonState::Pressed));
        state.apply_event(&InputEvent::Focused(false));
        assert!(state.buttons_down.is_empty());
    }
}
