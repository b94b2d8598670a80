//! winit 0.30 adapter.
//!
//! The host owns the event loop and window; it forwards each `WindowEvent`
//! here together with the window's scale factor.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{
    InputEvent, InputState, Key, KeyEvent, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `state` supplies the pointer position and modifiers for events that do
/// not carry them. Returns `None` for events the input subsystem ignores.
pub fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };
            let pos = state.pointer_pos.unwrap_or_default();

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: st,
                x: pos.x,
                y: pos.y,
                modifiers: state.modifiers,
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let st = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            let text = match st {
                KeyState::Pressed => event.text.as_ref().map(|t| t.to_string()),
                KeyState::Released => None,
            };

            Some(InputEvent::Key(KeyEvent {
                key: map_key(event.physical_key),
                state: st,
                modifiers: state.modifiers,
                text,
                repeat: event.repeat,
            }))
        }

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

pub fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

pub fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use winit::event::DeviceId;

    #[test]
    fn maps_editing_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Backspace)), Key::Backspace);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyV)), Key::V);
    }

    #[test]
    fn unmapped_keys_keep_their_code() {
        let key = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(KeyCode::F5 as u32));
    }

    #[test]
    fn maps_modifier_state() {
        let m = map_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);
        assert!(m.ctrl && m.shift);
        assert!(!m.alt && !m.meta);
    }

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }

    // ── window events ─────────────────────────────────────────────────────

    #[test]
    fn translates_focus_and_modifiers() {
        let state = InputState::default();
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::Focused(true)),
            Some(InputEvent::Focused(true))
        );
        let ev = WindowEvent::ModifiersChanged(ModifiersState::CONTROL.into());
        assert_eq!(
            translate_window_event(1.0, &state, &ev),
            Some(InputEvent::ModifiersChanged(Modifiers::CTRL))
        );
    }

    #[test]
    fn cursor_position_is_logical() {
        let ev = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(300.0, 120.0),
        };
        assert_eq!(
            translate_window_event(2.0, &InputState::default(), &ev),
            Some(InputEvent::PointerMoved(PointerMoveEvent { x: 150.0, y: 60.0 }))
        );
    }

    #[test]
    fn mouse_input_takes_position_and_modifiers_from_state() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 34.0 }));
        state.apply_event(&InputEvent::ModifiersChanged(Modifiers::CTRL));

        let ev = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            translate_window_event(1.0, &state, &ev),
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 12.0,
                y: 34.0,
                modifiers: Modifiers::CTRL,
            }))
        );
    }

    #[test]
    fn mouse_input_without_pointer_lands_at_origin() {
        let ev = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Released,
            button: WinitMouseButton::Right,
        };
        let Some(InputEvent::PointerButton(e)) =
            translate_window_event(1.0, &InputState::default(), &ev)
        else {
            panic!("expected a pointer button event");
        };
        assert_eq!((e.x, e.y), (0.0, 0.0));
        assert_eq!(e.state, MouseButtonState::Released);
    }

    #[test]
    fn ignores_unrelated_events() {
        let state = InputState::default();
        assert_eq!(translate_window_event(1.0, &state, &WindowEvent::CloseRequested), None);
    }

    #[test]
    fn physical_to_logical_divides_by_scale() {
        let (x, y) = to_logical_f32(2.0, PhysicalPosition::new(200.0, 100.0));
        assert_eq!((x, y), (100.0, 50.0));
    }
}
