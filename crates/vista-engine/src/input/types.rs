use std::fmt;

use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Only keys with editing or navigation meaning get their own variant.
/// Printable input arrives through [`KeyEvent::text`]; anything else maps to
/// `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    // Letters (shortcut targets)
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false, meta: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Word-wise editing modifier (Ctrl or Alt).
    pub fn word(&self) -> bool {
        self.ctrl || self.alt
    }

    /// Shortcut modifier (Ctrl, or Cmd on macOS).
    pub fn shortcut(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer move event in screen pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerMoveEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Pointer button event.
///
/// Coordinates are included so consumers do not depend on a separately
/// tracked pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl PointerButtonEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Keyboard event with an optional committed text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub modifiers: Modifiers,
    /// Text produced by the key press, if any.
    pub text: Option<String>,
    /// True when the event is a key-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    /// Key press without a text payload.
    pub fn pressed(key: Key, modifiers: Modifiers) -> Self {
        Self { key, state: KeyState::Pressed, modifiers, text: None, repeat: false }
    }

    /// Key press producing `text`, e.g. a letter typed without modifiers.
    pub fn typed(key: Key, text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::pressed(key, Modifiers::NONE) }
    }

    /// A single typed character; the key is inferred for letters.
    pub fn char(c: char) -> Self {
        Self::typed(letter_key(c).unwrap_or(Key::Unknown(c as u32)), c.to_string())
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}

fn letter_key(c: char) -> Option<Key> {
    const LETTERS: [Key; 26] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
    ];
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase().then(|| LETTERS[(c as u8 - b'a') as usize])
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    Key(KeyEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
