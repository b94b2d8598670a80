use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use vista_engine::coords::{Rect, Vec2};
use vista_engine::input::{Key, KeyEvent};
use vista_engine::paint::{Color, Rgb};
use vista_engine::scene::{Layer, Stroke};
use vista_engine::text::{FontSpec, GlyphRun, Typesetter};

use crate::event::EventCtx;
use crate::widgets::text_edit::TextEditState;

/// Horizontal gap between the box edge and its text.
const PADDING: f32 = 4.0;
const CURSOR_WIDTH: f32 = 2.0;
const TAB: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Unfocused,
    Focused,
}

/// Caret blink state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blink {
    pub visible: bool,
    pub last_toggle: f64,
    /// Seconds between toggles.
    pub interval: f64,
}

impl Blink {
    fn reset(&mut self, now: f64) {
        self.visible = true;
        self.last_toggle = now;
    }

    fn advance(&mut self, now: f64) {
        if now - self.last_toggle >= self.interval {
            self.visible = !self.visible;
            self.last_toggle = now;
        }
    }
}

/// Single-line editable text field.
///
/// Click to focus, then type. Enter runs the enter callback and drops focus;
/// Escape or a click elsewhere drops focus as well.
///
/// ```rust,ignore
/// TextBox::new("name", Vec2::new(20.0, 100.0), Vec2::new(200.0, 30.0), font, typesetter)
///     .border(Rgb::BLACK, 2.0)
///     .hover_colour(Rgb::new(230, 230, 230))
///     .placeholder("Type here")
///     .on_enter(|| println!("submitted"))
/// ```
pub struct TextBox {
    label: String,
    pos: Vec2,
    size: Vec2,
    font: FontSpec,
    typesetter: Rc<dyn Typesetter>,

    border: Option<Stroke>,
    colour: Rgb,
    hover_colour: Option<Rgb>,
    active_colour: Option<Rgb>,
    placeholder: String,
    placeholder_colour: Rgb,
    text_colour: Rgb,

    edit: TextEditState,
    before: GlyphRun,
    after: GlyphRun,
    placeholder_run: GlyphRun,

    blink: Blink,
    focus: Focus,
    hovered: bool,
    enabled: bool,
    visible: bool,
    on_enter: Option<Box<dyn FnMut()>>,
}

impl TextBox {
    pub fn new(
        label: impl Into<String>,
        pos: Vec2,
        size: Vec2,
        font: FontSpec,
        typesetter: Rc<dyn Typesetter>,
    ) -> Self {
        let empty = typesetter.layout(&font, "", Color::BLACK);
        let mut tb = Self {
            label: label.into(),
            pos,
            size,
            font,
            typesetter,
            border: None,
            colour: Rgb::WHITE,
            hover_colour: None,
            active_colour: None,
            placeholder: String::new(),
            placeholder_colour: Rgb::new(150, 150, 150),
            text_colour: Rgb::BLACK,
            edit: TextEditState::default(),
            before: empty.clone(),
            after: empty.clone(),
            placeholder_run: empty,
            blink: Blink { visible: true, last_toggle: 0.0, interval: 0.5 },
            focus: Focus::Unfocused,
            hovered: false,
            enabled: true,
            visible: true,
            on_enter: None,
        };
        tb.relayout();
        tb
    }

    pub fn border(mut self, colour: Rgb, width: f32) -> Self {
        self.border = Some(Stroke::new(width, Color::from_rgb(colour, 1.0)));
        self
    }

    pub fn colour(mut self, colour: Rgb) -> Self {
        self.colour = colour;
        self
    }

    pub fn hover_colour(mut self, colour: Rgb) -> Self {
        self.hover_colour = Some(colour);
        self
    }

    /// Background while focused.
    pub fn active_colour(mut self, colour: Rgb) -> Self {
        self.active_colour = Some(colour);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self.relayout();
        self
    }

    pub fn placeholder_colour(mut self, colour: Rgb) -> Self {
        self.placeholder_colour = colour;
        self.relayout();
        self
    }

    pub fn text_colour(mut self, colour: Rgb) -> Self {
        self.text_colour = colour;
        self.relayout();
        self
    }

    /// Initial content; the cursor starts at its end.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn blink_interval(mut self, seconds: f64) -> Self {
        self.blink.interval = seconds;
        self
    }

    pub fn on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn content(&self) -> &str {
        self.edit.text()
    }

    /// Cursor position in characters.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.edit.cursor()
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focus == Focus::Focused
    }

    #[inline]
    pub fn blink(&self) -> Blink {
        self.blink
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }

    /// Background colour for the current state.
    pub fn background(&self) -> Rgb {
        match (self.focus, self.hovered) {
            (Focus::Focused, _) => self.active_colour.unwrap_or(self.colour),
            (Focus::Unfocused, true) => self.hover_colour.unwrap_or(self.colour),
            (Focus::Unfocused, false) => self.colour,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ── state changes ─────────────────────────────────────────────────────

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
        self.relayout();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset_transient();
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.reset_transient();
        }
    }

    pub fn set_focused(&mut self, now: f64) {
        if self.focus == Focus::Unfocused {
            debug!("textbox '{}' focused", self.label);
        }
        self.focus = Focus::Focused;
        self.hovered = false;
        self.blink.reset(now);
    }

    pub fn unfocus(&mut self) {
        if self.focus == Focus::Focused {
            debug!("textbox '{}' unfocused", self.label);
        }
        self.focus = Focus::Unfocused;
    }

    fn reset_transient(&mut self) {
        self.unfocus();
        self.hovered = false;
    }

    // ── events ────────────────────────────────────────────────────────────

    /// Tracks hover while unfocused.
    pub fn hover(&mut self, pos: Vec2) {
        if !self.visible || !self.enabled || self.is_focused() || self.hover_colour.is_none() {
            return;
        }
        self.hovered = self.bounds().contains_inclusive(pos);
    }

    /// Focuses on a landing click, unfocuses otherwise.
    pub fn click(&mut self, pos: Vec2, now: f64) {
        if !self.visible || !self.enabled {
            return;
        }
        if self.bounds().contains_inclusive(pos) {
            self.set_focused(now);
        } else {
            self.unfocus();
        }
    }

    /// Applies one key press. Returns `true` when the key was handled.
    pub fn input_key(&mut self, event: &KeyEvent, ctx: &mut EventCtx<'_>) -> bool {
        if !event.is_pressed() || !self.is_focused() || !self.enabled || !self.visible {
            return false;
        }
        let mods = event.modifiers;
        match event.key {
            Key::Escape => {
                self.unfocus();
                return true;
            }
            Key::Enter => {
                if let Some(f) = &mut self.on_enter {
                    f();
                }
                self.unfocus();
                return true;
            }
            Key::Backspace if mods.word() => self.edit.delete_word_backward(),
            Key::Backspace => self.edit.delete_backward(),
            Key::Delete => self.edit.delete_forward(),
            Key::ArrowLeft if mods.word() => self.edit.move_word_left(),
            Key::ArrowLeft => self.edit.move_left(),
            Key::ArrowRight if mods.word() => self.edit.move_word_right(),
            Key::ArrowRight => self.edit.move_right(),
            Key::Home | Key::ArrowUp => self.edit.move_home(),
            Key::End | Key::ArrowDown => self.edit.move_end(),
            Key::Tab => self.edit.insert_str(TAB),
            Key::V if mods.shortcut() => {
                let pasted = match ctx.clipboard.read_text() {
                    Ok(text) => text,
                    Err(err) => {
                        warn!("textbox '{}' paste failed: {err}", self.label);
                        String::new()
                    }
                };
                let line: String = pasted.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.edit.insert_str(&line);
            }
            _ => {
                let typed: String = match &event.text {
                    Some(text) if !mods.shortcut() => {
                        text.chars().filter(|c| !c.is_control()).collect()
                    }
                    _ => String::new(),
                };
                if typed.is_empty() {
                    return false;
                }
                self.edit.insert_str(&typed);
            }
        }
        self.relayout();
        self.blink.reset(ctx.now);
        true
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn draw(&mut self, layer: &mut Layer, now: f64) {
        if !self.visible {
            return;
        }
        if self.is_focused() && self.enabled {
            self.blink.advance(now);
        }

        layer.push_rect(self.bounds(), Color::from_rgb(self.background(), 1.0), self.border);

        let text_h = self.before.height();
        let origin = Vec2::new(self.pos.x + PADDING, self.pos.y + (self.size.y - text_h) / 2.0);

        if self.edit.text().is_empty() && !self.is_focused() {
            if !self.placeholder.is_empty() {
                layer.push_text(&self.placeholder_run, origin);
            }
            return;
        }

        layer.push_text(&self.before, origin);
        let caret_x = origin.x + self.before.width();
        layer.push_text(&self.after, Vec2::new(caret_x, origin.y));

        if self.is_focused() && self.blink.visible {
            layer.push_rect(
                Rect::new(caret_x, origin.y, CURSOR_WIDTH, text_h),
                Color::from_rgb(self.text_colour, 1.0),
                None,
            );
        }
    }

    /// Re-measures the glyph runs either side of the cursor.
    fn relayout(&mut self) {
        let text = Color::from_rgb(self.text_colour, 1.0);
        self.before = self.typesetter.layout(&self.font, self.edit.before_cursor(), text);
        self.after = self.typesetter.layout(&self.font, self.edit.after_cursor(), text);
        self.placeholder_run = self.typesetter.layout(
            &self.font,
            &self.placeholder,
            Color::from_rgb(self.placeholder_colour, 1.0),
        );
    }
}

impl fmt::Debug for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("label", &self.label)
            .field("pos", &self.pos)
            .field("size", &self.size)
            .field("text", &self.edit.text())
            .field("cursor", &self.edit.cursor())
            .field("focus", &self.focus)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
