use std::fmt;

use log::debug;

use vista_engine::coords::{Rect, Vec2};
use vista_engine::paint::{Color, Rgb};
use vista_engine::scene::{Bitmap, Layer};

use crate::error::UiError;
use crate::widgets::text::Text;

/// Which appearance a button currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLook {
    #[default]
    Default,
    Hover,
    Click,
}

/// Flat-colour appearance with a centred caption.
#[derive(Debug)]
pub struct ColourStyle {
    pub size: Vec2,
    /// Caption. Its position is an offset from the centred placement.
    pub text: Text,
    pub colour: Rgb,
    pub hover: Option<Rgb>,
    pub click: Option<Rgb>,
}

/// Bitmap frames per appearance. Missing frames fall back to `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrames {
    pub default: Bitmap,
    pub hover: Option<Bitmap>,
    pub click: Option<Bitmap>,
}

impl AnimationFrames {
    pub fn frame(&self, look: ButtonLook) -> &Bitmap {
        match look {
            ButtonLook::Default => &self.default,
            ButtonLook::Hover => self.hover.as_ref().unwrap_or(&self.default),
            ButtonLook::Click => self.click.as_ref().unwrap_or(&self.default),
        }
    }
}

/// A button is drawn either with colours or with bitmap frames, never both.
#[derive(Debug)]
pub enum ButtonStyle {
    Colour(ColourStyle),
    Animated { size: Vec2, frames: AnimationFrames },
}

impl ButtonStyle {
    pub fn size(&self) -> Vec2 {
        match self {
            ButtonStyle::Colour(c) => c.size,
            ButtonStyle::Animated { size, .. } => *size,
        }
    }

    fn has_hover(&self) -> bool {
        match self {
            ButtonStyle::Colour(c) => c.hover.is_some(),
            ButtonStyle::Animated { frames, .. } => frames.hover.is_some(),
        }
    }

    fn has_click(&self) -> bool {
        match self {
            ButtonStyle::Colour(c) => c.click.is_some(),
            ButtonStyle::Animated { frames, .. } => frames.click.is_some(),
        }
    }
}

/// Slot for [`ButtonBuilder::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFrame {
    Default,
    Hover,
    Click,
}

/// Clickable rectangle that runs a callback when clicked.
pub struct Button {
    label: String,
    pos: Vec2,
    style: ButtonStyle,
    look: ButtonLook,
    enabled: bool,
    visible: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// Starts building a button whose top-left corner sits at `pos`.
    pub fn builder(label: impl Into<String>, pos: Vec2) -> ButtonBuilder {
        ButtonBuilder {
            label: label.into(),
            pos,
            size: None,
            text: None,
            colour: None,
            hover: None,
            click: None,
            frames: [None, None, None],
            on_click: None,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Caption of a colour-styled button.
    pub fn text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.style {
            ButtonStyle::Colour(c) => Some(&mut c.text),
            ButtonStyle::Animated { .. } => None,
        }
    }

    #[inline]
    pub fn look(&self) -> ButtonLook {
        self.look
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.style.size())
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.look = ButtonLook::Default;
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.look = ButtonLook::Default;
        }
    }

    pub fn set_on_click(&mut self, f: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(f));
    }

    /// Switches between the hover and default look. Does nothing when the
    /// button has no hover appearance.
    pub fn hover(&mut self, pos: Vec2) {
        if !self.visible || !self.enabled || !self.style.has_hover() {
            return;
        }
        self.look = if self.bounds().contains_inclusive(pos) {
            ButtonLook::Hover
        } else {
            ButtonLook::Default
        };
    }

    /// Runs the callback when `pos` lands on the button. Returns whether it
    /// landed.
    pub fn click(&mut self, pos: Vec2) -> bool {
        if !self.visible || !self.enabled {
            return false;
        }
        if !self.bounds().contains_inclusive(pos) {
            self.look = ButtonLook::Default;
            return false;
        }
        debug!("button '{}' clicked", self.label);
        if let Some(f) = &mut self.on_click {
            f();
        }
        if self.style.has_click() {
            self.look = ButtonLook::Click;
        }
        true
    }

    pub fn draw(&self, layer: &mut Layer) {
        if !self.visible {
            return;
        }
        match &self.style {
            ButtonStyle::Colour(c) => {
                let fill = match self.look {
                    ButtonLook::Default => c.colour,
                    ButtonLook::Hover => c.hover.unwrap_or(c.colour),
                    ButtonLook::Click => c.click.unwrap_or(c.colour),
                };
                layer.push_rect(self.bounds(), Color::from_rgb(fill, 1.0), None);
                let centred = self.pos + (c.size - c.text.run().size) / 2.0;
                c.text.draw_at(layer, centred);
            }
            ButtonStyle::Animated { frames, .. } => {
                layer.push_image(frames.frame(self.look), self.pos);
            }
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("pos", &self.pos)
            .field("style", &self.style)
            .field("look", &self.look)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Collects button parameters; [`build`](Self::build) checks that they form a
/// complete style.
pub struct ButtonBuilder {
    label: String,
    pos: Vec2,
    size: Option<Vec2>,
    text: Option<Text>,
    colour: Option<Rgb>,
    hover: Option<Rgb>,
    click: Option<Rgb>,
    frames: [Option<Bitmap>; 3],
    on_click: Option<Box<dyn FnMut()>>,
}

impl ButtonBuilder {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Vec2::new(width, height));
        self
    }

    pub fn text(mut self, text: Text) -> Self {
        self.text = Some(text);
        self
    }

    pub fn colour(mut self, colour: Rgb) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn hover_colour(mut self, colour: Rgb) -> Self {
        self.hover = Some(colour);
        self
    }

    pub fn click_colour(mut self, colour: Rgb) -> Self {
        self.click = Some(colour);
        self
    }

    /// Sets one animation frame. A default frame switches the button to the
    /// animated style.
    pub fn frame(mut self, slot: ButtonFrame, bitmap: Bitmap) -> Self {
        self.frames[slot as usize] = Some(bitmap);
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Fails with [`UiError::Configuration`] unless a default frame or all of
    /// size, text and colour were given. Hover and click frames without a
    /// default frame are ignored.
    pub fn build(self) -> Result<Button, UiError> {
        let [default, hover, click] = self.frames;
        let style = match default {
            Some(default) => {
                let size = self.size.unwrap_or_else(|| default.size());
                ButtonStyle::Animated { size, frames: AnimationFrames { default, hover, click } }
            }
            None => match (self.size, self.text, self.colour) {
                (Some(size), Some(text), Some(colour)) => ButtonStyle::Colour(ColourStyle {
                    size,
                    text,
                    colour,
                    hover: self.hover,
                    click: self.click,
                }),
                _ => {
                    return Err(UiError::Configuration(format!(
                        "button '{}' needs a default frame or size, text and colour",
                        self.label
                    )));
                }
            },
        };
        Ok(Button {
            label: self.label,
            pos: self.pos,
            style,
            look: ButtonLook::Default,
            enabled: true,
            visible: true,
            on_click: self.on_click,
        })
    }
}
