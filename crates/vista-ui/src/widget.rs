use vista_engine::scene::Layer;

use crate::event::{Capability, EventCtx, UiEvent};
use crate::widgets::{Button, Fill, Image, Text, TextBox};

/// Every element a [`Canvas`](crate::Canvas) can hold.
///
/// Events are routed by [`Capability`]: only widgets for which
/// [`supports`](Self::supports) returns true receive them.
#[derive(Debug)]
pub enum Widget {
    Fill(Fill),
    Text(Text),
    Image(Image),
    Button(Button),
    TextBox(TextBox),
}

impl Widget {
    pub fn label(&self) -> &str {
        match self {
            Widget::Fill(w) => w.label(),
            Widget::Text(w) => w.label(),
            Widget::Image(w) => w.label(),
            Widget::Button(w) => w.label(),
            Widget::TextBox(w) => w.label(),
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Draw => true,
            Capability::Hover | Capability::Click => {
                matches!(self, Widget::Button(_) | Widget::TextBox(_))
            }
            Capability::KeyInput => matches!(self, Widget::TextBox(_)),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Widget::Fill(w) => w.is_visible(),
            Widget::Text(w) => w.is_visible(),
            Widget::Image(w) => w.is_visible(),
            Widget::Button(w) => w.is_visible(),
            Widget::TextBox(w) => w.is_visible(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Widget::Fill(w) => w.set_visible(visible),
            Widget::Text(w) => w.set_visible(visible),
            Widget::Image(w) => w.set_visible(visible),
            Widget::Button(w) => w.set_visible(visible),
            Widget::TextBox(w) => w.set_visible(visible),
        }
    }

    /// Draws into `layer`. `now` drives fades and caret blink.
    pub fn draw(&mut self, layer: &mut Layer, now: f64) {
        match self {
            Widget::Fill(w) => w.draw(layer, now),
            Widget::Text(w) => w.draw(layer),
            Widget::Image(w) => w.draw(layer),
            Widget::Button(w) => w.draw(layer),
            Widget::TextBox(w) => w.draw(layer, now),
        }
    }

    /// Delivers an event. Returns `false` when the widget lacks the capability.
    pub fn handle(&mut self, event: &UiEvent, ctx: &mut EventCtx<'_>) -> bool {
        match (self, event) {
            (Widget::Button(b), UiEvent::Hover { pos }) => b.hover(*pos),
            (Widget::Button(b), UiEvent::Click { pos }) => {
                b.click(*pos);
            }
            (Widget::TextBox(t), UiEvent::Hover { pos }) => t.hover(*pos),
            (Widget::TextBox(t), UiEvent::Click { pos }) => t.click(*pos, ctx.now),
            (Widget::TextBox(t), UiEvent::Key(key)) => {
                t.input_key(key, ctx);
            }
            _ => return false,
        }
        true
    }

    // ── typed access ──────────────────────────────────────────────────────

    pub fn as_fill(&self) -> Option<&Fill> {
        match self {
            Widget::Fill(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_fill_mut(&mut self) -> Option<&mut Fill> {
        match self {
            Widget::Fill(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Widget::Text(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Widget::Text(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Widget::Image(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut Image> {
        match self {
            Widget::Image(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Widget::Button(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_textbox(&self) -> Option<&TextBox> {
        match self {
            Widget::TextBox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_textbox_mut(&mut self) -> Option<&mut TextBox> {
        match self {
            Widget::TextBox(w) => Some(w),
            _ => None,
        }
    }
}

impl From<Fill> for Widget {
    fn from(w: Fill) -> Self {
        Widget::Fill(w)
    }
}

impl From<Text> for Widget {
    fn from(w: Text) -> Self {
        Widget::Text(w)
    }
}

impl From<Image> for Widget {
    fn from(w: Image) -> Self {
        Widget::Image(w)
    }
}

impl From<Button> for Widget {
    fn from(w: Button) -> Self {
        Widget::Button(w)
    }
}

impl From<TextBox> for Widget {
    fn from(w: TextBox) -> Self {
        Widget::TextBox(w)
    }
}

#[cfg(test)]
mod tests {
    use vista_engine::coords::Vec2;
    use vista_engine::paint::Rgb;
    use vista_engine::scene::Bitmap;

    use super::*;

    #[test]
    fn capabilities_per_variant() {
        let fill: Widget = Fill::new("f", Rgb::BLACK, 1.0).unwrap().into();
        let image: Widget = Image::new("i", Vec2::zero(), Bitmap::solid(1, 1, [0; 4])).into();
        let button: Widget = Button::builder("b", Vec2::zero())
            .frame(crate::widgets::ButtonFrame::Default, Bitmap::solid(1, 1, [0; 4]))
            .build()
            .unwrap()
            .into();

        for w in [&fill, &image] {
            assert!(w.supports(Capability::Draw));
            assert!(!w.supports(Capability::Hover));
            assert!(!w.supports(Capability::Click));
            assert!(!w.supports(Capability::KeyInput));
        }
        assert!(button.supports(Capability::Click));
        assert!(button.supports(Capability::Hover));
        assert!(!button.supports(Capability::KeyInput));
    }

    #[test]
    fn typed_accessors_match_variant() {
        let mut w: Widget = Fill::new("f", Rgb::BLACK, 1.0).unwrap().into();
        assert_eq!(w.label(), "f");
        assert!(w.as_fill_mut().is_some());
        assert!(w.as_text().is_none());
        assert!(w.as_button_mut().is_none());
    }
}
