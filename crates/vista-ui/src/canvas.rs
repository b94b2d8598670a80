use log::{debug, trace};

use vista_engine::camera::Camera;
use vista_engine::coords::Vec2;
use vista_engine::input::{InputEvent, MouseButton, MouseButtonState};
use vista_engine::render::Renderer;
use vista_engine::scene::Layer;
use vista_engine::time::Clock;

use crate::error::UiError;
use crate::event::{EventCtx, UiEvent};
use crate::widget::Widget;

/// Ordered collection of widgets composited through one offscreen layer.
///
/// Insertion order is paint order: later widgets cover earlier ones. The
/// layer is the size of the screen and is blitted at the top-left of the
/// camera view, so widget positions are screen pixels.
#[derive(Debug)]
pub struct Canvas {
    widgets: Vec<Widget>,
    layer: Layer,
    visible: bool,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { widgets: Vec::new(), layer: Layer::new(width, height), visible: true }
    }

    /// Appends a widget. Labels are not checked for uniqueness; lookups
    /// return the first match.
    pub fn add_element(&mut self, widget: impl Into<Widget>) {
        let widget = widget.into();
        debug!("canvas: added '{}'", widget.label());
        self.widgets.push(widget);
    }

    /// Removes and returns the first widget labelled `label`.
    pub fn remove_element(&mut self, label: &str) -> Result<Widget, UiError> {
        let idx = self
            .widgets
            .iter()
            .position(|w| w.label() == label)
            .ok_or_else(|| UiError::NotFound(label.to_string()))?;
        debug!("canvas: removed '{label}'");
        Ok(self.widgets.remove(idx))
    }

    pub fn find_element(&self, label: &str) -> Result<&Widget, UiError> {
        self.widgets
            .iter()
            .find(|w| w.label() == label)
            .ok_or_else(|| UiError::NotFound(label.to_string()))
    }

    pub fn find_element_mut(&mut self, label: &str) -> Result<&mut Widget, UiError> {
        self.widgets
            .iter_mut()
            .find(|w| w.label() == label)
            .ok_or_else(|| UiError::NotFound(label.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Widget> {
        self.widgets.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The offscreen layer as of the last [`update`](Self::update).
    #[inline]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Delivers `event` to every widget supporting its capability, in
    /// insertion order. Does nothing while the canvas is hidden.
    pub fn dispatch(&mut self, event: &UiEvent, ctx: &mut EventCtx<'_>) {
        if !self.visible {
            return;
        }
        let capability = event.capability();
        for widget in self.widgets.iter_mut().filter(|w| w.supports(capability)) {
            widget.handle(event, ctx);
        }
    }

    /// Routes a raw input event: pointer motion and primary release become
    /// hovers, a primary press becomes a click and key presses go to text
    /// boxes. Other events are ignored.
    pub fn handle_input(&mut self, input: &InputEvent, ctx: &mut EventCtx<'_>) {
        let event = match input {
            InputEvent::PointerMoved(e) => UiEvent::Hover { pos: e.pos() },
            InputEvent::PointerButton(e) if e.button == MouseButton::Left => match e.state {
                MouseButtonState::Pressed => UiEvent::Click { pos: e.pos() },
                MouseButtonState::Released => UiEvent::Hover { pos: e.pos() },
            },
            InputEvent::Key(k) if k.is_pressed() => UiEvent::Key(k.clone()),
            _ => return,
        };
        trace!("canvas: dispatching {event:?}");
        self.dispatch(&event, ctx);
    }

    /// Redraws every widget into the layer and blits it at the top-left of
    /// the camera view. A hidden canvas only clears its layer.
    pub fn update<R: Renderer + ?Sized>(
        &mut self,
        camera: &Camera,
        renderer: &mut R,
        clock: &dyn Clock,
    ) {
        self.layer.clear();
        if !self.visible {
            return;
        }
        let now = clock.now();
        for widget in &mut self.widgets {
            widget.draw(&mut self.layer, now);
        }
        camera.blit(renderer, &self.layer, camera.screen_to_world(Vec2::zero()));
    }
}
