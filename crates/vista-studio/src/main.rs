mod raster;

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceId, ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::ModifiersState;

use vista_engine::camera::{BoundEdges, CameraConfig};
use vista_engine::input::platform::winit::translate_window_event;
use vista_engine::input::{InputEvent, InputState, Key, KeyEvent};
use vista_engine::logging::{LoggingConfig, init_logging};
use vista_engine::math::lerp;
use vista_engine::time::FrameClock;
use vista_ui::prelude::*;

use raster::RasterRenderer;

const WIN_WIDTH: f32 = 800.0;
const WIN_HEIGHT: f32 = 600.0;
const FRAMERATE: f64 = 60.0;
const DEFAULT_FRAMES: u32 = 240;
/// The headless host renders at 1:1 physical to logical pixels.
const SCALE_FACTOR: f64 = 1.0;
/// Fraction of the distance to the target the camera covers per 60 Hz frame.
const FOLLOW_RATE: f32 = 0.08;

/// Button labels whose clicks were seen this frame.
type Pressed = Rc<RefCell<Vec<String>>>;

#[derive(Parser, Debug)]
#[command(name = "vista-studio", about = "Replays a scripted canvas session and writes the last frame as PNG")]
struct Cli {
    /// Output image path.
    #[arg(default_value = "vista-studio.png")]
    output: PathBuf,

    /// Number of 60 Hz frames to simulate.
    #[arg(default_value_t = DEFAULT_FRAMES)]
    frames: u32,
}

/// One scripted host event.
///
/// Window events go through the winit adapter; key presses take their
/// modifiers from the tracked `InputState`, as a windowing host would.
#[derive(Debug, Clone)]
enum Scripted {
    Window(WindowEvent),
    Key(Key),
    Text(String),
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Cli { output, frames } = Cli::parse();

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          VISTA STUDIO  (headless)      ║");
    println!("  ║   camera · canvas · software raster    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let clock = ManualClock::new(0.0);
    let typesetter: Rc<dyn Typesetter> = Rc::new(MonospaceTypesetter::default());
    let pressed: Pressed = Rc::new(RefCell::new(Vec::new()));

    let mut canvas = build_canvas(&typesetter, &pressed)?;
    canvas
        .find_element_mut("fill")?
        .as_fill_mut()
        .ok_or_else(|| anyhow!("'fill' is not a Fill"))?
        .fade_to(0.15, 1.0, 0.05, clock.now())?;

    let mut camera = Camera::with_config(
        Viewport::new(WIN_WIDTH, WIN_HEIGHT),
        CameraConfig::default().smoothing(FOLLOW_RATE),
    );
    camera.set_bounds(Vec2::new(-1200.0, -900.0), Vec2::new(1200.0, 900.0), BoundEdges::ALL);

    let script = input_script();
    let mut clipboard = SystemClipboard::new();
    let mut renderer = RasterRenderer::new(WIN_WIDTH as u32, WIN_HEIGHT as u32, Rgb::WHITE);

    let mut input = InputState::default();
    let mut frame_clock = FrameClock::new(&clock);

    info!("replaying {} scripted events over {frames} frames", script.len());
    for frame in 0..frames {
        let time = frame_clock.tick(&clock);

        for (_, scripted) in script.iter().filter(|(at, _)| *at == frame) {
            let Some(event) = resolve(scripted, &input) else {
                continue;
            };
            input.apply_event(&event);
            let mut ctx = EventCtx::new(clock.now(), &mut clipboard);
            canvas.handle_input(&event, &mut ctx);
        }

        for label in pressed.borrow_mut().drain(..) {
            info!("frame {} ({:.2}s): {label} pressed", time.frame_index, time.now);
            canvas
                .find_element_mut("text1")?
                .as_text_mut()
                .ok_or_else(|| anyhow!("'text1' is not a Text"))?
                .render(&label, None);
        }

        if frame == frames / 2 {
            camera.zoom_in_step();
        }
        let t = frame as f32 / frames.max(1) as f32;
        let target = Vec2::new(lerp(-600.0, 600.0, t), lerp(200.0, -200.0, t));
        // Frame-rate independent smoothing.
        let smoothing = 1.0 - (1.0 - FOLLOW_RATE).powf(time.dt * FRAMERATE as f32);
        camera.follow(target, Vec2::zero(), Some(smoothing));

        renderer.clear();
        draw_world(&camera, &mut renderer, target);
        canvas.update(&camera, &mut renderer, &clock);

        clock.advance(1.0 / FRAMERATE);
    }

    renderer
        .save(&output)
        .with_context(|| format!("writing {}", output.display()))?;
    let title = canvas.find_element("text1")?.as_text().map(|t| t.text().to_string());
    info!("final title: {}", title.unwrap_or_default());
    println!("  frame written to {}", output.display());
    Ok(())
}

/// The five-button test scene plus a text box.
fn build_canvas(typesetter: &Rc<dyn Typesetter>, pressed: &Pressed) -> Result<Canvas> {
    let mut ui = Canvas::new(WIN_WIDTH, WIN_HEIGHT);
    ui.add_element(Fill::new("fill", Rgb::BLACK, 0.0)?);
    ui.add_element(Text::new(
        "text1",
        Vec2::new(20.0, 20.0),
        FontSpec::new("georgia", 48.0),
        "test",
        Rgb::BLACK,
        typesetter.clone(),
    ));

    for i in 1..=5 {
        let label = format!("button{i}");
        let caption = Text::new(
            format!("buttonText{i}"),
            Vec2::zero(),
            FontSpec::new("georgia", 20.0),
            "click me!",
            Rgb::BLACK,
            typesetter.clone(),
        );
        let sink = pressed.clone();
        let name = label.clone();
        ui.add_element(
            Button::builder(label, Vec2::new(200.0, 100.0 * i as f32))
                .size(120.0, 60.0)
                .text(caption)
                .colour(Rgb::new(200, 200, 200))
                .hover_colour(Rgb::new(150, 150, 150))
                .click_colour(Rgb::new(100, 100, 100))
                .on_click(move || sink.borrow_mut().push(name.clone()))
                .build()?,
        );
    }

    ui.add_element(
        TextBox::new(
            "input",
            Vec2::new(400.0, 100.0),
            Vec2::new(300.0, 40.0),
            FontSpec::new("mono", 20.0),
            typesetter.clone(),
        )
        .border(Rgb::BLACK, 2.0)
        .hover_colour(Rgb::new(235, 235, 235))
        .active_colour(Rgb::new(220, 235, 255))
        .placeholder("Type here"),
    );
    Ok(ui)
}

/// Converts a scripted event into an engine event against the current state.
fn resolve(scripted: &Scripted, input: &InputState) -> Option<InputEvent> {
    match scripted {
        Scripted::Window(event) => translate_window_event(SCALE_FACTOR, input, event),
        Scripted::Key(key) => Some(InputEvent::Key(KeyEvent::pressed(*key, input.modifiers))),
        Scripted::Text(text) => Some(InputEvent::Key(KeyEvent::typed(Key::Unknown(0), text.as_str()))),
    }
}

/// Scripted input: `(frame, event)` pairs.
fn input_script() -> Vec<(u32, Scripted)> {
    let moved = |x, y| {
        Scripted::Window(WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(x, y),
        })
    };
    let button = |state| {
        Scripted::Window(WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state,
            button: WinitMouseButton::Left,
        })
    };
    let modifiers = |m: ModifiersState| Scripted::Window(WindowEvent::ModifiersChanged(m.into()));
    let press = || button(ElementState::Pressed);
    let release = || button(ElementState::Released);

    let mut script = vec![
        (0, Scripted::Window(WindowEvent::Focused(true))),
        (10, moved(260.0, 130.0)),
        (20, press()),
        (24, release()),
        (40, moved(260.0, 330.0)),
        (45, press()),
        (48, release()),
        (60, moved(500.0, 120.0)),
        (62, press()),
        (63, release()),
    ];

    let mut frame = 70;
    for c in "hello vista".chars() {
        script.push((frame, Scripted::Text(c.to_string())));
        frame += 2;
    }
    script.push((frame, modifiers(ModifiersState::CONTROL)));
    script.push((frame, Scripted::Key(Key::ArrowLeft)));
    script.push((frame + 1, modifiers(ModifiersState::empty())));
    script.push((frame + 2, Scripted::Text("big ".to_string())));
    script.push((frame + 4, modifiers(ModifiersState::CONTROL)));
    script.push((frame + 4, Scripted::Key(Key::V)));
    script.push((frame + 5, modifiers(ModifiersState::empty())));
    script.push((frame + 30, moved(260.0, 530.0)));
    script.push((frame + 32, press()));
    script.push((frame + 34, release()));
    script
}

/// World-space backdrop so camera motion is visible behind the UI.
fn draw_world(camera: &Camera, renderer: &mut RasterRenderer, target: Vec2) {
    let grid = Color::from_srgb_u8(210, 210, 225, 255);
    for i in -12..=12 {
        let x = i as f32 * 100.0;
        camera.draw_line(renderer, Vec2::new(x, -900.0), Vec2::new(x, 900.0), grid, 1.0);
    }
    for i in -9..=9 {
        let y = i as f32 * 100.0;
        camera.draw_line(renderer, Vec2::new(-1200.0, y), Vec2::new(1200.0, y), grid, 1.0);
    }
    camera.draw_rect(
        renderer,
        Rect::new(-1200.0, 700.0, 2400.0, 200.0),
        Color::from_srgb_u8(120, 170, 110, 255),
    );
    camera.draw_polygon(
        renderer,
        &[Vec2::new(-300.0, 700.0), Vec2::new(0.0, 350.0), Vec2::new(300.0, 700.0)],
        Color::from_srgb_u8(140, 130, 120, 255),
    );
    camera.draw_circle(renderer, target, 24.0, Color::from_srgb_u8(220, 80, 60, 255));
}

#[cfg(test)]
mod tests {
    use super::*;

    use vista_engine::input::{MouseButton, MouseButtonState, PointerButtonEvent};

    // ── command line ──────────────────────────────────────────────────────

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["vista-studio"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("vista-studio.png"));
        assert_eq!(cli.frames, DEFAULT_FRAMES);
    }

    #[test]
    fn cli_takes_output_and_frames() {
        let cli = Cli::try_parse_from(["vista-studio", "out.png", "30"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.frames, 30);
    }

    #[test]
    fn cli_rejects_bad_frame_count() {
        assert!(Cli::try_parse_from(["vista-studio", "out.png", "abc"]).is_err());
    }

    // ── scripted input ────────────────────────────────────────────────────

    fn replay(events: &[Scripted]) -> (InputState, Vec<InputEvent>) {
        let mut state = InputState::default();
        let mut out = Vec::new();
        for scripted in events {
            if let Some(event) = resolve(scripted, &state) {
                state.apply_event(&event);
                out.push(event);
            }
        }
        (state, out)
    }

    #[test]
    fn button_press_lands_at_last_cursor_position() {
        let (_, events) = replay(&[
            Scripted::Window(WindowEvent::ModifiersChanged(ModifiersState::SHIFT.into())),
            Scripted::Window(WindowEvent::CursorMoved {
                device_id: DeviceId::dummy(),
                position: PhysicalPosition::new(260.0, 130.0),
            }),
            Scripted::Window(WindowEvent::MouseInput {
                device_id: DeviceId::dummy(),
                state: ElementState::Pressed,
                button: WinitMouseButton::Left,
            }),
        ]);
        let Some(InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers })) =
            events.last()
        else {
            panic!("expected a pointer button event, got {events:?}");
        };
        assert_eq!(*button, MouseButton::Left);
        assert_eq!(*state, MouseButtonState::Pressed);
        assert_eq!((*x, *y), (260.0, 130.0));
        assert!(modifiers.shift);
    }

    #[test]
    fn key_press_picks_up_held_modifiers() {
        let (state, events) = replay(&[
            Scripted::Window(WindowEvent::ModifiersChanged(ModifiersState::CONTROL.into())),
            Scripted::Key(Key::V),
        ]);
        let Some(InputEvent::Key(key)) = events.last() else {
            panic!("expected a key event, got {events:?}");
        };
        assert_eq!(key.key, Key::V);
        assert!(key.modifiers.shortcut());
        assert!(state.modifiers.ctrl);
    }

    #[test]
    fn script_clicks_every_button_and_the_text_box() {
        let typesetter: Rc<dyn Typesetter> = Rc::new(MonospaceTypesetter::default());
        let pressed: Pressed = Rc::new(RefCell::new(Vec::new()));
        let mut canvas = build_canvas(&typesetter, &pressed).unwrap();
        let mut clipboard = MemoryClipboard::new("!");
        let mut state = InputState::default();

        for (_, scripted) in input_script() {
            if let Some(event) = resolve(&scripted, &state) {
                state.apply_event(&event);
                let mut ctx = EventCtx::new(0.0, &mut clipboard);
                canvas.handle_input(&event, &mut ctx);
            }
        }

        assert_eq!(*pressed.borrow(), ["button1", "button3", "button5"]);
        let text = canvas.find_element("input").unwrap().as_textbox().unwrap().content().to_string();
        assert_eq!(text, "hello big !vista");
        assert!(state.focused);
    }
}
