use log::debug;

use vista_engine::paint::{Color, Rgb};
use vista_engine::scene::Layer;

use crate::error::{UiError, check_opacity};

/// Opacity error tolerated when deciding a fade has landed.
const FADE_EPSILON: f32 = 1e-4;
/// Slack for clock readings that land a hair before an interval boundary.
const TIME_EPSILON: f64 = 1e-9;

/// Fade progress of a [`Fill`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fade {
    Idle,
    Fading {
        target: f32,
        /// Opacity change applied per tick.
        increment: f32,
        /// Seconds between ticks.
        interval: f64,
        /// Clock time the last tick is accounted to.
        last_tick: f64,
    },
}

/// Floods the whole canvas with one colour; can fade its opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    label: String,
    colour: Rgb,
    opacity: f32,
    fade: Fade,
    visible: bool,
}

impl Fill {
    pub fn new(label: impl Into<String>, colour: Rgb, opacity: f32) -> Result<Self, UiError> {
        Ok(Self {
            label: label.into(),
            colour,
            opacity: check_opacity(opacity)?,
            fade: Fade::Idle,
            visible: true,
        })
    }

    /// Like [`new`](Self::new), validating raw channel values as well.
    pub fn from_channels(
        label: impl Into<String>,
        (r, g, b): (i32, i32, i32),
        opacity: f32,
    ) -> Result<Self, UiError> {
        Self::new(label, Rgb::try_from_channels(r, g, b)?, opacity)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the opacity directly and cancels any running fade.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), UiError> {
        self.opacity = check_opacity(opacity)?;
        self.fade = Fade::Idle;
        Ok(())
    }

    #[inline]
    pub fn fade(&self) -> Fade {
        self.fade
    }

    #[inline]
    pub fn is_fading(&self) -> bool {
        matches!(self.fade, Fade::Fading { .. })
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Starts a linear ramp to `target` over `duration` seconds, stepping every
    /// `interval` seconds.
    ///
    /// A running fade is completed instantly first. A non-positive duration
    /// jumps straight to the target.
    pub fn fade_to(
        &mut self,
        target: f32,
        duration: f64,
        interval: f64,
        now: f64,
    ) -> Result<(), UiError> {
        let target = check_opacity(target)?;
        if interval.is_nan() || interval <= 0.0 {
            return Err(UiError::Configuration(format!(
                "fade interval {interval} must be positive"
            )));
        }
        if let Fade::Fading { target: running, .. } = self.fade {
            self.opacity = running;
        }
        if duration <= 0.0 || (target - self.opacity).abs() <= FADE_EPSILON {
            self.opacity = target;
            self.fade = Fade::Idle;
            return Ok(());
        }

        let steps = (duration / interval) as f32;
        let increment = (target - self.opacity) / steps;
        debug!("fill '{}' fading {} -> {} in {} steps", self.label, self.opacity, target, steps);
        self.fade = Fade::Fading { target, increment, interval, last_tick: now };
        Ok(())
    }

    /// Applies at most one fade tick, then floods the layer.
    pub fn draw(&mut self, layer: &mut Layer, now: f64) {
        if !self.visible {
            return;
        }
        self.advance_fade(now);
        layer.fill(Color::from_rgb(self.colour, self.opacity));
    }

    fn advance_fade(&mut self, now: f64) {
        let Fade::Fading { target, increment, interval, last_tick } = self.fade else { return };
        if now - last_tick + TIME_EPSILON < interval {
            return;
        }
        let next = self.opacity + increment;
        let landed = if increment >= 0.0 {
            next >= target - FADE_EPSILON
        } else {
            next <= target + FADE_EPSILON
        };
        if landed {
            self.opacity = target;
            self.fade = Fade::Idle;
            debug!("fill '{}' fade finished at {}", self.label, target);
        } else {
            self.opacity = next;
            self.fade = Fade::Fading { target, increment, interval, last_tick: last_tick + interval };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(opacity: f32) -> Fill {
        Fill::new("fill", Rgb::BLACK, opacity).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn invalid_opacity_is_rejected() {
        assert!(matches!(Fill::new("f", Rgb::BLACK, 1.5), Err(UiError::Configuration(_))));
        assert!(matches!(Fill::new("f", Rgb::BLACK, -0.5), Err(UiError::Configuration(_))));
    }

    #[test]
    fn invalid_channel_is_rejected() {
        assert!(matches!(
            Fill::from_channels("f", (0, 256, 0), 1.0),
            Err(UiError::Configuration(_))
        ));
        assert!(Fill::from_channels("f", (0, 255, 0), 1.0).is_ok());
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draw_floods_layer() {
        let mut fill = Fill::new("f", Rgb { r: 255, g: 0, b: 0 }, 0.5).unwrap();
        let mut layer = Layer::new(10.0, 10.0);
        fill.draw(&mut layer, 0.0);
        assert_eq!(layer.commands().len(), 1);
    }

    #[test]
    fn invisible_fill_draws_nothing() {
        let mut fill = black(1.0);
        fill.set_visible(false);
        let mut layer = Layer::new(10.0, 10.0);
        fill.draw(&mut layer, 0.0);
        assert!(layer.is_clear());
    }

    // ── fading ────────────────────────────────────────────────────────────

    #[test]
    fn fade_reaches_target_exactly_without_overshoot() {
        let mut fill = black(0.0);
        let mut layer = Layer::new(1.0, 1.0);
        fill.fade_to(1.0, 1.0, 0.1, 0.0).unwrap();

        for i in 1..=10 {
            fill.draw(&mut layer, 0.1 * f64::from(i));
            assert!(fill.opacity() <= 1.0, "overshot at tick {i}: {}", fill.opacity());
        }
        assert_eq!(fill.opacity(), 1.0);
        assert_eq!(fill.fade(), Fade::Idle);

        fill.draw(&mut layer, 5.0);
        assert_eq!(fill.opacity(), 1.0);
    }

    #[test]
    fn at_most_one_tick_per_draw() {
        let mut fill = black(0.0);
        let mut layer = Layer::new(1.0, 1.0);
        fill.fade_to(1.0, 1.0, 0.1, 0.0).unwrap();
        fill.draw(&mut layer, 0.55);
        assert!((fill.opacity() - 0.1).abs() < 1e-5);
        // Leftover time is carried: the next draw ticks again straight away.
        fill.draw(&mut layer, 0.56);
        assert!((fill.opacity() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn no_tick_before_interval_elapses() {
        let mut fill = black(0.0);
        let mut layer = Layer::new(1.0, 1.0);
        fill.fade_to(1.0, 1.0, 0.1, 0.0).unwrap();
        fill.draw(&mut layer, 0.05);
        assert_eq!(fill.opacity(), 0.0);
    }

    #[test]
    fn fade_down_snaps_to_target() {
        let mut fill = black(1.0);
        let mut layer = Layer::new(1.0, 1.0);
        fill.fade_to(0.0, 0.3, 0.1, 0.0).unwrap();
        for i in 1..=3 {
            fill.draw(&mut layer, 0.1 * f64::from(i));
            assert!(fill.opacity() >= 0.0);
        }
        assert_eq!(fill.opacity(), 0.0);
        assert!(!fill.is_fading());
    }

    #[test]
    fn uneven_step_count_clamps_last_step() {
        // 1.0 / 0.3 is not a whole number of steps.
        let mut fill = black(0.0);
        let mut layer = Layer::new(1.0, 1.0);
        fill.fade_to(1.0, 1.0, 0.3, 0.0).unwrap();
        for i in 1..=4 {
            fill.draw(&mut layer, 0.3 * f64::from(i));
            assert!(fill.opacity() <= 1.0);
        }
        assert_eq!(fill.opacity(), 1.0);
    }

    #[test]
    fn new_fade_completes_running_fade_first() {
        let mut fill = black(0.0);
        fill.fade_to(0.8, 1.0, 0.1, 0.0).unwrap();
        fill.fade_to(0.4, 1.0, 0.1, 0.0).unwrap();
        match fill.fade() {
            Fade::Fading { target, increment, .. } => {
                assert_eq!(target, 0.4);
                assert!((increment + 0.04).abs() < 1e-6);
            }
            Fade::Idle => panic!("expected a running fade"),
        }
        assert_eq!(fill.opacity(), 0.8);
    }

    #[test]
    fn fade_rejects_bad_arguments() {
        let mut fill = black(0.0);
        assert!(fill.fade_to(2.0, 1.0, 0.1, 0.0).is_err());
        assert!(fill.fade_to(1.0, 1.0, 0.0, 0.0).is_err());
        assert!(!fill.is_fading());
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut fill = black(0.0);
        fill.fade_to(0.7, 0.0, 0.1, 0.0).unwrap();
        assert_eq!(fill.opacity(), 0.7);
        assert!(!fill.is_fading());
    }
}
