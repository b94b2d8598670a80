use super::Clock;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Clock reading taken at the tick.
    pub now: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from any [`Clock`].
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: f64,
    frame_index: u64,
    dt_min: f64,
    dt_max: f64,
}

impl FrameClock {
    /// Creates a clock with default clamps (0.1 ms to 250 ms).
    pub fn new(clock: &dyn Clock) -> Self {
        Self::with_clamps(clock, 0.0001, 0.25)
    }

    /// Creates a clock with custom delta-time clamps, in seconds.
    pub fn with_clamps(clock: &dyn Clock, dt_min: f64, dt_max: f64) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: clock.now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after resuming from suspension.
    pub fn reset(&mut self, clock: &dyn Clock) {
        self.last = clock.now();
    }

    /// Advances the frame counter and returns a new `FrameTime`.
    pub fn tick(&mut self, clock: &dyn Clock) -> FrameTime {
        let now = clock.now();
        let dt = (now - self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt as f32,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    #[test]
    fn tick_reports_elapsed_time() {
        let clock = ManualClock::new(0.0);
        let mut frames = FrameClock::new(&clock);
        clock.advance(0.016);
        let ft = frames.tick(&clock);
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(frames.tick(&clock).frame_index, 1);
    }

    #[test]
    fn tick_clamps_long_stalls() {
        let clock = ManualClock::new(0.0);
        let mut frames = FrameClock::new(&clock);
        clock.advance(10.0);
        assert_eq!(frames.tick(&clock).dt, 0.25);
    }

    #[test]
    fn tick_clamps_zero_dt() {
        let clock = ManualClock::new(5.0);
        let mut frames = FrameClock::new(&clock);
        assert!((frames.tick(&clock).dt - 0.0001).abs() < 1e-9);
    }
}
