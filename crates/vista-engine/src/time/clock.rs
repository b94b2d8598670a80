use std::cell::Cell;
use std::time::Instant;

/// Monotonic time source in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by [`Instant`]; reports seconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
///
/// Drives scripted replays and tests. Interior mutability lets the frame loop
/// advance it while widgets hold a shared reference.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    /// Moves the clock forward by `dt` seconds. Negative steps are ignored.
    pub fn advance(&self, dt: f64) {
        if dt > 0.0 {
            self.now.set(self.now.get() + dt);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_only_forward() {
        let clock = ManualClock::new(1.0);
        clock.advance(0.5);
        clock.advance(-3.0);
        assert_eq!(clock.now(), 1.5);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
