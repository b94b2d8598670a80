//! Time subsystem.
//!
//! Time-dependent behaviour (fades, cursor blink) polls a [`Clock`] on each
//! draw instead of relying on timers, so it only needs to be called once per
//! tick. Intended usage:
//! - one `Clock` shared by the frame loop and the canvas
//! - one `FrameClock` per loop; call `tick()` once per presented frame

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
