//! Frame and tick timing.

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::IntervalTimer;
