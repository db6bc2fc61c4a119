use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Abstract time units (milliseconds) since the clock started; the
    /// scale the spawn/prune interval timers run on.
    pub elapsed_units: u64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Wall-clock stopwatch for the driver loop.
///
/// The headless loop renders as fast as it can — nothing here paces
/// frames. The clock just counts them and measures elapsed wall time so
/// a run can report its throughput.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the baseline, e.g. after a scene reset.
    pub fn reset(&mut self) {
        self.start = Instant::now();
        self.frame_index = 0;
    }

    /// Advances the frame count and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let ft = FrameTime {
            elapsed_units: self.start.elapsed().as_millis() as u64,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
