//! Scene direction.
//!
//! Responsibilities:
//! - own the live bundle set and the frame counter
//! - admit new bundles stochastically on the spawn tick
//! - drop finished bundles on the (coarser) prune tick
//! - run the per-frame draw pass
//!
//! Tick methods are plain calls; the driver owns the timers (single
//! threaded, no reentrancy — see `time::IntervalTimer`).

mod config;
mod director;

pub use config::SceneConfig;
pub use director::Scene;
