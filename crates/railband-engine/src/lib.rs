//! Railband engine crate.
//!
//! This crate owns the geometry + scene pieces used by the studio driver:
//! grid-space path generation, mitered ribbon geometry, windowed drawing,
//! and the bundle lifecycle (spawn / scroll / prune).

pub mod coords;
pub mod paint;
pub mod surface;
pub mod render;

pub mod logging;
pub mod rail;
pub mod rng;
pub mod scene;
pub mod time;
