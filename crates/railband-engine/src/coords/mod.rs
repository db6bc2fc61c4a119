//! Coordinate types.
//!
//! Responsibilities:
//! - pixel-space vectors and viewport extents
//! - the per-bundle grid → pixel mapping
//! - affine transforms backing the drawing-surface transform stack

mod affine;
mod grid;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use grid::{GridPoint, GridTransform};
pub use vec2::Vec2;
pub use viewport::Viewport;
