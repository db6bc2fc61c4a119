//! Drawing-surface seam.
//!
//! Responsibilities:
//! - define the capability set the geometry engine is allowed to consume
//! - provide the shared transform-stack building block for implementations
//! - provide a recording implementation for tests and geometry inspection
//!
//! The engine never reads back from a surface; data flows one direction.

mod record;
mod stack;

pub use record::{RecordedQuad, RecordingSurface};
pub use stack::TransformStack;

use crate::coords::Vec2;
use crate::paint::Hsb;

/// Host drawing surface contract.
///
/// Transform calls follow canvas semantics: `push_transform` saves the
/// current frame, `translate`/`rotate`/`scale` compose onto it, and
/// `pop_transform` restores the save. Calls must be balanced.
pub trait DrawSurface {
    /// Sets the fill color for subsequent `quad`/`rect` calls.
    fn fill_color(&mut self, color: Hsb);

    /// Fills a quadrilateral given in drawing order.
    fn quad(&mut self, points: [Vec2; 4]);

    /// Fills an axis-aligned rectangle (in the current transform frame).
    fn rect(&mut self, origin: Vec2, size: Vec2);

    fn push_transform(&mut self);
    fn pop_transform(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    /// Clears all drawn content.
    fn clear(&mut self);

    /// Paints the whole surface with a background color.
    fn set_background(&mut self, color: Hsb);
}
