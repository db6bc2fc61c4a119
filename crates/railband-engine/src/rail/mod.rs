//! Rails and rail bundles.
//!
//! Responsibilities:
//! - turn OVER/DOWN token sequences into grid vertex lists
//! - emit gap-free mitered quad geometry for any pixel-space window
//! - scroll congruent rail sets across the viewport and report when a
//!   bundle has fully passed

mod bundle;
mod direction;
mod rail;

pub use bundle::{BundleParams, RailBundle};
pub use direction::Direction;
pub use rail::Rail;
