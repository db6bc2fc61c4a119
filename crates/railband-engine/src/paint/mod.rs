//! Paint types.

mod color;

pub use color::Hsb;
