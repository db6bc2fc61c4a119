//! Software rendering.
//!
//! The engine draws through the [`DrawSurface`](crate::surface::DrawSurface)
//! seam; this module provides the CPU implementation used for headless
//! runs and PNG export.

mod raster;

pub use raster::RasterSurface;
