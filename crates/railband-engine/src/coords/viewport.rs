/// Viewport extent in pixels: the coordinate basis for scroll windows,
/// flip mirrors, and the bundle factory's row/height ranges.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// How many grid rows of the given unit size fit vertically.
    ///
    /// The factory sizes bundle heights and start rows from this, so a
    /// resize changes the ranges of *future* bundles only.
    #[inline]
    pub fn grid_rows(self, grid_unit_px: f32) -> f32 {
        self.height / grid_unit_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_scales_with_the_unit() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.grid_rows(20.0), 24.0);
        assert_eq!(vp.grid_rows(48.0), 10.0);
    }

    #[test]
    fn degenerate_viewports_are_invalid() {
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 480.0).is_valid());
        assert!(Viewport::new(640.0, 480.0).is_valid());
    }
}
