use core::f32::consts::FRAC_PI_8;

/// A vertex on the abstract grid. `i` grows rightward, `j` grows downward.
///
/// `j` is fractional: rail start rows carry sub-unit jitter.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GridPoint {
    pub i: f32,
    pub j: f32,
}

impl GridPoint {
    #[inline]
    pub const fn new(i: f32, j: f32) -> Self {
        Self { i, j }
    }
}

/// Grid → pixel mapping for one bundle.
///
/// All three parameters are fixed for the lifetime of the bundle that was
/// constructed with them; different live bundles carry different values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridTransform {
    /// Pixels per grid unit.
    pub grid_unit_px: f32,
    /// Grid units advanced per path segment (both axes).
    pub segment_grid_units: f32,
    /// Ribbon thickness in pixels.
    pub rail_thickness_px: f32,
}

impl GridTransform {
    /// # Panics
    /// Panics if any parameter is non-positive or non-finite. Bundle
    /// construction is the validation point; downstream geometry assumes
    /// sane parameters.
    pub fn new(grid_unit_px: f32, segment_grid_units: f32, rail_thickness_px: f32) -> Self {
        assert!(
            grid_unit_px > 0.0 && grid_unit_px.is_finite(),
            "GridTransform: grid_unit_px must be positive and finite, got {grid_unit_px}"
        );
        assert!(
            segment_grid_units > 0.0 && segment_grid_units.is_finite(),
            "GridTransform: segment_grid_units must be positive and finite, got {segment_grid_units}"
        );
        assert!(
            rail_thickness_px > 0.0 && rail_thickness_px.is_finite(),
            "GridTransform: rail_thickness_px must be positive and finite, got {rail_thickness_px}"
        );
        Self {
            grid_unit_px,
            segment_grid_units,
            rail_thickness_px,
        }
    }

    /// Grid coordinate to pixels. Same scale on both axes.
    #[inline]
    pub fn to_pixels(&self, coord: f32) -> f32 {
        coord * self.grid_unit_px
    }

    /// Horizontal pixel span of one path segment.
    #[inline]
    pub fn step_px(&self) -> f32 {
        self.grid_unit_px * self.segment_grid_units
    }

    /// Horizontal shear applied to a segment's thickness-side points.
    ///
    /// tan(π/8) is the tangent of half the 45° turn between OVER and DOWN
    /// segments; shearing the bottom edge by this amount bisects the angle
    /// between consecutive segment normals, so adjacent quads meet flush
    /// (no kite-shaped hole) and both slopes render at equal visual
    /// thickness.
    #[inline]
    pub fn miter_shear_px(&self) -> f32 {
        self.rail_thickness_px * FRAC_PI_8.tan()
    }

    /// Number of segments needed to span `width_px` horizontally.
    #[inline]
    pub fn segments_to_span(&self, width_px: f32) -> usize {
        (width_px / self.grid_unit_px / self.segment_grid_units).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixels_scales_by_grid_unit() {
        let t = GridTransform::new(20.0, 6.0, 10.0);
        assert_eq!(t.to_pixels(6.0), 120.0);
        assert_eq!(t.to_pixels(0.0), 0.0);
    }

    #[test]
    fn step_is_grid_unit_times_segment() {
        let t = GridTransform::new(20.0, 6.0, 10.0);
        assert_eq!(t.step_px(), 120.0);
    }

    #[test]
    fn miter_shear_is_thickness_times_tan_pi_8() {
        let t = GridTransform::new(20.0, 6.0, 10.0);
        let expected = 10.0 * (core::f32::consts::PI / 8.0).tan();
        assert!((t.miter_shear_px() - expected).abs() < 1e-5);
    }

    #[test]
    fn segments_to_span_rounds_up() {
        let t = GridTransform::new(20.0, 6.0, 10.0);
        // 1280 / 120 = 10.67 segments.
        assert_eq!(t.segments_to_span(1280.0), 11);
        assert_eq!(t.segments_to_span(1200.0), 10);
    }

    #[test]
    #[should_panic]
    fn zero_grid_unit_is_a_programming_error() {
        let _ = GridTransform::new(0.0, 6.0, 10.0);
    }

    #[test]
    #[should_panic]
    fn negative_thickness_is_a_programming_error() {
        let _ = GridTransform::new(20.0, 6.0, -1.0);
    }
}
