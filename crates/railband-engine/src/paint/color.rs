/// HSB color, three channels in `0`–`255`.
///
/// The geometry engine treats the triplet as opaque — it only hands colors
/// to the drawing surface. The hue/saturation/brightness interpretation
/// lives in [`to_rgba8`](Self::to_rgba8), which only the raster renderer
/// uses.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    #[inline]
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { h: 0.0, s: 0.0, b: 0.0 }
    }

    /// Converts to opaque RGBA bytes.
    ///
    /// Hue wraps; saturation and brightness clamp to the channel range.
    pub fn to_rgba8(self) -> [u8; 4] {
        let h = (self.h.rem_euclid(256.0)) / 256.0 * 6.0;
        let s = (self.s / 255.0).clamp(0.0, 1.0);
        let v = (self.b / 255.0).clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        [
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            255,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hue_full_channels_is_red() {
        assert_eq!(Hsb::new(0.0, 255.0, 255.0).to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn third_around_the_wheel_is_green() {
        // 256 / 3 ≈ 85.33; sector 2 start.
        assert_eq!(Hsb::new(256.0 / 3.0, 255.0, 255.0).to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(Hsb::new(123.0, 0.0, 128.0).to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(Hsb::new(200.0, 255.0, 0.0).to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn hue_wraps_past_the_channel_range() {
        assert_eq!(
            Hsb::new(256.0, 255.0, 255.0).to_rgba8(),
            Hsb::new(0.0, 255.0, 255.0).to_rgba8()
        );
    }
}
