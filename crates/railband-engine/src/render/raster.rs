use crate::coords::Vec2;
use crate::paint::Hsb;
use crate::surface::{DrawSurface, TransformStack};

/// CPU framebuffer implementing [`DrawSurface`].
///
/// Pixels are packed RGBA (one `u32` per pixel, byte order R,G,B,A).
/// Quads are filled with even-odd scanline coverage sampled at pixel
/// centers; no antialiasing.
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    transforms: TransformStack,
    fill: u32,
    background: u32,
}

#[inline]
fn pack(rgba: [u8; 4]) -> u32 {
    u32::from_ne_bytes(rgba)
}

impl RasterSurface {
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "RasterSurface: zero-sized framebuffer");
        let background = pack(Hsb::black().to_rgba8());
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
            transforms: TransformStack::new(),
            fill: pack([255, 255, 255, 255]),
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize].to_ne_bytes()
    }

    /// Framebuffer contents as RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fills a convex-or-not polygon with the current fill color.
    ///
    /// Even-odd rule, scanlines at pixel centers (y + 0.5).
    fn fill_polygon(&mut self, points: &[Vec2]) {
        let (mut y_min, mut y_max) = (f32::INFINITY, f32::NEG_INFINITY);
        for p in points {
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return;
        }

        let row_start = y_min.floor().max(0.0) as u32;
        let row_end = (y_max.ceil() as i64).clamp(0, self.height as i64) as u32;

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for row in row_start..row_end {
            let scan_y = row as f32 + 0.5;
            crossings.clear();

            for k in 0..points.len() {
                let a = points[k];
                let b = points[(k + 1) % points.len()];
                // Half-open edge rule so shared vertices count once.
                if (a.y <= scan_y && b.y > scan_y) || (b.y <= scan_y && a.y > scan_y) {
                    let t = (scan_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                // Cover pixels whose center (x + 0.5) lies in [lo, hi).
                let x0 = ((pair[0] - 0.5).ceil().max(0.0)) as i64;
                let x1 = ((pair[1] - 0.5).ceil() as i64).clamp(0, self.width as i64);
                for x in x0..x1 {
                    self.pixels[(row as i64 * self.width as i64 + x) as usize] = self.fill;
                }
            }
        }
    }
}

impl DrawSurface for RasterSurface {
    fn fill_color(&mut self, color: Hsb) {
        self.fill = pack(color.to_rgba8());
    }

    fn quad(&mut self, points: [Vec2; 4]) {
        let t = self.transforms.current();
        let resolved = points.map(|p| t.apply(p));
        self.fill_polygon(&resolved);
    }

    fn rect(&mut self, origin: Vec2, size: Vec2) {
        self.quad([
            origin,
            Vec2::new(origin.x + size.x, origin.y),
            Vec2::new(origin.x + size.x, origin.y + size.y),
            Vec2::new(origin.x, origin.y + size.y),
        ]);
    }

    fn push_transform(&mut self) {
        self.transforms.push();
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transforms.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.transforms.rotate(radians);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transforms.scale(sx, sy);
    }

    fn clear(&mut self) {
        self.pixels.fill(self.background);
        self.transforms.reset();
    }

    fn set_background(&mut self, color: Hsb) {
        self.background = pack(color.to_rgba8());
        self.pixels.fill(self.background);
    }
}
