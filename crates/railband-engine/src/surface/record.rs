use crate::coords::Vec2;
use crate::paint::Hsb;

use super::{DrawSurface, TransformStack};

/// One recorded fill, with the transform already applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecordedQuad {
    pub color: Hsb,
    pub points: [Vec2; 4],
}

/// Surface that records resolved geometry instead of rasterizing it.
///
/// Rectangles are recorded as quads (their four corners pushed through the
/// current transform), so every fill lands in one stream regardless of
/// which primitive produced it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    transforms: TransformStack,
    fill: Hsb,
    quads: Vec<RecordedQuad>,
    background: Option<Hsb>,
    clear_count: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quads(&self) -> &[RecordedQuad] {
        &self.quads
    }

    pub fn background(&self) -> Option<Hsb> {
        self.background
    }

    pub fn clear_count(&self) -> u32 {
        self.clear_count
    }

    /// Horizontal pixel extent covered by all recorded quads, or `None`
    /// when nothing was recorded.
    pub fn x_extent(&self) -> Option<(f32, f32)> {
        let mut extent: Option<(f32, f32)> = None;
        for quad in &self.quads {
            for p in quad.points {
                extent = Some(match extent {
                    None => (p.x, p.x),
                    Some((lo, hi)) => (lo.min(p.x), hi.max(p.x)),
                });
            }
        }
        extent
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_color(&mut self, color: Hsb) {
        self.fill = color;
    }

    fn quad(&mut self, points: [Vec2; 4]) {
        let t = self.transforms.current();
        self.quads.push(RecordedQuad {
            color: self.fill,
            points: points.map(|p| t.apply(p)),
        });
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
        self.quads.clear();
        self.background = None;
        self.clear_count += 1;
    }

    fn set_background(&mut self, color: Hsb) {
        self.background = Some(color);
    }
}
