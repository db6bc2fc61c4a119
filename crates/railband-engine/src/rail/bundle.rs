use crate::coords::{GridTransform, Viewport};
use crate::paint::Hsb;
use crate::rng::RandomSource;
use crate::surface::DrawSurface;

use super::{Direction, Rail};

/// Construction parameters for one bundle.
///
/// Everything the factory randomizes arrives here already sampled except
/// the rail count, per-rail jitter, and shared color, which the bundle
/// draws itself so the congruent-offsets invariant is established in one
/// place.
#[derive(Debug, Copy, Clone)]
pub struct BundleParams {
    /// Vertical grid row the bundle starts at.
    pub start_row: f32,
    /// Vertical spread of the bundle in grid units.
    pub height_grid_units: f32,
    /// Scroll speed in pixels per frame.
    pub speed_px_per_frame: f32,
    /// Mirror about the viewport's mid-height.
    pub flip_vertical: bool,
    /// Mirror about the viewport's mid-width.
    pub flip_horizontal: bool,
    pub transform: GridTransform,
    /// Frame counter value at spawn.
    pub spawn_frame: u64,
    /// Inclusive range the rail count is drawn from.
    pub rail_count: (u32, u32),
    /// Standard deviation of per-rail vertical jitter, in grid units.
    pub jitter_std: f32,
}

/// A set of rails sharing one generated path, scrolling as a unit.
///
/// Invariant: every rail has received the same `add_segment` sequence;
/// rails differ only in starting row. The scroll window reveals the path
/// left to right and then erases it left to right; once the window floor
/// passes the viewport the bundle marks itself done and becomes eligible
/// for pruning.
#[derive(Debug, Clone)]
pub struct RailBundle {
    rails: Vec<Rail>,
    transform: GridTransform,
    speed_px_per_frame: f32,
    spawn_frame: u64,
    flip_vertical: bool,
    flip_horizontal: bool,
    height_grid_units: f32,
    done: bool,
}

impl RailBundle {
    pub fn new(params: BundleParams, rng: &mut dyn RandomSource) -> Self {
        let (lo, hi) = params.rail_count;
        let count = rng.uniform_range(lo, hi).max(1);
        let color = Hsb::new(rng.uniform(0.0, 255.0), 255.0, 255.0);

        let mut rails = Vec::with_capacity(count as usize);
        for k in 0..count {
            // Evenly spread across the bundle height, plus jitter so the
            // spacing doesn't read as mechanical.
            let offset = k as f32 / count as f32 * params.height_grid_units;
            let jitter = rng.gaussian(0.0, params.jitter_std);
            rails.push(Rail::new(
                color,
                params.start_row + offset + jitter,
                params.transform,
            ));
        }

        Self {
            rails,
            transform: params.transform,
            speed_px_per_frame: params.speed_px_per_frame,
            spawn_frame: params.spawn_frame,
            flip_vertical: params.flip_vertical,
            flip_horizontal: params.flip_horizontal,
            height_grid_units: params.height_grid_units,
            done: false,
        }
    }

    /// Appends one segment to every rail.
    ///
    /// All rails must see the same sequence; anything else desynchronizes
    /// ribbons that are meant to read as one bent beam.
    pub fn add_segment(&mut self, direction: Direction) {
        for rail in &mut self.rails {
            rail.add_segment(direction);
        }
    }

    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    pub fn transform(&self) -> GridTransform {
        self.transform
    }

    pub fn spawn_frame(&self) -> u64 {
        self.spawn_frame
    }

    pub fn height_grid_units(&self) -> f32 {
        self.height_grid_units
    }

    /// True once the bundle has fully scrolled past the viewport.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Draws the window for `current_frame`.
    ///
    /// Animating: `ceiling = (frame − spawn) · speed`, `floor = ceiling −
    /// viewport width`. Static: the full viewport. Flips are presentation
    /// transforms on the surface's frame; stored grid coordinates never
    /// change.
    pub fn draw(
        &mut self,
        surface: &mut dyn DrawSurface,
        current_frame: u64,
        viewport: Viewport,
        animating: bool,
    ) {
        let vw = viewport.width;
        let (floor, ceiling) = if animating {
            let elapsed = current_frame.saturating_sub(self.spawn_frame) as f32;
            let ceiling = elapsed * self.speed_px_per_frame;
            (ceiling - vw, ceiling)
        } else {
            (0.0, vw)
        };

        if floor > vw {
            if !self.done {
                log::debug!(
                    "bundle spawned at frame {} scrolled out at frame {current_frame}",
                    self.spawn_frame
                );
            }
            self.done = true;
            return;
        }

        let flipped = self.flip_vertical || self.flip_horizontal;
        if flipped {
            surface.push_transform();
            if self.flip_vertical {
                surface.translate(0.0, viewport.height);
                surface.scale(1.0, -1.0);
            }
            if self.flip_horizontal {
                surface.translate(vw, 0.0);
                surface.scale(-1.0, 1.0);
            }
        }

        for rail in &self.rails {
            rail.draw(surface, floor.max(0.0), ceiling.min(vw));
        }

        if flipped {
            surface.pop_transform();
        }
    }
}
