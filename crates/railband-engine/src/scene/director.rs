use crate::coords::{GridTransform, Viewport};
use crate::paint::Hsb;
use crate::rail::{BundleParams, Direction, RailBundle};
use crate::rng::RandomSource;
use crate::surface::DrawSurface;

use super::SceneConfig;

/// Owns the live bundles and runs the spawn / prune / draw loop.
///
/// Strictly single-threaded: ticks and draws are plain method calls, so
/// bundle-set mutation is always atomic relative to iteration.
pub struct Scene {
    config: SceneConfig,
    viewport: Viewport,
    rng: Box<dyn RandomSource>,
    bundles: Vec<RailBundle>,
    background: Hsb,
    animating: bool,
    frame: u64,
}

impl Scene {
    /// # Panics
    /// Panics if the viewport is invalid (zero or non-finite extent).
    pub fn new(viewport: Viewport, config: SceneConfig, rng: Box<dyn RandomSource>) -> Self {
        assert!(viewport.is_valid(), "Scene: invalid viewport {viewport:?}");
        let mut scene = Self {
            config,
            viewport,
            rng,
            bundles: Vec::new(),
            background: Hsb::black(),
            animating: true,
            frame: 0,
        };
        scene.reset();
        scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn background(&self) -> Hsb {
        self.background
    }

    pub fn bundles(&self) -> &[RailBundle] {
        &self.bundles
    }

    /// Clears all bundles, reseeds the background, and creates one
    /// initial bundle spanning the viewport.
    ///
    /// The initial bundle exists in static mode too; a freshly generated
    /// static frame would otherwise be bare background.
    pub fn reset(&mut self) {
        self.bundles.clear();
        self.background = Hsb::new(
            self.rng
                .uniform(self.config.background_hue.0, self.config.background_hue.1),
            self.rng.uniform(
                self.config.background_saturation.0,
                self.config.background_saturation.1,
            ),
            self.rng.uniform(
                self.config.background_brightness.0,
                self.config.background_brightness.1,
            ),
        );
        let initial = self.make_bundle();
        self.bundles.push(initial);
        log::info!(
            "scene reset at frame {}, background {:?}",
            self.frame,
            self.background
        );
    }

    /// Spawn tick: while animating, admits one new bundle with the
    /// configured probability.
    pub fn spawn_tick(&mut self) {
        if !self.animating {
            return;
        }
        if self.rng.chance(self.config.spawn_probability) {
            let bundle = self.make_bundle();
            log::debug!(
                "spawned bundle at frame {}: {} rails, step {} px",
                self.frame,
                bundle.rails().len(),
                bundle.transform().step_px()
            );
            self.bundles.push(bundle);
        }
    }

    /// Prune tick: drops bundles that have fully scrolled past.
    pub fn prune_tick(&mut self) {
        let before = self.bundles.len();
        self.bundles.retain(|b| !b.is_done());
        let removed = before - self.bundles.len();
        if removed > 0 {
            log::debug!("pruned {removed} finished bundles, {} live", self.bundles.len());
        }
    }

    /// Per-frame draw pass: clear, background, bundles in insertion
    /// order; advances the frame counter.
    pub fn draw_frame(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();
        surface.set_background(self.background);
        for bundle in &mut self.bundles {
            bundle.draw(surface, self.frame, self.viewport, self.animating);
        }
        self.frame += 1;
    }

    /// Flips animation and resets, so the next draw is either a fresh
    /// scroll or a fresh static full-viewport frame.
    pub fn toggle_animate(&mut self) {
        self.animating = !self.animating;
        log::info!("animation {}", if self.animating { "enabled" } else { "frozen" });
        self.reset();
    }

    /// Replaces the viewport used for future windows and spawns.
    /// Already-generated paths are untouched.
    ///
    /// # Panics
    /// Panics if the new viewport is invalid.
    pub fn resize(&mut self, viewport: Viewport) {
        assert!(viewport.is_valid(), "Scene::resize: invalid viewport {viewport:?}");
        log::info!(
            "viewport {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
    }

    /// Builds one bundle with parameters sampled from the config ranges,
    /// pre-populated with enough segments to span the viewport. Bundles
    /// never grow path after this.
    fn make_bundle(&mut self) -> RailBundle {
        let c = &self.config;
        let grid_unit = self.rng.uniform(c.grid_unit_px.0, c.grid_unit_px.1);
        let segment_units =
            self.rng.uniform_range(c.segment_grid_units.0, c.segment_grid_units.1) as f32;
        let thickness =
            grid_unit / self.rng.uniform(c.thickness_divisor.0, c.thickness_divisor.1);
        let transform = GridTransform::new(grid_unit, segment_units, thickness);

        let grid_rows = self.viewport.grid_rows(grid_unit);
        // Tiny viewports can push the cap under the minimum height.
        let height_cap = (grid_rows / c.height_cap_divisor).max(1.0);
        let height = if height_cap > 1.0 {
            self.rng.uniform(1.0, height_cap)
        } else {
            1.0
        };
        let start_row = self.rng.uniform(0.0, c.start_row_fraction * grid_rows);

        let params = BundleParams {
            start_row,
            height_grid_units: height,
            speed_px_per_frame: self.rng.uniform(c.speed_px_per_frame.0, c.speed_px_per_frame.1),
            flip_vertical: self.rng.chance(c.flip_probability),
            flip_horizontal: self.rng.chance(c.flip_probability),
            transform,
            spawn_frame: self.frame,
            rail_count: c.rail_count,
            jitter_std: c.rail_jitter_std,
        };

        let mut bundle = RailBundle::new(params, self.rng.as_mut());
        for _ in 0..transform.segments_to_span(self.viewport.width) {
            let direction = if self.rng.chance(self.config.down_probability) {
                Direction::Down
            } else {
                Direction::Over
            };
            bundle.add_segment(direction);
        }
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    /// Deterministic source: `unit()`-style draws resolve mid-range, so
    /// `chance(p)` is true only when forced via `always_spawn`.
    struct Fixed {
        unit_value: f32,
    }

    impl RandomSource for Fixed {
        fn uniform(&mut self, min: f32, max: f32) -> f32 {
            min + self.unit_value * (max - min)
        }

        fn gaussian(&mut self, _mean: f32, _std_dev: f32) -> f32 {
            0.0
        }
    }

    fn scene_with(unit_value: f32) -> Scene {
        Scene::new(
            Viewport::new(640.0, 480.0),
            SceneConfig::default(),
            Box::new(Fixed { unit_value }),
        )
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_yields_one_bundle_spanning_the_viewport() {
        let scene = scene_with(0.3);
        assert_eq!(scene.bundles().len(), 1);

        let bundle = &scene.bundles()[0];
        let rail = &bundle.rails()[0];
        let last = rail.vertices().last().unwrap();
        let end_px = bundle.transform().to_pixels(last.i);
        let step = bundle.transform().step_px();

        assert!(end_px >= 640.0, "path ends at {end_px}px, short of the viewport");
        assert!(end_px < 640.0 + step, "path overshoots by a full segment");
    }

    #[test]
    fn reset_replaces_bundles_and_background() {
        let mut scene = scene_with(0.3);
        for _ in 0..40 {
            scene.spawn_tick();
        }
        scene.reset();
        assert_eq!(scene.bundles().len(), 1);
    }

    // ── spawn / prune ─────────────────────────────────────────────────────

    #[test]
    fn spawn_tick_admits_when_the_roll_succeeds() {
        // unit 0.05 < spawn_probability 0.1: every tick spawns.
        let mut scene = scene_with(0.05);
        let before = scene.bundles().len();
        scene.spawn_tick();
        assert_eq!(scene.bundles().len(), before + 1);
    }

    #[test]
    fn spawn_tick_skips_when_the_roll_fails() {
        let mut scene = scene_with(0.5);
        let before = scene.bundles().len();
        scene.spawn_tick();
        assert_eq!(scene.bundles().len(), before);
    }

    #[test]
    fn spawn_tick_is_inert_while_frozen() {
        let mut scene = scene_with(0.05);
        scene.toggle_animate();
        assert!(!scene.is_animating());
        let before = scene.bundles().len();
        scene.spawn_tick();
        assert_eq!(scene.bundles().len(), before);
    }

    #[test]
    fn prune_drops_only_finished_bundles() {
        let mut scene = scene_with(0.05);
        scene.spawn_tick();
        assert_eq!(scene.bundles().len(), 2);

        // Scroll far enough that every bundle is done.
        let mut surface = RecordingSurface::new();
        for _ in 0..300 {
            scene.draw_frame(&mut surface);
        }
        scene.prune_tick();
        assert!(scene.bundles().is_empty());
    }

    #[test]
    fn prune_keeps_live_bundles() {
        let mut scene = scene_with(0.05);
        scene.prune_tick();
        assert_eq!(scene.bundles().len(), 1);
    }

    // ── frame pass ────────────────────────────────────────────────────────

    #[test]
    fn draw_frame_clears_paints_and_advances() {
        let mut scene = scene_with(0.3);
        let mut surface = RecordingSurface::new();

        let f0 = scene.frame();
        scene.draw_frame(&mut surface);

        assert_eq!(scene.frame(), f0 + 1);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.background(), Some(scene.background()));
    }

    #[test]
    fn toggle_freezes_and_regenerates() {
        let mut scene = scene_with(0.3);
        scene.toggle_animate();
        assert!(!scene.is_animating());
        assert_eq!(scene.bundles().len(), 1);

        // Static frames are identical: same windows, same geometry.
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        scene.draw_frame(&mut a);
        scene.draw_frame(&mut b);
        assert_eq!(a.quads(), b.quads());
    }

    #[test]
    fn static_frame_rasterizes_visible_rails() {
        use crate::render::RasterSurface;

        let mut scene = scene_with(0.3);
        scene.toggle_animate();

        let mut surface = RasterSurface::new(640, 480);
        scene.draw_frame(&mut surface);

        let background = scene.background().to_rgba8();
        let foreground = surface
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| *px != background)
            .count();
        assert!(foreground > 0, "static frame left only background pixels");
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_keeps_generated_paths() {
        let mut scene = scene_with(0.3);
        let before: Vec<_> = scene.bundles()[0].rails()[0].vertices().to_vec();
        scene.resize(Viewport::new(1280.0, 720.0));
        assert_eq!(scene.viewport(), Viewport::new(1280.0, 720.0));
        assert_eq!(scene.bundles()[0].rails()[0].vertices(), &before[..]);
    }

    #[test]
    #[should_panic]
    fn resize_to_zero_is_a_programming_error() {
        let mut scene = scene_with(0.3);
        scene.resize(Viewport::new(0.0, 720.0));
    }
}
