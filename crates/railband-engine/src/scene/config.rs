/// Tunable ranges for the bundle factory and scene cadence.
///
/// Every range is sampled per spawn, so concurrently live bundles carry
/// independent visual parameters (nothing here is process-global).
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Pixels per grid unit, `[lo, hi)`.
    pub grid_unit_px: (f32, f32),
    /// Grid units per segment, inclusive integer range.
    pub segment_grid_units: (u32, u32),
    /// Rail thickness is `grid_unit_px / divisor`, divisor in `[lo, hi)`.
    pub thickness_divisor: (f32, f32),
    /// Rails per bundle, inclusive integer range.
    pub rail_count: (u32, u32),
    /// Scroll speed in pixels per frame, `[lo, hi)`.
    pub speed_px_per_frame: (f32, f32),
    /// Bundle height cap: `viewport_height / grid_unit_px / divisor`.
    pub height_cap_divisor: f32,
    /// Starting row upper bound as a fraction of the viewport's grid rows.
    pub start_row_fraction: f32,
    /// Std deviation of per-rail vertical jitter, grid units.
    ///
    /// Tunable by design: a sibling of the original used uniform(−3, 3)
    /// here instead.
    pub rail_jitter_std: f32,
    /// Probability that any generated segment slopes DOWN.
    pub down_probability: f32,
    /// Probability of mirroring a new bundle vertically / horizontally.
    pub flip_probability: f32,

    /// Probability of admitting a bundle per spawn tick.
    pub spawn_probability: f32,
    /// Spawn-check period in abstract time units.
    pub spawn_period: u64,
    /// Prune period in abstract time units (coarser than spawn on
    /// purpose: filtering every frame buys nothing).
    pub prune_period: u64,

    /// Background hue range.
    pub background_hue: (f32, f32),
    /// Background saturation range.
    pub background_saturation: (f32, f32),
    /// Background brightness range (kept low so full-brightness rails
    /// stay legible).
    pub background_brightness: (f32, f32),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_unit_px: (15.0, 75.0),
            segment_grid_units: (1, 6),
            thickness_divisor: (1.5, 15.0),
            rail_count: (5, 15),
            speed_px_per_frame: (5.0, 15.0),
            height_cap_divisor: 4.0,
            start_row_fraction: 0.9,
            rail_jitter_std: 0.05,
            down_probability: 0.5,
            flip_probability: 0.5,
            spawn_probability: 0.1,
            spawn_period: 50,
            prune_period: 5000,
            background_hue: (0.0, 255.0),
            background_saturation: (128.0, 255.0),
            background_brightness: (16.0, 96.0),
        }
    }
}
