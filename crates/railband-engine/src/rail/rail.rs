use crate::coords::{GridPoint, GridTransform, Vec2};
use crate::paint::Hsb;
use crate::surface::DrawSurface;

use super::Direction;

/// One colored polyline on the grid, rendered as a constant-thickness
/// mitered ribbon.
///
/// Vertices are stored relative to the start row: the seed vertex is
/// `{0, 0}` and every append adds exact multiples of
/// `segment_grid_units` (`i` always, `j` only for DOWN). The fractional
/// `start_j` enters at pixel conversion only, so rails of one bundle
/// carry bit-identical vertex lists regardless of their jittered start
/// rows — accumulating `j` on top of the fraction would smear the path
/// by a rounding ulp per DOWN segment and break congruence.
#[derive(Debug, Clone)]
pub struct Rail {
    color: Hsb,
    transform: GridTransform,
    start_j: f32,
    vertices: Vec<GridPoint>,
}

impl Rail {
    /// Seeds the rail at grid point `{i: 0, j: start_j}`.
    pub fn new(color: Hsb, start_j: f32, transform: GridTransform) -> Self {
        Self {
            color,
            transform,
            start_j,
            vertices: vec![GridPoint::new(0.0, 0.0)],
        }
    }

    /// Appends one vertex in the given direction.
    pub fn add_segment(&mut self, direction: Direction) {
        let last = *self.vertices.last().unwrap_or(&GridPoint::new(0.0, 0.0));
        let step = self.transform.segment_grid_units;
        self.vertices.push(GridPoint::new(
            last.i + step,
            last.j + direction.vertical_steps() * step,
        ));
    }

    /// Path vertices, relative to the start row.
    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    pub fn color(&self) -> Hsb {
        self.color
    }

    /// Starting row in grid units (jitter included).
    pub fn start_j(&self) -> f32 {
        self.start_j
    }

    /// Draws the sub-path whose horizontal pixel extent intersects
    /// `[floor_x, ceiling_x]`.
    ///
    /// Segments crossing a window edge are clipped by clamping endpoint x
    /// and re-deriving y along the segment's slope (exactly 0 or 1 in
    /// pixel space, since grid steps are equal on both axes), so partial
    /// segments stay on the true path. Inverted or fully-out-of-range
    /// windows draw nothing.
    pub fn draw(&self, surface: &mut dyn DrawSurface, floor_x: f32, ceiling_x: f32) {
        if ceiling_x <= floor_x || self.vertices.len() < 2 {
            return;
        }

        let step = self.transform.step_px();
        let last_vertex = (self.vertices.len() - 1) as i64;
        let first = ((floor_x / step).floor() as i64).clamp(0, last_vertex);
        let last = ((ceiling_x / step).ceil() as i64).clamp(0, last_vertex);
        if first >= last {
            return;
        }

        let thickness = self.transform.rail_thickness_px;
        let shear = self.transform.miter_shear_px();

        surface.fill_color(self.color);

        for k in first..last {
            let a = self.vertices[k as usize];
            let b = self.vertices[(k + 1) as usize];

            let ax = self.transform.to_pixels(a.i);
            let ay = self.transform.to_pixels(a.j + self.start_j);
            let bx = self.transform.to_pixels(b.i);
            let by = self.transform.to_pixels(b.j + self.start_j);

            // 0 for OVER, 1 for DOWN.
            let slope = (by - ay) / (bx - ax);

            let x0 = ax.max(floor_x);
            let y0 = ay + (x0 - ax) * slope;
            let x1 = bx.min(ceiling_x);
            let y1 = ay + (x1 - ax) * slope;
            if x1 <= x0 {
                continue;
            }

            // Top edge on the path; bottom edge offset down by the
            // thickness and back by the miter shear so consecutive quads
            // share their slanted side exactly.
            surface.quad([
                Vec2::new(x0, y0),
                Vec2::new(x1, y1),
                Vec2::new(x1 - shear, y1 + thickness),
                Vec2::new(x0 - shear, y0 + thickness),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use Direction::{Down, Over};

    fn transform() -> GridTransform {
        GridTransform::new(20.0, 6.0, 10.0)
    }

    fn rail_with(path: &[Direction]) -> Rail {
        let mut rail = Rail::new(Hsb::new(0.0, 255.0, 255.0), 0.0, transform());
        for &d in path {
            rail.add_segment(d);
        }
        rail
    }

    // ── path building ─────────────────────────────────────────────────────

    #[test]
    fn vertices_follow_over_down_over() {
        let rail = rail_with(&[Over, Down, Over]);
        let expected = [(0.0, 0.0), (6.0, 0.0), (12.0, 6.0), (18.0, 6.0)];
        assert_eq!(rail.vertices().len(), 4);
        for (v, (i, j)) in rail.vertices().iter().zip(expected) {
            assert_eq!((v.i, v.j), (i, j));
        }
    }

    #[test]
    fn i_increases_by_segment_units_every_step() {
        let rail = rail_with(&[Over, Down, Down, Over, Down]);
        for pair in rail.vertices().windows(2) {
            assert_eq!(pair[1].i - pair[0].i, 6.0);
            assert!(pair[1].j == pair[0].j || pair[1].j - pair[0].j == 6.0);
        }
    }

    #[test]
    fn start_offset_shifts_drawn_pixels_not_vertices() {
        let mut rail = Rail::new(Hsb::black(), 3.5, transform());
        rail.add_segment(Down);
        assert_eq!(rail.start_j(), 3.5);
        assert_eq!(rail.vertices()[0].j, 0.0);
        assert_eq!(rail.vertices()[1].j, 6.0);

        // The start row enters at pixel conversion: 3.5 · 20 = 70.
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 0.0, 10_000.0);
        assert_eq!(surface.quads()[0].points[0], Vec2::new(0.0, 70.0));
    }

    #[test]
    fn fractional_start_rows_keep_paths_congruent() {
        // A jittered start row must not leak rounding into the stored
        // path: offsets stay bit-identical across rails.
        let mut plain = Rail::new(Hsb::black(), 0.0, transform());
        let mut jittered = Rail::new(Hsb::black(), 5.6, transform());
        for d in [Down, Over, Down, Down, Over, Down, Down] {
            plain.add_segment(d);
            jittered.add_segment(d);
        }
        assert_eq!(plain.vertices(), jittered.vertices());
    }

    // ── quad emission ─────────────────────────────────────────────────────

    #[test]
    fn wide_window_emits_one_quad_per_segment() {
        let rail = rail_with(&[Over, Down, Over]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 0.0, 10_000.0);

        assert_eq!(surface.quads().len(), 3);

        // Second quad: DOWN segment from grid (6,0) to (12,6).
        let shear = 10.0 * (core::f32::consts::PI / 8.0).tan();
        let quad = surface.quads()[1];
        assert_eq!(quad.points[0], Vec2::new(120.0, 0.0));
        let bottom_left = quad.points[3];
        assert!((bottom_left.x - (120.0 - shear)).abs() < 1e-4);
        assert!((bottom_left.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn adjacent_quads_share_their_miter_edge() {
        // All four direction pairs around interior vertices.
        let rail = rail_with(&[Over, Over, Down, Down, Over, Down]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 0.0, 10_000.0);

        let quads = surface.quads();
        assert_eq!(quads.len(), 6);
        let shear = 10.0 * (core::f32::consts::PI / 8.0).tan();

        for (k, pair) in quads.windows(2).enumerate() {
            let vertex = rail.vertices()[k + 1];
            let top = Vec2::new(vertex.i * 20.0, vertex.j * 20.0);
            let bottom = Vec2::new(top.x - shear, top.y + 10.0);

            // Outgoing edge of quad k == incoming edge of quad k+1.
            assert_eq!(pair[0].points[1], top);
            assert_eq!(pair[1].points[0], top);
            let d = pair[0].points[2] - bottom;
            assert!(d.x.abs() < 1e-3 && d.y.abs() < 1e-3);
            let d = pair[1].points[3] - bottom;
            assert!(d.x.abs() < 1e-3 && d.y.abs() < 1e-3);
        }
    }

    // ── windowing ─────────────────────────────────────────────────────────

    #[test]
    fn emitted_extent_is_clamped_to_the_window() {
        let rail = rail_with(&[Over, Down, Over, Down, Over]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 130.0, 250.0);

        let (lo, hi) = surface.x_extent().expect("window intersects the path");
        let shear = 10.0 * (core::f32::consts::PI / 8.0).tan();
        // Bottom points may undershoot by at most the miter shear.
        assert!(lo >= 130.0 - shear - 1e-3);
        assert!(hi <= 250.0 + 1e-3);
    }

    #[test]
    fn clipped_endpoint_stays_on_the_slope() {
        let rail = rail_with(&[Down]);
        let mut surface = RecordingSurface::new();
        // Cut the 45° segment at x = 60: y must also be 60.
        rail.draw(&mut surface, 0.0, 60.0);

        let quad = surface.quads()[0];
        assert_eq!(quad.points[1], Vec2::new(60.0, 60.0));
    }

    #[test]
    fn inverted_window_draws_nothing() {
        let rail = rail_with(&[Over, Down]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 500.0, 100.0);
        assert!(surface.quads().is_empty());
    }

    #[test]
    fn window_past_the_path_draws_nothing() {
        let rail = rail_with(&[Over, Down]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 10_000.0, 20_000.0);
        assert!(surface.quads().is_empty());
    }

    #[test]
    fn window_before_the_path_draws_nothing() {
        let rail = rail_with(&[Over, Down]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, -500.0, -100.0);
        assert!(surface.quads().is_empty());
    }

    #[test]
    fn window_inside_one_segment_emits_one_partial_quad() {
        let rail = rail_with(&[Over, Over]);
        let mut surface = RecordingSurface::new();
        rail.draw(&mut surface, 10.0, 50.0);

        assert_eq!(surface.quads().len(), 1);
        let quad = surface.quads()[0];
        assert_eq!(quad.points[0], Vec2::new(10.0, 0.0));
        assert_eq!(quad.points[1], Vec2::new(50.0, 0.0));
    }
}
