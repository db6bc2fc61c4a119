/// Path token for one segment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Advance one segment horizontally.
    Over,
    /// Advance one segment horizontally and one vertically (45° slope).
    Down,
}

impl Direction {
    /// Vertical advance in segment units: 0 for OVER, 1 for DOWN.
    #[inline]
    pub const fn vertical_steps(self) -> f32 {
        match self {
            Direction::Over => 0.0,
            Direction::Down => 1.0,
        }
    }
}
