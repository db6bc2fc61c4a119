use super::Vec2;

/// 2D affine transform (row-major 2×3: linear part + translation column).
///
/// Backs the drawing-surface transform stack. Composition is
/// `self.then_*`, i.e. the new operation is applied in the *current*
/// local frame, matching canvas-style `translate`/`rotate`/`scale`
/// semantics where later calls nest inside earlier ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub m: [[f32; 3]; 2],
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        }
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty]],
        }
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0]],
        }
    }

    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0]],
        }
    }

    /// `self * other`: `other` acts first in local coordinates.
    pub fn compose(self, other: Self) -> Self {
        let a = self.m;
        let b = other.m;
        Self {
            m: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                    a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                    a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
                ],
            ],
        }
    }

    #[inline]
    pub fn then_translate(self, dx: f32, dy: f32) -> Self {
        self.compose(Self::translation(dx, dy))
    }

    #[inline]
    pub fn then_scale(self, sx: f32, sy: f32) -> Self {
        self.compose(Self::scaling(sx, sy))
    }

    #[inline]
    pub fn then_rotate(self, radians: f32) -> Self {
        self.compose(Self::rotation(radians))
    }

    /// Transform a point (includes translation).
    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2],
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2],
        )
    }
}
