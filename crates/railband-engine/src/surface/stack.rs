use crate::coords::Affine;

/// Save/restore stack of affine transforms.
///
/// Shared by surface implementations so push/pop/translate/rotate/scale
/// behave identically everywhere.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    #[inline]
    pub fn new() -> Self {
        Self {
            current: Affine::identity(),
            saved: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> Affine {
        self.current
    }

    #[inline]
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// # Panics
    /// Panics (debug only) on a pop without a matching push.
    #[inline]
    pub fn pop(&mut self) {
        debug_assert!(!self.saved.is_empty(), "pop_transform without matching push_transform");
        if let Some(prev) = self.saved.pop() {
            self.current = prev;
        }
    }

    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.then_translate(dx, dy);
    }

    #[inline]
    pub fn rotate(&mut self, radians: f32) {
        self.current = self.current.then_rotate(radians);
    }

    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current = self.current.then_scale(sx, sy);
    }

    /// Drops all saves and restores the identity transform.
    #[inline]
    pub fn reset(&mut self) {
        self.current = Affine::identity();
        self.saved.clear();
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
