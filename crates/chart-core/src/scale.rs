// File: crates/chart-core/src/scale.rs
// Summary: Category (month index) X scale and linear value Y scale.

/// Horizontal scale over `count` evenly spaced categories spanning `[left_px, right_px]`.
///
/// The first category sits on the left edge and the last on the right edge; a
/// single category is centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px: right_px.max(left_px), count }
    }

    /// Pixel distance between neighbouring categories.
    #[inline]
    pub fn spacing(&self) -> f32 {
        if self.count > 1 { (self.right_px - self.left_px) / (self.count - 1) as f32 } else { 0.0 }
    }

    /// Pixel x of a category, or `None` past either end.
    pub fn to_px(&self, index: usize) -> Option<f32> {
        if index >= self.count {
            return None;
        }
        if self.count == 1 {
            return Some((self.left_px + self.right_px) * 0.5);
        }
        Some(self.left_px + index as f32 * self.spacing())
    }

    /// Nearest category to a pixel x. Pixels outside the plot snap to the ends.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let spacing = self.spacing();
        if spacing <= 0.0 {
            return Some(0);
        }
        let raw = ((px - self.left_px) / spacing).round();
        Some(raw.clamp(0.0, (self.count - 1) as f32) as usize)
    }
}

/// Vertical value scale mapping a data range to `[top, bottom]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
