// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, plot insets).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Margins between the canvas edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Left: primary axis ticks and title. Right: two stacked secondary axes.
    fn default() -> Self {
        Self::new(80, 128, 24, 64)
    }
}
