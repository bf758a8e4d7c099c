// File: crates/chart-core/src/plugin.rs
// Summary: After-draw hook trait and the post-layout geometry hooks read from.

use crate::axis::AxisId;
use crate::surface::DrawSurface;

/// Pixel extent of a rendered value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub top: f32,
    pub bottom: f32,
}

/// Geometry the chart engine exposes once axes are laid out. Hooks read
/// positions from here instead of re-deriving scales.
pub trait ScaleGeometry {
    /// Pixel x of the month at `index`, or `None` when it is not on the rendered axis.
    fn pixel_for_tick(&self, index: usize) -> Option<f32>;
    fn axis_bounds(&self, axis: AxisId) -> Option<AxisBounds>;
    fn canvas_width(&self) -> f32;
}

/// Callback run once after every completed chart draw, painting on top of it.
pub trait AfterDrawHook {
    fn id(&self) -> &'static str;
    fn after_draw(&self, surface: &mut dyn DrawSurface, geometry: &dyn ScaleGeometry);
}
