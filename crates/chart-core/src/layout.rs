// File: crates/chart-core/src/layout.rs
// Summary: Post-layout pixel geometry of a chart (plot rect, x/y scales, x tick choice).

use crate::axis::{Axis, AxisId, AxisPosition};
use crate::chart::{Chart, RenderOptions};
use crate::geometry::RectF;
use crate::grid::{fit_x_ticks, XTicks};
use crate::plugin::{AxisBounds, ScaleGeometry};
use crate::scale::{CategoryScale, ValueScale};

/// Font size of tick labels on every axis.
pub const TICK_FONT_SIZE: f32 = 11.0;
/// Largest x-label rotation, in degrees.
pub const MAX_X_ROTATION: f32 = 45.0;
/// Horizontal distance between the two right-hand axes.
pub const OUTER_AXIS_OFFSET: f32 = 64.0;

#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub plot: RectF,
    pub x: CategoryScale,
    pub x_ticks: XTicks,
    pub axes: Vec<(Axis, ValueScale)>,
}

impl ChartLayout {
    /// Lay out `chart` for `opts`; `measure` returns the pixel width of an x label.
    pub fn compute(chart: &Chart, opts: &RenderOptions, measure: &dyn Fn(&str) -> f32) -> Self {
        let width = opts.width as f32;
        let height = opts.height as f32;
        let plot = RectF::from_ltrb(
            opts.insets.left as f32,
            opts.insets.top as f32,
            (width - opts.insets.right as f32).max(opts.insets.left as f32),
            (height - opts.insets.bottom as f32).max(opts.insets.top as f32),
        );

        let total = chart.labels.len();
        let x = CategoryScale::new(plot.left, plot.right, total);
        let widest = chart.labels.iter().map(|l| measure(l)).fold(0.0f32, f32::max);
        let x_ticks = fit_x_ticks(total, chart.max_x_ticks(), x.spacing(), widest, TICK_FONT_SIZE, MAX_X_ROTATION);

        let axes = chart
            .axes
            .iter()
            .map(|a| (a.clone(), ValueScale::new_linear(plot.top, plot.bottom, a.min, a.max)))
            .collect();

        Self { width, height, plot, x, x_ticks, axes }
    }

    pub fn value_scale(&self, id: AxisId) -> Option<&ValueScale> {
        self.axes.iter().find(|(a, _)| a.id == id).map(|(_, s)| s)
    }

    /// Pixel x of the vertical line an axis is drawn on.
    pub fn axis_x(&self, id: AxisId) -> f32 {
        match id.position() {
            AxisPosition::Left => self.plot.left,
            AxisPosition::Right => self.plot.right,
            AxisPosition::RightOuter => self.plot.right + OUTER_AXIS_OFFSET,
        }
    }
}

impl ScaleGeometry for ChartLayout {
    fn pixel_for_tick(&self, index: usize) -> Option<f32> {
        self.x.to_px(index)
    }

    fn axis_bounds(&self, axis: AxisId) -> Option<AxisBounds> {
        self.value_scale(axis).map(|s| AxisBounds { top: s.top_px, bottom: s.bottom_px })
    }

    fn canvas_width(&self) -> f32 {
        self.width
    }
}
