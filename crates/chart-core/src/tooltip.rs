// File: crates/chart-core/src/tooltip.rs
// Summary: Index-mode hover tooltips: one line per series at a shared month index.

use crate::geometry::{clamp_hi_wins, RectF};
use crate::series::{Series, SeriesKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    /// Month label of the hovered index.
    pub title: String,
    pub lines: Vec<(SeriesKind, String)>,
}

impl Tooltip {
    /// Tooltip for `index`, or `None` when it is past the last label.
    /// Series too short to reach `index` are left out.
    pub fn at(labels: &[String], series: &[Series], index: usize) -> Option<Self> {
        let title = labels.get(index)?.clone();
        let lines = series
            .iter()
            .filter_map(|s| s.value_at(index).map(|v| (s.kind, s.kind.tooltip_line(v))))
            .collect();
        Some(Self { index, title, lines })
    }

    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(_, l)| l.as_str())
    }
}

/// Gap between the hovered point and the tooltip box.
pub const CARET_GAP: f32 = 12.0;

/// Place a `size` box beside `anchor`: to the right when it fits in
/// `canvas_width`, otherwise to the left, vertically centred and kept on canvas.
pub fn place_tooltip(anchor: (f32, f32), size: (f32, f32), canvas: (f32, f32)) -> RectF {
    let (ax, ay) = anchor;
    let (w, h) = size;
    let (cw, ch) = canvas;
    let left = if ax + CARET_GAP + w <= cw { ax + CARET_GAP } else { ax - CARET_GAP - w };
    let left = clamp_hi_wins(left, 0.0, cw - w);
    let top = clamp_hi_wins(ay - h * 0.5, 0.0, ch - h);
    RectF::from_ltwh(left, top, w, h)
}
