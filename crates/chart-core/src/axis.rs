// File: crates/chart-core/src/axis.rs
// Summary: Vertical axis model: identity, placement, range and tick formatting.

use skia_safe as skia;

use crate::grid::{linspace, nice_range};

/// The three value axes. `Revenue` is the primary (left, gridded) axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    Revenue,
    Roas,
    Conversions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
    /// Right side, outside the first right-hand axis.
    RightOuter,
}

impl AxisId {
    pub const ALL: [AxisId; 3] = [AxisId::Revenue, AxisId::Roas, AxisId::Conversions];

    pub fn title(&self) -> &'static str {
        match self {
            AxisId::Revenue => "Revenue ($k)",
            AxisId::Roas => "ROAS",
            AxisId::Conversions => "Conversions",
        }
    }

    pub fn position(&self) -> AxisPosition {
        match self {
            AxisId::Revenue => AxisPosition::Left,
            AxisId::Roas => AxisPosition::Right,
            AxisId::Conversions => AxisPosition::RightOuter,
        }
    }

    /// Only the primary axis draws grid lines across the plot.
    pub fn draws_grid(&self) -> bool {
        matches!(self, AxisId::Revenue)
    }

    pub fn format_tick(&self, v: f64) -> String {
        match self {
            AxisId::Revenue => format!("${}k", plain_number(v)),
            AxisId::Roas => format!("{:.1}x", v),
            AxisId::Conversions => format!("{}", v.round() as i64),
        }
    }
}

/// Shortest decimal rendering: `50` not `50.0`, `62.5` stays.
fn plain_number(v: f64) -> String {
    let r = (v * 1e6).round() / 1e6;
    if r.fract() == 0.0 { format!("{}", r as i64) } else { format!("{}", r) }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: AxisId,
    pub label: String,
    pub color: skia::Color,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    pub fn new(id: AxisId, color: skia::Color, min: f64, max: f64) -> Self {
        let (min, max, step) = nice_range(min, max, 6);
        Self { id, label: id.title().to_string(), color, min, max, step }
    }

    /// Axis sized to a series' value range; empty data falls back to `0..1`.
    pub fn fit(id: AxisId, color: skia::Color, range: Option<(f64, f64)>) -> Self {
        let (lo, hi) = range.unwrap_or((0.0, 1.0));
        Self::new(id, color, lo, hi)
    }

    pub fn ticks(&self) -> Vec<f64> {
        if !(self.step > 0.0) { return vec![self.min, self.max]; }
        let n = ((self.max - self.min) / self.step).round() as usize;
        linspace(self.min, self.max, n + 1)
    }
}
