// File: crates/chart-core/src/series.rs
// Summary: Series identifiers, per-series units/formatters and line styling.

use skia_safe as skia;

use crate::axis::AxisId;

/// The three plotted metrics. Formatting and axis binding hang off this, not off display names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Revenue,
    Roas,
    Conversions,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Revenue, SeriesKind::Roas, SeriesKind::Conversions];

    pub fn display_name(&self) -> &'static str {
        match self {
            SeriesKind::Revenue => "Revenue ($k)",
            SeriesKind::Roas => "ROAS",
            SeriesKind::Conversions => "Monthly Conversions",
        }
    }

    pub fn axis(&self) -> AxisId {
        match self {
            SeriesKind::Revenue => AxisId::Revenue,
            SeriesKind::Roas => AxisId::Roas,
            SeriesKind::Conversions => AxisId::Conversions,
        }
    }

    /// One tooltip line for `value`, in this series' unit.
    pub fn tooltip_line(&self, value: f64) -> String {
        match self {
            SeriesKind::Revenue => format!("Revenue: ${:.0}k/mo", value),
            SeriesKind::Roas => format!("ROAS: {:.2}x", value),
            SeriesKind::Conversions => format!("Conversions: {}/mo", value.round() as i64),
        }
    }

    /// Default stroke for the series, colored by its axis.
    pub fn default_style(&self, color: skia::Color) -> LineStyle {
        match self {
            SeriesKind::Revenue => LineStyle {
                color,
                width: 2.5,
                dash: None,
                fill: Some(color.with_a(20)),
                tension: 0.4,
            },
            SeriesKind::Roas => LineStyle { color, width: 2.0, dash: Some([6.0, 3.0]), fill: None, tension: 0.4 },
            SeriesKind::Conversions => LineStyle { color, width: 2.0, dash: None, fill: None, tension: 0.4 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
    /// Area fill down to the plot bottom.
    pub fill: Option<skia::Color>,
    /// Bezier smoothing factor; 0 draws straight segments.
    pub tension: f32,
}

/// Values aligned by index to the chart's month labels.
#[derive(Clone, Debug)]
pub struct Series {
    pub kind: SeriesKind,
    pub values: Vec<f64>,
    pub style: LineStyle,
}

impl Series {
    pub fn new(kind: SeriesKind, values: Vec<f64>, style: LineStyle) -> Self {
        Self { kind, values, style }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Finite min/max over all values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in self.values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }
}
