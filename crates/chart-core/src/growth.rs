// File: crates/chart-core/src/growth.rs
// Summary: The growth chart component: owns its config, synthesized series and chart,
// with explicit render/redraw entry points.

use anyhow::Result;
use rand::Rng;
use skia_safe as skia;
use tracing::debug;

use crate::annotate::{AnnotationStyle, MilestoneAnnotations};
use crate::axis::AxisId;
use crate::chart::{Chart, Frame, RenderOptions};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::layout::ChartLayout;
use crate::series::{Series, SeriesKind};
use crate::synth::{plan_for, synthesize};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

pub struct GrowthChart {
    config: ChartConfig,
    theme: Theme,
    chart: Chart,
}

impl GrowthChart {
    /// Build with unseeded noise; values differ on every construction.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: ChartConfig, rng: &mut R) -> Result<Self, ChartError> {
        config.validate()?;
        let theme = config.theme()?;
        let labels = config.date_range.labels();
        let total = labels.len();

        let mut chart = Chart::new(labels);
        chart.tick_every = config.tick_every;
        for kind in SeriesKind::ALL {
            let color = config.axis_colors.color_for(kind.axis())?;
            let values = synthesize(&plan_for(kind), total, rng);
            chart.add_series(Series::new(kind, values, kind.default_style(color)));
        }
        chart.autoscale_axes();

        let accent = config.axis_colors.color_for(AxisId::Revenue)?;
        let style = AnnotationStyle::new(accent, theme.callout_background, theme.callout_text);
        chart.register_hook(MilestoneAnnotations::new(config.milestones.clone(), style));

        debug!(months = total, milestones = config.milestones.len(), theme = theme.name, "growth chart built");
        Ok(Self { config, theme, chart })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn chart(&self) -> &Chart { &self.chart }

    pub fn labels(&self) -> &[String] { &self.chart.labels }

    pub fn series(&self, kind: SeriesKind) -> Option<&Series> {
        self.chart.series.iter().find(|s| s.kind == kind)
    }

    /// Default render options carrying this chart's theme.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { theme: self.theme, ..RenderOptions::default() }
    }

    /// Repaint everything, annotations included, onto `canvas`.
    pub fn redraw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) -> ChartLayout {
        self.chart.draw(canvas, opts, text)
    }

    pub fn render_frame(&self, opts: &RenderOptions) -> Option<Frame> {
        self.chart.render_frame(opts)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.chart.render_to_png(opts, path)
    }

    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        self.chart.tooltip_at(index)
    }

    pub fn hover(&self, layout: &ChartLayout, px: f32) -> Option<Tooltip> {
        self.chart.hover(layout, px)
    }
}
