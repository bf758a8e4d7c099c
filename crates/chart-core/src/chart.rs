// File: crates/chart-core/src/chart.rs
// Summary: Multi-axis line chart and its headless rendering pipeline on Skia CPU raster
// surfaces, with after-draw hooks run at the end of every pass.

use anyhow::Result;
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{Axis, AxisId, AxisPosition};
use crate::error::ChartError;
use crate::layout::{ChartLayout, TICK_FONT_SIZE};
use crate::plugin::AfterDrawHook;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::Series;
use crate::surface::{stroke_paint, SkiaSurface, Stroke};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::{place_tooltip, Tooltip};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Default x-label thinning: at most one label per this many months.
pub const DEFAULT_TICK_EVERY: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, axis titles and tooltip text. Off gives font-independent pixels.
    pub draw_labels: bool,
    /// Month index under the pointer; draws crosshair, points and tooltip.
    pub hover_index: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            hover_index: None,
        }
    }
}

/// Raw pixels read back from a rendered frame.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub stride: usize,
}

/// A finished render pass: the raster surface plus the geometry it was drawn with.
pub struct Frame {
    surface: skia::Surface,
    pub layout: ChartLayout,
}

impl Frame {
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn rgba8(&mut self) -> Result<RgbaImage> {
        let (width, height) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {width}x{height} pixels failed");
        }
        Ok(RgbaImage { pixels, width, height, stride })
    }
}

pub struct Chart {
    /// Shared x domain; every series is indexed by these labels.
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub axes: Vec<Axis>,
    pub tick_every: usize,
    hooks: Vec<Box<dyn AfterDrawHook>>,
}

impl Chart {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            series: Vec::new(),
            axes: Vec::new(),
            tick_every: DEFAULT_TICK_EVERY,
            hooks: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit one axis per plotted series, colored like the series.
    pub fn autoscale_axes(&mut self) {
        self.axes = AxisId::ALL
            .iter()
            .filter_map(|&id| {
                let s = self.series.iter().find(|s| s.kind.axis() == id)?;
                Some(Axis::fit(id, s.style.color, s.value_range()))
            })
            .collect();
    }

    /// Upper bound on drawn x labels.
    pub fn max_x_ticks(&self) -> usize {
        self.labels.len().div_ceil(self.tick_every.max(1))
    }

    pub fn register_hook(&mut self, hook: impl AfterDrawHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn hook_ids(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.id()).collect()
    }

    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        Tooltip::at(&self.labels, &self.series, index)
    }

    /// Tooltip for the month nearest to pointer `px` (index mode, shared across series).
    pub fn hover(&self, layout: &ChartLayout, px: f32) -> Option<Tooltip> {
        self.tooltip_at(layout.x.nearest_index(px)?)
    }

    pub fn layout(&self, opts: &RenderOptions, text: &TextShaper) -> ChartLayout {
        if opts.draw_labels {
            ChartLayout::compute(self, opts, &|l| text.measure_width(l, TICK_FONT_SIZE, 400))
        } else {
            ChartLayout::compute(self, opts, &|_| 0.0)
        }
    }

    /// Raster surface for `opts`. A zero-sized or unallocatable surface means there is nothing to draw into.
    pub fn mount(opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
        let missing = ChartError::MissingMountPoint { width: opts.width, height: opts.height };
        if opts.width <= 0 || opts.height <= 0 {
            return Err(missing);
        }
        skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(missing)
    }

    /// Full draw pass: chrome, series, after-draw hooks, then the hover layer.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) -> ChartLayout {
        let layout = self.layout(opts, text);
        let theme = &opts.theme;

        canvas.clear(theme.background);
        draw_grid(canvas, &layout, theme);
        draw_axes(canvas, &layout, theme, &self.labels, opts.draw_labels, text);

        canvas.save();
        canvas.clip_rect(skia::Rect::from(layout.plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            if let Some(scale) = layout.value_scale(s.kind.axis()) {
                draw_line_series(canvas, &layout, scale, s);
            }
        }
        canvas.restore();

        let mut surface = SkiaSurface::new(canvas, text);
        for hook in &self.hooks {
            hook.after_draw(&mut surface, &layout);
        }

        if let Some(index) = opts.hover_index {
            if let Some(tip) = self.tooltip_at(index) {
                self.draw_hover(canvas, &layout, theme, &tip, opts.draw_labels, text);
            }
        }
        layout
    }

    /// Render into a fresh raster surface. `None` when there is no surface to mount.
    pub fn render_frame(&self, opts: &RenderOptions) -> Option<Frame> {
        let mut surface = match Self::mount(opts) {
            Ok(s) => s,
            Err(e) => {
                debug!(error = %e, "chart not rendered");
                return None;
            }
        };
        let text = TextShaper::new();
        let layout = self.draw(surface.canvas(), opts, &text);
        Some(Frame { surface, layout })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Option<Vec<u8>>> {
        self.render_frame(opts).map(|mut f| f.png_bytes()).transpose()
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Option<RgbaImage>> {
        self.render_frame(opts).map(|mut f| f.rgba8()).transpose()
    }

    /// Render the chart to a PNG at `output_png_path`. Writes nothing when there is no surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let Some(bytes) = self.render_to_png_bytes(opts)? else {
            return Ok(());
        };
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output_png_path, &bytes)?;
        info!(path = %output_png_path.as_ref().display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    fn draw_hover(
        &self,
        canvas: &skia::Canvas,
        layout: &ChartLayout,
        theme: &Theme,
        tip: &Tooltip,
        draw_labels: bool,
        text: &TextShaper,
    ) {
        let Some(x) = layout.x.to_px(tip.index) else { return };
        let plot = layout.plot;
        canvas.draw_line((x, plot.top), (x, plot.bottom), &stroke_paint(&Stroke::solid(theme.crosshair, 1.0)));

        let mut ys = Vec::new();
        for s in &self.series {
            let (Some(v), Some(scale)) = (s.value_at(tip.index), layout.value_scale(s.kind.axis())) else { continue };
            let y = scale.to_px(v);
            ys.push(y);
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(s.style.color);
            canvas.draw_circle((x, y), HOVER_RADIUS, &dot);
            canvas.draw_circle((x, y), HOVER_RADIUS, &stroke_paint(&Stroke::solid(theme.background, 1.5)));
        }
        let anchor_y = if ys.is_empty() { plot.center_y() } else { ys.iter().sum::<f32>() / ys.len() as f32 };

        let measure = |s: &str, weight| if draw_labels { text.measure_width(s, TOOLTIP_FONT_SIZE, weight) } else { 0.0 };
        let widest = tip.text_lines().map(|l| measure(l, 400)).fold(measure(&tip.title, 600), f32::max);
        let w = widest + SWATCH + SWATCH_GAP + TOOLTIP_PADDING * 2.0;
        let h = TOOLTIP_PADDING * 2.0 + TOOLTIP_LINE_HEIGHT * (tip.lines.len() + 1) as f32;
        let rect = place_tooltip((x, anchor_y), (w, h), (layout.width, layout.height));

        let rr = skia::RRect::new_rect_xy(skia::Rect::from(rect), 6.0, 6.0);
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.tooltip_background);
        canvas.draw_rrect(rr, &bg);
        canvas.draw_rrect(rr, &stroke_paint(&Stroke::solid(theme.tooltip_border, 1.0)));

        let left = rect.left + TOOLTIP_PADDING;
        let mut baseline = rect.top + TOOLTIP_PADDING + TOOLTIP_FONT_SIZE;
        if draw_labels {
            text.draw_left(canvas, &tip.title, left, baseline, TOOLTIP_FONT_SIZE, 600, theme.tooltip_title);
        }
        for (kind, line) in &tip.lines {
            baseline += TOOLTIP_LINE_HEIGHT;
            let color = self.series.iter().find(|s| s.kind == *kind).map(|s| s.style.color).unwrap_or(theme.tooltip_body);
            let mut swatch = skia::Paint::default();
            swatch.set_color(color);
            canvas.draw_rect(skia::Rect::from_xywh(left, baseline - SWATCH, SWATCH, SWATCH), &swatch);
            if draw_labels {
                text.draw_left(canvas, line, left + SWATCH + SWATCH_GAP, baseline, TOOLTIP_FONT_SIZE, 400, theme.tooltip_body);
            }
        }
    }
}

const HOVER_RADIUS: f32 = 5.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_LINE_HEIGHT: f32 = 18.0;
const TOOLTIP_PADDING: f32 = 12.0;
const SWATCH: f32 = 10.0;
const SWATCH_GAP: f32 = 6.0;

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let paint = stroke_paint(&Stroke::solid(theme.grid, 1.0));
    let plot = layout.plot;

    // verticals at drawn month labels
    for &i in &layout.x_ticks.indices {
        if let Some(x) = layout.x.to_px(i) {
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    // horizontals only for the primary axis
    for (axis, scale) in layout.axes.iter().filter(|(a, _)| a.id.draws_grid()) {
        for v in axis.ticks() {
            let y = scale.to_px(v);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    layout: &ChartLayout,
    theme: &Theme,
    labels: &[String],
    draw_labels: bool,
    text: &TextShaper,
) {
    let plot = layout.plot;
    let line = stroke_paint(&Stroke::solid(theme.axis_line, 1.0));
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &line);
    for (axis, _) in &layout.axes {
        let ax = layout.axis_x(axis.id);
        canvas.draw_line((ax, plot.top), (ax, plot.bottom), &line);
    }
    if !draw_labels {
        return;
    }

    // Month labels
    let rotation = layout.x_ticks.rotation_deg;
    for &i in &layout.x_ticks.indices {
        let (Some(x), Some(label)) = (layout.x.to_px(i), labels.get(i)) else { continue };
        if rotation > 0.0 {
            text.draw_rotated(canvas, label, x, plot.bottom + 10.0, rotation, TICK_FONT_SIZE, 400, theme.tick);
        } else {
            text.draw_centered(canvas, label, x, plot.bottom + 18.0, TICK_FONT_SIZE, 400, theme.tick);
        }
    }

    for (axis, scale) in &layout.axes {
        draw_value_axis_labels(canvas, layout, axis, scale, text);
    }
}

fn draw_value_axis_labels(canvas: &skia::Canvas, layout: &ChartLayout, axis: &Axis, scale: &ValueScale, text: &TextShaper) {
    let ax = layout.axis_x(axis.id);
    let left_side = axis.id.position() == AxisPosition::Left;
    let mut widest = 0.0f32;
    for v in axis.ticks() {
        let label = axis.id.format_tick(v);
        let y = scale.to_px(v) + TICK_FONT_SIZE * 0.35;
        widest = widest.max(text.measure_width(&label, TICK_FONT_SIZE, 400));
        if left_side {
            text.draw_right(canvas, &label, ax - 8.0, y, TICK_FONT_SIZE, 400, axis.color);
        } else {
            text.draw_left(canvas, &label, ax + 6.0, y, TICK_FONT_SIZE, 400, axis.color);
        }
    }

    // Title, rotated to read along the axis
    let cy = layout.plot.center_y();
    let (tx, degrees) = if left_side { (ax - 16.0 - widest, -90.0) } else { (ax + 14.0 + widest, 90.0) };
    canvas.save();
    canvas.translate((tx, cy));
    canvas.rotate(degrees, None);
    text.draw_centered(canvas, &axis.label, 0.0, TICK_FONT_SIZE * 0.35, TICK_FONT_SIZE, 600, axis.color);
    canvas.restore();
}

fn draw_line_series(canvas: &skia::Canvas, layout: &ChartLayout, scale: &ValueScale, series: &Series) {
    let points = series_points(&layout.x, scale, series);
    if points.len() < 2 {
        return;
    }
    let path = spline_path(&points, series.style.tension);

    if let Some(fill) = series.style.fill {
        let mut area = path.clone();
        let (first, last) = (points[0], points[points.len() - 1]);
        area.line_to((last.0, layout.plot.bottom));
        area.line_to((first.0, layout.plot.bottom));
        area.close();
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(fill);
        canvas.draw_path(&area, &paint);
    }

    let stroke = Stroke { color: series.style.color, width: series.style.width, dash: series.style.dash };
    let mut paint = stroke_paint(&stroke);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &paint);
}

fn series_points(x: &CategoryScale, scale: &ValueScale, series: &Series) -> Vec<(f32, f32)> {
    series
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .filter_map(|(i, &v)| Some((x.to_px(i)?, scale.to_px(v))))
        .collect()
}

/// Smooth path through `points`; each interior point gets bezier handles
/// parallel to its neighbours' chord, sized by `tension` and the adjacent
/// segment lengths.
pub fn spline_path(points: &[(f32, f32)], tension: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let Some(&first) = points.first() else { return path };
    path.move_to(first);
    if tension <= 0.0 {
        for &p in &points[1..] {
            path.line_to(p);
        }
        return path;
    }

    let handles: Vec<((f32, f32), (f32, f32))> = (0..points.len())
        .map(|i| {
            let cur = points[i];
            let prev = if i > 0 { points[i - 1] } else { cur };
            let next = points.get(i + 1).copied().unwrap_or(cur);
            let d01 = ((cur.0 - prev.0).powi(2) + (cur.1 - prev.1).powi(2)).sqrt();
            let d12 = ((next.0 - cur.0).powi(2) + (next.1 - cur.1).powi(2)).sqrt();
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
            let (fa, fb) = (tension * s01, tension * s12);
            let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
            ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
        })
        .collect();

    for i in 1..points.len() {
        path.cubic_to(handles[i - 1].1, handles[i].0, points[i]);
    }
    path
}
