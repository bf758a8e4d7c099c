// File: crates/chart-core/src/surface.rs
// Summary: Immediate-mode 2D drawing surface used by after-draw hooks, with a Skia
// adapter and a recording implementation.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
    /// `[on, off]` dash lengths; `None` draws solid.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }
    pub const fn dashed(color: skia::Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: i32,
}

impl FontSpec {
    pub const fn new(size: f32, weight: i32) -> Self { Self { size, weight } }
}

/// Drawing operations a hook may issue. Every call carries its own style; the
/// surface holds no pen state between calls.
pub trait DrawSurface {
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: &Stroke);
    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: skia::Color);
    fn stroke_round_rect(&mut self, rect: RectF, radius: f32, stroke: &Stroke);
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32;
    /// Draw `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: (f32, f32), font: &FontSpec, color: skia::Color);
}

pub(crate) fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    if let Some([on, off]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

/// Adapter over a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a TextShaper) -> Self {
        Self { canvas, text }
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: &Stroke) {
        self.canvas.draw_line(from, to, &stroke_paint(stroke));
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let rr = skia::RRect::new_rect_xy(skia::Rect::from(rect), radius, radius);
        self.canvas.draw_rrect(rr, &paint);
    }

    fn stroke_round_rect(&mut self, rect: RectF, radius: f32, stroke: &Stroke) {
        let rr = skia::RRect::new_rect_xy(skia::Rect::from(rect), radius, radius);
        self.canvas.draw_rrect(rr, &stroke_paint(stroke));
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        self.text.measure_width(text, font.size, font.weight)
    }

    fn fill_text(&mut self, text: &str, origin: (f32, f32), font: &FontSpec, color: skia::Color) {
        self.text.draw_left(self.canvas, text, origin.0, origin.1, font.size, font.weight, color);
    }
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line { from: (f32, f32), to: (f32, f32), stroke: Stroke },
    FillRoundRect { rect: RectF, radius: f32, color: skia::Color },
    StrokeRoundRect { rect: RectF, radius: f32, stroke: Stroke },
    Text { text: String, origin: (f32, f32), font: FontSpec, color: skia::Color },
}

/// Records draw calls instead of painting. Text width is a fixed advance per
/// character scaled by font size, so layouts are reproducible without fonts.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    /// Advance per character as a fraction of the font size.
    pub advance: f32,
    pub ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self { Self::new() }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { advance: 0.6, ops: Vec::new() }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn boxes(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::FillRoundRect { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: &Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke: *stroke });
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: skia::Color) {
        self.ops.push(DrawOp::FillRoundRect { rect, radius, color });
    }

    fn stroke_round_rect(&mut self, rect: RectF, radius: f32, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeRoundRect { rect, radius, stroke: *stroke });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * self.advance
    }

    fn fill_text(&mut self, text: &str, origin: (f32, f32), font: &FontSpec, color: skia::Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, font: *font, color });
    }
}
