// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and paints chart labels.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const FAMILIES: &[&str] = &["Inter", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, weight: i32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FAMILIES);
        ts.set_font_style(skia::FontStyle::new(Weight::from(weight), Width::NORMAL, Slant::Upright));
        ts
    }

    pub fn layout(&self, text: &str, size: f32, weight: i32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, weight, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, weight: i32) -> f32 {
        let p = self.layout(text, size, weight, skia::Color::from_argb(0, 0, 0, 0));
        p.longest_line()
    }

    /// Paint with the baseline at `y`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, weight: i32, color: skia::Color) {
        let p = self.layout(text, size, weight, color);
        // paragraphs paint from their top-left corner; ascent is roughly 0.8em
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Paint so the text's right edge ends at `x`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, weight: i32, color: skia::Color) {
        let w = self.measure_width(text, size, weight);
        self.draw_left(canvas, text, x - w, y, size, weight, color);
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, weight: i32, color: skia::Color) {
        let w = self.measure_width(text, size, weight);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, weight, color);
    }

    /// Paint rotated counter-clockwise by `degrees` about its right end at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, degrees: f32, size: f32, weight: i32, color: skia::Color) {
        let w = self.measure_width(text, size, weight);
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        self.draw_left(canvas, text, -w, size * 0.4, size, weight, color);
        canvas.restore();
    }
}
