// File: crates/chart-core/src/annotate.rs
// Summary: Milestone annotations: dashed month guides with clamped callout boxes,
// painted by an after-draw hook.

use serde::{Deserialize, Serialize};
use skia_safe as skia;
use tracing::debug;

use crate::axis::AxisId;
use crate::error::ChartError;
use crate::geometry::{clamp_hi_wins, RectF};
use crate::plugin::{AfterDrawHook, AxisBounds, ScaleGeometry};
use crate::surface::{DrawSurface, FontSpec, Stroke};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

/// A labelled month. `index` points into the chart's month labels; indices
/// outside them are skipped when drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub index: i64,
    pub text: String,
    pub side: Side,
}

impl Milestone {
    pub fn new(index: i64, text: impl Into<String>, side: Side) -> Self {
        Self { index, text: text.into(), side }
    }
}

/// The four milestones of the default growth story.
pub fn default_milestones() -> Vec<Milestone> {
    vec![
        Milestone::new(0, "▶ Joined — full account audit", Side::Top),
        Milestone::new(12, "⚙ Campaign restructure complete", Side::Bottom),
        Milestone::new(24, "🚀 CRO program launched", Side::Top),
        Milestone::new(40, "📈 Full-funnel system operating", Side::Bottom),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub guide: Stroke,
    pub border: Stroke,
    pub background: skia::Color,
    pub text: skia::Color,
    pub font: FontSpec,
    pub padding: f32,
    pub radius: f32,
    /// Box top below the axis top for `Side::Top`.
    pub top_offset: f32,
    /// Box top above the axis bottom for `Side::Bottom`.
    pub bottom_offset: f32,
    /// Minimum gap between a box and either canvas edge.
    pub margin: f32,
}

impl AnnotationStyle {
    pub fn new(accent: skia::Color, background: skia::Color, text: skia::Color) -> Self {
        Self {
            guide: Stroke::dashed(accent.with_a(128), 1.5, 4.0, 4.0),
            border: Stroke::solid(accent.with_a(102), 1.0),
            background,
            text,
            font: FontSpec::new(11.0, 600),
            padding: 8.0,
            radius: 5.0,
            top_offset: 12.0,
            bottom_offset: 48.0,
            margin: 4.0,
        }
    }

    pub fn box_height(&self) -> f32 {
        self.font.size + self.padding * 1.5
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self::new(
            skia::Color::from_rgb(0xF2, 0xA5, 0x3B),
            skia::Color::from_argb(245, 245, 244, 241),
            skia::Color::from_rgb(0x1a, 0x23, 0x29),
        )
    }
}

/// Callout rectangle for a label of `text_width` centred on `x`, kept inside
/// the canvas with `style.margin` on both sides.
pub fn callout_box(x: f32, text_width: f32, bounds: AxisBounds, side: Side, canvas_width: f32, style: &AnnotationStyle) -> RectF {
    let top = match side {
        Side::Top => bounds.top + style.top_offset,
        Side::Bottom => bounds.bottom - style.bottom_offset,
    };
    let width = text_width + style.padding * 2.0;
    let left = clamp_hi_wins(
        x - width * 0.5,
        style.margin,
        canvas_width - width - style.margin,
    );
    RectF::from_ltwh(left, top, width, style.box_height())
}

/// After-draw hook painting every milestone in list order.
#[derive(Clone, Debug)]
pub struct MilestoneAnnotations {
    pub milestones: Vec<Milestone>,
    pub style: AnnotationStyle,
}

impl MilestoneAnnotations {
    pub fn new(milestones: Vec<Milestone>, style: AnnotationStyle) -> Self {
        Self { milestones, style }
    }

    fn resolve(&self, m: &Milestone, geometry: &dyn ScaleGeometry) -> Result<(f32, AxisBounds), ChartError> {
        let unresolved = || ChartError::UnresolvedMilestone { index: m.index };
        let index = usize::try_from(m.index).map_err(|_| unresolved())?;
        let x = geometry.pixel_for_tick(index).ok_or_else(unresolved)?;
        let bounds = geometry.axis_bounds(AxisId::Revenue).ok_or_else(unresolved)?;
        Ok((x, bounds))
    }

    fn paint(&self, m: &Milestone, x: f32, bounds: AxisBounds, surface: &mut dyn DrawSurface, canvas_width: f32) {
        let s = &self.style;
        surface.stroke_line((x, bounds.top), (x, bounds.bottom), &s.guide);

        let text_width = surface.measure_text(&m.text, &s.font);
        let rect = callout_box(x, text_width, bounds, m.side, canvas_width, s);
        surface.fill_round_rect(rect, s.radius, s.background);
        surface.stroke_round_rect(rect, s.radius, &s.border);
        let baseline = rect.top + s.font.size + s.padding * 0.75 - 1.0;
        surface.fill_text(&m.text, (rect.left + s.padding, baseline), &s.font, s.text);
    }
}

impl AfterDrawHook for MilestoneAnnotations {
    fn id(&self) -> &'static str { "milestone_annotations" }

    fn after_draw(&self, surface: &mut dyn DrawSurface, geometry: &dyn ScaleGeometry) {
        let canvas_width = geometry.canvas_width();
        for m in &self.milestones {
            match self.resolve(m, geometry) {
                Ok((x, bounds)) => self.paint(m, x, bounds, surface, canvas_width),
                Err(e) => debug!(error = %e, text = %m.text, "skipping milestone"),
            }
        }
    }
}
