// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the growth-chart component, chart rendering
// and the annotation hook API.

pub mod annotate;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod growth;
pub mod layout;
pub mod months;
pub mod plugin;
pub mod scale;
pub mod series;
pub mod surface;
pub mod synth;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use annotate::{AnnotationStyle, Milestone, MilestoneAnnotations, Side};
pub use axis::{Axis, AxisId};
pub use chart::{Chart, Frame, RenderOptions, RgbaImage};
pub use config::{AxisColors, ChartConfig};
pub use error::ChartError;
pub use growth::GrowthChart;
pub use layout::ChartLayout;
pub use months::DateRange;
pub use plugin::{AfterDrawHook, AxisBounds, ScaleGeometry};
pub use series::{Series, SeriesKind};
pub use surface::{DrawSurface, RecordingSurface};
pub use synth::Segment;
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::Tooltip;
