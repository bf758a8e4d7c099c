// File: crates/chart-core/src/config.rs
// Summary: Growth-chart configuration (date range, milestones, axis colors, tick
// thinning, theme) loaded from TOML via the `config` crate.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::annotate::{default_milestones, Milestone};
use crate::axis::AxisId;
use crate::chart::DEFAULT_TICK_EVERY;
use crate::error::ChartError;
use crate::months::DateRange;
use crate::theme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub date_range: DateRange,
    pub milestones: Vec<Milestone>,
    pub axis_colors: AxisColors,
    /// At most one x label per this many months.
    pub tick_every: usize,
    /// Theme preset name (`light` or `dark`).
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            date_range: DateRange::default(),
            milestones: default_milestones(),
            axis_colors: AxisColors::default(),
            tick_every: DEFAULT_TICK_EVERY,
            theme: "light".to_string(),
        }
    }
}

/// `#RRGGBB` (or `#RRGGBBAA`) colors for the primary, secondary and tertiary axes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl Default for AxisColors {
    fn default() -> Self {
        Self {
            primary: "#F2A53B".to_string(),
            secondary: "#4A90D9".to_string(),
            tertiary: "#3DB87A".to_string(),
        }
    }
}

impl AxisColors {
    pub fn color_for(&self, axis: AxisId) -> Result<skia::Color, ChartError> {
        let hex = match axis {
            AxisId::Revenue => &self.primary,
            AxisId::Roas => &self.secondary,
            AxisId::Conversions => &self.tertiary,
        };
        parse_hex_color(hex)
    }
}

pub fn parse_hex_color(s: &str) -> Result<skia::Color, ChartError> {
    let invalid = || ChartError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        6 => Ok(skia::Color::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8)),
        8 => Ok(skia::Color::from_argb(v as u8, (v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8)),
        _ => Err(invalid()),
    }
}

impl ChartConfig {
    /// Load a TOML file. Missing keys keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .build()?;
        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ChartError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Milestone indices are not checked here; out-of-range ones are skipped at draw time.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.date_range.validate()?;
        if self.tick_every == 0 {
            return Err(ChartError::InvalidTickEvery);
        }
        for axis in AxisId::ALL {
            self.axis_colors.color_for(axis)?;
        }
        self.theme()?;
        Ok(())
    }

    /// The preset named by `theme`.
    pub fn theme(&self) -> Result<theme::Theme, ChartError> {
        theme::find(&self.theme).ok_or_else(|| ChartError::UnknownTheme(self.theme.clone()))
    }
}
