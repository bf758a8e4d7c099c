// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes for chart chrome (background, grid, ticks, tooltip, callouts).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    /// Month labels along the x axis.
    pub tick: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_title: skia::Color,
    pub tooltip_body: skia::Color,
    pub callout_background: skia::Color,
    pub callout_text: skia::Color,
}

impl Theme {
    /// Warm off-white site palette.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 249, 246),
            grid: skia::Color::from_argb(20, 54, 69, 79),
            axis_line: skia::Color::from_argb(40, 54, 69, 79),
            tick: skia::Color::from_argb(255, 0x5a, 0x70, 0x80),
            crosshair: skia::Color::from_argb(60, 54, 69, 79),
            tooltip_background: skia::Color::from_argb(247, 245, 244, 241),
            tooltip_border: skia::Color::from_argb(31, 54, 69, 79),
            tooltip_title: skia::Color::from_argb(255, 0x1a, 0x23, 0x29),
            tooltip_body: skia::Color::from_argb(255, 0x5a, 0x70, 0x80),
            callout_background: skia::Color::from_argb(245, 245, 244, 241),
            callout_text: skia::Color::from_argb(255, 0x1a, 0x23, 0x29),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 90, 90, 100),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            crosshair: skia::Color::from_argb(120, 235, 235, 245),
            tooltip_background: skia::Color::from_argb(240, 30, 30, 34),
            tooltip_border: skia::Color::from_argb(255, 70, 70, 80),
            tooltip_title: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_body: skia::Color::from_argb(255, 180, 180, 190),
            callout_background: skia::Color::from_argb(240, 30, 30, 34),
            callout_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a built-in theme by `name`, ignoring case.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
