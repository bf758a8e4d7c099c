// File: crates/chart-core/tests/config.rs
// Purpose: Config defaults, TOML overrides and validation errors.

use impact_chart_core::config::parse_hex_color;
use impact_chart_core::{ChartConfig, ChartError, DateRange, GrowthChart, Side};
use skia_safe::Color;

#[test]
fn defaults_reproduce_the_original_chart() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.date_range, DateRange::new(2021, 8, 2025, 11));
    assert_eq!(cfg.tick_every, 6);
    assert_eq!(cfg.milestones.len(), 4);
    assert_eq!(cfg.milestones[0].index, 0);
    assert_eq!(cfg.milestones[0].side, Side::Top);
    assert_eq!(cfg.milestones[3].index, 40);
    assert_eq!(cfg.milestones[3].side, Side::Bottom);
    cfg.validate().expect("defaults are valid");
}

#[test]
fn empty_toml_keeps_defaults() {
    let cfg = ChartConfig::from_toml_str("").expect("parse");
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn toml_overrides_selected_keys() {
    let cfg = ChartConfig::from_toml_str(
        r##"
tick_every = 3
theme = "dark"

[date_range]
start_year = 2023
start_month = 0
end_year = 2023
end_month = 11

[axis_colors]
primary = "#112233"

[[milestones]]
index = 5
text = "Mid-year review"
side = "bottom"
"##,
    )
    .expect("parse");

    assert_eq!(cfg.tick_every, 3);
    assert_eq!(cfg.date_range.month_count(), 12);
    assert_eq!(cfg.axis_colors.primary, "#112233");
    // unspecified colors keep their defaults
    assert_eq!(cfg.axis_colors.secondary, "#4A90D9");
    assert_eq!(cfg.milestones.len(), 1);
    assert_eq!(cfg.milestones[0].text, "Mid-year review");
    assert_eq!(cfg.milestones[0].side, Side::Bottom);

    let chart = GrowthChart::new(cfg).expect("chart builds");
    assert_eq!(chart.labels().len(), 12);
    assert_eq!(chart.chart().max_x_ticks(), 4);
    assert_eq!(chart.render_options().theme.name, "dark");
}

#[test]
fn config_file_on_disk() {
    let path = std::path::PathBuf::from("target/test_out/growth_config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "tick_every = 12\n").unwrap();
    let cfg = ChartConfig::from_path(&path).expect("load");
    assert_eq!(cfg.tick_every, 12);
    assert_eq!(cfg.milestones.len(), 4);
}

#[test]
fn out_of_range_milestones_are_accepted() {
    let cfg = ChartConfig::from_toml_str(
        r#"
[[milestones]]
index = -3
text = "before"
side = "top"
"#,
    )
    .expect("milestone indices are checked at draw time");
    assert_eq!(cfg.milestones[0].index, -3);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        ChartConfig::from_toml_str("tick_every = 0"),
        Err(ChartError::InvalidTickEvery)
    ));
    assert!(matches!(
        ChartConfig::from_toml_str("[axis_colors]\nprimary = \"orange\""),
        Err(ChartError::InvalidColor(_))
    ));
    assert!(matches!(
        ChartConfig::from_toml_str("[date_range]\nstart_month = 14"),
        Err(ChartError::InvalidMonth { month: 14 })
    ));
    assert!(matches!(
        ChartConfig::from_toml_str("[[milestones]]\nindex = 1\ntext = \"x\"\nside = \"left\""),
        Err(ChartError::Config(_))
    ));
}

#[test]
fn huge_date_range_is_rejected_before_synthesis() {
    let toml = "[date_range]\nstart_year = 0\nstart_month = 0\nend_year = 2000000000\nend_month = 11";
    assert!(matches!(ChartConfig::from_toml_str(toml), Err(ChartError::RangeTooLong { .. })));

    let cfg = ChartConfig { date_range: DateRange::new(0, 0, 2_000_000_000, 11), ..ChartConfig::default() };
    assert!(matches!(GrowthChart::new(cfg), Err(ChartError::RangeTooLong { .. })));
}

#[test]
fn unknown_theme_is_rejected() {
    assert!(matches!(
        ChartConfig::from_toml_str("theme = \"drak\""),
        Err(ChartError::UnknownTheme(name)) if name == "drak"
    ));
    let cfg = ChartConfig::from_toml_str("theme = \"Dark\"").expect("case-insensitive name");
    assert_eq!(cfg.theme().expect("known theme").name, "dark");
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("#F2A53B").unwrap(), Color::from_argb(255, 0xF2, 0xA5, 0x3B));
    assert_eq!(parse_hex_color("#4a90d980").unwrap(), Color::from_argb(0x80, 0x4a, 0x90, 0xd9));
    assert!(parse_hex_color("F2A53B").is_err());
    assert!(parse_hex_color("#F2A5").is_err());
    assert!(parse_hex_color("#GGGGGG").is_err());
}
