// File: crates/chart-core/tests/tooltip.rs
// Purpose: Index-mode hover: pointer-to-month mapping and per-series tooltip lines.

use impact_chart_core::scale::CategoryScale;
use impact_chart_core::tooltip::place_tooltip;
use impact_chart_core::{Chart, ChartConfig, ChartLayout, GrowthChart, RenderOptions, Series, SeriesKind};
use skia_safe::Color;

fn small_chart() -> Chart {
    let labels = ["Jan 24", "Feb 24", "Mar 24"].map(String::from).to_vec();
    let mut chart = Chart::new(labels);
    for (kind, values) in [
        (SeriesKind::Revenue, vec![40.4, 58.6, 95.0]),
        (SeriesKind::Roas, vec![1.104, 1.4, 2.255]),
        (SeriesKind::Conversions, vec![180.4, 260.5, 419.49]),
    ] {
        chart.add_series(Series::new(kind, values, kind.default_style(Color::BLACK)));
    }
    chart.autoscale_axes();
    chart
}

#[test]
fn one_line_per_series_in_its_own_unit() {
    let tip = small_chart().tooltip_at(1).expect("tooltip");
    assert_eq!(tip.title, "Feb 24");
    let lines: Vec<&str> = tip.text_lines().collect();
    assert_eq!(lines, vec!["Revenue: $59k/mo", "ROAS: 1.40x", "Conversions: 261/mo"]);
}

#[test]
fn no_tooltip_past_last_month() {
    assert!(small_chart().tooltip_at(3).is_none());
}

#[test]
fn pointer_snaps_to_nearest_shared_index() {
    let chart = small_chart();
    let opts = RenderOptions { width: 400, height: 300, draw_labels: false, ..RenderOptions::default() };
    let layout = ChartLayout::compute(&chart, &opts, &|_| 0.0);
    let x1 = layout.x.to_px(1).expect("second month");
    let spacing = layout.x.spacing();

    let tip = chart.hover(&layout, x1 + spacing * 0.4).expect("hover");
    assert_eq!(tip.index, 1);
    assert_eq!(tip.lines.len(), 3);

    // far outside the plot still resolves to an end month
    assert_eq!(chart.hover(&layout, -500.0).map(|t| t.index), Some(0));
    assert_eq!(chart.hover(&layout, 5_000.0).map(|t| t.index), Some(2));
}

#[test]
fn category_scale_edges() {
    let scale = CategoryScale::new(100.0, 500.0, 5);
    assert_eq!(scale.to_px(0), Some(100.0));
    assert_eq!(scale.to_px(4), Some(500.0));
    assert_eq!(scale.to_px(5), None);
    assert_eq!(CategoryScale::new(100.0, 500.0, 1).to_px(0), Some(300.0));
    assert_eq!(CategoryScale::new(100.0, 500.0, 0).nearest_index(120.0), None);
}

#[test]
fn tooltip_box_flips_left_near_right_edge() {
    let right = place_tooltip((100.0, 200.0), (150.0, 80.0), (800.0, 400.0));
    assert_eq!(right.left, 112.0);
    assert_eq!(right.top, 160.0);

    let flipped = place_tooltip((760.0, 10.0), (150.0, 80.0), (800.0, 400.0));
    assert_eq!(flipped.right, 760.0 - 12.0);
    assert_eq!(flipped.top, 0.0);
}

#[test]
fn growth_chart_tooltip_covers_all_series() {
    let chart = GrowthChart::new(ChartConfig::default()).expect("chart builds");
    let tip = chart.tooltip_at(51).expect("last month");
    assert_eq!(tip.title, "Dec 25");
    let kinds: Vec<SeriesKind> = tip.lines.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, SeriesKind::ALL.to_vec());
    assert!(tip.lines[0].1.starts_with("Revenue: $") && tip.lines[0].1.ends_with("k/mo"));
    assert!(tip.lines[1].1.starts_with("ROAS: ") && tip.lines[1].1.ends_with('x'));
    assert!(tip.lines[2].1.starts_with("Conversions: ") && tip.lines[2].1.ends_with("/mo"));
}
