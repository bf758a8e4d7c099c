// File: crates/chart-core/tests/ticks.rs
// Purpose: X-label thinning/rotation bounds, nice y ranges and per-axis tick text.

use impact_chart_core::grid::{fit_x_ticks, nice_range};
use impact_chart_core::{AxisId, ChartConfig, ChartLayout, DateRange, GrowthChart};

#[test]
fn laid_out_chart_draws_at_most_one_label_per_six_months() {
    let chart = GrowthChart::new(ChartConfig::default()).expect("chart builds");
    let opts = chart.render_options();
    // any plausible label width, from none to very wide
    for label_width in [0.0f32, 36.0, 120.0] {
        let layout = ChartLayout::compute(chart.chart(), &opts, &|_| label_width);
        let idx = &layout.x_ticks.indices;
        assert!(idx.len() <= 9, "width {label_width}: {} labels", idx.len());
        assert_eq!(idx.first(), Some(&0));
        assert!(idx.iter().all(|&i| i < 52));
    }

    for range in [DateRange::new(2024, 0, 2024, 0), DateRange::new(2016, 0, 2025, 11)] {
        let cfg = ChartConfig { date_range: range, ..ChartConfig::default() };
        let chart = GrowthChart::new(cfg).expect("chart builds");
        let layout = ChartLayout::compute(chart.chart(), &chart.render_options(), &|_| 36.0);
        let limit = range.month_count().div_ceil(6);
        assert!(layout.x_ticks.indices.len() <= limit, "{range:?}");
    }
}

#[test]
fn fitted_ticks_respect_limit_at_any_width() {
    for total in [1usize, 2, 7, 52, 120] {
        let limit = total.div_ceil(6);
        for spacing in [0.0f32, 1.0, 4.0, 12.0, 40.0, 200.0] {
            let t = fit_x_ticks(total, limit, spacing, 36.0, 11.0, 45.0);
            assert!(t.indices.len() <= limit, "total {total} spacing {spacing}");
            assert!(t.rotation_deg >= 0.0 && t.rotation_deg <= 45.0);
        }
    }
}

#[test]
fn labels_stay_flat_when_they_fit_and_rotate_when_they_dont() {
    // 52 months, every 6th label, 20px per month => 120px between labels
    let flat = fit_x_ticks(52, 9, 20.0, 36.0, 11.0, 45.0);
    assert_eq!(flat.rotation_deg, 0.0);
    assert_eq!(flat.indices, vec![0, 6, 12, 18, 24, 30, 36, 42, 48]);

    // 5px per month => 30px between labels, too narrow for a 36px label
    let tilted = fit_x_ticks(52, 9, 5.0, 36.0, 11.0, 45.0);
    assert!(tilted.rotation_deg > 0.0 && tilted.rotation_deg <= 45.0);
    assert_eq!(tilted.indices.len(), 9);

    // 1px per month: even 45 degrees overlaps, so labels get skipped
    let skipped = fit_x_ticks(52, 9, 1.0, 36.0, 11.0, 45.0);
    assert!(skipped.indices.len() < 9);
}

#[test]
fn nice_range_covers_data_with_round_steps() {
    let (lo, hi, step) = nice_range(38.2, 271.9, 6);
    assert!(lo <= 38.2 && hi >= 271.9);
    assert_eq!(step, 50.0);
    assert_eq!((lo, hi), (0.0, 300.0));

    let (lo, hi, step) = nice_range(1.07, 4.23, 6);
    assert!(lo <= 1.07 && hi >= 4.23);
    assert!((step - 1.0).abs() < 1e-9);
    assert!((lo - 1.0).abs() < 1e-9 && (hi - 5.0).abs() < 1e-9);

    // flat data still gets a non-empty range
    let (lo, hi, _) = nice_range(5.0, 5.0, 6);
    assert!(lo < 5.0 && hi > 5.0);
}

#[test]
fn tick_text_per_axis() {
    assert_eq!(AxisId::Revenue.format_tick(50.0), "$50k");
    assert_eq!(AxisId::Revenue.format_tick(62.5), "$62.5k");
    assert_eq!(AxisId::Roas.format_tick(2.0), "2.0x");
    assert_eq!(AxisId::Roas.format_tick(3.26), "3.3x");
    assert_eq!(AxisId::Conversions.format_tick(1249.6), "1250");
    assert!(AxisId::Revenue.draws_grid());
    assert!(!AxisId::Roas.draws_grid());
    assert!(!AxisId::Conversions.draws_grid());
}
