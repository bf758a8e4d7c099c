// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end growth chart renders: PNG output, raw pixels, empty mount point
// and repeatable redraws.

use impact_chart_core::{ChartConfig, GrowthChart, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn growth_chart() -> GrowthChart {
    GrowthChart::with_rng(ChartConfig::default(), &mut StdRng::seed_from_u64(42)).expect("chart builds")
}

#[test]
fn render_growth_png() {
    let chart = growth_chart();
    assert_eq!(chart.chart().hook_ids(), vec!["milestone_annotations"]);

    let opts = chart.render_options();
    let out = std::path::PathBuf::from("target/test_out/growth_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    let _ = std::fs::remove_file(&out);

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.chart().render_to_png_bytes(&opts).expect("render bytes").expect("surface mounted");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rgba_readback_has_surface_shape() {
    let chart = growth_chart();
    let opts = RenderOptions { width: 320, height: 200, ..chart.render_options() };
    let img = chart.chart().render_to_rgba8(&opts).expect("readback").expect("surface mounted");
    assert_eq!((img.width, img.height), (320, 200));
    assert_eq!(img.stride, 320 * 4);
    assert_eq!(img.pixels.len(), 320 * 200 * 4);
}

#[test]
fn zero_sized_surface_draws_nothing() {
    let chart = growth_chart();
    let opts = RenderOptions { width: 0, ..chart.render_options() };
    assert!(chart.render_frame(&opts).is_none());
    assert!(chart.chart().render_to_png_bytes(&opts).expect("no error").is_none());

    let out = std::path::PathBuf::from("target/test_out/never_written.png");
    let _ = std::fs::remove_file(&out);
    chart.render_to_png(&opts, &out).expect("missing mount point is not an error");
    assert!(!out.exists());
}

#[test]
fn redraw_is_pixel_identical() {
    let chart = growth_chart();
    let opts = RenderOptions { draw_labels: false, ..chart.render_options() };
    let a = chart.chart().render_to_rgba8(&opts).expect("first").expect("mounted");
    let b = chart.chart().render_to_rgba8(&opts).expect("second").expect("mounted");
    assert_eq!(a.pixels, b.pixels, "annotations must not accumulate across redraws");
}

#[test]
fn hover_render_changes_pixels() {
    let chart = growth_chart();
    let base = RenderOptions { draw_labels: false, ..chart.render_options() };
    let hovered = RenderOptions { hover_index: Some(24), ..base.clone() };

    let mut frame = chart.render_frame(&hovered).expect("mounted");
    assert!(frame.png_bytes().expect("encode").starts_with(&[137, 80, 78, 71]));

    let plain = chart.chart().render_to_rgba8(&base).expect("plain").expect("mounted");
    let with_tip = frame.rgba8().expect("hovered pixels");
    assert_ne!(plain.pixels, with_tip.pixels);

    // past the last month there is no tooltip to draw
    let past = RenderOptions { hover_index: Some(500), ..base.clone() };
    let past_img = chart.chart().render_to_rgba8(&past).expect("past").expect("mounted");
    assert_eq!(plain.pixels, past_img.pixels);
}
