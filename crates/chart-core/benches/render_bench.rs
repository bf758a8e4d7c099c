use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use impact_chart_core::{ChartConfig, DateRange, GrowthChart};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build_growth(range: DateRange) -> GrowthChart {
    let cfg = ChartConfig { date_range: range, ..ChartConfig::default() };
    GrowthChart::with_rng(cfg, &mut StdRng::seed_from_u64(1)).expect("valid config")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for (name, range) in [
        ("default_52m", DateRange::default()),
        ("decade_120m", DateRange::new(2016, 0, 2025, 11)),
    ] {
        group.bench_function(name, |b| {
            let chart = build_growth(range);
            let mut opts = chart.render_options();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.chart().render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.bench_function("default_52m_hover_labels", |b| {
        let chart = build_growth(DateRange::default());
        let mut opts = chart.render_options();
        opts.hover_index = Some(24);
        b.iter(|| black_box(chart.render_frame(&opts).map(|f| f.layout.x_ticks.indices.len())));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
