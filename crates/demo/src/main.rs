// File: crates/demo/src/main.rs
// Summary: Demo builds the growth chart from an optional TOML config and renders it
// (plain and with a hover tooltip) to PNGs.

use anyhow::{Context, Result};
use impact_chart_core::{ChartConfig, GrowthChart};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    config: Option<PathBuf>,
    out_dir: PathBuf,
    hover: Option<usize>,
    width: Option<i32>,
    height: Option<i32>,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            ChartConfig::from_path(path).with_context(|| format!("failed to load config '{}'", path.display()))?
        }
        None => ChartConfig::default(),
    };

    let chart = GrowthChart::new(config)?;
    let labels = chart.labels();
    info!(
        months = labels.len(),
        first = labels.first().map(String::as_str).unwrap_or("-"),
        last = labels.last().map(String::as_str).unwrap_or("-"),
        "synthesized series"
    );

    let mut opts = chart.render_options();
    if let Some(w) = args.width { opts.width = w; }
    if let Some(h) = args.height { opts.height = h; }

    let plain = args.out_dir.join("growth.png");
    chart.render_to_png(&opts, &plain)?;
    report(&plain);

    // Hover the requested month, or the last milestone that lands on the chart
    let hover = args.hover.or_else(|| {
        chart
            .config()
            .milestones
            .iter()
            .rev()
            .filter_map(|m| usize::try_from(m.index).ok())
            .find(|&i| i < labels.len())
    });
    if let Some(index) = hover {
        match chart.tooltip_at(index) {
            Some(tip) => {
                info!(month = %tip.title, "hover tooltip");
                for line in tip.text_lines() {
                    info!("  {line}");
                }
                opts.hover_index = Some(index);
                let hovered = args.out_dir.join("growth_hover.png");
                chart.render_to_png(&opts, &hovered)?;
                report(&hovered);
            }
            None => warn!(index, "hover index is past the last month; skipped"),
        }
    }

    Ok(())
}

fn report(path: &Path) {
    if path.exists() {
        println!("Wrote {}", path.display());
    } else {
        println!("Nothing drawn for {} (empty surface)", path.display());
    }
}

/// `demo [CONFIG.toml] [--out DIR] [--hover INDEX] [--size WxH]`
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args { config: None, out_dir: PathBuf::from("target/out"), hover: None, width: None, height: None };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => {
                args.out_dir = it.next().map(PathBuf::from).context("--out needs a directory")?;
            }
            "--hover" => {
                let v = it.next().context("--hover needs a month index")?;
                args.hover = Some(v.parse().with_context(|| format!("bad --hover value '{v}'"))?);
            }
            "--size" => {
                let v = it.next().context("--size needs WxH")?;
                let (w, h) = v.split_once('x').with_context(|| format!("bad --size value '{v}'"))?;
                args.width = Some(w.parse().with_context(|| format!("bad width '{w}'"))?);
                args.height = Some(h.parse().with_context(|| format!("bad height '{h}'"))?);
            }
            other if other.starts_with("--") => anyhow::bail!("unknown flag '{other}'"),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}
