// File: crates/chart-core/src/synth.rs
// Summary: Piecewise linear ramps with uniform noise, used to synthesize the growth series.

use rand::Rng;

use crate::series::SeriesKind;

/// Decimal places kept on synthesized values.
pub const DECIMALS: u32 = 2;

/// One linear span of a synthesized series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub length: usize,
    /// Full width of the uniform noise band; values move by at most half of it.
    pub noise: f64,
}

impl Segment {
    pub const fn new(start: f64, end: f64, length: usize, noise: f64) -> Self {
        Self { start, end, length, noise }
    }

    pub const fn smooth(start: f64, end: f64, length: usize) -> Self {
        Self { start, end, length, noise: 0.0 }
    }

    /// Interpolated values from `start` to `end` inclusive, noise applied per point.
    pub fn ramp<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let n = self.length;
        (0..n)
            .map(|i| {
                let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                let base = self.start + (self.end - self.start) * t;
                let jitter = if self.noise > 0.0 {
                    (rng.gen::<f64>() - 0.5) * self.noise
                } else {
                    0.0
                };
                round_to(base + jitter, DECIMALS)
            })
            .collect()
    }
}

pub fn round_to(v: f64, decimals: u32) -> f64 {
    let p = 10f64.powi(decimals as i32);
    (v * p).round() / p
}

/// Concatenate segment ramps and fit the result to exactly `total` points.
///
/// Overproduction is truncated from the tail. Underproduction stretches the
/// final segment over the missing months; nothing is padded with defaults.
pub fn synthesize<R: Rng + ?Sized>(segments: &[Segment], total: usize, rng: &mut R) -> Vec<f64> {
    let produced: usize = segments.iter().map(|s| s.length).sum();
    let mut plan = segments.to_vec();
    if produced < total {
        if let Some(last) = plan.last_mut() {
            last.length += total - produced;
        }
    }

    let mut out = Vec::with_capacity(total);
    for seg in &plan {
        if out.len() >= total {
            break;
        }
        out.extend(seg.ramp(rng));
    }
    out.truncate(total);
    out
}

/// Built-in segment plan for each series, 52 months long (Sep 2021 to Dec 2025).
pub fn plan_for(kind: SeriesKind) -> Vec<Segment> {
    match kind {
        // $40k to $270k per month
        SeriesKind::Revenue => vec![
            Segment::new(40.0, 58.0, 6, 4.0),
            Segment::new(58.0, 95.0, 6, 6.0),
            Segment::new(95.0, 140.0, 6, 8.0),
            Segment::new(140.0, 180.0, 6, 10.0),
            Segment::new(180.0, 210.0, 6, 8.0),
            Segment::new(210.0, 240.0, 6, 10.0),
            Segment::new(240.0, 255.0, 6, 6.0),
            Segment::new(255.0, 270.0, 10, 8.0),
        ],
        // 1.1x to 4.2x, with a dip in the seventh span
        SeriesKind::Roas => vec![
            Segment::new(1.1, 1.4, 6, 0.1),
            Segment::new(1.4, 2.2, 6, 0.15),
            Segment::new(2.2, 2.8, 6, 0.12),
            Segment::new(2.8, 3.5, 6, 0.1),
            Segment::new(3.5, 3.8, 6, 0.08),
            Segment::new(3.8, 4.2, 6, 0.1),
            Segment::new(4.2, 4.0, 6, 0.08),
            Segment::new(4.0, 4.2, 10, 0.06),
        ],
        SeriesKind::Conversions => vec![
            Segment::new(180.0, 260.0, 6, 20.0),
            Segment::new(260.0, 420.0, 6, 30.0),
            Segment::new(420.0, 620.0, 6, 40.0),
            Segment::new(620.0, 880.0, 6, 50.0),
            Segment::new(880.0, 1050.0, 6, 40.0),
            Segment::new(1050.0, 1200.0, 6, 50.0),
            Segment::new(1200.0, 1300.0, 6, 30.0),
            Segment::new(1300.0, 1420.0, 10, 40.0),
        ],
    }
}
