// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: nice value ranges, x-label thinning and rotation.

/// Minimum clear space between neighbouring x labels, in pixels.
pub const LABEL_GAP: f32 = 6.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Expand `[lo, hi]` outward to multiples of a 1/2/2.5/5 x 10^n step,
/// aiming for roughly `count` intervals. Returns `(min, max, step)`.
pub fn nice_range(lo: f64, hi: f64, count: usize) -> (f64, f64, f64) {
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if (hi - lo).abs() < 1e-12 {
        let pad = if lo.abs() > 1e-12 { lo.abs() * 0.1 } else { 1.0 };
        lo -= pad;
        hi += pad;
    }
    let rough = (hi - lo) / count.max(1) as f64;
    let mag = 10f64.powf(rough.log10().floor());
    let norm = rough / mag;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&c| c >= norm - 1e-9)
        .unwrap_or(10.0);
    let step = nice * mag;
    ((lo / step).floor() * step, (hi / step).ceil() * step, step)
}

#[derive(Clone, Debug, PartialEq)]
pub struct XTicks {
    pub indices: Vec<usize>,
    /// Counter-clockwise label rotation in degrees.
    pub rotation_deg: f32,
}

/// Pick which month labels to draw and how far to rotate them.
///
/// Labels stay flat while they fit between neighbours, rotate up to
/// `max_rotation_deg` when they don't, and past that the stride doubles until
/// rotated labels clear each other.
pub fn fit_x_ticks(
    total: usize,
    max_ticks: usize,
    px_per_index: f32,
    label_width: f32,
    label_height: f32,
    max_rotation_deg: f32,
) -> XTicks {
    if total == 0 || max_ticks == 0 {
        return XTicks { indices: Vec::new(), rotation_deg: 0.0 };
    }
    let max_sin = max_rotation_deg.to_radians().sin();
    let mut stride = total.div_ceil(max_ticks).max(1);
    let rotation_deg = loop {
        let spacing = px_per_index * stride as f32;
        if total == 1 || label_width + LABEL_GAP <= spacing {
            break 0.0;
        }
        // rotated neighbours are `spacing * sin(angle)` apart, perpendicular to the text
        let need = if spacing > 0.0 { (label_height + LABEL_GAP) / spacing } else { f32::INFINITY };
        if need <= max_sin {
            break need.asin().to_degrees();
        }
        if stride >= total {
            break max_rotation_deg;
        }
        stride *= 2;
    };
    XTicks { indices: (0..total).step_by(stride).collect(), rotation_deg }
}
