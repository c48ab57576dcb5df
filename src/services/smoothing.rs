//! Locally weighted regression (LOWESS) smoothing.
//!
//! Given the low number of points per player, the trend curves use local
//! linear fits with tricube weights and the default span, the same summary
//! a `geom_smooth` loess layer draws for small samples.

/// Default fraction of points in each local window.
pub const DEFAULT_SPAN: f64 = 0.75;

/// Smooth `points` with locally weighted linear regression.
///
/// The curve is evaluated at each observed x, in ascending x order. Each
/// fit uses the `ceil(span * n)` nearest neighbours (never fewer than 2),
/// weighted by the tricube kernel. Fewer than two input points yield an
/// empty curve; duplicate x values are handled without special casing.
pub fn loess(points: &[(f64, f64)], span: f64) -> Vec<(f64, f64)> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<(f64, f64)> = points.to_vec();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let window = ((span * n as f64).ceil() as usize).clamp(2, n);

    sorted
        .iter()
        .map(|&(x0, _)| {
            let mut distances: Vec<f64> = sorted.iter().map(|&(x, _)| (x - x0).abs()).collect();
            distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let max_distance = distances[window - 1];
            (x0, local_fit(&sorted, x0, max_distance))
        })
        .collect()
}

fn tricube(u: f64) -> f64 {
    if u >= 1.0 {
        return 0.0;
    }
    let t = 1.0 - u * u * u;
    t * t * t
}

/// Weighted linear least squares, evaluated at `x0`.
///
/// Falls back to the weighted mean when the window has no x spread.
fn local_fit(points: &[(f64, f64)], x0: f64, max_distance: f64) -> f64 {
    let mut sum_w = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;

    for &(x, y) in points {
        let distance = (x - x0).abs();
        let w = if max_distance > 0.0 {
            tricube(distance / max_distance)
        } else if distance == 0.0 {
            1.0
        } else {
            0.0
        };
        if w == 0.0 {
            continue;
        }

        sum_w += w;
        sum_x += w * x;
        sum_y += w * y;
        sum_xx += w * x * x;
        sum_xy += w * x * y;
    }

    // The point at x0 itself always has weight 1, so sum_w > 0.
    let mean_x = sum_x / sum_w;
    let mean_y = sum_y / sum_w;
    let spread = sum_xx - sum_w * mean_x * mean_x;

    if spread.abs() < 1e-12 {
        mean_y
    } else {
        let slope = (sum_xy - sum_w * mean_x * mean_y) / spread;
        mean_y + slope * (x0 - mean_x)
    }
}
