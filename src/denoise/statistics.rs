//! Per-window statistics.
//!
//! Every function takes the flattened window produced by
//! [`window::extract`](crate::denoise::window::extract) and returns a single
//! output intensity. Callers guarantee the window is non-empty.

use std::cmp::Ordering;

/// Arithmetic mean: `sum / count`
#[inline]
pub fn arithmetic_mean(values: &[f32]) -> f32 {
    debug_assert!(!values.is_empty());
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    (sum / values.len() as f64) as f32
}

/// Geometric mean: `(product of values) ^ (1 / count)`
///
/// Intensities are expected to be non-negative. Any zero in the window
/// yields zero. The product is accumulated in log space so that large
/// windows of ordinary 8-bit intensities do not overflow.
#[inline]
pub fn geometric_mean(values: &[f32]) -> f32 {
    debug_assert!(!values.is_empty());
    if values.iter().any(|&v| v == 0.0) {
        return 0.0;
    }
    let log_sum: f64 = values.iter().map(|&v| f64::from(v).ln()).sum();
    (log_sum / values.len() as f64).exp() as f32
}

/// Median, averaging the two middle elements for even counts
///
/// Reorders `values` in place.
pub fn median(values: &mut [f32]) -> f32 {
    debug_assert!(!values.is_empty());
    let len = values.len();
    let mid = len / 2;
    let (lower, upper_mid, _) = values.select_nth_unstable_by(mid, f32::total_cmp);
    let upper_mid = *upper_mid;

    if len % 2 == 1 {
        upper_mid
    } else {
        let lower_mid = lower
            .iter()
            .copied()
            .max_by(f32::total_cmp)
            .unwrap_or(upper_mid);
        (lower_mid + upper_mid) / 2.0
    }
}

/// Smallest and largest value of the window
#[inline]
pub fn min_max(values: &[f32]) -> (f32, f32) {
    values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (
                if v.total_cmp(&lo) == Ordering::Less { v } else { lo },
                if v.total_cmp(&hi) == Ordering::Greater { v } else { hi },
            )
        })
}

/// Population mean and variance of the window
#[inline]
pub fn mean_variance(values: &[f32]) -> (f32, f32) {
    debug_assert!(!values.is_empty());
    let count = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = f64::from(v) - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;
    (mean as f32, variance as f32)
}

/// Adaptive local noise reduction
///
/// Returns `center - (noise_variance / local_variance) * (center - local_mean)`.
/// A flat window (zero local variance) passes the center through unchanged.
pub fn local_noise(values: &[f32], center: f32, noise_variance: f32) -> f32 {
    let (local_mean, local_variance) = mean_variance(values);
    if local_variance == 0.0 {
        return center;
    }
    center - (noise_variance / local_variance) * (center - local_mean)
}
