//! Numeric conversion helpers centralizing lossy casts used by the statistics.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Proportion of `count` within `total`, returning 0.0 for an empty total.
#[must_use]
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    usize_to_f64(count) / usize_to_f64(total)
}

/// Round to a fixed number of decimal places, returning 0.0 for non-finite values.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let exponent = cast::<usize, i32>(decimals).unwrap_or(0);
    let scale = 10_f64.powi(exponent);
    (value * scale).round() / scale
}
