//! Numeric helpers.

/// Round `value` to `places` decimal places, halves to the even neighbour.
///
/// Values too large to scale already have no fractional digits and are
/// returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / (xs.len() as f64))
}
