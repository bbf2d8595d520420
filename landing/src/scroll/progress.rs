/// Clamp into the closed progress range `[0, 1]`.
pub fn clamp_progress(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Advance `current` by `delta_px` scrolled pixels.
///
/// Non-finite deltas leave progress where it is.
pub fn step(current: f64, delta_px: f64, divisor: f64) -> f64 {
    if !delta_px.is_finite() || !divisor.is_finite() || divisor <= 0.0 {
        return clamp_progress(current);
    }
    clamp_progress(current + delta_px / divisor)
}
