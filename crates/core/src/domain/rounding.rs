// Decimal rounding for reported figures

/// Round to `decimals` places, half away from zero.
///
/// Works on the binary value, so a literal like 2.675 (stored as
/// 2.67499999...) rounds down exactly as its f64 representation dictates.
/// Magnitudes from 2^52 up carry no fractional bits and pass through
/// unchanged, as does anything whose scaled value leaves the f64 range.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if value.abs() >= NO_FRACTION_FROM {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// 2^52: every f64 at or above this magnitude is an integer
const NO_FRACTION_FROM: f64 = 4_503_599_627_370_496.0;
