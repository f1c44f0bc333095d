//! Rounding used throughout the shift arithmetic.
//!
//! Ties always go toward positive infinity: `2.5 -> 3`, `-2.5 -> -2`.

pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to two decimal places with the same tie rule.
pub fn round_to_hundredths(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}
