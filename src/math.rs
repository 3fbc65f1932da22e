//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors (antenna origins).
pub type R3 = Vector3<Scalar>;

/// Rounds `value` to `decimals` decimal places.
#[must_use]
pub fn round_to(value: Scalar, decimals: u32) -> Scalar {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Converts a gain in decibels to linear gain.
#[must_use]
pub fn db_to_linear(gain_db: Scalar) -> Scalar {
    10f64.powf(gain_db / 10.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn round_to_truncates_noise() {
        assert_relative_eq!(round_to(1.234_567_89, 3), 1.235, epsilon = 1.0e-12);
        assert_relative_eq!(round_to(42.0, 0), 42.0, epsilon = 1.0e-12);
    }

    #[test]
    fn db_conversion_matches_reference() {
        assert_relative_eq!(db_to_linear(10.0), 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(db_to_linear(0.0), 1.0, epsilon = 1.0e-12);
    }
}
