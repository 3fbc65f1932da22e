//! Baseline physical constants and utility functions.
//!
//! ## Accuracy
//!
//! `SPEED_OF_LIGHT` is the engineering value `3.0e8 m/s`, not the exact SI
//! definition. Every closed-form synthesis formula in this crate was
//! calibrated against that value; substituting `299_792_458.0` shifts the
//! computed dimensions by ~0.07 % and breaks the published reference values
//! for the transmission-line calculators. The same rounding convention runs
//! through the formulas themselves (120 Ω·λ edge conductance, Z₀/60 coax
//! exponent), which is why no exact vacuum-impedance constant appears here.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Speed of light in vacuum _c_ in meters per second (engineering value).
pub const SPEED_OF_LIGHT: Scalar = 3.0e8;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: Scalar) -> Scalar {
    SPEED_OF_LIGHT / hz
}

/// Returns the free-space wavenumber k₀ = 2π/λ for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavenumber_from_frequency(hz: Scalar) -> Scalar {
    angular_frequency(hz) / SPEED_OF_LIGHT
}
