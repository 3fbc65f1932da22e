//! Closed-form transmission-line synthesis calculators.
//!
//! Three planar structures are covered: microstrip (Hammerstad/Jensen
//! synthesis), stripline (Cohn synthesis) and suspended stripline (effective
//! permittivity only). These feed the antenna synthesis routines; their
//! numeric quirks are part of the crate contract and must not be "cleaned up".

use crate::constants::SPEED_OF_LIGHT;
use crate::math::Scalar;

/// Default characteristic impedance for feed synthesis (Ω).
pub const DEFAULT_IMPEDANCE: Scalar = 50.0;
/// Default electrical length for feed-line synthesis (degrees).
pub const DEFAULT_ELECTRICAL_LENGTH: Scalar = 150.0;

/// Microstrip width/length synthesis for a target impedance and electrical
/// length.
///
/// Returns `(width, length)`. The width is expressed in the same unit as
/// `substrate_height`; the physical length is in meters (guided wavelength at
/// `frequency_hz`).
///
/// Both Hammerstad branches are evaluated unconditionally: the narrow-strip
/// ratio is selected when it lands below 2, then the wide-strip ratio
/// overrides it whenever its own validity condition (ratio ≥ 2) holds. The
/// override order is load-bearing.
#[must_use]
pub fn microstrip_calculator(
    frequency_hz: Scalar,
    substrate_height: Scalar,
    permittivity: Scalar,
    impedance: Scalar,
    electrical_length_deg: Scalar,
) -> (Scalar, Scalar) {
    let er = permittivity;
    let z0 = impedance;

    // Narrow-strip branch (w/h < 2)
    let a = z0 / 60.0 * ((er + 1.0) / 2.0).sqrt()
        + (er - 1.0) / (er + 1.0) * (0.23 + 0.11 / er);
    let ratio_a = 8.0 * a.exp() / ((2.0 * a).exp() - 2.0);

    let mut ratio = ratio_a;

    // Wide-strip branch (w/h >= 2), always evaluated
    let b = 377.0 * std::f64::consts::PI / (2.0 * z0 * er.sqrt());
    let ratio_b = 2.0 / std::f64::consts::PI
        * (b - 1.0 - (2.0 * b - 1.0).ln()
            + (er - 1.0) / (2.0 * er) * ((b - 1.0).ln() + 0.39 - 0.61 / er));
    if ratio_b >= 2.0 {
        ratio = ratio_b;
    }

    let width = ratio * substrate_height;

    let eff_permittivity =
        (er + 1.0) / 2.0 + (er - 1.0) / 2.0 * (1.0 + 12.0 / ratio).powf(-0.5);
    let guided_wavelength = SPEED_OF_LIGHT / (frequency_hz * eff_permittivity.sqrt());
    let length = electrical_length_deg / 360.0 * guided_wavelength;

    (width, length)
}

/// Stripline width synthesis (Cohn), branching on `√εr·Z0 ≤ 120`.
///
/// The returned width is in the same unit as `substrate_height` (the
/// ground-plane spacing).
#[must_use]
pub fn stripline_calculator(
    substrate_height: Scalar,
    permittivity: Scalar,
    impedance: Scalar,
) -> Scalar {
    let x = permittivity.sqrt() * impedance;
    let m = 30.0 * std::f64::consts::PI / x - 0.441;
    if x <= 120.0 {
        substrate_height * m
    } else {
        substrate_height * (0.85 - (0.6 - m).sqrt())
    }
}

/// Suspended-stripline effective permittivity.
///
/// Closed form for a trace of width `trace_width` on a substrate of height
/// `substrate_height_m` suspended over an air cavity of height `λ/20`. The
/// empirical band corrections (×1.15 for 6 ≤ εr ≤ 10, ×1.25 for εr > 10) and
/// the final `(εr+1)/2` clamp are load-bearing: removing either changes the
/// bow-tie dimensions materially.
#[must_use]
pub fn suspended_strip_calculator(
    wavelength: Scalar,
    trace_width: Scalar,
    substrate_height_m: Scalar,
    permittivity: Scalar,
) -> Scalar {
    let er = permittivity;
    let cavity_height = wavelength / 20.0;
    let total_height = substrate_height_m + cavity_height;

    // Dielectric filling factor of the mixed air/substrate cross-section.
    let fill = substrate_height_m / total_height;
    let q = (1.0 + 12.0 * total_height / trace_width).powf(-0.5);
    let mut eff = 1.0 + (er - 1.0) * fill * q.mul_add(0.5, 0.5);

    if (6.0..=10.0).contains(&er) {
        eff *= 1.15;
    } else if er > 10.0 {
        eff *= 1.25;
    }

    let ceiling = (er + 1.0) / 2.0;
    if eff > ceiling {
        eff = ceiling;
    }
    eff
}
