//! Horn synthesis: conical, pyramidal, sectoral, corrugated and ridged
//! variants.
//!
//! Smooth-wall horns are sized as multiples of the operating wavelength with
//! the optimum-horn aperture relations; rectangular throats come from the
//! standard-waveguide table whenever a tabulated band covers the operating
//! frequency. The ridged variants place their ridge edges from an explicit
//! tabulated taper profile, not a closed form.

use crate::constants::wavelength_from_frequency;
use crate::materials::MaterialResolver;
use crate::math::Scalar;
use crate::params::InputParameters;
use crate::units::{FrequencyUnit, LengthUnit};
use crate::waveguide::StandardWaveguide;

use super::{finalize, insert_length, SynthesisOutput};

/// Horn geometry variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HornVariant {
    /// Smooth-wall conical horn on a circular waveguide.
    #[default]
    Conical,
    /// Pyramidal horn flaring in both planes.
    Pyramidal,
    /// Sectoral horn flaring in the E-plane only.
    EPlane,
    /// Sectoral horn flaring in the H-plane only.
    HPlane,
    /// Conical horn with quarter-wave corrugations.
    Corrugated,
    /// Double-ridged rectangular horn.
    Ridged,
    /// Quad-ridged rectangular horn.
    QuadRidged,
}

/// Reference frequency for the ridged-horn base dimensions (Hz).
const RIDGE_REF_FREQUENCY_HZ: Scalar = 10.0e9;

/// Ridge taper profile: `(axial fraction of flare, gap fraction of
/// aperture)`. Tabulated, densest near the throat where the taper is
/// steepest; the points are design data, not samples of a formula.
const RIDGE_PROFILE: [(Scalar, Scalar); 17] = [
    (0.000, 0.048),
    (0.015, 0.051),
    (0.035, 0.055),
    (0.060, 0.061),
    (0.090, 0.069),
    (0.125, 0.080),
    (0.165, 0.094),
    (0.210, 0.112),
    (0.260, 0.135),
    (0.315, 0.164),
    (0.375, 0.201),
    (0.445, 0.251),
    (0.530, 0.322),
    (0.630, 0.423),
    (0.745, 0.565),
    (0.870, 0.762),
    (1.000, 1.000),
];

/// Rectangular throat dimensions in meters: standard waveguide when a band
/// covers the frequency, wavelength-scaled fallback otherwise.
fn rectangular_throat(freq_hz: Scalar, lambda: Scalar) -> [Scalar; 3] {
    let freq_ghz = freq_hz / FrequencyUnit::GHz.multiplier();
    StandardWaveguide::find_waveguide(freq_ghz, FrequencyUnit::GHz)
        .and_then(|name| StandardWaveguide::get_waveguide_dimensions(name, LengthUnit::Meter))
        .unwrap_or([0.7 * lambda, 0.35 * lambda, 0.02 * lambda])
}

/// Synthesizes a horn of the given variant. Horns carry no substrate, so the
/// material resolver is accepted for interface uniformity but unused.
#[must_use]
pub fn synthesize(
    inputs: &InputParameters,
    _resolver: &dyn MaterialResolver,
    variant: HornVariant,
) -> SynthesisOutput {
    let mut output = SynthesisOutput::new();
    let freq_hz = inputs.frequency_hz();
    let lambda = wavelength_from_frequency(freq_hz);

    match variant {
        HornVariant::Conical | HornVariant::Corrugated => {
            // TE11 circular throat, driven 30 % above cutoff.
            let throat_diameter = lambda / 1.706 * 1.3;
            let flare_length = 2.4 * lambda;
            let aperture_diameter = (3.0 * flare_length * lambda).sqrt();
            insert_length(&mut output, inputs, "throat_diameter", throat_diameter);
            insert_length(&mut output, inputs, "wg_length", 0.75 * lambda);
            insert_length(&mut output, inputs, "flare_length", flare_length);
            insert_length(&mut output, inputs, "aperture_diameter", aperture_diameter);

            if variant == HornVariant::Corrugated {
                let pitch = lambda / 10.0;
                insert_length(&mut output, inputs, "corrugation_depth", lambda / 4.0);
                insert_length(&mut output, inputs, "corrugation_pitch", pitch);
                output.insert(
                    "number_of_corrugations".to_string(),
                    (flare_length / pitch).floor(),
                );
            }
        }
        HornVariant::Pyramidal => {
            let [a, b, wall] = rectangular_throat(freq_hz, lambda);
            let flare_length = 3.0 * lambda;
            insert_length(&mut output, inputs, "wg_a", a);
            insert_length(&mut output, inputs, "wg_b", b);
            insert_length(&mut output, inputs, "wall_thickness", wall);
            insert_length(&mut output, inputs, "wg_length", 0.75 * lambda);
            insert_length(&mut output, inputs, "flare_length", flare_length);
            // Optimum-horn apertures: √(3λL) in H, √(2λL) in E.
            insert_length(
                &mut output,
                inputs,
                "aperture_width",
                (3.0 * lambda * flare_length).sqrt(),
            );
            insert_length(
                &mut output,
                inputs,
                "aperture_height",
                (2.0 * lambda * flare_length).sqrt(),
            );
        }
        HornVariant::EPlane | HornVariant::HPlane => {
            let [a, b, wall] = rectangular_throat(freq_hz, lambda);
            let flare_length = 2.5 * lambda;
            insert_length(&mut output, inputs, "wg_a", a);
            insert_length(&mut output, inputs, "wg_b", b);
            insert_length(&mut output, inputs, "wall_thickness", wall);
            insert_length(&mut output, inputs, "wg_length", 0.75 * lambda);
            insert_length(&mut output, inputs, "flare_length", flare_length);
            if variant == HornVariant::EPlane {
                insert_length(&mut output, inputs, "aperture_width", a);
                insert_length(
                    &mut output,
                    inputs,
                    "aperture_height",
                    (2.0 * lambda * flare_length).sqrt(),
                );
            } else {
                insert_length(
                    &mut output,
                    inputs,
                    "aperture_width",
                    (3.0 * lambda * flare_length).sqrt(),
                );
                insert_length(&mut output, inputs, "aperture_height", b);
            }
        }
        HornVariant::Ridged | HornVariant::QuadRidged => {
            let [a, b, wall] = rectangular_throat(freq_hz, lambda);
            // Base dimensions tabulated at 10 GHz, scaled to the operating
            // frequency.
            let scale = RIDGE_REF_FREQUENCY_HZ / freq_hz;
            let flare_length = 110.0e-3 * scale;
            let aperture_width = 85.0e-3 * scale;
            let aperture_height = 65.0e-3 * scale;
            insert_length(&mut output, inputs, "wg_a", a);
            insert_length(&mut output, inputs, "wg_b", b);
            insert_length(&mut output, inputs, "wall_thickness", wall);
            insert_length(&mut output, inputs, "wg_length", 0.75 * lambda);
            insert_length(&mut output, inputs, "flare_length", flare_length);
            insert_length(&mut output, inputs, "aperture_width", aperture_width);
            insert_length(&mut output, inputs, "aperture_height", aperture_height);
            insert_length(&mut output, inputs, "ridge_width", 6.0e-3 * scale);

            for (index, (axial, gap)) in RIDGE_PROFILE.iter().enumerate() {
                let point = index + 1;
                insert_length(
                    &mut output,
                    inputs,
                    &format!("ridge_x_{point:02}"),
                    axial * flare_length,
                );
                insert_length(
                    &mut output,
                    inputs,
                    &format!("ridge_y_{point:02}"),
                    gap * aperture_height / 2.0,
                );
            }
            output.insert(
                "number_of_ridge_points".to_string(),
                RIDGE_PROFILE.len() as Scalar,
            );
            let ridges = if variant == HornVariant::QuadRidged { 4.0 } else { 2.0 };
            output.insert("number_of_ridges".to_string(), ridges);
        }
    }

    finalize(output, inputs)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::materials::MaterialLibrary;
    use crate::synthesis::test_support::assert_contract;

    use super::*;

    fn inputs_10ghz() -> InputParameters {
        InputParameters::default()
    }

    #[test]
    fn conical_horn_keeps_optimum_aperture_relation() {
        let output = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::Conical);
        assert_contract(&output);
        // d = √(3Lλ), all in mm at 10 GHz (λ = 30 mm).
        assert_relative_eq!(
            output["aperture_diameter"],
            (3.0 * output["flare_length"] * 30.0).sqrt(),
            max_relative = 1.0e-9
        );
    }

    #[test]
    fn pyramidal_throat_comes_from_the_waveguide_table() {
        let output = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::Pyramidal);
        // 10 GHz resolves to WR-102: a = 1.02 in = 25.908 mm.
        assert_relative_eq!(output["wg_a"], 25.908, max_relative = 1.0e-6);
        assert_relative_eq!(output["wg_b"], 12.954, max_relative = 1.0e-6);
    }

    #[test]
    fn throat_falls_back_to_wavelength_scaling_off_table() {
        let mut inputs = inputs_10ghz();
        inputs.frequency = 400.0; // derated 320 GHz, beyond WR-5
        let output = synthesize(&inputs, &MaterialLibrary, HornVariant::Pyramidal);
        let lambda_mm = 0.75;
        assert_relative_eq!(output["wg_a"], 0.7 * lambda_mm, max_relative = 1.0e-9);
    }

    #[test]
    fn sectoral_horns_flare_in_one_plane_only() {
        let e = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::EPlane);
        let h = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::HPlane);
        assert_relative_eq!(e["aperture_width"], e["wg_a"], epsilon = 1.0e-12);
        assert_relative_eq!(h["aperture_height"], h["wg_b"], epsilon = 1.0e-12);
        assert!(e["aperture_height"] > e["wg_b"]);
        assert!(h["aperture_width"] > h["wg_a"]);
    }

    #[test]
    fn corrugation_count_is_dimensionless_and_integral() {
        let output = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::Corrugated);
        let n = output["number_of_corrugations"];
        assert_relative_eq!(n.fract(), 0.0, epsilon = 1.0e-12);
        assert!(n >= 1.0);
    }

    #[test]
    fn ridge_profile_is_emitted_point_by_point() {
        let output = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::QuadRidged);
        assert_contract(&output);
        assert_relative_eq!(output["number_of_ridge_points"], 17.0);
        assert_relative_eq!(output["number_of_ridges"], 4.0);
        // First point sits at the throat, last at the aperture.
        assert_relative_eq!(output["ridge_x_01"], 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(
            output["ridge_x_17"],
            output["flare_length"],
            max_relative = 1.0e-9
        );
        assert_relative_eq!(
            output["ridge_y_17"],
            output["aperture_height"] / 2.0,
            max_relative = 1.0e-9
        );
        // Taper opens monotonically.
        for i in 1..17 {
            assert!(output[&format!("ridge_y_{:02}", i + 1)] > output[&format!("ridge_y_{i:02}")]);
        }
    }

    #[test]
    fn ridged_variant_has_two_ridges() {
        let output = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::Ridged);
        assert_relative_eq!(output["number_of_ridges"], 2.0);
    }

    #[test]
    fn synthesis_is_idempotent() {
        let inputs = inputs_10ghz();
        for variant in [
            HornVariant::Conical,
            HornVariant::Pyramidal,
            HornVariant::EPlane,
            HornVariant::HPlane,
            HornVariant::Corrugated,
            HornVariant::Ridged,
            HornVariant::QuadRidged,
        ] {
            let a = synthesize(&inputs, &MaterialLibrary, variant);
            let b = synthesize(&inputs, &MaterialLibrary, variant);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn dimensions_scale_inversely_with_frequency() {
        let at_10 = synthesize(&inputs_10ghz(), &MaterialLibrary, HornVariant::Conical);
        let mut doubled = inputs_10ghz();
        doubled.frequency = 20.0;
        let at_20 = synthesize(&doubled, &MaterialLibrary, HornVariant::Conical);
        assert_relative_eq!(
            at_10["flare_length"] / at_20["flare_length"],
            2.0,
            max_relative = 1.0e-9
        );
    }
}
