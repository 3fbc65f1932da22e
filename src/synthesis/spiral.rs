//! Conical spiral synthesis (Archimedean, log-periodic and sinuous).
//!
//! Broadband spirals are sized from the band edges rather than a single
//! operating frequency: the outer radius resonates at the start (lowest)
//! frequency, the inner radius at the stop frequency.

use std::f64::consts::PI;

use crate::constants::SPEED_OF_LIGHT;
use crate::materials::MaterialResolver;
use crate::math::Scalar;
use crate::params::InputParameters;

use super::{finalize, insert_length, SynthesisOutput};

/// Spiral winding law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiralVariant {
    /// Constant-pitch Archimedean winding.
    #[default]
    Archimedean,
    /// Logarithmic (equiangular) winding.
    Log,
    /// Sinuous (dual-polarized) winding.
    Sinuous,
}

/// Cone half-profile angle in degrees; fixes the height/radius relation.
const CONE_ANGLE_DEG: Scalar = 66.66;

/// Synthesizes a conical spiral for the given winding law. Spirals are
/// free-standing, so the material resolver is accepted for interface
/// uniformity but unused.
#[must_use]
pub fn synthesize(
    inputs: &InputParameters,
    _resolver: &dyn MaterialResolver,
    variant: SpiralVariant,
) -> SynthesisOutput {
    let mut output = SynthesisOutput::new();

    let f_start = inputs.start_frequency_hz();
    let f_stop = inputs.stop_frequency_hz();
    let turns = inputs.spiral_turns;

    let outer_radius = SPEED_OF_LIGHT / (2.0 * PI * f_start);
    let inner_radius = SPEED_OF_LIGHT / (2.0 * PI * f_stop);
    let cone_height = (outer_radius - inner_radius) * CONE_ANGLE_DEG.to_radians().tan();

    insert_length(&mut output, inputs, "outer_radius", outer_radius);
    insert_length(&mut output, inputs, "inner_radius", inner_radius);
    insert_length(&mut output, inputs, "cone_height", cone_height);
    output.insert("cone_angle".to_string(), CONE_ANGLE_DEG);
    output.insert("number_of_turns".to_string(), turns);

    match variant {
        SpiralVariant::Archimedean => {
            // Self-complementary arms: width equals spacing.
            let pitch = (outer_radius - inner_radius) / turns;
            insert_length(&mut output, inputs, "arm_width", pitch / 4.0);
            insert_length(&mut output, inputs, "arm_spacing", pitch / 4.0);
        }
        SpiralVariant::Log => {
            let expansion = (outer_radius / inner_radius).powf(1.0 / turns);
            output.insert("expansion_coefficient".to_string(), expansion);
        }
        SpiralVariant::Sinuous => {
            output.insert("alpha_angle".to_string(), 45.0);
            output.insert("delta_angle".to_string(), 22.5);
        }
    }

    finalize(output, inputs)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::materials::MaterialLibrary;
    use crate::synthesis::test_support::assert_contract;
    use crate::units::{FrequencyUnit, LengthUnit};

    use super::*;

    fn inputs_2_to_18ghz() -> InputParameters {
        InputParameters {
            start_frequency: 2.0,
            stop_frequency: 18.0,
            frequency_unit: FrequencyUnit::GHz,
            length_unit: LengthUnit::Mm,
            spiral_turns: 5.0,
            ..InputParameters::default()
        }
    }

    #[test]
    fn radii_follow_the_band_edges() {
        let output = synthesize(&inputs_2_to_18ghz(), &MaterialLibrary, SpiralVariant::Log);
        assert_contract(&output);
        // c/(2π·2 GHz) = 23.873 mm, c/(2π·18 GHz) = 2.653 mm.
        assert_relative_eq!(output["outer_radius"], 23.873, max_relative = 1.0e-4);
        assert_relative_eq!(output["inner_radius"], 2.653, max_relative = 1.0e-4);
    }

    #[test]
    fn cone_height_uses_the_fixed_profile_angle() {
        let output = synthesize(
            &inputs_2_to_18ghz(),
            &MaterialLibrary,
            SpiralVariant::Archimedean,
        );
        let expected =
            (output["outer_radius"] - output["inner_radius"]) * 66.66f64.to_radians().tan();
        assert_relative_eq!(output["cone_height"], expected, max_relative = 1.0e-9);
    }

    #[test]
    fn log_variant_expansion_reference() {
        let output = synthesize(&inputs_2_to_18ghz(), &MaterialLibrary, SpiralVariant::Log);
        // (R_out/R_in)^(1/5) = 9^(1/5).
        assert_relative_eq!(
            output["expansion_coefficient"],
            9.0f64.powf(0.2),
            max_relative = 1.0e-9
        );
    }

    #[test]
    fn archimedean_arms_are_self_complementary() {
        let output = synthesize(
            &inputs_2_to_18ghz(),
            &MaterialLibrary,
            SpiralVariant::Archimedean,
        );
        assert_relative_eq!(
            output["arm_width"],
            output["arm_spacing"],
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn sinuous_variant_emits_winding_angles() {
        let output = synthesize(&inputs_2_to_18ghz(), &MaterialLibrary, SpiralVariant::Sinuous);
        assert_relative_eq!(output["alpha_angle"], 45.0);
        assert_relative_eq!(output["delta_angle"], 22.5);
    }

    #[test]
    fn synthesis_is_idempotent() {
        let inputs = inputs_2_to_18ghz();
        for variant in [
            SpiralVariant::Archimedean,
            SpiralVariant::Log,
            SpiralVariant::Sinuous,
        ] {
            let a = synthesize(&inputs, &MaterialLibrary, variant);
            let b = synthesize(&inputs, &MaterialLibrary, variant);
            assert_eq!(a, b);
        }
    }
}
