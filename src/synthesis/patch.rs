//! Rectangular microstrip patch synthesis (probe-fed and inset-fed).

use std::f64::consts::PI;

use crate::constants::{wavelength_from_frequency, wavenumber_from_frequency, SPEED_OF_LIGHT};
use crate::materials::MaterialResolver;
use crate::math::Scalar;
use crate::params::InputParameters;
use crate::transmission::{
    microstrip_calculator, DEFAULT_ELECTRICAL_LENGTH, DEFAULT_IMPEDANCE,
};

use super::{finalize, insert_length, resolve_permittivity, SynthesisOutput};

/// Feed style for the rectangular patch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchFeed {
    /// Coaxial probe through the ground plane.
    #[default]
    Probe,
    /// Inset microstrip line on the patch layer.
    Inset,
}

/// Margin of substrate/ground beyond the patch edge, in substrate heights.
const SUBSTRATE_MARGIN_HEIGHTS: Scalar = 6.0;

struct PatchDimensions {
    width: Scalar,
    length: Scalar,
    feed_offset: Scalar,
}

/// Core probe/inset patch derivation, all lengths in meters.
fn patch_dimensions(freq_hz: Scalar, h_m: Scalar, er: Scalar) -> PatchDimensions {
    let lambda0 = wavelength_from_frequency(freq_hz);

    let width = SPEED_OF_LIGHT / (2.0 * freq_hz) * (2.0 / (er + 1.0)).sqrt();

    let eff_permittivity =
        (er + 1.0) / 2.0 + (er - 1.0) / 2.0 * (1.0 + 12.0 * h_m / width).powf(-0.5);

    // Hammerstad open-end extension.
    let w_h = width / h_m;
    let delta_l = 0.412
        * h_m
        * ((eff_permittivity + 0.3) * (w_h + 0.264))
        / ((eff_permittivity - 0.258) * (w_h + 0.8));

    let effective_length = SPEED_OF_LIGHT / (2.0 * freq_hz * eff_permittivity.sqrt());
    let length = effective_length - 2.0 * delta_l;

    // Radiating-edge conductance and the 50 Ω match point.
    let k0 = wavenumber_from_frequency(freq_hz);
    let conductance = width / (120.0 * lambda0) * (1.0 - (k0 * h_m).powi(2) / 24.0);
    let edge_resistance = 1.0 / (2.0 * conductance);
    let feed_offset = length / PI * (DEFAULT_IMPEDANCE / edge_resistance).sqrt().asin();

    PatchDimensions {
        width,
        length,
        feed_offset,
    }
}

/// Synthesizes a rectangular patch for the given feed style.
///
/// Returns an empty map when the substrate permittivity cannot be resolved.
#[must_use]
pub fn synthesize(
    inputs: &InputParameters,
    resolver: &dyn MaterialResolver,
    feed: PatchFeed,
) -> SynthesisOutput {
    let mut output = SynthesisOutput::new();
    let Some(er) = resolve_permittivity(inputs, resolver) else {
        return output;
    };

    let freq_hz = inputs.frequency_hz();
    let h_m = inputs.substrate_height_m();
    let dims = patch_dimensions(freq_hz, h_m, er);

    let margin = SUBSTRATE_MARGIN_HEIGHTS * h_m;
    insert_length(&mut output, inputs, "patch_width", dims.width);
    insert_length(&mut output, inputs, "patch_length", dims.length);
    insert_length(&mut output, inputs, "sub_width", dims.width + 2.0 * margin);
    insert_length(&mut output, inputs, "sub_length", dims.length + 2.0 * margin);
    output.insert("sub_height".to_string(), inputs.substrate_height);

    match feed {
        PatchFeed::Probe => {
            // Probe sits on the resonant axis, inset from the radiating edge.
            insert_length(
                &mut output,
                inputs,
                "feed_x",
                dims.length / 2.0 - dims.feed_offset,
            );
            insert_length(&mut output, inputs, "feed_y", 0.0);

            // 50 Ω PTFE coax: b/a = exp(Z0·√εr/60), εr = 2.1.
            let lambda0 = wavelength_from_frequency(freq_hz);
            let inner_radius = lambda0 / 250.0;
            let shield_ratio = (DEFAULT_IMPEDANCE * (2.1f64).sqrt() / 60.0).exp();
            insert_length(&mut output, inputs, "coax_inner_radius", inner_radius);
            insert_length(
                &mut output,
                inputs,
                "coax_outer_radius",
                inner_radius * shield_ratio,
            );
        }
        PatchFeed::Inset => {
            let (feed_width, feed_length) = microstrip_calculator(
                freq_hz,
                h_m,
                er,
                DEFAULT_IMPEDANCE,
                DEFAULT_ELECTRICAL_LENGTH,
            );
            insert_length(&mut output, inputs, "feed_width", feed_width);
            insert_length(&mut output, inputs, "feed_length", feed_length);
            insert_length(&mut output, inputs, "inset_distance", dims.feed_offset);
            insert_length(&mut output, inputs, "inset_gap", feed_width / 2.0);
        }
    }

    finalize(output, inputs)
}
