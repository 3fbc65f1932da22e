//! Axial-mode helix synthesis (Kraus design equations).

use std::f64::consts::PI;

use crate::constants::wavelength_from_frequency;
use crate::materials::MaterialResolver;
use crate::math::{db_to_linear, Scalar};
use crate::params::InputParameters;

use super::{finalize, insert_length, SynthesisOutput};

/// Pitch angle of the winding in degrees; 12.5° sits in the middle of the
/// 12–14° axial-mode window.
const PITCH_ANGLE_DEG: Scalar = 12.5;

/// Synthesizes an axial-mode helix from the target gain. The helix is
/// air-wound, so the material resolver is accepted for interface uniformity
/// but unused.
#[must_use]
pub fn synthesize(
    inputs: &InputParameters,
    _resolver: &dyn MaterialResolver,
) -> SynthesisOutput {
    let mut output = SynthesisOutput::new();

    let lambda = wavelength_from_frequency(inputs.frequency_hz());
    let gain_linear = db_to_linear(inputs.gain);

    // Circumference ≈ λ keeps the helix inside the 0.75–1.2 λ axial-mode
    // band across the usual bandwidth.
    let diameter = lambda / PI;
    let spacing = PI * diameter * PITCH_ANGLE_DEG.to_radians().tan();
    let turns = (gain_linear * lambda / (15.0 * spacing)).ceil();

    insert_length(&mut output, inputs, "diameter", diameter);
    insert_length(&mut output, inputs, "spacing", spacing);
    output.insert("number_of_turns".to_string(), turns);
    insert_length(&mut output, inputs, "wire_diameter", lambda / 50.0);
    insert_length(&mut output, inputs, "ground_plane_diameter", lambda);
    insert_length(&mut output, inputs, "feed_gap", spacing / 4.0);
    output.insert("pitch_angle".to_string(), PITCH_ANGLE_DEG);

    finalize(output, inputs)
}
