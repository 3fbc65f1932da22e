//! Bow-tie synthesis (normal, rounded and slot variants).
//!
//! All three variants share the suspended-stripline effective-permittivity
//! step at a fixed `λ/80` trace-width heuristic, then diverge only in an
//! empirical scale factor and in rounding precision. The rounding divergence
//! (whole units for the normal variant, two decimals for rounded and slot) is
//! original behavior and is kept as-is.

use crate::constants::wavelength_from_frequency;
use crate::materials::MaterialResolver;
use crate::math::{round_to, Scalar};
use crate::params::InputParameters;
use crate::transmission::suspended_strip_calculator;

use super::{finalize, resolve_permittivity, SynthesisOutput};

/// Bow-tie geometry variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BowtieVariant {
    /// Straight-edged triangular arms.
    #[default]
    Normal,
    /// Arms with rounded outer edges.
    Rounded,
    /// Bow-tie slot cut into a ground plane.
    Slot,
}

impl BowtieVariant {
    /// Empirical length-correction factor applied to every effective-
    /// wavelength-derived dimension.
    #[must_use]
    pub const fn correction_factor(&self) -> Scalar {
        match self {
            Self::Normal => 0.65,
            Self::Rounded => 0.58,
            Self::Slot => 1.275,
        }
    }

    /// Decimal places used when rounding this variant's dimensions.
    const fn decimals(&self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Rounded | Self::Slot => 2,
        }
    }
}

/// Trace width heuristic as a fraction of the free-space wavelength.
const TRACE_WIDTH_FRACTION: Scalar = 80.0;

/// Synthesizes a bow-tie of the given variant.
///
/// Returns an empty map when the substrate permittivity cannot be resolved.
#[must_use]
pub fn synthesize(
    inputs: &InputParameters,
    resolver: &dyn MaterialResolver,
    variant: BowtieVariant,
) -> SynthesisOutput {
    let mut output = SynthesisOutput::new();
    let Some(er) = resolve_permittivity(inputs, resolver) else {
        return output;
    };

    let lambda = wavelength_from_frequency(inputs.frequency_hz());
    let trace_width = lambda / TRACE_WIDTH_FRACTION;
    let eff_permittivity =
        suspended_strip_calculator(lambda, trace_width, inputs.substrate_height_m(), er);
    let lambda_eff = lambda / eff_permittivity.sqrt();

    let k = variant.correction_factor();
    let decimals = variant.decimals();
    let unit = inputs.length_unit.multiplier();
    let mut put = |name: &str, meters: Scalar| {
        output.insert(name.to_string(), round_to(meters / unit, decimals));
    };

    put("arm_length", k * lambda_eff * 0.25);
    put("inner_width", k * lambda_eff * 0.05);
    put("outer_width", k * lambda_eff * 0.45);
    put("port_gap", k * lambda_eff * 0.025);
    put("sub_x", k * lambda_eff * 0.6);
    put("sub_y", k * lambda_eff * 0.6);
    output.insert("sub_height".to_string(), inputs.substrate_height);

    finalize(output, inputs)
}
