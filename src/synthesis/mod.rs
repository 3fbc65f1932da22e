//! Closed-form antenna synthesis algorithms, one submodule per family.
//!
//! Every `synthesize` function is pure: physical inputs in, an ordered
//! name→value mapping out. Shared contract:
//!
//! - values are expressed in the instance's length unit;
//! - output keys are sorted alphabetically before returning, so external
//!   variables are always created in a deterministic order;
//! - `pos_x`, `pos_y`, `pos_z` are appended verbatim from the instance
//!   origin;
//! - families that need a substrate permittivity fail softly (empty map plus
//!   a warning) when neither the material nor an explicit override resolves.

/// Bow-tie family (normal, rounded, slot).
pub mod bowtie;
/// Axial-mode helix.
pub mod helix;
/// Horn family (conical through quad-ridged).
pub mod horn;
/// Rectangular patch (probe-fed, inset-fed).
pub mod patch;
/// Conical spiral family (Archimedean, log, sinuous).
pub mod spiral;

use indexmap::IndexMap;
use tracing::warn;

use crate::materials::MaterialResolver;
use crate::math::Scalar;
use crate::params::InputParameters;

/// Ordered synthesis result: property name → value in the instance length
/// unit.
pub type SynthesisOutput = IndexMap<String, Scalar>;

/// Resolves the working permittivity: an explicit override wins, otherwise
/// the material name is looked up. `None` means the family cannot synthesize.
#[must_use]
pub fn resolve_permittivity(
    inputs: &InputParameters,
    resolver: &dyn MaterialResolver,
) -> Option<Scalar> {
    if let Some(er) = inputs.permittivity {
        return Some(er);
    }
    let resolved = resolver.permittivity_of(&inputs.material);
    if resolved.is_none() {
        warn!(
            material = %inputs.material,
            "material not resolvable and no permittivity override; synthesis skipped"
        );
    }
    resolved
}

/// Appends the origin as `pos_x`/`pos_y`/`pos_z` and sorts keys
/// alphabetically.
pub(crate) fn finalize(mut output: SynthesisOutput, inputs: &InputParameters) -> SynthesisOutput {
    output.insert("pos_x".to_string(), inputs.origin.x);
    output.insert("pos_y".to_string(), inputs.origin.y);
    output.insert("pos_z".to_string(), inputs.origin.z);
    output.sort_keys();
    output
}

/// Inserts a named value, converting meters into the instance length unit.
pub(crate) fn insert_length(
    output: &mut SynthesisOutput,
    inputs: &InputParameters,
    name: &str,
    meters: Scalar,
) {
    output.insert(
        name.to_string(),
        meters / inputs.length_unit.multiplier(),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SynthesisOutput;

    /// Asserts the shared output contract: alphabetical keys and the origin
    /// triple present.
    pub fn assert_contract(output: &SynthesisOutput) {
        let keys: Vec<&String> = output.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "output keys must be alphabetically sorted");
        for pos in ["pos_x", "pos_y", "pos_z"] {
            assert!(output.contains_key(pos), "missing {pos}");
        }
    }
}
