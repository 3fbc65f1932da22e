//! Parameter object model: synthesized properties and user-facing inputs.
//!
//! [`SynthesisParameters`] is deliberately append-only: re-synthesis merges
//! into the existing map so a previously bound external variable is never
//! orphaned, and values are rounded before storage so the external model does
//! not churn on floating-point noise.

use indexmap::IndexMap;

use crate::errors::AntennaError;
use crate::math::{round_to, Scalar, R3};
use crate::units::{FrequencyUnit, LengthUnit};

/// Decimal places kept when storing a synthesized value.
pub const VALUE_PRECISION: u32 = 3;

/// One synthesized value and the external design variable bound to it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name, unique within one antenna instance.
    pub name: String,
    /// Current numeric value, rounded to [`VALUE_PRECISION`].
    pub value: Scalar,
    /// Bound external-variable name, stable across re-synthesis.
    pub variable: String,
}

impl Property {
    /// Creates a property, deriving the external variable name from the
    /// owning antenna's name. The derivation is deterministic so repeated
    /// synthesis always targets the same variable.
    #[must_use]
    pub fn new(antenna_name: &str, name: impl Into<String>, value: Scalar) -> Self {
        let name = name.into();
        let variable = format!("{antenna_name}_{name}");
        Self {
            name,
            value: round_to(value, VALUE_PRECISION),
            variable,
        }
    }
}

/// Ordered collection of [`Property`] values for one antenna instance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SynthesisParameters {
    antenna_name: String,
    properties: IndexMap<String, Property>,
}

impl SynthesisParameters {
    /// Creates an empty parameter set owned by the named antenna.
    #[must_use]
    pub fn new(antenna_name: impl Into<String>) -> Self {
        Self {
            antenna_name: antenna_name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Rebinds the parameter set to a new owning antenna name, re-deriving
    /// every property's external variable. Called on instance rename so later
    /// synthesis keeps targeting the instance's own variables instead of the
    /// freed old name.
    pub fn set_antenna_name(&mut self, antenna_name: impl Into<String>) {
        self.antenna_name = antenna_name.into();
        for property in self.properties.values_mut() {
            property.variable = format!("{}_{}", self.antenna_name, property.name);
        }
    }

    /// Merges a synthesis result into the model.
    ///
    /// Existing keys are updated in place, keeping their bound variable; new
    /// keys create fresh properties. Keys absent from `new_values` are left
    /// untouched (this is a merge, never a replace).
    pub fn update(&mut self, new_values: &IndexMap<String, Scalar>) {
        for (name, value) in new_values {
            if let Some(existing) = self.properties.get_mut(name) {
                existing.value = round_to(*value, VALUE_PRECISION);
            } else {
                let property = Property::new(&self.antenna_name, name.clone(), *value);
                self.properties.insert(name.clone(), property);
            }
        }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Number of tracked properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no synthesis result has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Boundary condition applied to the solution region's outer surface.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OuterBoundary {
    /// No explicit outer boundary.
    #[default]
    None,
    /// Absorbing radiation boundary.
    Radiation,
    /// Perfectly matched layer.
    Pml,
    /// Finite element / boundary integral hybrid.
    Febi,
}

impl OuterBoundary {
    /// External engine's name for this boundary type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Radiation => "Radiation",
            Self::Pml => "PML",
            Self::Febi => "FEBI",
        }
    }
}

/// User-facing inputs for one antenna instance.
///
/// An explicit typed record rather than a dynamic name→value bag; the
/// name-keyed form only exists at the override/serialization boundary via
/// [`InputParameters::apply_override`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    /// Operating (center) frequency, expressed in `frequency_unit`.
    pub frequency: Scalar,
    /// Unit of `frequency`, `start_frequency` and `stop_frequency`.
    pub frequency_unit: FrequencyUnit,
    /// Unit every geometric output is expressed in.
    pub length_unit: LengthUnit,
    /// Substrate material name, resolved through a material library.
    pub material: String,
    /// Explicit permittivity override; takes precedence over `material`.
    pub permittivity: Option<Scalar>,
    /// Substrate height in `length_unit`.
    pub substrate_height: Scalar,
    /// Antenna origin in `length_unit`.
    pub origin: R3,
    /// Named coordinate system the origin is relative to.
    pub coordinate_system: String,
    /// Outer boundary assignment, pushed directly to the modeler.
    pub outer_boundary: OuterBoundary,
    /// Target gain in dB (gain-driven families).
    pub gain: Scalar,
    /// Band start frequency (broadband families), in `frequency_unit`.
    pub start_frequency: Scalar,
    /// Band stop frequency (broadband families), in `frequency_unit`.
    pub stop_frequency: Scalar,
    /// Number of spiral turns (spiral families).
    pub spiral_turns: Scalar,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            frequency: 10.0,
            frequency_unit: FrequencyUnit::GHz,
            length_unit: LengthUnit::Mm,
            material: "FR4_epoxy".to_string(),
            permittivity: None,
            substrate_height: 1.575,
            origin: R3::zeros(),
            coordinate_system: "Global".to_string(),
            outer_boundary: OuterBoundary::None,
            gain: 10.0,
            start_frequency: 4.0,
            stop_frequency: 10.0,
            spiral_turns: 4.0,
        }
    }
}

impl InputParameters {
    /// Frequency in hertz.
    #[must_use]
    pub fn frequency_hz(&self) -> Scalar {
        self.frequency * self.frequency_unit.multiplier()
    }

    /// Band start frequency in hertz.
    #[must_use]
    pub fn start_frequency_hz(&self) -> Scalar {
        self.start_frequency * self.frequency_unit.multiplier()
    }

    /// Band stop frequency in hertz.
    #[must_use]
    pub fn stop_frequency_hz(&self) -> Scalar {
        self.stop_frequency * self.frequency_unit.multiplier()
    }

    /// Substrate height in meters.
    #[must_use]
    pub fn substrate_height_m(&self) -> Scalar {
        self.substrate_height * self.length_unit.multiplier()
    }

    /// Applies one name-keyed override from the catalog/REST boundary.
    ///
    /// Unrecognized keys and malformed values are hard configuration errors;
    /// there is no partial application.
    pub fn apply_override(&mut self, key: &str, value: &InputValue) -> Result<(), AntennaError> {
        let bad_key = || AntennaError::InvalidConfiguration(key.to_string());
        match key {
            "frequency" => self.frequency = value.as_number().ok_or_else(bad_key)?,
            "frequency_unit" => {
                let text = value.as_text().ok_or_else(bad_key)?;
                self.frequency_unit = FrequencyUnit::parse(text).ok_or_else(bad_key)?;
            }
            "length_unit" => {
                let text = value.as_text().ok_or_else(bad_key)?;
                self.length_unit = LengthUnit::parse(text).ok_or_else(bad_key)?;
            }
            "material" => self.material = value.as_text().ok_or_else(bad_key)?.to_string(),
            "permittivity" => self.permittivity = Some(value.as_number().ok_or_else(bad_key)?),
            "substrate_height" => self.substrate_height = value.as_number().ok_or_else(bad_key)?,
            "origin_x" => self.origin.x = value.as_number().ok_or_else(bad_key)?,
            "origin_y" => self.origin.y = value.as_number().ok_or_else(bad_key)?,
            "origin_z" => self.origin.z = value.as_number().ok_or_else(bad_key)?,
            "coordinate_system" => {
                self.coordinate_system = value.as_text().ok_or_else(bad_key)?.to_string();
            }
            "gain" => self.gain = value.as_number().ok_or_else(bad_key)?,
            "start_frequency" => self.start_frequency = value.as_number().ok_or_else(bad_key)?,
            "stop_frequency" => self.stop_frequency = value.as_number().ok_or_else(bad_key)?,
            "spiral_turns" => self.spiral_turns = value.as_number().ok_or_else(bad_key)?,
            _ => return Err(bad_key()),
        }
        Ok(())
    }

    /// Builds an input set from defaults overlaid with caller overrides.
    pub fn from_overrides(
        defaults: Self,
        overrides: &IndexMap<String, InputValue>,
    ) -> Result<Self, AntennaError> {
        let mut inputs = defaults;
        for (key, value) in overrides {
            inputs.apply_override(key, value)?;
        }
        Ok(inputs)
    }
}

/// Value carried by a name-keyed input override.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Numeric override.
    Number(Scalar),
    /// Textual override (units, material names, coordinate systems).
    Text(String),
}

impl InputValue {
    /// Numeric payload, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<Scalar> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Textual payload, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<Scalar> for InputValue {
    fn from(value: Scalar) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn values(pairs: &[(&str, Scalar)]) -> IndexMap<String, Scalar> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn update_merges_without_deleting() {
        let mut params = SynthesisParameters::new("patch_1");
        params.update(&values(&[("patch_length", 9.1234567), ("patch_width", 11.8)]));
        assert_eq!(params.len(), 2);

        // Second update omits patch_width entirely.
        params.update(&values(&[("patch_length", 8.5)]));
        assert_eq!(params.len(), 2);
        assert_relative_eq!(params.get("patch_width").unwrap().value, 11.8);
        assert_relative_eq!(params.get("patch_length").unwrap().value, 8.5);
    }

    #[test]
    fn values_are_rounded_before_storage() {
        let mut params = SynthesisParameters::new("patch_1");
        params.update(&values(&[("patch_length", 9.1234567)]));
        assert_relative_eq!(params.get("patch_length").unwrap().value, 9.123);
    }

    #[test]
    fn bound_variable_survives_updates() {
        let mut params = SynthesisParameters::new("bowtie_2");
        params.update(&values(&[("arm_length", 12.0)]));
        let variable = params.get("arm_length").unwrap().variable.clone();
        assert_eq!(variable, "bowtie_2_arm_length");

        params.update(&values(&[("arm_length", 14.0)]));
        assert_eq!(params.get("arm_length").unwrap().variable, variable);
    }

    #[test]
    fn renaming_the_owner_rebinds_every_variable() {
        let mut params = SynthesisParameters::new("patch_1");
        params.update(&values(&[("patch_length", 9.1), ("patch_width", 11.8)]));

        params.set_antenna_name("my_patch");
        assert_eq!(
            params.get("patch_length").unwrap().variable,
            "my_patch_patch_length"
        );
        assert_eq!(
            params.get("patch_width").unwrap().variable,
            "my_patch_patch_width"
        );

        // Later merges bind under the new owner as well.
        params.update(&values(&[("feed_offset", 2.5)]));
        assert_eq!(
            params.get("feed_offset").unwrap().variable,
            "my_patch_feed_offset"
        );
    }

    #[test]
    fn override_overlay_applies_in_order() {
        let mut overrides = IndexMap::new();
        overrides.insert("frequency".to_string(), InputValue::from(2.4));
        overrides.insert("frequency_unit".to_string(), InputValue::from("GHz"));
        overrides.insert("material".to_string(), InputValue::from("Teflon (tm)"));

        let inputs = InputParameters::from_overrides(InputParameters::default(), &overrides)
            .expect("valid overrides");
        assert_relative_eq!(inputs.frequency, 2.4);
        assert_eq!(inputs.material, "Teflon (tm)");
        assert_relative_eq!(inputs.frequency_hz(), 2.4e9);
    }

    #[test]
    fn unknown_override_key_is_rejected() {
        let mut overrides = IndexMap::new();
        overrides.insert("frequencyy".to_string(), InputValue::from(2.4));
        let err = InputParameters::from_overrides(InputParameters::default(), &overrides)
            .expect_err("typo must fail");
        assert!(matches!(err, AntennaError::InvalidConfiguration(k) if k == "frequencyy"));
    }

    #[test]
    fn mistyped_override_value_is_rejected() {
        let mut inputs = InputParameters::default();
        let err = inputs
            .apply_override("frequency", &InputValue::from("ten"))
            .expect_err("text where number expected");
        assert!(matches!(err, AntennaError::InvalidConfiguration(_)));
    }
}
