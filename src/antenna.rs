//! Antenna instance lifecycle: inputs, synthesis, external-model sync.
//!
//! The orchestrator owns one [`InputParameters`] and one
//! [`SynthesisParameters`] per antenna. Every typed setter follows the same
//! state-machine rule: mutate the input, recompute synthesis unconditionally,
//! merge into the parameter model, and push values to the external modeler
//! only when geometry has already been realized. Synthesizing a not-yet-built
//! antenna therefore never touches the engine, and a built antenna never goes
//! stale.

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::AntennaError;
use crate::materials::MaterialResolver;
use crate::math::{Scalar, R3};
use crate::modeler::{format_variable_value, GeometryRole, Modeler};
use crate::params::{InputParameters, InputValue, OuterBoundary, SynthesisParameters};
use crate::synthesis::bowtie::{self, BowtieVariant};
use crate::synthesis::helix;
use crate::synthesis::horn::{self, HornVariant};
use crate::synthesis::patch::{self, PatchFeed};
use crate::synthesis::spiral::{self, SpiralVariant};
use crate::synthesis::SynthesisOutput;
use crate::units::{FrequencyUnit, LengthUnit};

/// Antenna family and variant selector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaFamily {
    /// Rectangular microstrip patch.
    Patch(PatchFeed),
    /// Planar bow-tie.
    Bowtie(BowtieVariant),
    /// Horn.
    Horn(HornVariant),
    /// Axial-mode helix.
    Helix,
    /// Conical spiral.
    ConicalSpiral(SpiralVariant),
}

impl AntennaFamily {
    /// Every family/variant the catalog exposes, in catalog order.
    pub const ALL: [Self; 16] = [
        Self::Patch(PatchFeed::Probe),
        Self::Patch(PatchFeed::Inset),
        Self::Bowtie(BowtieVariant::Normal),
        Self::Bowtie(BowtieVariant::Rounded),
        Self::Bowtie(BowtieVariant::Slot),
        Self::Horn(HornVariant::Conical),
        Self::Horn(HornVariant::Pyramidal),
        Self::Horn(HornVariant::EPlane),
        Self::Horn(HornVariant::HPlane),
        Self::Horn(HornVariant::Corrugated),
        Self::Horn(HornVariant::Ridged),
        Self::Horn(HornVariant::QuadRidged),
        Self::Helix,
        Self::ConicalSpiral(SpiralVariant::Archimedean),
        Self::ConicalSpiral(SpiralVariant::Log),
        Self::ConicalSpiral(SpiralVariant::Sinuous),
    ];

    /// Short family prefix used when generating unique instance names.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Patch(_) => "patch",
            Self::Bowtie(_) => "bowtie",
            Self::Horn(_) => "horn",
            Self::Helix => "helix",
            Self::ConicalSpiral(_) => "spiral",
        }
    }

    /// Catalog key for this family/variant.
    #[must_use]
    pub const fn catalog_name(&self) -> &'static str {
        match self {
            Self::Patch(PatchFeed::Probe) => "patch_probe",
            Self::Patch(PatchFeed::Inset) => "patch_inset",
            Self::Bowtie(BowtieVariant::Normal) => "bowtie",
            Self::Bowtie(BowtieVariant::Rounded) => "bowtie_rounded",
            Self::Bowtie(BowtieVariant::Slot) => "bowtie_slot",
            Self::Horn(HornVariant::Conical) => "horn_conical",
            Self::Horn(HornVariant::Pyramidal) => "horn_pyramidal",
            Self::Horn(HornVariant::EPlane) => "horn_eplane",
            Self::Horn(HornVariant::HPlane) => "horn_hplane",
            Self::Horn(HornVariant::Corrugated) => "horn_corrugated",
            Self::Horn(HornVariant::Ridged) => "horn_ridged",
            Self::Horn(HornVariant::QuadRidged) => "horn_quad_ridged",
            Self::Helix => "helix",
            Self::ConicalSpiral(SpiralVariant::Archimedean) => "spiral_archimedean",
            Self::ConicalSpiral(SpiralVariant::Log) => "spiral_log",
            Self::ConicalSpiral(SpiralVariant::Sinuous) => "spiral_sinuous",
        }
    }

    /// Default inputs for this family.
    #[must_use]
    pub fn default_inputs(&self) -> InputParameters {
        let mut inputs = InputParameters::default();
        match self {
            Self::Patch(_) | Self::Bowtie(_) => {}
            Self::Horn(_) => {
                inputs.material = "vacuum".to_string();
            }
            Self::Helix => {
                inputs.frequency = 1.5;
                inputs.material = "vacuum".to_string();
                inputs.gain = 12.0;
            }
            Self::ConicalSpiral(_) => {
                inputs.material = "vacuum".to_string();
                inputs.start_frequency = 4.0;
                inputs.stop_frequency = 10.0;
            }
        }
        inputs
    }

    /// Dispatches to the family's pure synthesis function.
    #[must_use]
    pub fn synthesize(
        &self,
        inputs: &InputParameters,
        resolver: &dyn MaterialResolver,
    ) -> SynthesisOutput {
        match self {
            Self::Patch(feed) => patch::synthesize(inputs, resolver, *feed),
            Self::Bowtie(variant) => bowtie::synthesize(inputs, resolver, *variant),
            Self::Horn(variant) => horn::synthesize(inputs, resolver, *variant),
            Self::Helix => helix::synthesize(inputs, resolver),
            Self::ConicalSpiral(variant) => spiral::synthesize(inputs, resolver, *variant),
        }
    }
}

/// The antenna catalog surface: catalog name → default inputs, enumerated
/// once at startup by the GUI/REST layer.
#[must_use]
pub fn catalog() -> IndexMap<&'static str, InputParameters> {
    AntennaFamily::ALL
        .iter()
        .map(|family| (family.catalog_name(), family.default_inputs()))
        .collect()
}

/// Attempts made before unique-name generation gives up.
const MAX_NAME_ATTEMPTS: usize = 1024;

/// Resolves a unique instance name against the external namespace.
///
/// An absent or colliding candidate falls back to family-prefixed generated
/// names with a monotonically increasing suffix. The loop is bounded;
/// exhaustion is a fatal invariant violation, not a retry condition.
pub fn resolve_name(
    modeler: &dyn Modeler,
    candidate: Option<&str>,
    family: AntennaFamily,
) -> Result<String, AntennaError> {
    let is_free =
        |name: &str| !modeler.has_object_group(name) && !modeler.has_variable(name);

    if let Some(name) = candidate {
        if !name.is_empty() && is_free(name) {
            return Ok(name.to_string());
        }
    }
    for suffix in 1..=MAX_NAME_ATTEMPTS {
        let generated = format!("{}_{suffix}", family.prefix());
        if is_free(&generated) {
            return Ok(generated);
        }
    }
    Err(AntennaError::NameExhausted {
        family: family.prefix(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

/// One antenna instance and its parameter lifecycle.
#[derive(Debug)]
pub struct Antenna {
    name: String,
    family: AntennaFamily,
    inputs: InputParameters,
    parameters: SynthesisParameters,
    /// Realized external geometry: object id → role. The modeler owns the
    /// geometry; this map only holds back-references.
    objects: IndexMap<String, GeometryRole>,
}

impl Antenna {
    /// Creates an antenna instance from family defaults overlaid with
    /// caller overrides, resolving a unique name against the modeler's
    /// namespace. Construction performs no synthesis and no external calls
    /// beyond name queries.
    pub fn new(
        family: AntennaFamily,
        candidate_name: Option<&str>,
        overrides: &IndexMap<String, InputValue>,
        modeler: &dyn Modeler,
    ) -> Result<Self, AntennaError> {
        let inputs = InputParameters::from_overrides(family.default_inputs(), overrides)?;
        let name = resolve_name(modeler, candidate_name, family)?;
        let parameters = SynthesisParameters::new(&name);
        Ok(Self {
            name,
            family,
            inputs,
            parameters,
            objects: IndexMap::new(),
        })
    }

    /// Instance name, unique within the external namespace at creation time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Family/variant of this instance.
    #[must_use]
    pub const fn family(&self) -> AntennaFamily {
        self.family
    }

    /// Current inputs (read-only; mutate through the typed setters).
    #[must_use]
    pub const fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    /// Current synthesis result.
    #[must_use]
    pub const fn parameters(&self) -> &SynthesisParameters {
        &self.parameters
    }

    /// True once external geometry has been registered.
    #[must_use]
    pub fn is_realized(&self) -> bool {
        !self.objects.is_empty()
    }

    /// True when the last synthesis produced parameters.
    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Runs synthesis and merges the result into the parameter model.
    ///
    /// Returns `true` when parameters were produced. An empty result (for
    /// example an unresolvable material) leaves the model untouched and the
    /// instance not-ready.
    pub fn synthesize(&mut self, resolver: &dyn MaterialResolver) -> bool {
        let output = self.family.synthesize(&self.inputs, resolver);
        if output.is_empty() {
            return false;
        }
        self.parameters.update(&output);
        true
    }

    /// Registers an external geometry object for `role`, marking the
    /// instance realized. Called by the (external) build routine after it
    /// draws the object.
    ///
    /// Fails when nothing has been synthesized: building geometry from an
    /// empty parameter set is a caller bug.
    pub fn register_realized(&mut self, role: GeometryRole) -> Result<String, AntennaError> {
        if !self.is_synthesized() {
            return Err(AntennaError::NotSynthesized(self.name.clone()));
        }
        let object = role.object_name(&self.name);
        self.objects.insert(object.clone(), role);
        Ok(object)
    }

    /// Realized object ids and roles.
    #[must_use]
    pub const fn objects(&self) -> &IndexMap<String, GeometryRole> {
        &self.objects
    }

    /// Pushes every property to the modeler's variable table, in map order,
    /// using the textual suffix contract.
    pub fn push_parameters(&self, modeler: &mut dyn Modeler) -> Result<(), AntennaError> {
        for property in self.parameters.iter() {
            let value =
                format_variable_value(&property.name, property.value, self.inputs.length_unit);
            modeler.set_variable(&property.variable, &value)?;
        }
        Ok(())
    }

    /// Shared setter tail: resynthesize, merge, push only when realized.
    fn after_input_change(
        &mut self,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        let produced = self.synthesize(resolver);
        if !produced {
            debug!(antenna = %self.name, "input change produced no parameters");
            return Ok(());
        }
        if self.is_realized() {
            self.push_parameters(modeler)?;
        }
        Ok(())
    }

    /// Sets the operating frequency (in the current frequency unit).
    pub fn set_frequency(
        &mut self,
        frequency: Scalar,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.frequency = frequency;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the frequency unit.
    pub fn set_frequency_unit(
        &mut self,
        unit: FrequencyUnit,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.frequency_unit = unit;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the geometric output unit.
    pub fn set_length_unit(
        &mut self,
        unit: LengthUnit,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.length_unit = unit;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the substrate material by library name.
    pub fn set_material(
        &mut self,
        material: impl Into<String>,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.material = material.into();
        self.after_input_change(resolver, modeler)
    }

    /// Sets the substrate height (in the current length unit).
    pub fn set_substrate_height(
        &mut self,
        height: Scalar,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.substrate_height = height;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the antenna origin (in the current length unit).
    pub fn set_origin(
        &mut self,
        origin: R3,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.origin = origin;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the target gain in dB (gain-driven families).
    pub fn set_gain(
        &mut self,
        gain_db: Scalar,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.gain = gain_db;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the band start frequency (broadband families).
    pub fn set_start_frequency(
        &mut self,
        frequency: Scalar,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.start_frequency = frequency;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the band stop frequency (broadband families).
    pub fn set_stop_frequency(
        &mut self,
        frequency: Scalar,
        resolver: &dyn MaterialResolver,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.stop_frequency = frequency;
        self.after_input_change(resolver, modeler)
    }

    /// Sets the outer boundary condition.
    ///
    /// Deviates from the setter state machine on purpose: boundary type is
    /// not a geometric synthesis output, so this talks to the modeler
    /// directly and skips synthesis entirely.
    pub fn set_outer_boundary(
        &mut self,
        boundary: OuterBoundary,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        self.inputs.outer_boundary = boundary;
        let variable = format!("{}_outer_boundary", self.name);
        modeler.set_variable(&variable, boundary.as_str())?;
        Ok(())
    }

    /// Renames the instance's external group, keeping back-references and
    /// parameter variable bindings in step.
    pub fn rename(
        &mut self,
        new_name: &str,
        modeler: &mut dyn Modeler,
    ) -> Result<(), AntennaError> {
        if self.is_realized() {
            modeler.rename_group(&self.name, new_name)?;
        }
        let renamed: IndexMap<String, GeometryRole> = self
            .objects
            .iter()
            .map(|(_, role)| (role.object_name(new_name), *role))
            .collect();
        self.objects = renamed;
        self.name = new_name.to_string();
        self.parameters.set_antenna_name(new_name);
        Ok(())
    }

    /// Deletes the instance's external group and clears the realized map.
    /// The synthesis parameters survive, so the antenna can be rebuilt.
    pub fn delete_geometry(&mut self, modeler: &mut dyn Modeler) -> Result<(), AntennaError> {
        if self.is_realized() {
            modeler.delete_group(&self.name)?;
        }
        self.objects.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::materials::MaterialLibrary;
    use crate::modeler::RecordingModeler;

    use super::*;

    fn no_overrides() -> IndexMap<String, InputValue> {
        IndexMap::new()
    }

    fn probe_patch(modeler: &RecordingModeler) -> Antenna {
        Antenna::new(
            AntennaFamily::Patch(PatchFeed::Probe),
            None,
            &no_overrides(),
            modeler,
        )
        .expect("defaults are valid")
    }

    #[test]
    fn generated_names_are_family_prefixed_and_unique() {
        let mut modeler = RecordingModeler::new();
        modeler.seed_group("patch_1");
        modeler.variables.insert("patch_2".to_string());

        let antenna = probe_patch(&modeler);
        assert_eq!(antenna.name(), "patch_3");
    }

    #[test]
    fn explicit_free_name_is_kept() {
        let modeler = RecordingModeler::new();
        let antenna = Antenna::new(
            AntennaFamily::Helix,
            Some("gps_helix"),
            &no_overrides(),
            &modeler,
        )
        .unwrap();
        assert_eq!(antenna.name(), "gps_helix");
    }

    #[test]
    fn name_generation_is_bounded() {
        let mut modeler = RecordingModeler::new();
        for i in 1..=1024 {
            modeler.seed_group(format!("helix_{i}"));
        }
        let err = Antenna::new(AntennaFamily::Helix, None, &no_overrides(), &modeler)
            .expect_err("namespace exhausted");
        assert!(matches!(err, AntennaError::NameExhausted { .. }));
    }

    #[test]
    fn setter_does_not_push_before_realization() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.synthesize(&MaterialLibrary);

        antenna
            .set_frequency(5.0, &MaterialLibrary, &mut modeler)
            .unwrap();
        assert!(modeler.assignments.is_empty());
    }

    #[test]
    fn setter_pushes_after_realization() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.synthesize(&MaterialLibrary);
        antenna.register_realized(GeometryRole::Radiator).unwrap();

        antenna
            .set_frequency(5.0, &MaterialLibrary, &mut modeler)
            .unwrap();
        assert!(!modeler.assignments.is_empty());

        // Pushed variables follow the binding and suffix contracts.
        let name = antenna.name().to_string();
        let width = antenna.parameters().get("patch_width").unwrap();
        assert_eq!(width.variable, format!("{name}_patch_width"));
        let pushed = modeler.last_value(&width.variable).unwrap();
        assert_eq!(pushed, format!("{}mm", width.value));
    }

    #[test]
    fn realization_requires_synthesis() {
        let modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        let err = antenna
            .register_realized(GeometryRole::Radiator)
            .expect_err("not synthesized yet");
        assert!(matches!(err, AntennaError::NotSynthesized(_)));
    }

    #[test]
    fn failed_synthesis_leaves_parameters_untouched() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.synthesize(&MaterialLibrary);
        let before = antenna.parameters().len();

        antenna
            .set_material("unobtainium", &MaterialLibrary, &mut modeler)
            .unwrap();
        assert_eq!(antenna.parameters().len(), before);
        assert!(antenna.is_synthesized());
    }

    #[test]
    fn outer_boundary_bypasses_synthesis() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        // Never synthesized, never realized: the boundary call still lands.
        antenna
            .set_outer_boundary(OuterBoundary::Radiation, &mut modeler)
            .unwrap();
        let variable = format!("{}_outer_boundary", antenna.name());
        assert_eq!(modeler.last_value(&variable), Some("Radiation"));
        assert!(!antenna.is_synthesized());
    }

    #[test]
    fn delete_clears_realization_but_keeps_parameters() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.synthesize(&MaterialLibrary);
        let object = antenna.register_realized(GeometryRole::Radiator).unwrap();
        modeler.seed_group(antenna.name().to_string());
        assert_eq!(object, format!("ant_{}", antenna.name()));

        antenna.delete_geometry(&mut modeler).unwrap();
        assert!(!antenna.is_realized());
        assert!(antenna.is_synthesized());
    }

    #[test]
    fn rename_rebinds_parameter_variables() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.rename("gps_patch", &mut modeler).unwrap();

        antenna.synthesize(&MaterialLibrary);
        let width = antenna.parameters().get("patch_width").unwrap();
        assert_eq!(width.variable, "gps_patch_patch_width");

        // The freed generated name may be reclaimed; its bindings must not
        // alias the renamed instance's.
        let mut second = probe_patch(&modeler);
        assert_eq!(second.name(), "patch_1");
        second.synthesize(&MaterialLibrary);
        let other = second.parameters().get("patch_width").unwrap();
        assert_eq!(other.variable, "patch_1_patch_width");
        assert_ne!(other.variable, width.variable);
    }

    #[test]
    fn rename_after_synthesis_pushes_under_the_new_name() {
        let mut modeler = RecordingModeler::new();
        let mut antenna = probe_patch(&modeler);
        antenna.synthesize(&MaterialLibrary);
        antenna.register_realized(GeometryRole::Radiator).unwrap();
        modeler.seed_group(antenna.name().to_string());

        antenna.rename("front_patch", &mut modeler).unwrap();
        antenna.push_parameters(&mut modeler).unwrap();
        assert!(modeler.last_value("front_patch_patch_width").is_some());
        assert!(modeler.last_value("patch_1_patch_width").is_none());
        assert!(antenna.objects().contains_key("ant_front_patch"));
    }

    #[test]
    fn catalog_enumerates_every_family_once() {
        let catalog = catalog();
        assert_eq!(catalog.len(), AntennaFamily::ALL.len());
        assert!(catalog.contains_key("patch_probe"));
        assert!(catalog.contains_key("horn_quad_ridged"));
        assert!(catalog.contains_key("spiral_sinuous"));
    }

    #[test]
    fn unknown_override_key_fails_construction() {
        let modeler = RecordingModeler::new();
        let mut overrides = IndexMap::new();
        overrides.insert("ground_plane".to_string(), InputValue::from(1.0));
        let err = Antenna::new(
            AntennaFamily::Patch(PatchFeed::Probe),
            None,
            &overrides,
            &modeler,
        )
        .expect_err("unknown key");
        assert!(matches!(err, AntennaError::InvalidConfiguration(_)));
    }
}
