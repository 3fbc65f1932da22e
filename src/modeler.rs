//! Boundary contracts toward the external CAD/EM engine.
//!
//! The core never draws geometry. It talks to the modeler through the
//! [`Modeler`] trait (design variables, object groups) and a textual
//! variable-value contract that downstream setup logic depends on bit-exactly.

use indexmap::IndexSet;
use thiserror::Error;

use crate::math::Scalar;
use crate::units::LengthUnit;

/// Role a realized geometry object plays in the downstream setup routine.
///
/// The legacy protocol inferred roles from name prefixes; the enum makes the
/// role explicit while [`GeometryRole::prefix`] keeps the wire contract.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryRole {
    /// Dielectric substrate solid.
    Substrate,
    /// Radiating element.
    Radiator,
    /// Ground plane or reflector.
    Ground,
    /// Wave port surface.
    Port,
    /// Lumped port surface.
    LumpedPort,
    /// Port cap solid backing a lumped port.
    PortCap,
    /// Coaxial feed solid.
    Coax,
    /// Feed line or probe.
    Feed,
    /// Huygens surface enclosing the antenna for near-field extraction.
    HuygensBox,
}

impl GeometryRole {
    /// Object-name prefix consumed by the external setup routine.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Substrate => "sub_",
            Self::Radiator => "ant_",
            Self::Ground => "gnd_",
            Self::Port => "port_",
            Self::LumpedPort => "port_lump_",
            Self::PortCap => "port_cap_",
            Self::Coax => "coax_",
            Self::Feed => "feed_",
            Self::HuygensBox => "huygens_",
        }
    }

    /// Object name for this role on the named antenna instance.
    #[must_use]
    pub fn object_name(&self, antenna_name: &str) -> String {
        format!("{}{antenna_name}", self.prefix())
    }
}

/// Errors reported by the external modeler. Never retried by the core.
#[derive(Debug, Error)]
pub enum ModelerError {
    /// The engine rejected a design-variable assignment.
    #[error("variable assignment failed for `{name}`: {reason}")]
    Variable {
        /// Variable the assignment targeted.
        name: String,
        /// Engine-reported reason.
        reason: String,
    },
    /// The engine rejected a group operation (rename/delete).
    #[error("group operation failed for `{group}`: {reason}")]
    Group {
        /// Group the operation targeted.
        group: String,
        /// Engine-reported reason.
        reason: String,
    },
    /// The session to the engine is gone.
    #[error("modeler session lost: {0}")]
    SessionLost(String),
}

/// External modeler surface consumed by the orchestrator.
///
/// Implementations wrap a live engine session; the crate ships only the
/// [`RecordingModeler`] test double.
pub trait Modeler {
    /// Assigns a named design variable to a formatted value string.
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), ModelerError>;

    /// True when the engine already has a design variable with this name.
    fn has_variable(&self, name: &str) -> bool;

    /// True when the engine already has an object group with this name.
    fn has_object_group(&self, name: &str) -> bool;

    /// Renames an object group.
    fn rename_group(&mut self, old: &str, new: &str) -> Result<(), ModelerError>;

    /// Deletes an object group and everything in it.
    fn delete_group(&mut self, name: &str) -> Result<(), ModelerError>;
}

/// Formats a property value for the external engine's variable table.
///
/// Suffix rules (bit-exact contract): names containing `angle` are degrees;
/// names containing `ratio`, `coefficient`, `points` or `number` are
/// dimensionless; everything else carries the instance length unit.
#[must_use]
pub fn format_variable_value(name: &str, value: Scalar, length_unit: LengthUnit) -> String {
    if name.contains("angle") {
        format!("{value}deg")
    } else if ["ratio", "coefficient", "points", "number"]
        .iter()
        .any(|tag| name.contains(tag))
    {
        format!("{value}")
    } else {
        format!("{value}{}", length_unit.suffix())
    }
}

/// In-memory modeler double: records assignments, answers name queries from
/// seeded sets.
#[derive(Debug, Default)]
pub struct RecordingModeler {
    /// Variable assignments in call order.
    pub assignments: Vec<(String, String)>,
    /// Known variable names.
    pub variables: IndexSet<String>,
    /// Known object-group names.
    pub groups: IndexSet<String>,
}

impl RecordingModeler {
    /// Creates an empty recording modeler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an existing group name, simulating prior geometry.
    pub fn seed_group(&mut self, name: impl Into<String>) {
        self.groups.insert(name.into());
    }

    /// Last recorded value for a variable, if any.
    #[must_use]
    pub fn last_value(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Modeler for RecordingModeler {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), ModelerError> {
        self.variables.insert(name.to_string());
        self.assignments.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn has_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    fn has_object_group(&self, name: &str) -> bool {
        self.groups.contains(name)
    }

    fn rename_group(&mut self, old: &str, new: &str) -> Result<(), ModelerError> {
        if !self.groups.shift_remove(old) {
            return Err(ModelerError::Group {
                group: old.to_string(),
                reason: "no such group".to_string(),
            });
        }
        self.groups.insert(new.to_string());
        Ok(())
    }

    fn delete_group(&mut self, name: &str) -> Result<(), ModelerError> {
        if !self.groups.shift_remove(name) {
            return Err(ModelerError::Group {
                group: name.to_string(),
                reason: "no such group".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_names_get_degree_suffix() {
        assert_eq!(
            format_variable_value("flare_angle", 12.5, LengthUnit::Mm),
            "12.5deg"
        );
    }

    #[test]
    fn dimensionless_names_get_no_suffix() {
        assert_eq!(
            format_variable_value("expansion_coefficient", 1.31, LengthUnit::Mm),
            "1.31"
        );
        assert_eq!(
            format_variable_value("number_of_turns", 6.0, LengthUnit::Cm),
            "6"
        );
        assert_eq!(
            format_variable_value("number_of_ridge_points", 17.0, LengthUnit::Mm),
            "17"
        );
        assert_eq!(
            format_variable_value("axial_ratio", 1.0, LengthUnit::Mm),
            "1"
        );
    }

    #[test]
    fn lengths_get_the_instance_unit() {
        assert_eq!(
            format_variable_value("patch_length", 9.123, LengthUnit::Mm),
            "9.123mm"
        );
        assert_eq!(
            format_variable_value("sub_height", 0.5, LengthUnit::Cm),
            "0.5cm"
        );
    }

    #[test]
    fn role_prefixes_match_the_wire_protocol() {
        assert_eq!(GeometryRole::Substrate.object_name("patch_1"), "sub_patch_1");
        assert_eq!(GeometryRole::LumpedPort.prefix(), "port_lump_");
        assert_eq!(GeometryRole::HuygensBox.prefix(), "huygens_");
    }

    #[test]
    fn recording_modeler_tracks_groups() {
        let mut modeler = RecordingModeler::new();
        modeler.seed_group("ant_patch_1");
        assert!(modeler.has_object_group("ant_patch_1"));
        modeler.rename_group("ant_patch_1", "ant_old").unwrap();
        assert!(!modeler.has_object_group("ant_patch_1"));
        modeler.delete_group("ant_old").unwrap();
        assert!(modeler.delete_group("ant_old").is_err());
    }
}
