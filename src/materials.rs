//! Material property resolution for substrate dielectrics.

use crate::math::Scalar;

/// Trait for permittivity lookup by material name.
///
/// Synthesis only needs the relative permittivity; anything richer (loss
/// tangent, conductivity) lives on the modeler side of the boundary.
pub trait MaterialResolver {
    /// True when the resolver knows the named material.
    fn has_material(&self, name: &str) -> bool;

    /// Relative permittivity εr of the named material, if known.
    fn permittivity_of(&self, name: &str) -> Option<Scalar>;
}

/// Entry in the built-in material table.
struct MaterialEntry {
    name: &'static str,
    permittivity: Scalar,
}

const MATERIALS: [MaterialEntry; 12] = [
    MaterialEntry { name: "air", permittivity: 1.0006 },
    MaterialEntry { name: "vacuum", permittivity: 1.0 },
    MaterialEntry { name: "FR4_epoxy", permittivity: 4.4 },
    MaterialEntry { name: "Rogers RT/duroid 5880 (tm)", permittivity: 2.2 },
    MaterialEntry { name: "Rogers RT/duroid 6002 (tm)", permittivity: 2.94 },
    MaterialEntry { name: "Rogers RT/duroid 6010/6010LM (tm)", permittivity: 10.2 },
    MaterialEntry { name: "Rogers RO4003 (tm)", permittivity: 3.55 },
    MaterialEntry { name: "Rogers RO3003 (tm)", permittivity: 3.0 },
    MaterialEntry { name: "Teflon (tm)", permittivity: 2.1 },
    MaterialEntry { name: "Alumina_92pct", permittivity: 9.2 },
    MaterialEntry { name: "Duroid (tm)", permittivity: 2.33 },
    MaterialEntry { name: "polyimide", permittivity: 3.5 },
];

/// Built-in substrate material library, case-insensitive on name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialLibrary;

impl MaterialResolver for MaterialLibrary {
    fn has_material(&self, name: &str) -> bool {
        MATERIALS
            .iter()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    fn permittivity_of(&self, name: &str) -> Option<Scalar> {
        MATERIALS
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.permittivity)
    }
}
