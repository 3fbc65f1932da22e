//! Convenience re-exports for building antenna synthesis sessions.

pub use crate::antenna::{catalog, resolve_name, Antenna, AntennaFamily};
pub use crate::constants::*;
pub use crate::errors::AntennaError;
pub use crate::materials::{MaterialLibrary, MaterialResolver};
pub use crate::math::{Scalar, R3};
pub use crate::modeler::{
    format_variable_value, GeometryRole, Modeler, ModelerError, RecordingModeler,
};
pub use crate::params::{
    InputParameters, InputValue, OuterBoundary, Property, SynthesisParameters,
};
pub use crate::synthesis::bowtie::BowtieVariant;
pub use crate::synthesis::horn::HornVariant;
pub use crate::synthesis::patch::PatchFeed;
pub use crate::synthesis::spiral::SpiralVariant;
pub use crate::synthesis::SynthesisOutput;
pub use crate::transmission::{
    microstrip_calculator, stripline_calculator, suspended_strip_calculator,
};
pub use crate::units::{
    convert, convert_frequency, convert_length, ConversionError, FrequencyUnit, LengthUnit,
    QuantityKind,
};
pub use crate::waveguide::StandardWaveguide;
