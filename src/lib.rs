#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Antenna instance lifecycle and the family catalog.
pub mod antenna;
/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Error types shared between submodules.
pub mod errors;
/// Substrate material resolution (permittivity by name).
pub mod materials;
/// Shared mathematical utilities (scalar/vector aliases, rounding).
pub mod math;
/// Boundary contracts toward the external CAD/EM engine.
pub mod modeler;
/// Parameter object model: properties, inputs and the merge protocol.
pub mod params;
/// Closed-form antenna synthesis algorithms, one submodule per family.
pub mod synthesis;
/// Transmission-line synthesis calculators.
pub mod transmission;
/// Strongly typed unit helpers and string-keyed conversion.
pub mod units;
/// Standard rectangular waveguide lookup table.
pub mod waveguide;

/// Common exports for downstream crates.
pub mod prelude;

pub use antenna::{Antenna, AntennaFamily};
pub use errors::AntennaError;
