//! Shared error types used across submodules.

use thiserror::Error;

use crate::modeler::ModelerError;
use crate::units::ConversionError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum AntennaError {
    /// Raised when an unrecognized input key is supplied at construction.
    #[error("invalid antenna configuration: unknown input key `{0}`")]
    InvalidConfiguration(String),
    /// Wraps dimensional-conversion failures.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// Raised when bounded unique-name generation runs out of attempts.
    #[error("could not find a free name for family `{family}` after {attempts} attempts")]
    NameExhausted {
        /// Antenna family whose namespace was exhausted.
        family: &'static str,
        /// Number of candidates tried.
        attempts: usize,
    },
    /// Raised when geometry realization is requested without a synthesis result.
    #[error("antenna `{0}` has no synthesized parameters; refusing to realize geometry")]
    NotSynthesized(String),
    /// Wraps failures reported by the external modeler.
    #[error(transparent)]
    Modeler(#[from] ModelerError),
}
