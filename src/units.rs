//! Strongly typed unit helpers and string-keyed dimensional conversion.
//!
//! Frequencies normalize through hertz, lengths through meters. The
//! string-keyed [`convert`] entry point exists for the serialization boundary
//! (REST/GUI layers trade in unit strings); internal code uses the enums.

use std::fmt;

use thiserror::Error;

use crate::math::Scalar;

/// Kinds of physical quantity the converter understands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// Temporal frequency (base unit Hz).
    Frequency,
    /// Physical length (base unit meter).
    Length,
    /// Plane angle (base unit degree).
    Angle,
}

impl QuantityKind {
    /// Parses a quantity-kind string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "freq" | "frequency" => Some(Self::Frequency),
            "length" => Some(Self::Length),
            "angle" => Some(Self::Angle),
            _ => None,
        }
    }
}

/// Frequency unit enumeration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    /// Hertz.
    Hz,
    /// Kilohertz.
    KHz,
    /// Megahertz.
    MHz,
    /// Gigahertz.
    #[default]
    GHz,
    /// Terahertz.
    THz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz.
    #[must_use]
    pub fn multiplier(&self) -> Scalar {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1e3,
            Self::MHz => 1e6,
            Self::GHz => 1e9,
            Self::THz => 1e12,
        }
    }

    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hz" => Some(Self::Hz),
            "khz" => Some(Self::KHz),
            "mhz" => Some(Self::MHz),
            "ghz" => Some(Self::GHz),
            "thz" => Some(Self::THz),
            _ => None,
        }
    }

    /// Canonical display suffix.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::MHz => "MHz",
            Self::GHz => "GHz",
            Self::THz => "THz",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Length unit enumeration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Nanometer.
    Nm,
    /// Micrometer.
    Um,
    /// Millimeter.
    #[default]
    Mm,
    /// Centimeter.
    Cm,
    /// Meter.
    Meter,
    /// Mil (thousandth of an inch).
    Mil,
    /// Inch.
    In,
    /// Foot.
    Ft,
}

impl LengthUnit {
    /// Get the multiplier to convert to meters.
    #[must_use]
    pub fn multiplier(&self) -> Scalar {
        match self {
            Self::Nm => 1e-9,
            Self::Um => 1e-6,
            Self::Mm => 1e-3,
            Self::Cm => 1e-2,
            Self::Meter => 1.0,
            Self::Mil => 2.54e-5,
            Self::In => 2.54e-2,
            Self::Ft => 0.3048,
        }
    }

    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nm" => Some(Self::Nm),
            "um" => Some(Self::Um),
            "mm" => Some(Self::Mm),
            "cm" => Some(Self::Cm),
            "m" | "meter" => Some(Self::Meter),
            "mil" => Some(Self::Mil),
            "in" | "inch" => Some(Self::In),
            "ft" => Some(Self::Ft),
            _ => None,
        }
    }

    /// Canonical display suffix, matching the external modeler's unit strings.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Nm => "nm",
            Self::Um => "um",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::Meter => "meter",
            Self::Mil => "mil",
            Self::In => "in",
            Self::Ft => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Errors raised by [`convert`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The quantity-kind string is not recognized.
    #[error("unknown quantity kind: {0}")]
    UnknownQuantity(String),
    /// A unit string is not recognized for the given quantity kind.
    #[error("unknown {kind:?} unit: {unit}")]
    UnknownUnit {
        /// Quantity kind the unit was parsed against.
        kind: QuantityKind,
        /// The offending unit string.
        unit: String,
    },
}

fn unit_multiplier(kind: QuantityKind, unit: &str) -> Result<Scalar, ConversionError> {
    let mult = match kind {
        QuantityKind::Frequency => FrequencyUnit::parse(unit).map(|u| u.multiplier()),
        QuantityKind::Length => LengthUnit::parse(unit).map(|u| u.multiplier()),
        QuantityKind::Angle => match unit.to_ascii_lowercase().as_str() {
            "deg" | "degree" => Some(1.0),
            "rad" | "radian" => Some(180.0 / std::f64::consts::PI),
            _ => None,
        },
    };
    mult.ok_or_else(|| ConversionError::UnknownUnit {
        kind,
        unit: unit.to_string(),
    })
}

/// Converts `value` of the named quantity kind between two unit strings.
///
/// Conversions go through the kind's base unit and are invertible to within
/// floating-point tolerance.
pub fn convert(
    value: Scalar,
    quantity_kind: &str,
    from_unit: &str,
    to_unit: &str,
) -> Result<Scalar, ConversionError> {
    let kind = QuantityKind::parse(quantity_kind)
        .ok_or_else(|| ConversionError::UnknownQuantity(quantity_kind.to_string()))?;
    let from = unit_multiplier(kind, from_unit)?;
    let to = unit_multiplier(kind, to_unit)?;
    Ok(value * from / to)
}

/// Converts a frequency value between typed units.
#[must_use]
pub fn convert_frequency(value: Scalar, from: FrequencyUnit, to: FrequencyUnit) -> Scalar {
    value * from.multiplier() / to.multiplier()
}

/// Converts a length value between typed units.
#[must_use]
pub fn convert_length(value: Scalar, from: LengthUnit, to: LengthUnit) -> Scalar {
    value * from.multiplier() / to.multiplier()
}
