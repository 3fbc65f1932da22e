//! Standard rectangular waveguide lookup table.
//!
//! The 33 EIA bands from WR-2300 down to WR-5. Dimensions are tabulated in
//! inches (broad wall, narrow wall, wall thickness) and converted on demand;
//! band edges are hard thresholds, never interpolated.

use crate::math::Scalar;
use crate::units::{convert_frequency, convert_length, FrequencyUnit, LengthUnit};

/// One standard waveguide band entry.
#[derive(Debug, Clone, Copy)]
struct WaveguideBand {
    name: &'static str,
    /// Recommended band in GHz.
    f_low_ghz: Scalar,
    f_high_ghz: Scalar,
    /// Inner broad wall, inner narrow wall, wall thickness (inches).
    dims_in: [Scalar; 3],
}

/// Table ordered from the largest (lowest-band) to the smallest waveguide.
const WAVEGUIDE_BANDS: [WaveguideBand; 33] = [
    WaveguideBand { name: "WR-2300", f_low_ghz: 0.32, f_high_ghz: 0.45, dims_in: [23.0, 11.5, 0.15] },
    WaveguideBand { name: "WR-2100", f_low_ghz: 0.35, f_high_ghz: 0.53, dims_in: [21.0, 10.5, 0.15] },
    WaveguideBand { name: "WR-1800", f_low_ghz: 0.43, f_high_ghz: 0.62, dims_in: [18.0, 9.0, 0.15] },
    WaveguideBand { name: "WR-1500", f_low_ghz: 0.49, f_high_ghz: 0.75, dims_in: [15.0, 7.5, 0.15] },
    WaveguideBand { name: "WR-1150", f_low_ghz: 0.64, f_high_ghz: 0.96, dims_in: [11.5, 5.75, 0.125] },
    WaveguideBand { name: "WR-975", f_low_ghz: 0.75, f_high_ghz: 1.12, dims_in: [9.75, 4.875, 0.125] },
    WaveguideBand { name: "WR-770", f_low_ghz: 0.96, f_high_ghz: 1.45, dims_in: [7.7, 3.85, 0.125] },
    WaveguideBand { name: "WR-650", f_low_ghz: 1.12, f_high_ghz: 1.7, dims_in: [6.5, 3.25, 0.08] },
    WaveguideBand { name: "WR-510", f_low_ghz: 1.45, f_high_ghz: 2.2, dims_in: [5.1, 2.55, 0.08] },
    WaveguideBand { name: "WR-430", f_low_ghz: 1.7, f_high_ghz: 2.6, dims_in: [4.3, 2.15, 0.08] },
    WaveguideBand { name: "WR-340", f_low_ghz: 2.2, f_high_ghz: 3.3, dims_in: [3.4, 1.7, 0.08] },
    WaveguideBand { name: "WR-284", f_low_ghz: 2.6, f_high_ghz: 3.95, dims_in: [2.84, 1.34, 0.08] },
    WaveguideBand { name: "WR-229", f_low_ghz: 3.3, f_high_ghz: 4.9, dims_in: [2.29, 1.145, 0.064] },
    WaveguideBand { name: "WR-187", f_low_ghz: 3.95, f_high_ghz: 5.85, dims_in: [1.872, 0.872, 0.064] },
    WaveguideBand { name: "WR-159", f_low_ghz: 4.9, f_high_ghz: 7.05, dims_in: [1.59, 0.795, 0.064] },
    WaveguideBand { name: "WR-137", f_low_ghz: 5.85, f_high_ghz: 8.2, dims_in: [1.372, 0.622, 0.064] },
    WaveguideBand { name: "WR-112", f_low_ghz: 7.05, f_high_ghz: 10.0, dims_in: [1.122, 0.497, 0.064] },
    WaveguideBand { name: "WR-102", f_low_ghz: 7.0, f_high_ghz: 11.0, dims_in: [1.02, 0.51, 0.064] },
    WaveguideBand { name: "WR-90", f_low_ghz: 8.2, f_high_ghz: 12.4, dims_in: [0.9, 0.4, 0.05] },
    WaveguideBand { name: "WR-75", f_low_ghz: 10.0, f_high_ghz: 15.0, dims_in: [0.75, 0.375, 0.05] },
    WaveguideBand { name: "WR-62", f_low_ghz: 12.4, f_high_ghz: 18.0, dims_in: [0.622, 0.311, 0.04] },
    WaveguideBand { name: "WR-51", f_low_ghz: 15.0, f_high_ghz: 22.0, dims_in: [0.51, 0.255, 0.04] },
    WaveguideBand { name: "WR-42", f_low_ghz: 18.0, f_high_ghz: 26.5, dims_in: [0.42, 0.17, 0.04] },
    WaveguideBand { name: "WR-34", f_low_ghz: 22.0, f_high_ghz: 33.0, dims_in: [0.34, 0.17, 0.04] },
    WaveguideBand { name: "WR-28", f_low_ghz: 26.5, f_high_ghz: 40.0, dims_in: [0.28, 0.14, 0.04] },
    WaveguideBand { name: "WR-22", f_low_ghz: 33.0, f_high_ghz: 50.0, dims_in: [0.224, 0.112, 0.04] },
    WaveguideBand { name: "WR-19", f_low_ghz: 40.0, f_high_ghz: 60.0, dims_in: [0.188, 0.094, 0.04] },
    WaveguideBand { name: "WR-15", f_low_ghz: 50.0, f_high_ghz: 75.0, dims_in: [0.148, 0.074, 0.04] },
    WaveguideBand { name: "WR-12", f_low_ghz: 60.0, f_high_ghz: 90.0, dims_in: [0.122, 0.061, 0.04] },
    WaveguideBand { name: "WR-10", f_low_ghz: 75.0, f_high_ghz: 110.0, dims_in: [0.1, 0.05, 0.04] },
    WaveguideBand { name: "WR-8", f_low_ghz: 90.0, f_high_ghz: 140.0, dims_in: [0.08, 0.04, 0.02] },
    WaveguideBand { name: "WR-6", f_low_ghz: 110.0, f_high_ghz: 170.0, dims_in: [0.065, 0.0325, 0.02] },
    WaveguideBand { name: "WR-5", f_low_ghz: 140.0, f_high_ghz: 220.0, dims_in: [0.051, 0.0255, 0.02] },
];

/// Fraction of the operating frequency used for band selection. Horn throats
/// are sized for the low end of the band, so lookups derate to 80 %.
const DERATING: Scalar = 0.8;

/// Static standard-waveguide lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWaveguide;

impl StandardWaveguide {
    /// Finds the smallest standard waveguide whose recommended band covers
    /// the 80 %-derated operating frequency. Returns `None` when the derated
    /// frequency falls outside every tabulated band.
    #[must_use]
    pub fn find_waveguide(frequency: Scalar, unit: FrequencyUnit) -> Option<&'static str> {
        let f_ghz = convert_frequency(frequency, unit, FrequencyUnit::GHz);
        let derated = f_ghz * DERATING;
        WAVEGUIDE_BANDS
            .iter()
            .rev()
            .find(|band| derated >= band.f_low_ghz && derated <= band.f_high_ghz)
            .map(|band| band.name)
    }

    /// Returns `[a, b, wall_thickness]` for a named waveguide, converted from
    /// the table's inch entries to `unit`.
    #[must_use]
    pub fn get_waveguide_dimensions(name: &str, unit: LengthUnit) -> Option<[Scalar; 3]> {
        WAVEGUIDE_BANDS
            .iter()
            .find(|band| band.name.eq_ignore_ascii_case(name))
            .map(|band| {
                band.dims_in
                    .map(|d| convert_length(d, LengthUnit::In, unit))
            })
    }
}
