//! Commissioning reference row
//!
//! The fixed baseline reading against which all subsequent drift is
//! measured. Its displacement outputs were recorded against the
//! calibration certificates at install time and are treated as ground
//! truth; they are never recomputed from the stored signals.

use serde::{Deserialize, Serialize};

use super::curves::CURVE_COUNT;
use crate::reading::CHANNEL_COUNT;

/// The commissioning baseline reading.
///
/// Exactly one reference exists per processing run. It occupies position 0
/// of every calibrated table, and its own drift and microstrain are zero
/// by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Commissioning date, `DD/MM/YYYY`
    pub date: String,

    /// Commissioning time, `HH:MM`
    pub time: String,

    /// Temperature at commissioning, °C
    pub temperature_c: f64,

    /// Logger battery voltage at commissioning
    pub battery_v: f64,

    /// Raw signal per channel, volts
    pub signals: [f64; CHANNEL_COUNT],

    /// Stored displacement per channel and certificate curve, mm
    pub displacements_mm: [[f64; CURVE_COUNT]; CHANNEL_COUNT],
}

impl ReferenceRow {
    /// Commissioning reading of the Holfontein array, 09/01/2025 05:00
    pub fn holfontein() -> Self {
        Self {
            date: "09/01/2025".to_string(),
            time: "05:00".to_string(),
            temperature_c: 27.0,
            battery_v: 13.2711,
            signals: [0.073, 0.0349, 0.1787],
            displacements_mm: [
                [0.027181591, -0.14321684, -0.273843431],
                [-0.009454694, -0.220929668, -0.370621559],
                [0.125411409, 0.028515776, -0.067679789],
            ],
        }
    }
}

impl Default for ReferenceRow {
    fn default() -> Self {
        Self::holfontein()
    }
}
