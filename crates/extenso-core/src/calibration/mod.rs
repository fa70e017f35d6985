//! Calibration pipeline
//!
//! Converts raw signal voltages into displacement and microstrain against
//! the commissioning baseline. Each channel is evaluated under all three
//! certificate curves independently; the three drift values are averaged
//! and normalized to the 700 mm gauge length.

mod curves;
mod reference;

pub use curves::{CalibrationCurve, COEFFICIENT_COUNT, CURVE_COUNT};
pub use reference::ReferenceRow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::reading::{parse_timestamp, ChannelId, RawReading, ReadingOrigin, CHANNEL_COUNT};

/// Full-scale transducer excitation voltage
pub const FULL_SCALE_VOLTAGE: f64 = 5.0;

/// Gauge length the strain figures are normalized to, millimetres
pub const GAUGE_LENGTH_MM: f64 = 700.0;

/// Millionths per unit strain
const MICROSTRAIN_PER_STRAIN: f64 = 1_000_000.0;

/// Calibrated outputs for one channel of one reading.
///
/// Every intermediate column is kept: the dashboard's audit table shows
/// the full derivation, not just the final microstrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCalibration {
    /// Raw signal, volts
    pub signal_v: f64,

    /// Signal as a fraction of the 5 V full-scale input
    pub op_ratio: f64,

    /// Displacement under each certificate curve, mm
    pub displacement_mm: [f64; CURVE_COUNT],

    /// Drift since the reference under each certificate curve, mm
    pub move_from_start_mm: [f64; CURVE_COUNT],

    /// Mean of the three drift values, mm
    pub mean_move_mm: f64,

    /// Strain over the 700 mm gauge length, in millionths
    pub microstrain: f64,
}

/// One calibrated reading: raw observables plus every derived column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibratedReading {
    /// Whether this row is the commissioning reference or a live reading
    pub origin: ReadingOrigin,

    /// Calendar date, `DD/MM/YYYY`
    pub date: String,

    /// Time of day, `HH:MM`
    pub time: String,

    /// Ambient temperature in °C
    pub temperature_c: f64,

    /// Logger battery voltage
    pub battery_v: f64,

    /// Per-channel calibration outputs, Ext1 through Ext3
    pub channels: [ChannelCalibration; CHANNEL_COUNT],
}

impl CalibratedReading {
    /// Combined date+time instant, if both fields parse
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date, &self.time)
    }

    /// Calibration outputs for one channel
    pub fn channel(&self, id: ChannelId) -> &ChannelCalibration {
        &self.channels[id.index()]
    }
}

/// Applies the certificate curves and commissioning baseline to raw
/// reading batches.
///
/// Curves and reference are configuration, supplied at construction; a
/// recalibration never touches this module.
#[derive(Debug, Clone)]
pub struct CalibrationEngine {
    curves: [CalibrationCurve; CURVE_COUNT],
    reference: ReferenceRow,
}

impl CalibrationEngine {
    /// Create an engine from explicit curves and a commissioning reference
    pub fn new(curves: [CalibrationCurve; CURVE_COUNT], reference: ReferenceRow) -> Self {
        Self { curves, reference }
    }

    /// The commissioning reference in use
    pub fn reference(&self) -> &ReferenceRow {
        &self.reference
    }

    /// Calibrate a batch of raw readings.
    ///
    /// Returns the reference row at position 0 followed by one calibrated
    /// row per reading, so a batch of N readings yields N + 1 rows. The
    /// reference row's drift fields are zero by construction. Non-finite
    /// signal values propagate through to the derived columns; they are
    /// never replaced with defaults.
    pub fn calibrate(&self, readings: &[RawReading]) -> Vec<CalibratedReading> {
        let mut table = Vec::with_capacity(readings.len() + 1);
        table.push(self.reference_reading());
        for reading in readings {
            table.push(self.calibrate_reading(reading));
        }
        table
    }

    fn calibrate_reading(&self, reading: &RawReading) -> CalibratedReading {
        CalibratedReading {
            origin: ReadingOrigin::Live,
            date: reading.date.clone(),
            time: reading.time.clone(),
            temperature_c: reading.temperature_c,
            battery_v: reading.battery_v,
            channels: std::array::from_fn(|ch| self.calibrate_channel(ch, reading.signals[ch])),
        }
    }

    fn calibrate_channel(&self, channel: usize, signal_v: f64) -> ChannelCalibration {
        let op_ratio = signal_v / FULL_SCALE_VOLTAGE;
        let displacement_mm: [f64; CURVE_COUNT] =
            std::array::from_fn(|k| self.curves[k].evaluate(op_ratio));
        let move_from_start_mm: [f64; CURVE_COUNT] =
            std::array::from_fn(|k| displacement_mm[k] - self.reference.displacements_mm[channel][k]);
        let mean_move_mm = move_from_start_mm.iter().sum::<f64>() / CURVE_COUNT as f64;
        let microstrain = mean_move_mm / GAUGE_LENGTH_MM * MICROSTRAIN_PER_STRAIN;

        ChannelCalibration {
            signal_v,
            op_ratio,
            displacement_mm,
            move_from_start_mm,
            mean_move_mm,
            microstrain,
        }
    }

    /// The zeroed calibrated row for the reference itself.
    ///
    /// Its displacements are the stored certificate outputs, not a fresh
    /// evaluation of its signals.
    fn reference_reading(&self) -> CalibratedReading {
        CalibratedReading {
            origin: ReadingOrigin::Reference,
            date: self.reference.date.clone(),
            time: self.reference.time.clone(),
            temperature_c: self.reference.temperature_c,
            battery_v: self.reference.battery_v,
            channels: std::array::from_fn(|ch| ChannelCalibration {
                signal_v: self.reference.signals[ch],
                op_ratio: self.reference.signals[ch] / FULL_SCALE_VOLTAGE,
                displacement_mm: self.reference.displacements_mm[ch],
                move_from_start_mm: [0.0; CURVE_COUNT],
                mean_move_mm: 0.0,
                microstrain: 0.0,
            }),
        }
    }
}

impl Default for CalibrationEngine {
    fn default() -> Self {
        Self::new(CalibrationCurve::CERTIFICATES, ReferenceRow::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_row_is_zeroed() {
        let engine = CalibrationEngine::default();
        let table = engine.calibrate(&[]);

        assert_eq!(table.len(), 1);
        let reference = &table[0];
        assert_eq!(reference.origin, ReadingOrigin::Reference);
        for channel in &reference.channels {
            assert_eq!(channel.move_from_start_mm, [0.0; CURVE_COUNT]);
            assert_eq!(channel.mean_move_mm, 0.0);
            assert_eq!(channel.microstrain, 0.0);
        }
    }

    #[test]
    fn test_microstrain_matches_gauge_length_scale() {
        let engine = CalibrationEngine::default();
        let reading = RawReading {
            date: "10/01/2025".to_string(),
            time: "06:00".to_string(),
            temperature_c: 25.0,
            battery_v: 13.2,
            signals: [0.085, 0.04, 0.18],
        };
        let table = engine.calibrate(&[reading]);

        for channel in &table[1].channels {
            let expected = channel.mean_move_mm / GAUGE_LENGTH_MM * 1_000_000.0;
            assert_eq!(channel.microstrain, expected);
        }
    }
}
