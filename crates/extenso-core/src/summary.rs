//! Strain summary extraction
//!
//! Scans a calibrated table for the latest reading and the all-time
//! compressive/tensile extremes shown on the dashboard gauges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calibration::CalibratedReading;
use crate::reading::ChannelId;

/// Errors from summary extraction
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("No calibrated readings to summarize")]
    EmptySeries,
}

/// An extreme microstrain value with its source reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainExtreme {
    /// Microstrain at the extreme
    pub microstrain: f64,

    /// Channel the value came from
    pub channel: ChannelId,

    /// Date of the source reading, `DD/MM/YYYY`
    pub date: String,

    /// Time of the source reading, `HH:MM`
    pub time: String,
}

impl StrainExtreme {
    /// Human-readable provenance, e.g. `09/01/2025 at 05:00 (from Ext1)`
    pub fn provenance(&self) -> String {
        format!("{} at {} (from {})", self.date, self.time, self.channel)
    }
}

/// Summary figures over a full calibrated table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// The most recently appended reading (last row by table position)
    pub latest: CalibratedReading,

    /// Most negative microstrain on record
    pub max_compressive: StrainExtreme,

    /// Most positive microstrain on record
    pub max_tensile: StrainExtreme,
}

/// Extract summary statistics from a calibrated table.
///
/// `latest` is the last row by table position; the datalogger appends in
/// time order, so no sort is applied. Extreme candidates are rows with a
/// parsable timestamp and finite microstrain, the same rows the chart
/// series keeps. Ties go to the earliest reading, lowest channel.
pub fn summarize(readings: &[CalibratedReading]) -> Result<SummaryStats, SummaryError> {
    let latest = readings.last().cloned().ok_or(SummaryError::EmptySeries)?;

    let mut min: Option<StrainExtreme> = None;
    let mut max: Option<StrainExtreme> = None;

    for reading in readings {
        if reading.timestamp().is_none() {
            continue;
        }
        for channel in ChannelId::ALL {
            let value = reading.channel(channel).microstrain;
            if !value.is_finite() {
                continue;
            }
            if min.as_ref().map_or(true, |best| value < best.microstrain) {
                min = Some(extreme_at(reading, channel, value));
            }
            if max.as_ref().map_or(true, |best| value > best.microstrain) {
                max = Some(extreme_at(reading, channel, value));
            }
        }
    }

    match (min, max) {
        (Some(max_compressive), Some(max_tensile)) => Ok(SummaryStats {
            latest,
            max_compressive,
            max_tensile,
        }),
        // Every row was excluded, so there is nothing to put on the gauges
        _ => Err(SummaryError::EmptySeries),
    }
}

fn extreme_at(reading: &CalibratedReading, channel: ChannelId, microstrain: f64) -> StrainExtreme {
    StrainExtreme {
        microstrain,
        channel,
        date: reading.date.clone(),
        time: reading.time.clone(),
    }
}
