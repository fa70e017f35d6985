//! Chart series preparation
//!
//! Long-format data behind the dashboard's strain scatter and temperature
//! line. Rendering itself is the presentation layer's job.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calibration::CalibratedReading;
use crate::reading::{ChannelId, ReadingOrigin, CHANNEL_COUNT};

/// One point of the strain scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainPoint {
    /// Instant of the reading
    pub timestamp: NaiveDateTime,

    /// Source channel
    pub channel: ChannelId,

    /// Microstrain over the 700 mm gauge length
    pub microstrain: f64,
}

/// One point of the temperature line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    /// Instant of the reading
    pub timestamp: NaiveDateTime,

    /// Ambient temperature in °C
    pub temperature_c: f64,
}

/// Melt a calibrated table into per-channel strain points.
///
/// Rows without a parsable timestamp and non-finite strain values are
/// dropped. The reference row is kept and anchors every channel's series
/// at zero.
pub fn strain_series(readings: &[CalibratedReading]) -> Vec<StrainPoint> {
    let mut points = Vec::with_capacity(readings.len() * CHANNEL_COUNT);
    for reading in readings {
        let timestamp = match reading.timestamp() {
            Some(ts) => ts,
            None => continue,
        };
        for channel in ChannelId::ALL {
            let microstrain = reading.channel(channel).microstrain;
            if microstrain.is_finite() {
                points.push(StrainPoint {
                    timestamp,
                    channel,
                    microstrain,
                });
            }
        }
    }
    points
}

/// Temperature line over the live readings. The reference row is not part
/// of the monitored period and is skipped.
pub fn temperature_series(readings: &[CalibratedReading]) -> Vec<TemperaturePoint> {
    readings
        .iter()
        .filter(|reading| reading.origin == ReadingOrigin::Live)
        .filter_map(|reading| {
            reading.timestamp().map(|timestamp| TemperaturePoint {
                timestamp,
                temperature_c: reading.temperature_c,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationEngine;
    use crate::reading::RawReading;

    fn reading(date: &str, time: &str, signals: [f64; 3]) -> RawReading {
        RawReading {
            date: date.to_string(),
            time: time.to_string(),
            temperature_c: 24.0,
            battery_v: 13.1,
            signals,
        }
    }

    #[test]
    fn test_strain_series_includes_reference() {
        let engine = CalibrationEngine::default();
        let table = engine.calibrate(&[reading("10/01/2025", "06:00", [0.08, 0.04, 0.18])]);
        let points = strain_series(&table);

        // 2 rows x 3 channels
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].microstrain, 0.0);
    }

    #[test]
    fn test_unparsable_timestamp_dropped() {
        let engine = CalibrationEngine::default();
        let table = engine.calibrate(&[reading("bad-date", "06:00", [0.08, 0.04, 0.18])]);
        let points = strain_series(&table);

        // Only the reference row survives the timestamp filter
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_temperature_series_skips_reference() {
        let engine = CalibrationEngine::default();
        let table = engine.calibrate(&[
            reading("10/01/2025", "06:00", [0.08, 0.04, 0.18]),
            reading("10/01/2025", "07:00", [0.08, 0.04, 0.18]),
        ]);
        let line = temperature_series(&table);

        assert_eq!(line.len(), 2);
        assert!(line.iter().all(|p| p.temperature_c == 24.0));
    }
}
