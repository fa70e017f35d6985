//! Demo Mode - Simulated extensometer feed for testing
//!
//! Generates realistic datalogger readings for dashboard work without a
//! live instrument: slow tensile drift on each channel, a daily thermal
//! cycle, battery sag and per-channel sensor noise.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::reading::{RawReading, CHANNEL_COUNT, TIMESTAMP_FORMAT};

/// Minutes between simulated readings
const INTERVAL_MIN: i64 = 60;

/// Simulated extensometer array feed
pub struct DemoFeed {
    rng: StdRng,
    /// Instant of the next generated reading
    cursor: NaiveDateTime,
    /// Readings generated so far
    emitted: u32,
    /// Baseline signal per channel, volts
    base_signals: [f64; CHANNEL_COUNT],
    /// Signal drift per day, volts
    drift_per_day: [f64; CHANNEL_COUNT],
}

impl DemoFeed {
    /// Create a seeded feed; the same seed replays the same readings
    pub fn new(seed: u64) -> Self {
        let start = NaiveDate::from_ymd_opt(2025, 1, 10)
            .and_then(|d| d.and_hms_opt(6, 0, 0))
            .unwrap_or_default();

        Self {
            rng: StdRng::seed_from_u64(seed),
            cursor: start,
            emitted: 0,
            base_signals: [0.073, 0.0349, 0.1787],
            drift_per_day: [0.0032, 0.0041, 0.0025],
        }
    }

    /// Generate the next `count` readings
    pub fn generate(&mut self, count: usize) -> Vec<RawReading> {
        (0..count).map(|_| self.next_reading()).collect()
    }

    fn next_reading(&mut self) -> RawReading {
        let days = f64::from(self.emitted) * INTERVAL_MIN as f64 / (24.0 * 60.0);
        let hour_of_day =
            self.cursor.signed_duration_since(self.cursor.date().and_hms_opt(0, 0, 0).unwrap_or_default());
        let day_fraction = hour_of_day.num_minutes() as f64 / (24.0 * 60.0);

        // Daily thermal cycle peaking around 14:00
        let temperature_c = 25.0
            + 7.0 * (std::f64::consts::TAU * (day_fraction - 0.333)).sin()
            + self.rng.gen_range(-0.4..0.4);

        // Battery sags slowly between site visits
        let battery_v = 13.3 - 0.002 * days + self.rng.gen_range(-0.01..0.01);

        let mut signals = [0.0; CHANNEL_COUNT];
        for (ch, signal) in signals.iter_mut().enumerate() {
            *signal = self.base_signals[ch]
                + self.drift_per_day[ch] * days
                + self.rng.gen_range(-0.0005..0.0005);
        }

        let reading = RawReading {
            date: self.cursor.format("%d/%m/%Y").to_string(),
            time: self.cursor.format("%H:%M").to_string(),
            temperature_c: round_to(temperature_c, 1),
            battery_v: round_to(battery_v, 4),
            signals: signals.map(|s| round_to(s, 4)),
        };

        self.cursor += Duration::minutes(INTERVAL_MIN);
        self.emitted += 1;
        reading
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Render readings in the datalogger's wire format, one row per line.
///
/// Useful for exercising the full pipeline, ingest included. Readings
/// without a parsable timestamp are skipped; the wire format has no way
/// to carry them.
pub fn wire_format(readings: &[RawReading]) -> String {
    let mut out = String::new();
    for reading in readings {
        let timestamp = match NaiveDateTime::parse_from_str(
            &format!("{} {}", reading.date, reading.time),
            TIMESTAMP_FORMAT,
        ) {
            Ok(ts) => ts,
            Err(_) => continue,
        };
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            timestamp.format("%y/%m/%d %H:%M"),
            reading.temperature_c,
            reading.battery_v,
            reading.signals[0],
            reading.signals[1],
            reading.signals[2],
        ));
    }
    out
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
