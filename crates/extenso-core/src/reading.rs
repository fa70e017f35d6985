//! Sensor reading data contract
//!
//! Types shared between the ingest, calibration and summary stages.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of extensometer channels on the array
pub const CHANNEL_COUNT: usize = 3;

/// Timestamp layout used across the dashboard, e.g. `09/01/2025 05:00`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// One raw datalogger record: ambient observables plus the three
/// transducer output voltages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    /// Calendar date, `DD/MM/YYYY` after ingest normalization
    pub date: String,

    /// Time of day, `HH:MM`
    pub time: String,

    /// Ambient temperature in °C
    pub temperature_c: f64,

    /// Logger battery voltage
    pub battery_v: f64,

    /// Raw transducer output per channel, volts
    pub signals: [f64; CHANNEL_COUNT],
}

impl RawReading {
    /// Combined date+time instant, if both fields parse.
    ///
    /// Rows the datalogger stamped with a malformed date or time return
    /// `None`; they still calibrate but are excluded from time-based
    /// charting and provenance.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date, &self.time)
    }
}

/// Parse a `DD/MM/YYYY` date and `HH:MM` time into one instant
pub(crate) fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), TIMESTAMP_FORMAT).ok()
}

/// Identity of one extensometer channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelId {
    /// Extensometer 1
    Ext1,
    /// Extensometer 2
    Ext2,
    /// Extensometer 3
    Ext3,
}

impl ChannelId {
    /// All channels in display order
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [ChannelId::Ext1, ChannelId::Ext2, ChannelId::Ext3];

    /// Zero-based position in the signal array
    pub fn index(&self) -> usize {
        match self {
            ChannelId::Ext1 => 0,
            ChannelId::Ext2 => 1,
            ChannelId::Ext3 => 2,
        }
    }

    /// Channel for a zero-based signal index
    pub fn from_index(index: usize) -> Option<ChannelId> {
        ChannelId::ALL.get(index).copied()
    }

    /// Display label, e.g. `Ext1`
    pub fn label(&self) -> &'static str {
        match self {
            ChannelId::Ext1 => "Ext1",
            ChannelId::Ext2 => "Ext2",
            ChannelId::Ext3 => "Ext3",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a calibrated row came from the commissioning reference or the
/// live feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingOrigin {
    /// The fixed commissioning baseline prepended to every batch
    Reference,
    /// A reading pulled from the datalogger
    Live,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_index_round_trip() {
        for channel in ChannelId::ALL {
            assert_eq!(ChannelId::from_index(channel.index()), Some(channel));
        }
        assert_eq!(ChannelId::from_index(3), None);
    }

    #[test]
    fn test_timestamp_parses_display_format() {
        let reading = RawReading {
            date: "09/01/2025".to_string(),
            time: "05:00".to_string(),
            temperature_c: 27.0,
            battery_v: 13.2711,
            signals: [0.073, 0.0349, 0.1787],
        };
        let ts = reading.timestamp().expect("timestamp should parse");
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2025-01-09 05:00");
    }

    #[test]
    fn test_bad_timestamp_is_none() {
        let reading = RawReading {
            date: "9 Jan 2025".to_string(),
            time: "05:00".to_string(),
            temperature_c: 27.0,
            battery_v: 13.0,
            signals: [0.0; CHANNEL_COUNT],
        };
        assert!(reading.timestamp().is_none());
    }
}
