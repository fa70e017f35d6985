//! Dashboard gauge thresholds
//!
//! Band configuration for the compressive and tensile strain gauges.

use serde::{Deserialize, Serialize};

/// Zone classification for a gauge value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GaugeZone {
    /// Within normal operating range
    Normal,
    /// Elevated, worth watching
    Warning,
    /// Past the danger band
    Danger,
}

/// Configuration for a single strain gauge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Display title
    pub title: String,

    /// Unit label
    pub units: String,

    /// Minimum display value
    pub lo: f64,

    /// Maximum display value
    pub hi: f64,

    /// High warning threshold
    pub high_warning: f64,

    /// High danger threshold
    pub high_danger: f64,

    /// Red-line marker drawn on the dial
    pub threshold: f64,

    /// Decimal digits for display
    pub digits: u8,
}

impl GaugeConfig {
    /// Gauge for the compressive extreme.
    ///
    /// Compression is reported as a negative microstrain; the dial shows
    /// its magnitude, so feed it `abs(max_compressive)`.
    pub fn compression() -> Self {
        Self {
            title: "Max Compressive Strain".to_string(),
            units: "µε".to_string(),
            lo: 0.0,
            hi: 5000.0,
            high_warning: 2000.0,
            high_danger: 3500.0,
            threshold: 3500.0,
            digits: 2,
        }
    }

    /// Gauge for the tensile extreme
    pub fn tension() -> Self {
        Self {
            title: "Max Tensile Strain".to_string(),
            units: "µε".to_string(),
            lo: 0.0,
            hi: 200.0,
            high_warning: 50.0,
            high_danger: 100.0,
            threshold: 100.0,
            digits: 2,
        }
    }

    /// Classify a value against the gauge bands
    pub fn zone(&self, value: f64) -> GaugeZone {
        if value >= self.high_danger {
            GaugeZone::Danger
        } else if value >= self.high_warning {
            GaugeZone::Warning
        } else {
            GaugeZone::Normal
        }
    }

    /// Whether a value is past the red-line marker
    pub fn over_threshold(&self, value: f64) -> bool {
        value >= self.threshold
    }
}
