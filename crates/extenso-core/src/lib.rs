//! # Extenso Core Library
//!
//! Core functionality for the Extenso structural monitoring dashboard.

#![warn(missing_docs)]

//!
//! This library provides:
//! - Datalogger feed parsing (extensometer CSV row format)
//! - Polynomial calibration of raw signal voltages to displacement
//! - Baseline ("move from start") drift tracking against a fixed
//!   commissioning reference
//! - Strain summary extraction (latest reading, all-time extremes)
//! - Chart series preparation and gauge threshold bands
//!
//! ## Example
//!
//! ```rust,ignore
//! use extenso_core::prelude::*;
//!
//! // Parse the latest datalogger pull
//! let log = ReadingLog::from_file("holfontein.csv")?;
//!
//! // Calibrate against the commissioning baseline
//! let engine = CalibrationEngine::default();
//! let table = engine.calibrate(&log.readings);
//!
//! // Summary figures for the gauges
//! let stats = summarize(&table)?;
//! println!("{}", stats.max_tensile.provenance());
//! ```

pub mod calibration;
pub mod demo;
pub mod export;
pub mod gauge;
pub mod ingest;
pub mod reading;
pub mod series;
pub mod summary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calibration::{
        CalibratedReading, CalibrationCurve, CalibrationEngine, ChannelCalibration, ReferenceRow,
    };
    pub use crate::gauge::{GaugeConfig, GaugeZone};
    pub use crate::ingest::{IngestError, ReadingLog};
    pub use crate::reading::{ChannelId, RawReading, ReadingOrigin};
    pub use crate::summary::{summarize, StrainExtreme, SummaryError, SummaryStats};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
