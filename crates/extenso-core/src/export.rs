//! Calibrated table export
//!
//! Writes the full audit table (every raw and derived column) and renders
//! the summary figures for the dashboard process boundary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::calibration::{CalibratedReading, CURVE_COUNT};
use crate::reading::ChannelId;
use crate::summary::SummaryStats;

/// Column headers of the audit table, in write order.
///
/// The presentation layer keys on these names; they are part of the
/// output contract and must not be reworded.
pub fn column_headers() -> Vec<String> {
    let mut headers = vec![
        "Date".to_string(),
        "Time".to_string(),
        "Temperature (°C)".to_string(),
        "Battery Voltage (V)".to_string(),
    ];
    for channel in ChannelId::ALL {
        headers.push(format!("Signal {}", channel.index() + 1));
    }
    for channel in ChannelId::ALL {
        let n = channel.index() + 1;
        headers.push(format!("{channel} - O-p / 5 V i-p"));
        for k in 1..=CURVE_COUNT {
            headers.push(format!("{channel} - Using calibn No. {k} (mm)"));
            headers.push(format!("{channel} - Move from rdgs start {n}-{k}"));
        }
        headers.push(format!("{channel} - Mean of 3 calibn (mm)"));
        headers.push(format!("{channel} - Microstrain on 700mm"));
    }
    headers
}

/// Write the calibrated table as CSV, values at full precision.
pub fn write_csv<P: AsRef<Path>>(path: P, readings: &[CalibratedReading]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", column_headers().join(","))?;
    for reading in readings {
        write_row(&mut writer, reading)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, reading: &CalibratedReading) -> io::Result<()> {
    write!(
        writer,
        "{},{},{},{}",
        reading.date, reading.time, reading.temperature_c, reading.battery_v
    )?;
    for channel in &reading.channels {
        write!(writer, ",{}", channel.signal_v)?;
    }
    for channel in &reading.channels {
        write!(writer, ",{}", channel.op_ratio)?;
        for k in 0..CURVE_COUNT {
            write!(
                writer,
                ",{},{}",
                channel.displacement_mm[k], channel.move_from_start_mm[k]
            )?;
        }
        write!(writer, ",{},{}", channel.mean_move_mm, channel.microstrain)?;
    }
    writeln!(writer)
}

/// Render the summary figures as pretty JSON for the dashboard process
pub fn summary_json(summary: &SummaryStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let headers = column_headers();
        // 4 shared + 3 signals + 3 channels x 9 derived columns
        assert_eq!(headers.len(), 34);
        assert_eq!(headers[4], "Signal 1");
        assert_eq!(headers[7], "Ext1 - O-p / 5 V i-p");
        assert_eq!(headers[9], "Ext1 - Move from rdgs start 1-1");
        assert_eq!(headers[33], "Ext3 - Microstrain on 700mm");
    }
}
