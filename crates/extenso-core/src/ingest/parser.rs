//! Datalogger row parser
//!
//! Each row is `<YY/MM/DD> <HH:MM>,<temp>,<battery>,<sig1>,<sig2>,<sig3>`
//! with no header line.

use chrono::NaiveDate;

use super::IngestError;
use crate::reading::RawReading;

/// Comma-separated fields per row
const FIELD_COUNT: usize = 6;

/// Date layout the datalogger writes
const LOGGER_DATE_FORMAT: &str = "%y/%m/%d";

/// Date layout the dashboard displays
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse one datalogger row into a reading.
///
/// A wrong field count or an unparsable numeric field rejects the whole
/// batch; valid and garbage rows never mix in one displayed table.
pub(super) fn parse_row(line: &str, line_no: usize) -> Result<RawReading, IngestError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(IngestError::MalformedRow {
            line: line_no,
            message: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let (date_raw, time) = fields[0].split_once(' ').ok_or_else(|| IngestError::MalformedRow {
        line: line_no,
        message: "missing space between date and time".to_string(),
    })?;

    Ok(RawReading {
        date: normalize_date(date_raw, line_no),
        time: time.trim().to_string(),
        temperature_c: parse_number(fields[1], "temperature", line_no)?,
        battery_v: parse_number(fields[2], "battery voltage", line_no)?,
        signals: [
            parse_number(fields[3], "signal 1", line_no)?,
            parse_number(fields[4], "signal 2", line_no)?,
            parse_number(fields[5], "signal 3", line_no)?,
        ],
    })
}

/// Convert the logger's `YY/MM/DD` date to display form `DD/MM/YYYY`.
///
/// A date that does not parse is kept verbatim: the row still calibrates,
/// it just drops out of time-based charting and provenance.
fn normalize_date(raw: &str, line_no: usize) -> String {
    match NaiveDate::parse_from_str(raw, LOGGER_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(e) => {
            tracing::warn!("line {line_no}: unparsable date '{raw}' kept verbatim: {e}");
            raw.to_string()
        }
    }
}

fn parse_number(field: &str, name: &str, line_no: usize) -> Result<f64, IngestError> {
    field.parse().map_err(|_| IngestError::MalformedRow {
        line: line_no,
        message: format!("invalid {name} value '{field}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_row() {
        let reading = parse_row("25/07/14 06:00,27.5,13.21,0.073,0.0349,0.1787", 1).unwrap();
        assert_eq!(reading.date, "14/07/2025");
        assert_eq!(reading.time, "06:00");
        assert_eq!(reading.temperature_c, 27.5);
        assert_eq!(reading.battery_v, 13.21);
        assert_eq!(reading.signals, [0.073, 0.0349, 0.1787]);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_row("25/07/14 06:00,27.5,13.21,0.073", 7).unwrap_err();
        match err {
            IngestError::MalformedRow { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_number_rejects_row() {
        let result = parse_row("25/07/14 06:00,27.5,13.21,n/a,0.0349,0.1787", 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_date_kept_verbatim() {
        let reading = parse_row("14-07 06:00,27.5,13.21,0.073,0.0349,0.1787", 1).unwrap();
        assert_eq!(reading.date, "14-07");
        assert!(reading.timestamp().is_none());
    }
}
