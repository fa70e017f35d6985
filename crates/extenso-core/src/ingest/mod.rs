//! Datalogger ingest
//!
//! Reads the instrument's CSV feed into raw reading batches. How the file
//! lands on disk (download, share mount, retry policy) is the fetch
//! collaborator's concern; this module owns the row format.

mod error;
mod parser;

pub use error::IngestError;

use std::path::Path;

use crate::reading::RawReading;

/// A parsed batch of datalogger rows, in file order
#[derive(Debug, Clone, Default)]
pub struct ReadingLog {
    /// Readings in file order
    pub readings: Vec<RawReading>,
}

impl ReadingLog {
    /// Parse a datalogger file.
    ///
    /// Field loggers occasionally emit non-UTF-8 bytes; those files are
    /// re-read with lossy conversion rather than rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IngestError> {
        let content = read_log_file(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse datalogger rows from a string
    pub fn from_str(content: &str) -> Result<Self, IngestError> {
        let mut readings = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            readings.push(parser::parse_row(line, idx + 1)?);
        }
        Ok(Self { readings })
    }

    /// Number of rows in the batch
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the batch holds no rows
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

fn read_log_file(path: &Path) -> Result<String, IngestError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            let bytes = std::fs::read(path).map_err(|e| IngestError::IoError(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) => Err(IngestError::IoError(e.to_string())),
    }
}
