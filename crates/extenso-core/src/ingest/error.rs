//! Error types for datalogger ingest

use thiserror::Error;

/// Errors that can occur while reading a datalogger feed
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },
}
