//! # Store Error Types
//!
//! Error types for CSV persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error (open / read / write)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::FileIo ← Adds path and operation                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (terminal app) ← Printed, menu keeps running                 │
//! │                                                                         │
//! │  One bad CSV row                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RowError ← Logged and counted in LoadReport, never propagated         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use rail_core::{CoreError, SeatNumber, TrainId};
use thiserror::Error;

/// File-level persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A CSV file could not be opened, read, or written.
    ///
    /// ## When This Occurs
    /// - File does not exist (load)
    /// - Permission denied
    /// - Disk full or stream failure mid-write (the written prefix stays)
    #[error("Failed to {operation} file {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates a FileIo error for `operation` on `path`.
    pub fn io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        StoreError::FileIo {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    /// True when the file simply isn't there.
    pub fn is_missing_file(&self) -> bool {
        match self {
            StoreError::FileIo { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            StoreError::FileIo { path, .. } => path,
        }
    }
}

/// Why one CSV row was skipped during a load.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' is not a number: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("field '{field}' is out of range: '{value}'")]
    OutOfRange { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// Values parsed but do not make a valid train.
    #[error("invalid train: {0}")]
    InvalidTrain(CoreError),

    /// Values parsed but do not make a valid ticket.
    #[error("invalid ticket: {0}")]
    InvalidTicket(CoreError),

    #[error("train {0} does not exist")]
    UnknownTrain(TrainId),

    #[error("seat {seat} on train {train_id} is already booked")]
    SeatTaken { train_id: TrainId, seat: SeatNumber },

    #[error("seat {seat} is outside train {train_id}")]
    SeatOutOfRange { train_id: TrainId, seat: SeatNumber },

    #[error("booking ID {0} appears more than once")]
    DuplicateBooking(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_io_message() {
        let err = StoreError::io(
            Path::new("trains.csv"),
            "open",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to open file trains.csv: No such file or directory"
        );
        assert!(err.is_missing_file());
        assert_eq!(err.path(), Path::new("trains.csv"));
    }

    #[test]
    fn test_row_error_messages() {
        let err = RowError::NotNumeric {
            field: "availableSeats",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "field 'availableSeats' is not a number: 'abc'");

        let err = RowError::SeatTaken {
            train_id: 1001,
            seat: 4,
        };
        assert_eq!(err.to_string(), "seat 4 on train 1001 is already booked");
    }
}
