//! # App Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal App                       │
//! │                                                                         │
//! │  Menu choice                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ──── StoreError::FileIo ─────────┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  Core Error? ───── CoreError::TrainNotFound ── AppError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu prints "Error: <message>" and shows the menu again.              │
//! │  Only terminal I/O failures (io::Error) leave the loop.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::{fmt, io};

use rail_core::{CoreError, ValidationError};
use rail_store::StoreError;

/// Error returned from menu commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable code, used in logs
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Train or ticket does not exist
    NotFound,

    /// User input or stored field failed validation
    ValidationError,

    /// No seats left on the train
    SoldOut,

    /// File could not be read or written
    FileIo,

    /// Seat and ticket state disagree
    Inconsistent,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::SoldOut => "SOLD_OUT",
            ErrorCode::FileIo => "FILE_IO",
            ErrorCode::Inconsistent => "INCONSISTENT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidInput(_) => ErrorCode::ValidationError,
            CoreError::TrainNotFound(_) | CoreError::TicketNotFound(_) => ErrorCode::NotFound,
            CoreError::SeatOutOfRange { .. } | CoreError::SeatNotBooked { .. } => {
                ErrorCode::Inconsistent
            }
            CoreError::NoSeatsAvailable(_) => ErrorCode::SoldOut,
            CoreError::DuplicateBooking(_) | CoreError::BookingIdExhausted { .. } => {
                tracing::error!(error = %err, "Booking could not be recorded");
                ErrorCode::Internal
            }
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts store errors to app errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::new(ErrorCode::FileIo, err.to_string())
    }
}

/// Terminal read/write failures.
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::new(ErrorCode::Internal, format!("Terminal I/O failed: {err}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for menu commands.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_core_error_codes() {
        let err = AppError::from(CoreError::TrainNotFound(77));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Train with ID 77 not found!");

        let err = AppError::from(CoreError::NoSeatsAvailable(5));
        assert_eq!(err.code, ErrorCode::SoldOut);

        let err = AppError::from(CoreError::SeatNotBooked {
            train_id: 1,
            seat: 2,
        });
        assert_eq!(err.code, ErrorCode::Inconsistent);
    }

    #[test]
    fn test_validation_error_code() {
        let err = AppError::from(ValidationError::Required {
            field: "Passenger name".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Passenger name cannot be empty");
    }

    #[test]
    fn test_store_error_code() {
        let err = AppError::from(StoreError::io(
            Path::new("tickets.csv"),
            "write",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        ));
        assert_eq!(err.code, ErrorCode::FileIo);
        assert_eq!(err.code.as_str(), "FILE_IO");
        assert!(err.message.contains("tickets.csv"));
    }
}
