//! # Error Types
//!
//! Domain-specific error types for rail-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rail-core errors (this file)                                          │
//! │  ├── CoreError        - Booking / seat / lookup failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rail-store errors (separate crate)                                    │
//! │  └── StoreError       - CSV file failures                              │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── AppError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError → stdout   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (train ID, seat, booking ID)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::{SeatNumber, TrainId};

// =============================================================================
// Core Error
// =============================================================================

/// Core booking errors.
///
/// Expected conditions (sold out, unknown train, unknown ticket) are ordinary
/// variants here. Callers decide how to report them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Train cannot be found in the registry.
    #[error("Train with ID {0} not found!")]
    TrainNotFound(TrainId),

    /// Seat number outside `1..=total_seats` for the train.
    #[error("Seat number {seat} on train {train_id} is invalid!")]
    SeatOutOfRange { train_id: TrainId, seat: SeatNumber },

    /// Every seat on the train is taken.
    ///
    /// ## When This Occurs
    /// - Booking on a train whose available count is 0
    /// - Reconciling a trains.csv row that declares more booked seats
    ///   than the train has
    #[error("No seats available on train {0}!")]
    NoSeatsAvailable(TrainId),

    /// No ticket with this booking ID exists in the ledger.
    #[error("Ticket with booking ID {0} not found!")]
    TicketNotFound(String),

    /// A ticket with this booking ID is already in the ledger.
    #[error("Booking ID {0} already exists")]
    DuplicateBooking(String),

    /// Releasing a seat that was never taken.
    ///
    /// ## When This Occurs
    /// Only when ledger and seat state disagree: a ticket exists but its
    /// seat is already marked available. The ticket is left untouched.
    #[error("Seat {seat} on train {train_id} is not booked")]
    SeatNotBooked { train_id: TrainId, seat: SeatNumber },

    /// Booking ID generation kept colliding with existing tickets.
    #[error("Could not generate a unique booking ID after {attempts} attempts")]
    BookingIdExhausted { attempts: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any seat or ticket state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric where a number is expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::TrainNotFound(1001).to_string(),
            "Train with ID 1001 not found!"
        );
        assert_eq!(
            CoreError::SeatOutOfRange {
                train_id: 1001,
                seat: 101
            }
            .to_string(),
            "Seat number 101 on train 1001 is invalid!"
        );
        assert_eq!(
            CoreError::NoSeatsAvailable(7).to_string(),
            "No seats available on train 7!"
        );
        assert_eq!(
            CoreError::TicketNotFound("BKXXXXXXXX".to_string()).to_string(),
            "Ticket with booking ID BKXXXXXXXX not found!"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Passenger name".to_string(),
        };
        assert_eq!(err.to_string(), "Passenger name cannot be empty");

        let err = ValidationError::MustBePositive {
            field: "Train ID".to_string(),
        };
        assert_eq!(err.to_string(), "Train ID must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "Booking ID".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
        assert_eq!(core_err.to_string(), "Invalid input: Booking ID cannot be empty");
    }
}
