//! # Validation Module
//!
//! Input validation utilities for the reservation system.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompt                                              │
//! │  ├── parse_menu_number (digits only, 0..=10000)                        │
//! │  └── Empty passenger name / booking ID rejected before engine call     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (Train::new, Ticket::new)                       │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Booking engine                                               │
//! │  └── Rollback if ticket construction fails after seat allocation       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rail_core::validation::{parse_menu_number, validate_passenger_name};
//!
//! assert!(validate_passenger_name("Asha").is_ok());
//! assert_eq!(parse_menu_number("1001").unwrap(), 1001);
//! ```

use crate::error::ValidationError;
use crate::types::{SeatNumber, TrainId};
use crate::MAX_MENU_NUMBER;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Names are stored as single comma-separated fields.
fn require_name(field: &str, value: &str) -> ValidationResult<()> {
    require_text(field, value)?;
    if value.contains([',', '\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain commas or line breaks".to_string(),
        });
    }
    Ok(())
}

/// Validates a train name (not blank, no commas).
pub fn validate_train_name(name: &str) -> ValidationResult<()> {
    require_name("Train name", name)
}

/// Validates a passenger name (not blank, no commas).
///
/// ## Example
/// ```rust
/// use rail_core::validation::validate_passenger_name;
///
/// assert!(validate_passenger_name("Ravi Kumar").is_ok());
/// assert!(validate_passenger_name("").is_err());
/// assert!(validate_passenger_name("   ").is_err());
/// assert!(validate_passenger_name("Kumar, Ravi").is_err());
/// ```
pub fn validate_passenger_name(name: &str) -> ValidationResult<()> {
    require_name("Passenger name", name)
}

/// Validates a booking ID (must not be blank).
pub fn validate_booking_id(booking_id: &str) -> ValidationResult<()> {
    require_text("Booking ID", booking_id)
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_positive(field: &str, value: u32) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a train ID (must be > 0).
pub fn validate_train_id(id: TrainId) -> ValidationResult<()> {
    require_positive("Train ID", id)
}

/// Validates a seat count (must be > 0).
pub fn validate_total_seats(total: u32) -> ValidationResult<()> {
    require_positive("Number of seats", total)
}

/// Validates a seat number (must be > 0).
///
/// The upper bound depends on the train and is checked by the seat map.
pub fn validate_seat_number(seat: SeatNumber) -> ValidationResult<()> {
    require_positive("Seat number", seat)
}

/// Narrows a signed value read from outside (CSV, prompt) into a positive `u32`.
///
/// ## Example
/// ```rust
/// use rail_core::validation::positive_u32;
///
/// assert_eq!(positive_u32("Train ID", 1001).unwrap(), 1001);
/// assert!(positive_u32("Train ID", 0).is_err());
/// assert!(positive_u32("Train ID", -4).is_err());
/// ```
pub fn positive_u32(field: &str, value: i64) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Prompt Validators
// =============================================================================

/// Parses a numeric answer typed at a menu prompt.
///
/// ## Rules
/// - Must not be empty
/// - ASCII digits only (no sign, no whitespace inside)
/// - Must be within `0..=MAX_MENU_NUMBER` (10000)
///
/// ```text
/// "3"      → Ok(3)
/// ""       → Required
/// "12a"    → InvalidFormat
/// "20000"  → OutOfRange
/// ```
pub fn parse_menu_number(input: &str) -> ValidationResult<u32> {
    let field = "input";
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "contains non-numeric characters".to_string(),
        });
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::from(MAX_MENU_NUMBER),
    };

    // All digits, so the only parse failure left is overflow.
    let value: u64 = input.parse().map_err(|_| out_of_range())?;
    if value > u64::from(MAX_MENU_NUMBER) {
        return Err(out_of_range());
    }

    Ok(value as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================
