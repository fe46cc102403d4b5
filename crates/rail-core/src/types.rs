//! # Domain Types
//!
//! Core domain types used throughout the reservation system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐           ┌──────────────────────┐                │
//! │  │     Train       │           │       Ticket         │                │
//! │  │  ─────────────  │           │  ──────────────────  │                │
//! │  │  id (> 0)       │◄──────────│  train_id            │                │
//! │  │  name           │  seat is  │  seat_number         │                │
//! │  │  seats: SeatMap │  taken    │  booking_id (BK...)  │                │
//! │  └─────────────────┘           │  passenger_name      │                │
//! │                                │  booking_time        │                │
//! │                                └──────────────────────┘                │
//! │                                                                         │
//! │  Read-only views: TrainSummary, SeatAvailability                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cross-Entity Invariant
//! A Ticket existing implies its `(train_id, seat_number)` is marked taken on
//! that Train. Only [`crate::engine::BookingEngine`] and the persistence
//! adapter create or remove tickets, and both keep this invariant.

use chrono::Local;

use crate::error::CoreResult;
use crate::seat_map::SeatMap;
use crate::validation::{
    validate_booking_id, validate_passenger_name, validate_seat_number, validate_total_seats,
    validate_train_id, validate_train_name,
};
use crate::BOOKING_TIME_FORMAT;

/// Unique positive train identifier.
pub type TrainId = u32;

/// 1-based seat number within a train.
pub type SeatNumber = u32;

// =============================================================================
// Train
// =============================================================================

/// A train with a fixed number of seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    id: TrainId,
    name: String,
    seats: SeatMap,
}

impl Train {
    /// Creates a train with every seat available.
    ///
    /// ## Rules
    /// - `id` must be positive
    /// - `name` must not be blank
    /// - `total_seats` must be positive
    pub fn new(id: TrainId, name: impl Into<String>, total_seats: u32) -> CoreResult<Self> {
        let name = name.into();
        validate_train_id(id)?;
        validate_train_name(&name)?;
        validate_total_seats(total_seats)?;

        Ok(Train {
            id,
            name,
            seats: SeatMap::new(total_seats),
        })
    }

    #[inline]
    pub fn id(&self) -> TrainId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn total_seats(&self) -> u32 {
        self.seats.total()
    }

    /// Seats currently available (computed by scanning).
    pub fn available_count(&self) -> u32 {
        self.seats.available_count()
    }

    /// Seats currently taken.
    pub fn booked_count(&self) -> u32 {
        self.seats.booked_count()
    }

    /// Fails with `SeatOutOfRange` when `seat` is not on this train.
    pub fn is_seat_available(&self, seat: SeatNumber) -> CoreResult<bool> {
        self.seats.is_available(seat).map_err(|e| e.for_train(self.id))
    }

    /// Takes the lowest-numbered free seat. Fails with `NoSeatsAvailable`.
    pub fn allocate_first_available(&mut self) -> CoreResult<SeatNumber> {
        self.seats
            .allocate_first_available()
            .map_err(|e| e.for_train(self.id))
    }

    /// Takes exactly `seat`; `Ok(false)` if it was already taken.
    pub fn allocate_specific(&mut self, seat: SeatNumber) -> CoreResult<bool> {
        self.seats
            .allocate_specific(seat)
            .map_err(|e| e.for_train(self.id))
    }

    /// Frees `seat`; `Ok(false)` if it was already free.
    pub fn release(&mut self, seat: SeatNumber) -> CoreResult<bool> {
        self.seats.release(seat).map_err(|e| e.for_train(self.id))
    }

    /// Frees every seat.
    pub fn release_all(&mut self) {
        self.seats.release_all();
    }

    /// Read-only view used for listings and persistence.
    pub fn summary(&self) -> TrainSummary {
        TrainSummary {
            id: self.id,
            name: self.name.clone(),
            total_seats: self.total_seats(),
            available_seats: self.available_count(),
        }
    }
}

/// One row of the "all trains" listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSummary {
    pub id: TrainId,
    pub name: String,
    pub total_seats: u32,
    pub available_seats: u32,
}

/// Result of a seat availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAvailability {
    pub train_id: TrainId,
    pub train_name: String,
    pub available: u32,
    pub total: u32,
}

impl SeatAvailability {
    /// True when no seat is left.
    pub fn is_fully_booked(&self) -> bool {
        self.available == 0
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// A confirmed booking of one seat on one train.
///
/// `booking_time` is captured once and kept as text so that a reloaded
/// ticket carries exactly what was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    booking_id: String,
    train_id: TrainId,
    seat_number: SeatNumber,
    passenger_name: String,
    booking_time: String,
}

impl Ticket {
    /// Creates a ticket stamped with the current local time.
    pub fn new(
        booking_id: impl Into<String>,
        train_id: TrainId,
        seat_number: SeatNumber,
        passenger_name: impl Into<String>,
    ) -> CoreResult<Self> {
        let booking_time = Local::now().format(BOOKING_TIME_FORMAT).to_string();
        Self::restore(booking_id, train_id, seat_number, passenger_name, booking_time)
    }

    /// Rebuilds a ticket with a previously recorded booking time.
    pub fn restore(
        booking_id: impl Into<String>,
        train_id: TrainId,
        seat_number: SeatNumber,
        passenger_name: impl Into<String>,
        booking_time: impl Into<String>,
    ) -> CoreResult<Self> {
        let booking_id = booking_id.into();
        let passenger_name = passenger_name.into();
        validate_booking_id(&booking_id)?;
        validate_train_id(train_id)?;
        validate_seat_number(seat_number)?;
        validate_passenger_name(&passenger_name)?;

        Ok(Ticket {
            booking_id,
            train_id,
            seat_number,
            passenger_name,
            booking_time: booking_time.into(),
        })
    }

    #[inline]
    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    #[inline]
    pub fn train_id(&self) -> TrainId {
        self.train_id
    }

    #[inline]
    pub fn seat_number(&self) -> SeatNumber {
        self.seat_number
    }

    #[inline]
    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    #[inline]
    pub fn booking_time(&self) -> &str {
        &self.booking_time
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_train_validation() {
        assert!(Train::new(1001, "Express Delhi", 100).is_ok());
        assert!(matches!(
            Train::new(0, "Zero", 10),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            Train::new(1, "", 10),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            Train::new(1, "Empty", 0),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_train_seat_errors_carry_train_id() {
        let mut train = Train::new(42, "Tiny", 1).unwrap();
        assert!(matches!(
            train.is_seat_available(2),
            Err(CoreError::SeatOutOfRange {
                train_id: 42,
                seat: 2
            })
        ));
        assert_eq!(train.allocate_first_available().unwrap(), 1);
        assert!(matches!(
            train.allocate_first_available(),
            Err(CoreError::NoSeatsAvailable(42))
        ));
    }

    #[test]
    fn test_summary_reflects_live_counts() {
        let mut train = Train::new(7, "Local", 3).unwrap();
        train.allocate_first_available().unwrap();
        let summary = train.summary();
        assert_eq!(summary.total_seats, 3);
        assert_eq!(summary.available_seats, 2);
        assert_eq!(train.available_count() + train.booked_count(), 3);
    }

    #[test]
    fn test_ticket_validation() {
        assert!(Ticket::new("BK00000001", 1001, 1, "Asha").is_ok());
        assert!(Ticket::new("", 1001, 1, "Asha").is_err());
        assert!(Ticket::new("BK00000001", 0, 1, "Asha").is_err());
        assert!(Ticket::new("BK00000001", 1001, 0, "Asha").is_err());
        assert!(Ticket::new("BK00000001", 1001, 1, "").is_err());
    }

    #[test]
    fn test_ticket_booking_time_format() {
        let ticket = Ticket::new("BK00000001", 1001, 1, "Asha").unwrap();
        let time = ticket.booking_time();
        // MM/DD/YYYY HH:MM:SS
        assert_eq!(time.len(), 19);
        assert_eq!(&time[2..3], "/");
        assert_eq!(&time[5..6], "/");
        assert_eq!(&time[10..11], " ");
        assert!(chrono::NaiveDateTime::parse_from_str(time, BOOKING_TIME_FORMAT).is_ok());
    }

    #[test]
    fn test_ticket_restore_keeps_time_verbatim() {
        let ticket =
            Ticket::restore("BKABCDEFGH", 1002, 5, "Ravi", "01/02/2024 03:04:05, extra").unwrap();
        assert_eq!(ticket.booking_time(), "01/02/2024 03:04:05, extra");
    }
}
