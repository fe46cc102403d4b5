//! # Booking Commands
//!
//! Book, cancel, and look up tickets.
//!
//! ## Book Flow
//! ```text
//!   train ID ──► validate (> 0)
//!   name ──────► validate (not blank)
//!                    │
//!                    ▼
//!   BookingEngine::book_ticket ──► booking ID ──► ticket copy for display
//! ```

use rail_core::validation::{validate_booking_id, validate_passenger_name, validate_train_id};
use rail_core::{Ticket, TrainId};
use tracing::info;

use crate::error::AppResult;
use crate::state::Session;

/// Books the next free seat and returns the new ticket.
pub fn book_ticket(session: &mut Session, train_id: TrainId, passenger_name: &str) -> AppResult<Ticket> {
    validate_train_id(train_id)?;
    validate_passenger_name(passenger_name)?;

    let engine = session.engine_mut();
    let booking_id = engine.book_ticket(train_id, passenger_name)?;
    let ticket = engine.check_ticket_status(&booking_id)?.clone();

    info!(booking_id = %ticket.booking_id(), train_id, "Ticket booked from menu");
    Ok(ticket)
}

/// Cancels a booking and returns the ticket that was removed.
pub fn cancel_ticket(session: &mut Session, booking_id: &str) -> AppResult<Ticket> {
    validate_booking_id(booking_id)?;
    Ok(session.engine_mut().cancel_ticket(booking_id)?)
}

/// Looks up a ticket.
pub fn check_ticket_status(session: &Session, booking_id: &str) -> AppResult<Ticket> {
    validate_booking_id(booking_id)?;
    Ok(session.engine().check_ticket_status(booking_id)?.clone())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rail_core::{BookingEngine, TicketLedger, Train, TrainRegistry};
    use rail_store::{CsvStore, StoreConfig};

    fn session_with(train: Train) -> Session {
        let mut registry = TrainRegistry::new();
        registry.add(train);
        Session::new(
            BookingEngine::new(registry, TicketLedger::new()),
            CsvStore::new(StoreConfig::default()),
        )
    }

    #[test]
    fn test_book_status_cancel() {
        let mut session = session_with(Train::new(1001, "Express Delhi", 2).unwrap());

        let ticket = book_ticket(&mut session, 1001, "Asha").unwrap();
        assert_eq!(ticket.seat_number(), 1);
        assert_eq!(ticket.passenger_name(), "Asha");

        let found = check_ticket_status(&session, ticket.booking_id()).unwrap();
        assert_eq!(found, ticket);

        let cancelled = cancel_ticket(&mut session, ticket.booking_id()).unwrap();
        assert_eq!(cancelled.booking_id(), ticket.booking_id());
        assert_eq!(
            check_ticket_status(&session, ticket.booking_id()).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_blank_inputs_rejected_before_engine() {
        let mut session = session_with(Train::new(1001, "Express Delhi", 2).unwrap());

        let err = book_ticket(&mut session, 1001, "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Passenger name cannot be empty");
        assert_eq!(cancel_ticket(&mut session, "").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(session.engine().check_seat_availability(1001).unwrap().available, 2);
    }

    #[test]
    fn test_sold_out() {
        let mut session = session_with(Train::new(9, "Solo", 1).unwrap());
        book_ticket(&mut session, 9, "One").unwrap();
        assert_eq!(
            book_ticket(&mut session, 9, "Two").unwrap_err().code,
            ErrorCode::SoldOut
        );
    }
}
