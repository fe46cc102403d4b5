//! # Booking Engine
//!
//! Owns the train registry and ticket ledger and runs every operation that
//! changes them together.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  book_ticket(train_id, passenger)                                       │
//! │                                                                         │
//! │  1. validate passenger ──── InvalidInput ──────────► (no change)        │
//! │  2. find train ──────────── TrainNotFound ─────────► (no change)        │
//! │  3. take first free seat ── NoSeatsAvailable ──────► (no change)        │
//! │  4. generate booking ID ─── BookingIdExhausted ──┐                      │
//! │  5. build ticket ────────── InvalidInput ────────┼─► release seat       │
//! │  6. insert into ledger ──── DuplicateBooking ────┘                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(booking_id)   one seat taken, one ticket held                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cancellation Flow
//! ```text
//! cancel_ticket(booking_id)
//!   1. find ticket ───────────── TicketNotFound ──► (no change)
//!   2. find its train ────────── TrainNotFound ───► (no change)
//!   3. release seat ──────────── SeatNotBooked ───► (ticket kept)
//!   4. remove ticket ─────────── Ok(ticket)
//! ```
//!
//! There is no global state: construct one engine per session (or per test).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::ledger::TicketLedger;
use crate::registry::TrainRegistry;
use crate::types::{SeatAvailability, SeatNumber, Ticket, Train, TrainId, TrainSummary};
use crate::validation::validate_passenger_name;

/// The single owner of reservation state.
///
/// Generic over the RNG used for booking IDs; production code uses the
/// OS-seeded [`StdRng`].
#[derive(Debug)]
pub struct BookingEngine<R = StdRng> {
    registry: TrainRegistry,
    ledger: TicketLedger,
    rng: R,
}

impl BookingEngine<StdRng> {
    /// Creates an engine over existing state, with an OS-seeded RNG.
    pub fn new(registry: TrainRegistry, ledger: TicketLedger) -> Self {
        Self::with_rng(registry, ledger, StdRng::from_entropy())
    }

    /// Engine with the four default trains and no tickets.
    pub fn with_default_trains() -> CoreResult<Self> {
        Ok(Self::new(
            TrainRegistry::with_default_trains()?,
            TicketLedger::new(),
        ))
    }
}

impl<R: Rng> BookingEngine<R> {
    /// Creates an engine with a caller-supplied RNG (seeded in tests).
    pub fn with_rng(registry: TrainRegistry, ledger: TicketLedger, rng: R) -> Self {
        BookingEngine {
            registry,
            ledger,
            rng,
        }
    }

    // =========================================================================
    // State Access
    // =========================================================================

    pub fn registry(&self) -> &TrainRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    /// Both halves at once, for bulk reloads that must keep seats and
    /// tickets in step.
    pub fn state_mut(&mut self) -> (&mut TrainRegistry, &mut TicketLedger) {
        (&mut self.registry, &mut self.ledger)
    }

    /// Listing of every train with live seat counts.
    pub fn trains(&self) -> Vec<TrainSummary> {
        self.registry.summaries()
    }

    // =========================================================================
    // Read-only Queries
    // =========================================================================

    pub fn check_seat_availability(&self, train_id: TrainId) -> CoreResult<SeatAvailability> {
        let train = self.registry.find_by_id(train_id)?;
        Ok(SeatAvailability {
            train_id,
            train_name: train.name().to_string(),
            available: train.available_count(),
            total: train.total_seats(),
        })
    }

    pub fn check_ticket_status(&self, booking_id: &str) -> CoreResult<&Ticket> {
        self.ledger.find(booking_id)
    }

    // =========================================================================
    // Booking
    // =========================================================================

    /// Books the lowest free seat on `train_id` for `passenger_name`.
    ///
    /// On any failure no seat changes state and no ticket is created.
    pub fn book_ticket(&mut self, train_id: TrainId, passenger_name: &str) -> CoreResult<String> {
        validate_passenger_name(passenger_name)?;

        let train = self.registry.find_by_id_mut(train_id)?;
        let seat = train.allocate_first_available()?;
        debug!(train_id, seat, "Seat allocated");

        match issue_ticket(&mut self.ledger, &mut self.rng, train_id, seat, passenger_name) {
            Ok(booking_id) => {
                info!(%booking_id, train_id, seat, "Ticket booked");
                Ok(booking_id)
            }
            Err(err) => {
                roll_back_seat(train, seat);
                warn!(train_id, seat, error = %err, "Booking failed, seat released");
                Err(err)
            }
        }
    }

    /// Cancels a booking, freeing its seat. Returns the removed ticket.
    pub fn cancel_ticket(&mut self, booking_id: &str) -> CoreResult<Ticket> {
        let ticket = self.ledger.find(booking_id)?;
        let (train_id, seat) = (ticket.train_id(), ticket.seat_number());

        let train = self.registry.find_by_id_mut(train_id).map_err(|err| {
            warn!(%booking_id, train_id, "Ticket refers to a missing train");
            err
        })?;

        if !train.release(seat)? {
            error!(%booking_id, train_id, seat, "Ticket seat was already available");
            return Err(CoreError::SeatNotBooked { train_id, seat });
        }

        let ticket = self.ledger.remove(booking_id)?;
        info!(%booking_id, train_id, seat, "Ticket cancelled");
        Ok(ticket)
    }
}

fn issue_ticket<R: Rng>(
    ledger: &mut TicketLedger,
    rng: &mut R,
    train_id: TrainId,
    seat: SeatNumber,
    passenger_name: &str,
) -> CoreResult<String> {
    let booking_id = ledger.generate_booking_id(rng)?;
    let ticket = Ticket::new(booking_id.clone(), train_id, seat, passenger_name)?;
    ledger.insert(booking_id.clone(), ticket)?;
    Ok(booking_id)
}

fn roll_back_seat(train: &mut Train, seat: SeatNumber) {
    // The seat was taken a moment ago by this same call.
    if !matches!(train.release(seat), Ok(true)) {
        error!(train_id = train.id(), seat, "Rollback could not release seat");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn engine_with(trains: Vec<Train>) -> BookingEngine {
        let mut registry = TrainRegistry::new();
        for train in trains {
            registry.add(train);
        }
        BookingEngine::with_rng(registry, TicketLedger::new(), StdRng::seed_from_u64(7))
    }

    fn default_engine() -> BookingEngine {
        BookingEngine::with_rng(
            TrainRegistry::with_default_trains().unwrap(),
            TicketLedger::new(),
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_book_then_cancel_scenario() {
        let mut engine = default_engine();

        let booking_id = engine.book_ticket(1001, "Asha").unwrap();
        let ticket = engine.check_ticket_status(&booking_id).unwrap();
        assert_eq!(ticket.seat_number(), 1);
        assert_eq!(ticket.train_id(), 1001);
        assert_eq!(ticket.passenger_name(), "Asha");
        assert_eq!(engine.check_seat_availability(1001).unwrap().available, 99);

        let cancelled = engine.cancel_ticket(&booking_id).unwrap();
        assert_eq!(cancelled.booking_id(), booking_id);
        assert_eq!(engine.check_seat_availability(1001).unwrap().available, 100);
        assert!(matches!(
            engine.check_ticket_status(&booking_id),
            Err(CoreError::TicketNotFound(_))
        ));
    }

    #[test]
    fn test_single_seat_train_sells_out() {
        let mut engine = engine_with(vec![Train::new(5, "Solo", 1).unwrap()]);

        let first = engine.book_ticket(5, "One").unwrap();
        assert_eq!(engine.check_ticket_status(&first).unwrap().seat_number(), 1);

        assert!(matches!(
            engine.book_ticket(5, "Two"),
            Err(CoreError::NoSeatsAvailable(5))
        ));
        let availability = engine.check_seat_availability(5).unwrap();
        assert_eq!(availability.available, 0);
        assert!(availability.is_fully_booked());
        assert_eq!(engine.ledger().len(), 1);
    }

    #[test]
    fn test_failed_bookings_leave_state_unchanged() {
        let mut engine = default_engine();

        assert!(matches!(
            engine.book_ticket(1001, ""),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.book_ticket(9999, "Asha"),
            Err(CoreError::TrainNotFound(9999))
        ));
        assert!(engine.ledger().is_empty());
        assert!(engine.trains().iter().all(|t| t.available_seats == 100));
    }

    #[test]
    fn test_id_exhaustion_rolls_back_seat() {
        // A constant RNG yields the same booking ID on every draw.
        let mut engine = BookingEngine::with_rng(
            TrainRegistry::with_default_trains().unwrap(),
            TicketLedger::new(),
            StepRng::new(0, 0),
        );

        let first = engine.book_ticket(1001, "Asha").unwrap();
        assert_eq!(first, "BKAAAAAAAA");

        assert!(matches!(
            engine.book_ticket(1001, "Ravi"),
            Err(CoreError::BookingIdExhausted { .. })
        ));
        assert_eq!(engine.ledger().len(), 1);
        assert_eq!(engine.check_seat_availability(1001).unwrap().available, 99);

        let train = engine.registry().find_by_id(1001).unwrap();
        assert!(!train.is_seat_available(1).unwrap());
        assert!(train.is_seat_available(2).unwrap());
    }

    #[test]
    fn test_cancel_unknown_ticket() {
        let mut engine = default_engine();
        assert!(matches!(
            engine.cancel_ticket("BKNOPE0000"),
            Err(CoreError::TicketNotFound(_))
        ));
    }

    #[test]
    fn test_cancel_with_missing_train_keeps_ticket() {
        let mut engine = default_engine();
        engine
            .ledger
            .insert("BKORPHAN00", Ticket::new("BKORPHAN00", 4242, 3, "Lost").unwrap())
            .unwrap();

        assert!(matches!(
            engine.cancel_ticket("BKORPHAN00"),
            Err(CoreError::TrainNotFound(4242))
        ));
        assert!(engine.check_ticket_status("BKORPHAN00").is_ok());
    }

    #[test]
    fn test_cancel_with_free_seat_keeps_ticket() {
        let mut engine = default_engine();
        // Ticket whose seat was never marked taken: ledger/seat desync.
        engine
            .ledger
            .insert("BKDESYNC00", Ticket::new("BKDESYNC00", 1001, 10, "Odd").unwrap())
            .unwrap();

        assert!(matches!(
            engine.cancel_ticket("BKDESYNC00"),
            Err(CoreError::SeatNotBooked {
                train_id: 1001,
                seat: 10
            })
        ));
        assert!(engine.check_ticket_status("BKDESYNC00").is_ok());
        assert_eq!(engine.check_seat_availability(1001).unwrap().available, 100);
    }

    #[test]
    fn test_bookings_fill_seats_in_order() {
        let mut engine = engine_with(vec![Train::new(3, "Tri", 3).unwrap()]);
        let a = engine.book_ticket(3, "A").unwrap();
        let b = engine.book_ticket(3, "B").unwrap();
        engine.cancel_ticket(&a).unwrap();
        let c = engine.book_ticket(3, "C").unwrap();

        assert_eq!(engine.check_ticket_status(&b).unwrap().seat_number(), 2);
        assert_eq!(engine.check_ticket_status(&c).unwrap().seat_number(), 1);
    }

    #[test]
    fn test_availability_for_unknown_train() {
        let engine = default_engine();
        assert!(matches!(
            engine.check_seat_availability(1),
            Err(CoreError::TrainNotFound(1))
        ));
    }
}
