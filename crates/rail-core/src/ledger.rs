//! # Ticket Ledger
//!
//! Booking ID → Ticket mapping, plus the booking ID generator.
//!
//! ## Booking ID Format
//! ```text
//!   B K 7 Q 2 M X 0 9 A
//!   └┬┘ └──────┬──────┘
//!  prefix   8 symbols from A-Z 0-9  (36^8 ≈ 2.8e12 combinations)
//! ```
//!
//! Generation retries on collision with an existing ticket, up to
//! [`MAX_BOOKING_ID_ATTEMPTS`] times.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::Ticket;
use crate::{BOOKING_ID_ALPHABET, BOOKING_ID_PREFIX, BOOKING_ID_RANDOM_LEN, MAX_BOOKING_ID_ATTEMPTS};

/// All tickets currently held, keyed by booking ID.
///
/// Ordered by booking ID so saved files are stable between runs.
#[derive(Debug, Clone, Default)]
pub struct TicketLedger {
    tickets: BTreeMap<String, Ticket>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces a booking ID not present in the ledger.
    pub fn generate_booking_id<R: Rng + ?Sized>(&self, rng: &mut R) -> CoreResult<String> {
        for attempt in 1..=MAX_BOOKING_ID_ATTEMPTS {
            let candidate = random_booking_id(rng);
            if !self.tickets.contains_key(&candidate) {
                return Ok(candidate);
            }
            debug!(attempt, booking_id = %candidate, "Booking ID collision, retrying");
        }
        Err(CoreError::BookingIdExhausted {
            attempts: MAX_BOOKING_ID_ATTEMPTS,
        })
    }

    /// Adds a ticket under `booking_id`. Fails if the key is taken.
    pub fn insert(&mut self, booking_id: impl Into<String>, ticket: Ticket) -> CoreResult<()> {
        let booking_id = booking_id.into();
        if self.tickets.contains_key(&booking_id) {
            return Err(CoreError::DuplicateBooking(booking_id));
        }
        self.tickets.insert(booking_id, ticket);
        Ok(())
    }

    /// Removes and returns the ticket, or `TicketNotFound`.
    pub fn remove(&mut self, booking_id: &str) -> CoreResult<Ticket> {
        self.tickets
            .remove(booking_id)
            .ok_or_else(|| CoreError::TicketNotFound(booking_id.to_string()))
    }

    pub fn find(&self, booking_id: &str) -> CoreResult<&Ticket> {
        self.tickets
            .get(booking_id)
            .ok_or_else(|| CoreError::TicketNotFound(booking_id.to_string()))
    }

    pub fn contains(&self, booking_id: &str) -> bool {
        self.tickets.contains_key(booking_id)
    }

    pub fn clear(&mut self) {
        self.tickets.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

fn random_booking_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(BOOKING_ID_PREFIX.len() + BOOKING_ID_RANDOM_LEN);
    id.push_str(BOOKING_ID_PREFIX);
    for _ in 0..BOOKING_ID_RANDOM_LEN {
        let idx = rng.gen_range(0..BOOKING_ID_ALPHABET.len());
        id.push(BOOKING_ID_ALPHABET[idx] as char);
    }
    id
}

// =============================================================================
// Unit Tests
// =============================================================================
