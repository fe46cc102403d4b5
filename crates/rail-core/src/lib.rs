//! # rail-core: Pure Booking Logic for Rail Reservation
//!
//! This crate is the **heart** of the reservation system. It holds seat
//! inventory, tickets, and the rules that keep the two consistent, with
//! zero file or terminal I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rail Reservation Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal menu (apps/terminal)                   │   │
//! │  │   List ──► Availability ──► Book ──► Cancel ──► Status         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rail-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ seat_map  │  │ registry  │  │  ledger   │  │  engine   │  │   │
//! │  │   │  SeatMap  │  │  Trains   │  │  Tickets  │  │ book /    │  │   │
//! │  │   │           │  │  by ID    │  │  by BK-ID │  │ cancel    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO TERMINAL • NO GLOBAL STATE                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rail-store (CSV persistence)                    │   │
//! │  │                 trains.csv, tickets.csv                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`seat_map`] - Per-train seat availability
//! - [`types`] - Train, Ticket and read-only views
//! - [`registry`] - Ordered trains, lookup by ID
//! - [`ledger`] - Tickets by booking ID, booking ID generation
//! - [`engine`] - Booking and cancellation with rollback
//! - [`error`] - Domain error types
//! - [`validation`] - Field and prompt validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rail_core::BookingEngine;
//!
//! let mut engine = BookingEngine::with_default_trains().unwrap();
//! let booking_id = engine.book_ticket(1001, "Asha").unwrap();
//!
//! let ticket = engine.check_ticket_status(&booking_id).unwrap();
//! assert_eq!(ticket.seat_number(), 1);
//! assert_eq!(engine.check_seat_availability(1001).unwrap().available, 99);
//!
//! engine.cancel_ticket(&booking_id).unwrap();
//! assert_eq!(engine.check_seat_availability(1001).unwrap().available, 100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod seat_map;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::BookingEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::TicketLedger;
pub use registry::TrainRegistry;
pub use seat_map::SeatMap;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Every booking ID starts with this.
pub const BOOKING_ID_PREFIX: &str = "BK";

/// Number of random symbols after the prefix.
pub const BOOKING_ID_RANDOM_LEN: usize = 8;

/// Symbols a booking ID is drawn from (36 of them).
pub const BOOKING_ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Collisions tolerated before booking ID generation gives up.
///
/// With 36^8 possible IDs this is never reached in practice.
pub const MAX_BOOKING_ID_ATTEMPTS: usize = 64;

/// `chrono` format for ticket booking times: `MM/DD/YYYY HH:MM:SS`.
pub const BOOKING_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Seat count of each built-in train.
pub const DEFAULT_SEATS_PER_TRAIN: u32 = 100;

/// Trains available when no trains file exists.
pub const DEFAULT_TRAINS: [(TrainId, &str); 4] = [
    (1001, "Express Delhi"),
    (1002, "Mumbai Local"),
    (1003, "Chennai Mail"),
    (1004, "Kolkata Express"),
];

/// Largest number accepted at a menu prompt.
pub const MAX_MENU_NUMBER: u32 = 10_000;
