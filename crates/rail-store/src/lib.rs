//! # rail-store: CSV Persistence for Rail Reservation
//!
//! This crate keeps reservation state between runs in two plain CSV files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rail Reservation Data Flow                          │
//! │                                                                         │
//! │  Terminal app (startup / exit)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rail-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CsvStore    │    │  Repositories │    │  Framing     │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (csv.rs)    │  │   │
//! │  │   │               │    │ TrainRepo     │    │              │  │   │
//! │  │   │ StoreConfig   │◄───│ TicketRepo    │───►│ header skip  │  │   │
//! │  │   │ file paths    │    │ load / save   │    │ field split  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trains.csv      trainId,trainName,totalSeats,availableSeats          │
//! │  tickets.csv     bookingId,trainId,seatNumber,passengerName,bookingTime│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - File locations and the store handle
//! - [`repository`] - Train and ticket load/save
//! - [`csv`] - Line framing and field splitting
//! - [`error`] - Store error types
//!
//! Writes are not atomic: a failed save leaves a partial file behind.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod csv;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RowError, StoreError, StoreResult};
pub use repository::{LoadReport, SaveReport, SkippedRow, TicketRepository, TrainRepository};
pub use store::{CsvStore, StoreConfig};
