//! # Repository Module
//!
//! One repository per CSV file.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Terminal app                                                          │
//! │       │                                                                 │
//! │       │  store.trains().load(registry)                                 │
//! │       ▼                                                                 │
//! │  TrainRepository                       TicketRepository                │
//! │  ├── load(&mut TrainRegistry)          ├── load(registry, ledger)      │
//! │  └── save(&TrainRegistry)              └── save(&TicketLedger)         │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  trains.csv                            tickets.csv                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`TrainRepository`] - Train rows and seat reconciliation
//! - [`TicketRepository`] - Ticket rows and seat re-reservation

use std::path::PathBuf;

use crate::error::RowError;

pub mod ticket;
pub mod train;

pub use ticket::TicketRepository;
pub use train::TrainRepository;

/// A row that was not loaded, and why.
#[derive(Debug)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowError,
}

/// Outcome of loading one CSV file.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rows turned into trains or tickets.
    pub loaded: usize,
    /// Rows rejected, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    fn skip(&mut self, line: usize, reason: RowError) {
        self.skipped.push(SkippedRow { line, reason });
    }
}

/// Outcome of saving one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: usize,
    pub path: PathBuf,
}
