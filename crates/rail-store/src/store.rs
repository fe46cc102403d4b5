//! # Store Handle
//!
//! File locations and the [`CsvStore`] handle that hands out repositories.
//!
//! ## Startup and Shutdown
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Terminal app startup                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir) ← Resolve both file paths                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CsvStore::new(config)                                                 │
//! │       │                                                                 │
//! │       ├──► trains().load(registry)          (missing → keep defaults)  │
//! │       └──► tickets().load(registry, ledger) (missing → no bookings)    │
//! │                                                                         │
//! │  ... menu loop ...                                                     │
//! │                                                                         │
//! │  Exit                                                                  │
//! │       ├──► trains().save(registry)                                     │
//! │       └──► tickets().save(ledger)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::repository::{TicketRepository, TrainRepository};

/// Default trains file name.
pub const DEFAULT_TRAINS_FILE: &str = "trains.csv";

/// Default tickets file name.
pub const DEFAULT_TICKETS_FILE: &str = "tickets.csv";

// =============================================================================
// Configuration
// =============================================================================

/// Where the CSV files live.
///
/// ## Example
/// ```rust
/// use rail_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/rail")
///     .trains_file("fleet.csv");
///
/// assert!(config.trains_path().ends_with("fleet.csv"));
/// assert!(config.tickets_path().ends_with("tickets.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory both files are resolved against.
    /// Default: current directory
    pub data_dir: PathBuf,

    /// Trains file name, or an absolute path.
    /// Default: `trains.csv`
    pub trains_file: PathBuf,

    /// Tickets file name, or an absolute path.
    /// Default: `tickets.csv`
    pub tickets_file: PathBuf,
}

impl StoreConfig {
    /// Configuration with default file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            trains_file: PathBuf::from(DEFAULT_TRAINS_FILE),
            tickets_file: PathBuf::from(DEFAULT_TICKETS_FILE),
        }
    }

    /// Sets the trains file name.
    pub fn trains_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.trains_file = file.into();
        self
    }

    /// Sets the tickets file name.
    pub fn tickets_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.tickets_file = file.into();
        self
    }

    /// Full path of the trains file.
    pub fn trains_path(&self) -> PathBuf {
        self.data_dir.join(&self.trains_file)
    }

    /// Full path of the tickets file.
    pub fn tickets_path(&self) -> PathBuf {
        self.data_dir.join(&self.tickets_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

// =============================================================================
// CsvStore
// =============================================================================

/// Handle to the reservation files.
///
/// ## Usage
/// ```rust,no_run
/// use rail_core::BookingEngine;
/// use rail_store::{CsvStore, StoreConfig};
///
/// let store = CsvStore::new(StoreConfig::new("."));
/// let mut engine = BookingEngine::with_default_trains().unwrap();
///
/// let (registry, ledger) = engine.state_mut();
/// let report = store.trains().load(registry).unwrap();
/// store.tickets().load(registry, ledger).unwrap();
/// println!("{} trains", report.loaded);
/// ```
#[derive(Debug, Clone)]
pub struct CsvStore {
    trains_path: PathBuf,
    tickets_path: PathBuf,
}

impl CsvStore {
    pub fn new(config: StoreConfig) -> Self {
        let store = CsvStore {
            trains_path: config.trains_path(),
            tickets_path: config.tickets_path(),
        };
        debug!(
            trains = %store.trains_path.display(),
            tickets = %store.tickets_path.display(),
            "CSV store configured"
        );
        store
    }

    /// Returns the trains repository.
    pub fn trains(&self) -> TrainRepository {
        TrainRepository::new(self.trains_path.clone())
    }

    /// Returns the tickets repository.
    pub fn tickets(&self) -> TicketRepository {
        TicketRepository::new(self.tickets_path.clone())
    }

    pub fn trains_path(&self) -> &Path {
        &self.trains_path
    }

    pub fn tickets_path(&self) -> &Path {
        &self.tickets_path
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
