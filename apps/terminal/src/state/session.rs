//! # Session State
//!
//! Owns the booking engine for one run, plus the store it was loaded from
//! and will be saved to.
//!
//! ## Lifecycle
//! ```text
//!   open ──► default trains, no tickets
//!     │
//!     ├── trains.csv  ok → "Loaded N trains from …"
//!     │               err → "Note: <error>. Using default trains."
//!     │
//!     └── tickets.csv ok → "Loaded N tickets from …" (+ warning if rows skipped)
//!                     err → "Note: <error>. Starting with no existing bookings."
//!
//!   save ──► trains.csv, tickets.csv   (each failure reported, never fatal)
//! ```

use std::io::{self, Write};

use rail_core::BookingEngine;
use rail_store::CsvStore;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// One run's reservation state.
#[derive(Debug)]
pub struct Session {
    engine: BookingEngine,
    store: CsvStore,
}

impl Session {
    /// Wraps an existing engine without touching the files.
    pub fn new(engine: BookingEngine, store: CsvStore) -> Self {
        Session { engine, store }
    }

    /// Starts from the default trains, then loads whatever the files hold.
    ///
    /// Status lines go to `out`. File problems are reported there too and
    /// never stop startup.
    pub fn open<W: Write>(store: CsvStore, out: &mut W) -> AppResult<Self> {
        let engine = BookingEngine::with_default_trains()?;
        let mut session = Session::new(engine, store);
        session.load(out).map_err(AppError::from)?;
        Ok(session)
    }

    fn load<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let (registry, ledger) = self.engine.state_mut();

        let trains = self.store.trains();
        match trains.load(registry) {
            Ok(report) => writeln!(
                out,
                "Loaded {} trains from {}",
                report.loaded,
                trains.path().display()
            )?,
            Err(err) => {
                info!(
                    path = %err.path().display(),
                    error = %err,
                    "Trains file not loaded, using default trains"
                );
                writeln!(out, "Note: {err}. Using default trains.")?;
            }
        }

        let tickets = self.store.tickets();
        match tickets.load(registry, ledger) {
            Ok(report) => {
                writeln!(
                    out,
                    "Loaded {} tickets from {}",
                    report.loaded,
                    tickets.path().display()
                )?;
                if report.skipped_count() > 0 {
                    writeln!(
                        out,
                        "Warning: {} tickets could not be loaded due to errors.",
                        report.skipped_count()
                    )?;
                }
            }
            Err(err) => {
                info!(
                    path = %err.path().display(),
                    error = %err,
                    "Tickets file not loaded, starting empty"
                );
                writeln!(out, "Note: {err}. Starting with no existing bookings.")?;
            }
        }
        Ok(())
    }

    /// Saves trains then tickets. A failed file is reported on `err` and
    /// the other is still attempted.
    ///
    /// Returns `false` if either save failed.
    pub fn save<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<bool> {
        let mut all_saved = true;

        match self.store.trains().save(self.engine.registry()) {
            Ok(report) => writeln!(
                out,
                "Saved {} trains to {}",
                report.saved,
                report.path.display()
            )?,
            Err(e) => {
                all_saved = false;
                warn!(
                    path = %e.path().display(),
                    error = %e,
                    "Train data was not saved"
                );
                writeln!(err, "Error: {}", AppError::from(e))?;
                writeln!(err, "Train data was not saved.")?;
            }
        }

        match self.store.tickets().save(self.engine.ledger()) {
            Ok(report) => writeln!(
                out,
                "Saved {} tickets to {}",
                report.saved,
                report.path.display()
            )?,
            Err(e) => {
                all_saved = false;
                warn!(
                    path = %e.path().display(),
                    error = %e,
                    "Ticket data was not saved"
                );
                writeln!(err, "Error: {}", AppError::from(e))?;
                writeln!(err, "Ticket data was not saved.")?;
            }
        }

        Ok(all_saved)
    }

    pub fn engine(&self) -> &BookingEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BookingEngine {
        &mut self.engine
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rail_store::StoreConfig;
    use std::fs;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_open_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let session = Session::open(CsvStore::new(StoreConfig::new(dir.path())), &mut out).unwrap();
        let text = output(out);

        assert_eq!(session.engine().trains().len(), 4);
        assert!(session.engine().ledger().is_empty());
        assert!(text.contains(". Using default trains."));
        assert!(text.contains(". Starting with no existing bookings."));
    }

    #[test]
    fn test_open_reports_counts_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("trains.csv"),
            "trainId,trainName,totalSeats,availableSeats\n7,Coastal,4,3\n2001,Test,5,abc\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("tickets.csv"),
            "bookingId,trainId,seatNumber,passengerName,bookingTime\n\
             BKAAAAAAAA,7,2,Asha,01/02/2025 10:00:00\n\
             BKBBBBBBBB,9,1,Nobody,01/02/2025 10:00:00\n",
        )
        .unwrap();
        let mut out = Vec::new();

        let session = Session::open(CsvStore::new(StoreConfig::new(dir.path())), &mut out).unwrap();
        let text = output(out);

        assert!(text.contains("Loaded 1 trains from "));
        assert!(text.contains("Loaded 1 tickets from "));
        assert!(text.contains("Warning: 1 tickets could not be loaded due to errors."));
        assert_eq!(session.engine().check_seat_availability(7).unwrap().available, 3);
        assert!(session.engine().check_seat_availability(1001).is_err());
    }

    #[test]
    fn test_save_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(StoreConfig::new(dir.path()));
        let session = Session::new(BookingEngine::with_default_trains().unwrap(), store);
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(session.save(&mut out, &mut err).unwrap());
        let text = output(out);
        assert!(text.contains("Saved 4 trains to "));
        assert!(text.contains("Saved 0 tickets to "));
        assert!(err.is_empty());
        assert!(dir.path().join("trains.csv").exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(StoreConfig::new(dir.path().join("missing")));
        let session = Session::new(BookingEngine::with_default_trains().unwrap(), store);
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(!session.save(&mut out, &mut err).unwrap());
        let text = output(err);
        assert!(text.contains("Train data was not saved."));
        assert!(text.contains("Ticket data was not saved."));
    }
}
