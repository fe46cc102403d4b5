//! # Ticket Repository
//!
//! Loads and saves `tickets.csv`.
//!
//! Trains must be loaded first: tickets re-reserve their seats in the
//! registry.
//!
//! ## Seat Rebuild
//! `trains.csv` only says how many seats are booked, so after a train load
//! the lowest seats are taken as placeholders. A ticket load replaces those
//! placeholders with the exact seats the tickets hold:
//! ```text
//!   after trains.csv (2 booked)   [■ ■ □ □]
//!   seats freed                   [□ □ □ □]
//!   ticket for seat 3             [□ □ ■ □]
//!   1 declared booking left       [■ □ ■ □]   lowest free seat
//! ```
//!
//! ## Load Checks (per row)
//! ```text
//!   decode line ────────── InvalidEncoding
//!   parse fields ───────── MissingField / NotNumeric / OutOfRange
//!   build ticket ───────── InvalidTicket
//!   booking ID unused ──── DuplicateBooking
//!   train exists ───────── UnknownTrain
//!   reserve exact seat ─── SeatTaken / SeatOutOfRange
//!   insert into ledger
//! ```
//! A row failing any check is skipped; nothing it touched stays changed.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rail_core::validation::positive_u32;
use rail_core::{CoreError, Ticket, TicketLedger, Train, TrainRegistry};
use tracing::{debug, error, info, warn};

use super::{LoadReport, SaveReport};
use crate::csv::{read_rows, FieldReader};
use crate::error::{RowError, StoreError, StoreResult};

/// Header line of `tickets.csv`.
pub const TICKETS_HEADER: &str = "bookingId,trainId,seatNumber,passengerName,bookingTime";

/// Repository for the tickets file.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    path: PathBuf,
}

impl TicketRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TicketRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clears the ledger and refills it from the file, rebuilding seat
    /// state in `registry` around the tickets' exact seats.
    ///
    /// Ledger and registry are untouched if the file cannot be opened or read.
    pub fn load(
        &self,
        registry: &mut TrainRegistry,
        ledger: &mut TicketLedger,
    ) -> StoreResult<LoadReport> {
        let rows = read_rows(&self.path)?;
        let mut report = LoadReport::default();
        ledger.clear();

        let declared: Vec<u32> = registry.iter().map(Train::booked_count).collect();
        registry.iter_mut().for_each(Train::release_all);

        for row in rows {
            match row.fields().and_then(|fields| restore_ticket(fields, registry, ledger)) {
                Ok(()) => report.loaded += 1,
                Err(reason) => {
                    warn!(
                        path = %self.path.display(),
                        line = row.line,
                        content = %row.content,
                        error = %reason,
                        "Skipping ticket row"
                    );
                    report.skip(row.line, reason);
                }
            }
        }

        for (train, declared_booked) in registry.iter_mut().zip(declared) {
            keep_unticketed_bookings(train, declared_booked);
        }

        info!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "Tickets loaded"
        );
        Ok(report)
    }

    /// Writes every ticket, ordered by booking ID.
    ///
    /// On a write failure whatever was already written stays in the file.
    pub fn save(&self, ledger: &TicketLedger) -> StoreResult<SaveReport> {
        let file = File::create(&self.path).map_err(|e| StoreError::io(&self.path, "create", e))?;
        let mut out = BufWriter::new(file);

        let saved = write_tickets(&mut out, ledger)
            .and_then(|saved| out.flush().map(|()| saved))
            .map_err(|e| StoreError::io(&self.path, "write", e))?;

        info!(path = %self.path.display(), saved, "Tickets saved");
        Ok(SaveReport {
            saved,
            path: self.path.clone(),
        })
    }
}

/// Writes the header and one row per ticket. Returns the row count.
pub fn write_tickets<W: Write>(out: &mut W, ledger: &TicketLedger) -> io::Result<usize> {
    writeln!(out, "{TICKETS_HEADER}")?;
    let mut saved = 0;
    for ticket in ledger.iter() {
        writeln!(
            out,
            "{},{},{},{},{}",
            ticket.booking_id(),
            ticket.train_id(),
            ticket.seat_number(),
            ticket.passenger_name(),
            ticket.booking_time()
        )?;
        saved += 1;
    }
    Ok(saved)
}

fn restore_ticket(
    mut fields: FieldReader<'_>,
    registry: &mut TrainRegistry,
    ledger: &mut TicketLedger,
) -> Result<(), RowError> {
    let booking_id = fields.text("bookingId")?;
    let train_id = fields.number("trainId")?;
    let seat = fields.number("seatNumber")?;
    let passenger_name = fields.text("passengerName")?;
    let booking_time = fields.remainder();

    let invalid = |e| RowError::InvalidTicket(CoreError::InvalidInput(e));
    let train_id = positive_u32("Train ID", train_id).map_err(invalid)?;
    let seat = positive_u32("Seat number", seat).map_err(invalid)?;

    let ticket = Ticket::restore(booking_id, train_id, seat, passenger_name, booking_time)
        .map_err(RowError::InvalidTicket)?;

    if ledger.contains(booking_id) {
        return Err(RowError::DuplicateBooking(booking_id.to_string()));
    }

    let train = registry
        .find_by_id_mut(train_id)
        .map_err(|_| RowError::UnknownTrain(train_id))?;

    match train.allocate_specific(seat) {
        Ok(true) => {}
        Ok(false) => return Err(RowError::SeatTaken { train_id, seat }),
        Err(_) => return Err(RowError::SeatOutOfRange { train_id, seat }),
    }

    if let Err(err) = ledger.insert(booking_id, ticket) {
        if !matches!(train.release(seat), Ok(true)) {
            error!(train_id, seat, "Could not release seat after failed ticket insert");
        }
        return Err(RowError::InvalidTicket(err));
    }
    Ok(())
}

/// Re-takes seats the trains file counted as booked but no ticket holds.
fn keep_unticketed_bookings(train: &mut Train, declared_booked: u32) {
    let ticketed = train.booked_count();
    if ticketed > declared_booked {
        warn!(
            train_id = train.id(),
            ticketed,
            declared_booked,
            "More tickets than booked seats, keeping ticket seats"
        );
        return;
    }

    let unticketed = declared_booked - ticketed;
    if unticketed > 0 {
        debug!(train_id = train.id(), unticketed, "Keeping bookings without tickets");
    }
    for _ in 0..unticketed {
        if train.allocate_first_available().is_err() {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
