//! # Train Repository
//!
//! Loads and saves `trains.csv`.
//!
//! ## Seat Reconciliation
//! The file stores only how many seats are available, not which ones. On load
//! each train starts empty and the first `total - available` seats are taken
//! in seat order:
//! ```text
//!   1003,Chennai Mail,5,2   →   seats [■ ■ ■ □ □]   (3 booked)
//! ```
//! If the row claims fewer than zero available seats, allocation stops when
//! the train is full and a warning is logged. If it claims more available
//! seats than exist, the train loads empty with a warning.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rail_core::validation::positive_u32;
use rail_core::{CoreError, Train, TrainRegistry};
use tracing::{info, warn};

use super::{LoadReport, SaveReport};
use crate::csv::{read_rows, FieldReader};
use crate::error::{RowError, StoreError, StoreResult};

/// Header line of `trains.csv`.
pub const TRAINS_HEADER: &str = "trainId,trainName,totalSeats,availableSeats";

/// Repository for the trains file.
#[derive(Debug, Clone)]
pub struct TrainRepository {
    path: PathBuf,
}

impl TrainRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TrainRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the registry with the trains in the file.
    ///
    /// Malformed rows are skipped and reported. The registry is untouched if
    /// the file cannot be opened or read to the end.
    pub fn load(&self, registry: &mut TrainRegistry) -> StoreResult<LoadReport> {
        let rows = read_rows(&self.path)?;
        let mut report = LoadReport::default();
        let mut trains = Vec::with_capacity(rows.len());

        for row in rows {
            match row.fields().and_then(parse_train) {
                Ok(train) => trains.push(train),
                Err(reason) => {
                    warn!(
                        path = %self.path.display(),
                        line = row.line,
                        content = %row.content,
                        error = %reason,
                        "Skipping train row"
                    );
                    report.skip(row.line, reason);
                }
            }
        }

        report.loaded = trains.len();
        registry.replace_all(trains);

        info!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "Trains loaded"
        );
        Ok(report)
    }

    /// Writes every train with its live available seat count.
    ///
    /// On a write failure whatever was already written stays in the file.
    pub fn save(&self, registry: &TrainRegistry) -> StoreResult<SaveReport> {
        let file = File::create(&self.path).map_err(|e| StoreError::io(&self.path, "create", e))?;
        let mut out = BufWriter::new(file);

        let saved = write_trains(&mut out, registry)
            .and_then(|saved| out.flush().map(|()| saved))
            .map_err(|e| StoreError::io(&self.path, "write", e))?;

        info!(path = %self.path.display(), saved, "Trains saved");
        Ok(SaveReport {
            saved,
            path: self.path.clone(),
        })
    }
}

/// Writes the header and one row per train. Returns the row count.
pub fn write_trains<W: Write>(out: &mut W, registry: &TrainRegistry) -> io::Result<usize> {
    writeln!(out, "{TRAINS_HEADER}")?;
    let mut saved = 0;
    for train in registry.iter() {
        writeln!(
            out,
            "{},{},{},{}",
            train.id(),
            train.name(),
            train.total_seats(),
            train.available_count()
        )?;
        saved += 1;
    }
    Ok(saved)
}

fn parse_train(mut fields: FieldReader<'_>) -> Result<Train, RowError> {
    let id = fields.number("trainId")?;
    let name = fields.text("trainName")?;
    let total = fields.number("totalSeats")?;
    let available = fields.number("availableSeats")?;

    let invalid = |e| RowError::InvalidTrain(CoreError::InvalidInput(e));
    let id = positive_u32("Train ID", id).map_err(invalid)?;
    let total = positive_u32("Total seats", total).map_err(invalid)?;

    let mut train = Train::new(id, name, total).map_err(RowError::InvalidTrain)?;
    reconcile_seats(&mut train, available);
    Ok(train)
}

fn reconcile_seats(train: &mut Train, declared_available: i64) {
    let booked = i64::from(train.total_seats()).saturating_sub(declared_available);
    if booked < 0 {
        warn!(
            train_id = train.id(),
            declared_available,
            total = train.total_seats(),
            "Available seats exceed total, train loaded with no bookings"
        );
        return;
    }

    for _ in 0..booked {
        if train.allocate_first_available().is_err() {
            warn!(
                train_id = train.id(),
                declared_available,
                "Inconsistent seat data, train loaded fully booked"
            );
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
