//! # Seat Map
//!
//! Fixed-size seat availability for one train.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  seats: Vec<bool>   (true = available)                                  │
//! │                                                                         │
//! │  index:   0     1     2     3     4    ...   n-1                        │
//! │  seat:    1     2     3     4     5    ...    n                         │
//! │         ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┐                     │
//! │         │  ✗  │  ✗  │  ✓  │  ✗  │  ✓  │ ... │  ✓  │                     │
//! │         └─────┴─────┴─────┴─────┴─────┴─────┴─────┘                     │
//! │                      ▲                                                  │
//! │                      └── allocate_first_available() takes seat 3        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The length never changes after construction. Available count is
//! recomputed on demand by scanning, there is no cached counter to drift.

use thiserror::Error;

use crate::error::CoreError;
use crate::types::{SeatNumber, TrainId};

/// Seat map failures, before train context is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatMapError {
    /// Seat number outside `1..=total`.
    #[error("seat {seat} is outside 1..={total}")]
    OutOfRange { seat: SeatNumber, total: u32 },

    /// Every seat is taken.
    #[error("no seats available")]
    NoneAvailable,
}

impl SeatMapError {
    /// Attaches the owning train and converts to a domain error.
    pub fn for_train(self, train_id: TrainId) -> CoreError {
        match self {
            SeatMapError::OutOfRange { seat, .. } => CoreError::SeatOutOfRange { train_id, seat },
            SeatMapError::NoneAvailable => CoreError::NoSeatsAvailable(train_id),
        }
    }
}

/// Per-seat availability, seat `i + 1` stored at index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    seats: Vec<bool>,
}

impl SeatMap {
    /// Creates a map with `total` seats, all available.
    pub fn new(total: u32) -> Self {
        SeatMap {
            seats: vec![true; total as usize],
        }
    }

    /// Number of seats on the train.
    #[inline]
    pub fn total(&self) -> u32 {
        self.seats.len() as u32
    }

    fn index_of(&self, seat: SeatNumber) -> Result<usize, SeatMapError> {
        if seat == 0 || seat > self.total() {
            return Err(SeatMapError::OutOfRange {
                seat,
                total: self.total(),
            });
        }
        Ok((seat - 1) as usize)
    }

    /// Returns whether `seat` is currently available.
    pub fn is_available(&self, seat: SeatNumber) -> Result<bool, SeatMapError> {
        let idx = self.index_of(seat)?;
        Ok(self.seats[idx])
    }

    /// Counts available seats (full scan).
    pub fn available_count(&self) -> u32 {
        self.seats.iter().filter(|&&free| free).count() as u32
    }

    /// Counts taken seats.
    pub fn booked_count(&self) -> u32 {
        self.total() - self.available_count()
    }

    /// Takes the lowest-numbered available seat and returns its number.
    pub fn allocate_first_available(&mut self) -> Result<SeatNumber, SeatMapError> {
        let idx = self
            .seats
            .iter()
            .position(|&free| free)
            .ok_or(SeatMapError::NoneAvailable)?;
        self.seats[idx] = false;
        Ok(idx as SeatNumber + 1)
    }

    /// Takes exactly `seat`.
    ///
    /// ## Returns
    /// * `Ok(true)` - seat was available and is now taken
    /// * `Ok(false)` - seat was already taken, nothing changed
    pub fn allocate_specific(&mut self, seat: SeatNumber) -> Result<bool, SeatMapError> {
        let idx = self.index_of(seat)?;
        if !self.seats[idx] {
            return Ok(false);
        }
        self.seats[idx] = false;
        Ok(true)
    }

    /// Makes `seat` available again.
    ///
    /// ## Returns
    /// * `Ok(true)` - seat was taken and is now available
    /// * `Ok(false)` - seat was already available, nothing changed
    pub fn release(&mut self, seat: SeatNumber) -> Result<bool, SeatMapError> {
        let idx = self.index_of(seat)?;
        if self.seats[idx] {
            return Ok(false);
        }
        self.seats[idx] = true;
        Ok(true)
    }

    /// Makes every seat available.
    pub fn release_all(&mut self) {
        self.seats.fill(true);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
