//! # Train Commands
//!
//! Listing trains and checking seat availability.

use rail_core::validation::validate_train_id;
use rail_core::{SeatAvailability, TrainId, TrainSummary};
use tracing::debug;

use crate::error::AppResult;
use crate::state::Session;

/// Every train with live seat counts, in registry order.
pub fn list_trains(session: &Session) -> Vec<TrainSummary> {
    session.engine().trains()
}

/// Seat counts for one train.
pub fn check_seat_availability(session: &Session, train_id: TrainId) -> AppResult<SeatAvailability> {
    validate_train_id(train_id)?;
    debug!(train_id, "Checking seat availability");
    Ok(session.engine().check_seat_availability(train_id)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rail_core::BookingEngine;
    use rail_store::{CsvStore, StoreConfig};

    fn session() -> Session {
        Session::new(
            BookingEngine::with_default_trains().unwrap(),
            CsvStore::new(StoreConfig::default()),
        )
    }

    #[test]
    fn test_list_default_trains() {
        let trains = list_trains(&session());
        let names: Vec<_> = trains.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["Express Delhi", "Mumbai Local", "Chennai Mail", "Kolkata Express"]
        );
    }

    #[test]
    fn test_availability() {
        let availability = check_seat_availability(&session(), 1002).unwrap();
        assert_eq!(availability.train_name, "Mumbai Local");
        assert_eq!((availability.available, availability.total), (100, 100));
    }

    #[test]
    fn test_availability_errors() {
        let session = session();
        assert_eq!(
            check_seat_availability(&session, 0).unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            check_seat_availability(&session, 4242).unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
