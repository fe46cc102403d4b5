//! # Train Registry
//!
//! Ordered collection of trains, looked up by ID.
//!
//! Lookups are a linear scan returning the first match. Adding a train does
//! not check for an existing ID, so a duplicate ID shadows every later train
//! with the same ID.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Train, TrainId, TrainSummary};
use crate::{DEFAULT_SEATS_PER_TRAIN, DEFAULT_TRAINS};

/// Ordered list of trains.
#[derive(Debug, Clone, Default)]
pub struct TrainRegistry {
    trains: Vec<Train>,
}

impl TrainRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four built-in trains (1001-1004, 100 seats each).
    pub fn with_default_trains() -> CoreResult<Self> {
        let trains = DEFAULT_TRAINS
            .iter()
            .map(|&(id, name)| Train::new(id, name, DEFAULT_SEATS_PER_TRAIN))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(TrainRegistry { trains })
    }

    /// Appends a train. Duplicate IDs are accepted.
    pub fn add(&mut self, train: Train) {
        if self.trains.iter().any(|t| t.id() == train.id()) {
            debug!(train_id = train.id(), "Train ID already registered, new entry is shadowed");
        }
        self.trains.push(train);
    }

    /// First train with `id`, or `TrainNotFound`.
    pub fn find_by_id(&self, id: TrainId) -> CoreResult<&Train> {
        self.trains
            .iter()
            .find(|t| t.id() == id)
            .ok_or(CoreError::TrainNotFound(id))
    }

    /// Mutable access to the first train with `id`, or `TrainNotFound`.
    pub fn find_by_id_mut(&mut self, id: TrainId) -> CoreResult<&mut Train> {
        self.trains
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(CoreError::TrainNotFound(id))
    }

    /// Swaps in a whole new set of trains.
    pub fn replace_all(&mut self, trains: Vec<Train>) {
        self.trains = trains;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Train> {
        self.trains.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Train> {
        self.trains.iter_mut()
    }

    pub fn summaries(&self) -> Vec<TrainSummary> {
        self.trains.iter().map(Train::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
