//! The garage ledger
//!
//! Index 0 of the queue is the exit, the last index is the entrance.
//! Every operation either applies completely or leaves the ledger untouched.

use indexmap::IndexMap;
use log::{debug, warn};

use garage_types::{GarageError, Plate, MAX_CAPACITY};

use crate::model::{ArrivalReceipt, DepartureReceipt, GarageStatus, VehicleMovements};

/// Queue of parked vehicles plus lifetime counters.
///
/// Single writer: mutators take `&mut self` and the caller serializes calls.
#[derive(Debug, Clone)]
pub struct GarageLedger {
    capacity: usize,
    queue: Vec<Plate>,
    movements: IndexMap<Plate, u64>,
    total_arrivals: u64,
    total_departures: u64,
}

impl Default for GarageLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GarageLedger {
    /// Empty ledger with [`MAX_CAPACITY`] spaces
    pub fn new() -> Self {
        Self::with_capacity(MAX_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            queue: Vec::with_capacity(capacity),
            movements: IndexMap::new(),
            total_arrivals: 0,
            total_departures: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    pub fn available_spaces(&self) -> usize {
        self.capacity.saturating_sub(self.queue.len())
    }

    /// Zero-based distance from the exit, first match
    pub fn position_of(&self, plate: &str) -> Option<usize> {
        self.queue.iter().position(|p| p == plate)
    }

    /// Parked vehicles, exit first
    pub fn parked(&self) -> &[Plate] {
        &self.queue
    }

    /// Lifetime movement count; zero for a plate never seen
    pub fn movements_of(&self, plate: &str) -> u64 {
        self.movements.get(plate).copied().unwrap_or(0)
    }

    /// Lifetime movement counts in order of first appearance
    pub fn movement_counts(&self) -> impl Iterator<Item = (&Plate, u64)> + '_ {
        self.movements.iter().map(|(plate, count)| (plate, *count))
    }

    pub fn record_arrival(&mut self, plate: impl Into<Plate>) -> Result<ArrivalReceipt, GarageError> {
        let plate = plate.into();

        if self.is_full() {
            warn!("arrival of {} rejected: garage full ({})", plate, self.capacity);
            return Err(GarageError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.position_of(plate.as_str()).is_some() {
            warn!("arrival of {} rejected: already parked", plate);
            return Err(GarageError::DuplicatePlate(plate));
        }

        self.queue.push(plate.clone());
        self.bump(&plate, 1);
        self.total_arrivals += 1;
        debug!("{} parked at the entrance ({}/{})", plate, self.queue.len(), self.capacity);

        Ok(ArrivalReceipt::new(plate))
    }

    pub fn record_departure(&mut self, plate: &str) -> Result<DepartureReceipt, GarageError> {
        if self.queue.is_empty() {
            warn!("departure of {} rejected: garage empty", plate);
            return Err(GarageError::EmptyGarage);
        }
        let Some(index) = self.position_of(plate) else {
            warn!("departure of {} rejected: not parked", plate);
            return Err(GarageError::NotFound(Plate::from(plate)));
        };

        let circled = self.queue[..index].to_vec();
        let remaining = self.queue[index + 1..].to_vec();

        // [front.., target, back..] -> [target, back.., front..], then drop the target
        self.queue.rotate_left(index);
        let departed = self.queue.remove(0);

        self.total_departures += 1;
        self.bump(&departed, 1);

        for car in &circled {
            self.bump(car, 2);
            self.total_arrivals += 1;
            self.total_departures += 1;
        }

        if circled.is_empty() {
            debug!("{} left from the exit", departed);
        } else {
            debug!(
                "{} left from position {}; {} vehicle(s) circled",
                departed,
                index,
                circled.len()
            );
        }

        Ok(DepartureReceipt::new(departed, circled, remaining))
    }

    pub fn status(&self) -> GarageStatus {
        GarageStatus {
            parked: self.queue.clone(),
            capacity: self.capacity,
            total_arrivals: self.total_arrivals,
            total_departures: self.total_departures,
            total_movements: self.movements.values().sum(),
            movements: self
                .movements
                .iter()
                .map(|(plate, count)| VehicleMovements {
                    plate: plate.clone(),
                    movements: *count,
                })
                .collect(),
        }
    }

    fn bump(&mut self, plate: &Plate, by: u64) {
        *self.movements.entry(plate.clone()).or_insert(0) += by;
    }
}
