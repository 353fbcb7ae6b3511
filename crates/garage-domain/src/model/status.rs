//! Read-only snapshot of the ledger

use garage_types::{OccupancyGrade, Plate, SpotLabel};
use serde::{Deserialize, Serialize};

/// Movement count for a single vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleMovements {
    pub plate: Plate,
    pub movements: u64,
}

/// Snapshot returned by [`GarageLedger::status`](crate::GarageLedger::status)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageStatus {
    /// Parked vehicles, exit first
    pub parked: Vec<Plate>,
    pub capacity: usize,
    pub total_arrivals: u64,
    pub total_departures: u64,
    /// Sum of every vehicle's movement count, departed vehicles included
    pub total_movements: u64,
    /// Per-vehicle counts in order of first appearance
    pub movements: Vec<VehicleMovements>,
}

impl GarageStatus {
    pub fn available_spaces(&self) -> usize {
        self.capacity.saturating_sub(self.parked.len())
    }

    pub fn is_full(&self) -> bool {
        self.parked.len() >= self.capacity
    }

    pub fn occupancy_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        self.parked.len() as f64 / self.capacity as f64
    }

    pub fn grade(&self) -> OccupancyGrade {
        OccupancyGrade::from_ratio(self.occupancy_ratio())
    }

    /// Parked vehicles paired with their Exit/Entrance marker
    pub fn labeled(&self) -> impl Iterator<Item = (&Plate, Option<SpotLabel>)> + '_ {
        let len = self.parked.len();
        self.parked
            .iter()
            .enumerate()
            .map(move |(index, plate)| (plate, SpotLabel::for_index(index, len)))
    }
}
