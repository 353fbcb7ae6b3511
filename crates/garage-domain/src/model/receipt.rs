//! Outcomes of successful ledger operations

use garage_types::Plate;
use serde::{Deserialize, Serialize};

use super::movement::{plan_departure, Movement};

/// Confirmation of an accepted arrival
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalReceipt {
    pub plate: Plate,
    pub message: String,
}

impl ArrivalReceipt {
    pub(crate) fn new(plate: Plate) -> Self {
        let message = format!("Car with plate number {} has arrived and parked.", plate);
        Self { plate, message }
    }
}

/// Confirmation of an accepted departure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureReceipt {
    pub plate: Plate,
    pub message: String,
    /// Vehicles that were between the exit and the departing vehicle,
    /// nearest-exit first. They now sit at the entrance end.
    pub circled: Vec<Plate>,
    /// Vehicles that were behind the departing vehicle. They moved up
    /// toward the exit without leaving.
    pub remaining: Vec<Plate>,
}

impl DepartureReceipt {
    pub(crate) fn new(plate: Plate, circled: Vec<Plate>, remaining: Vec<Plate>) -> Self {
        let message = format!("Car with plate number {} has departed.", plate);
        Self {
            plate,
            message,
            circled,
            remaining,
        }
    }

    /// True when the vehicle was already at the exit
    pub fn was_at_exit(&self) -> bool {
        self.circled.is_empty()
    }

    /// Order in which a front end has to stage this departure
    pub fn movement_plan(&self) -> Vec<Movement> {
        plan_departure(&self.plate, &self.circled, &self.remaining)
    }
}
