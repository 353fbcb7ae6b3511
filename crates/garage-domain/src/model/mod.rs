//! Domain model types

pub mod movement;
pub mod receipt;
pub mod status;

pub use movement::Movement;
pub use receipt::{ArrivalReceipt, DepartureReceipt};
pub use status::{GarageStatus, VehicleMovements};
