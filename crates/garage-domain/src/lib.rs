//! Single-lane garage ledger
//!
//! The lane behaves as a queue with one exit. A vehicle that is not at the
//! exit can still leave: every vehicle ahead of it circles out and re-enters
//! at the entrance behind the vehicles that stayed.

pub mod model;
pub mod service;

pub use model::{ArrivalReceipt, DepartureReceipt, GarageStatus, Movement, VehicleMovements};
pub use service::GarageLedger;
