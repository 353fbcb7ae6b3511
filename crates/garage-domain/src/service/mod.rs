//! Domain services

pub mod ledger;

pub use ledger::GarageLedger;
