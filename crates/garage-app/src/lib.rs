//! Application service layer - config, command sessions, scripts, plates

pub mod command;
pub mod config;
pub mod plates;
pub mod session;
