//! Error types for garage-ledger

use thiserror::Error;

use crate::Plate;

/// Rejections raised by the ledger. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GarageError {
    #[error("Sorry, parking is full!")]
    CapacityExceeded { capacity: usize },

    #[error("Error: Parking is empty!")]
    EmptyGarage,

    #[error("Error: Car with plate number {0} is not in the parking garage.")]
    NotFound(Plate),

    #[error("Error: Car with plate number {0} is already parked.")]
    DuplicatePlate(Plate),
}

impl GarageError {
    /// Stable machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            GarageError::CapacityExceeded { .. } => "capacity_exceeded",
            GarageError::EmptyGarage => "empty_garage",
            GarageError::NotFound(_) => "not_found",
            GarageError::DuplicatePlate(_) => "duplicate_plate",
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Script parsing errors, reported with the 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs a plate number")]
    MissingPlate { line: usize, command: String },

    #[error("line {line}: unbalanced quotes")]
    BadQuoting { line: usize },

    #[error("line {line}: unexpected argument '{argument}'")]
    UnexpectedArgument { line: usize, argument: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("{0}")]
    Garage(#[from] GarageError),

    #[error("Please enter a plate number")]
    EmptyPlate,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0} command(s) were rejected")]
    Rejected(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
