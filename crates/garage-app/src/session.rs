//! Command session
//!
//! A session owns the only ledger and applies one command at a time, so a
//! front end never has two mutations in flight. Ledger rejections are
//! recorded as events rather than returned as errors.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use garage_domain::{ArrivalReceipt, DepartureReceipt, GarageLedger, GarageStatus};
use garage_types::{Error, GarageError, Plate, Result};

use crate::command::{parse_script, Command};
use crate::config::Config;
use crate::plates::PlateGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Arrive,
    Depart,
}

/// A ledger operation that was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub action: Action,
    pub plate: Plate,
    pub kind: &'static str,
    pub message: String,
}

impl Rejection {
    fn new(action: Action, plate: Plate, error: &GarageError) -> Self {
        Self {
            action,
            plate,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Arrived(ArrivalReceipt),
    Departed(DepartureReceipt),
    Rejected(Rejection),
    Status(GarageStatus),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub at: DateTime<Utc>,
    /// Script line that produced the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Event {
    fn now(outcome: Outcome) -> Self {
        Self {
            at: Utc::now(),
            line: None,
            outcome,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected(_))
    }

    /// Human-readable message, when the outcome carries one
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Arrived(receipt) => Some(&receipt.message),
            Outcome::Departed(receipt) => Some(&receipt.message),
            Outcome::Rejected(rejection) => Some(&rejection.message),
            Outcome::Status(_) => None,
        }
    }
}

/// Result of replaying a script
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub events: Vec<Event>,
    pub rejected: usize,
    pub final_status: GarageStatus,
}

pub struct Session {
    ledger: GarageLedger,
    plates: PlateGenerator,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        info!("opening garage with {} spaces", config.capacity);
        Self {
            ledger: GarageLedger::with_capacity(config.capacity),
            plates: PlateGenerator::new(config.plate_seed),
        }
    }

    pub fn ledger(&self) -> &GarageLedger {
        &self.ledger
    }

    pub fn status(&self) -> GarageStatus {
        self.ledger.status()
    }

    /// Park `plate`. Surrounding whitespace is ignored; an empty plate is
    /// an input error and never reaches the ledger.
    pub fn arrive(&mut self, plate: &str) -> Result<Event> {
        let plate = clean_plate(plate)?;
        Ok(Event::now(self.arrive_plate(Plate::from(plate))))
    }

    pub fn depart(&mut self, plate: &str) -> Result<Event> {
        let plate = clean_plate(plate)?;
        let outcome = match self.ledger.record_departure(plate) {
            Ok(receipt) => Outcome::Departed(receipt),
            Err(e) => Outcome::Rejected(Rejection::new(Action::Depart, Plate::from(plate), &e)),
        };
        Ok(Event::now(outcome))
    }

    /// Park a vehicle under a generated plate that is not already parked
    pub fn random_arrival(&mut self) -> Event {
        let plate = self.plates.generate_unused(self.ledger.parked());
        debug!("generated plate {}", plate);
        Event::now(self.arrive_plate(plate))
    }

    /// Apply one command. `Help` and `Quit` touch nothing and give `None`.
    pub fn apply(&mut self, command: &Command) -> Result<Option<Event>> {
        let event = match command {
            Command::Arrive(plate) => self.arrive(plate)?,
            Command::Depart(plate) => self.depart(plate)?,
            Command::Random => self.random_arrival(),
            Command::Status => Event::now(Outcome::Status(self.ledger.status())),
            Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(event))
    }

    /// Replay a script. Every line is parsed before anything is applied;
    /// a `quit` line ends the replay early.
    pub fn run_script(&mut self, text: &str) -> Result<SessionReport> {
        let commands = parse_script(text)?;
        let started_at = Utc::now();
        let mut events = Vec::with_capacity(commands.len());

        for (line, command) in &commands {
            if *command == Command::Quit {
                debug!("script quit at line {}", line);
                break;
            }
            if let Some(mut event) = self.apply(command)? {
                event.line = Some(*line);
                events.push(event);
            }
        }

        let rejected = events.iter().filter(|e| e.is_rejection()).count();
        info!(
            "script finished: {} event(s), {} rejected",
            events.len(),
            rejected
        );

        Ok(SessionReport {
            started_at,
            completed_at: Utc::now(),
            events,
            rejected,
            final_status: self.ledger.status(),
        })
    }

    fn arrive_plate(&mut self, plate: Plate) -> Outcome {
        match self.ledger.record_arrival(plate.clone()) {
            Ok(receipt) => Outcome::Arrived(receipt),
            Err(e) => Outcome::Rejected(Rejection::new(Action::Arrive, plate, &e)),
        }
    }
}

fn clean_plate(plate: &str) -> Result<&str> {
    let plate = plate.trim();
    if plate.is_empty() {
        return Err(Error::EmptyPlate);
    }
    Ok(plate)
}
