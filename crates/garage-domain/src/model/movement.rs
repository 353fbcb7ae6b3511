//! Staging order for a departure
//!
//! The ledger finishes a departure in one step. A front end that animates or
//! narrates it needs the individual moves in a fixed order: blockers leave
//! nearest-exit first, the target leaves, the vehicles behind it move up,
//! then the blockers re-enter in reverse so the one that left first comes
//! back last.

use garage_types::Plate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "plates", rename_all = "snake_case")]
pub enum Movement {
    /// A blocking vehicle leaves through the exit
    CircleOut(Plate),
    /// The requested vehicle leaves for good
    Depart(Plate),
    /// Vehicles behind the departed one move toward the exit
    ShiftForward(Vec<Plate>),
    /// A blocking vehicle comes back in at the entrance
    ReEnter(Plate),
}

impl Movement {
    pub fn describe(&self) -> String {
        match self {
            Movement::CircleOut(plate) => format!("{} circles out of the exit", plate),
            Movement::Depart(plate) => format!("{} leaves the garage", plate),
            Movement::ShiftForward(plates) => {
                let names: Vec<&str> = plates.iter().map(Plate::as_str).collect();
                format!("{} move up toward the exit", names.join(", "))
            }
            Movement::ReEnter(plate) => format!("{} re-enters at the entrance", plate),
        }
    }
}

pub(crate) fn plan_departure(plate: &Plate, circled: &[Plate], remaining: &[Plate]) -> Vec<Movement> {
    let mut plan = Vec::with_capacity(circled.len() * 2 + 2);
    plan.extend(circled.iter().cloned().map(Movement::CircleOut));
    plan.push(Movement::Depart(plate.clone()));
    if !remaining.is_empty() {
        plan.push(Movement::ShiftForward(remaining.to_vec()));
    }
    plan.extend(circled.iter().rev().cloned().map(Movement::ReEnter));
    plan
}
