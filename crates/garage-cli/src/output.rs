//! Output formatting module

use std::io::Write;

use garage_app::session::{Event, Outcome, SessionReport};
use garage_domain::GarageStatus;
use garage_types::{OutputFormat, Result};

/// Table rendering switches
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_moves: bool,
}

pub fn output_event(out: &mut impl Write, options: RenderOptions, event: &Event) -> Result<()> {
    if options.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
        return Ok(());
    }

    match &event.outcome {
        Outcome::Arrived(receipt) => writeln!(out, "{}", receipt.message)?,
        Outcome::Departed(receipt) => {
            writeln!(out, "{}", receipt.message)?;
            if !receipt.was_at_exit() {
                let circled: Vec<&str> = receipt.circled.iter().map(|p| p.as_str()).collect();
                writeln!(out, "Circled: {}", circled.join(", "))?;
            }
            if options.show_moves {
                for (step, movement) in receipt.movement_plan().iter().enumerate() {
                    writeln!(out, "  {}. {}", step + 1, movement.describe())?;
                }
            }
        }
        Outcome::Rejected(rejection) => writeln!(out, "{}", rejection.message)?,
        Outcome::Status(status) => write_status_table(out, status)?,
    }

    Ok(())
}

pub fn output_report(out: &mut impl Write, options: RenderOptions, report: &SessionReport) -> Result<()> {
    if options.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    for event in &report.events {
        if let Some(line) = event.line {
            write!(out, "[line {:>3}] ", line)?;
        }
        output_event(out, options, event)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Replayed {} command(s), {} rejected",
        report.events.len(),
        report.rejected
    )?;
    write_status_table(out, &report.final_status)?;
    Ok(())
}

fn write_status_table(out: &mut impl Write, status: &GarageStatus) -> Result<()> {
    writeln!(out, "\nGarage Status")?;
    writeln!(out, "=============")?;
    writeln!(
        out,
        "Available Spaces: {}/{} ({})",
        status.available_spaces(),
        status.capacity,
        status.grade().label()
    )?;

    if status.parked.is_empty() {
        writeln!(out, "No cars currently parked")?;
    } else {
        for (index, (plate, label)) in status.labeled().enumerate() {
            let label = label.map(|l| l.label()).unwrap_or("");
            writeln!(out, "  {:>2}. {:<16} {}", index + 1, plate, label)?;
        }
    }

    writeln!(out, "Total Arrivals:   {}", status.total_arrivals)?;
    writeln!(out, "Total Departures: {}", status.total_departures)?;
    writeln!(out, "Total Movements:  {}", status.total_movements)?;

    if !status.movements.is_empty() {
        writeln!(out, "\n{:<16} {:>9}", "Plate", "Movements")?;
        writeln!(out, "{}", "-".repeat(26))?;
        for entry in &status.movements {
            writeln!(out, "{:<16} {:>9}", entry.plate, entry.movements)?;
        }
    }

    Ok(())
}
