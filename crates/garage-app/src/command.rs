//! Text commands for shells and scripts
//!
//! One command per line. Words are split shell-style, so a plate with a
//! space can be quoted (`arrive "ABC 123"`); unquoted trailing words are
//! joined with single spaces (`arrive ABC 123` means the same).

use garage_types::ScriptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arrive(String),
    Depart(String),
    Status,
    /// Arrive with a freshly generated plate
    Random,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  arrive <plate>   park a vehicle at the entrance   (aliases: park, a)
  depart <plate>   remove a vehicle, circling those ahead of it   (aliases: leave, d)
  random           park a vehicle with a random plate   (alias: r)
  status           show the lane and counters   (alias: s)
  help             show this help   (alias: h, ?)
  quit             leave the shell   (aliases: q, exit)
Quote plates that contain spaces, e.g. arrive \"ABC 123\".";

/// Parse one line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Command>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed).map_err(|_| ScriptError::BadQuoting { line: line_no })?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "arrive" | "park" | "a" => Command::Arrive(plate_arg(head, args, line_no)?),
        "depart" | "leave" | "d" => Command::Depart(plate_arg(head, args, line_no)?),
        "status" | "s" => no_args(Command::Status, args, line_no)?,
        "random" | "r" => no_args(Command::Random, args, line_no)?,
        "help" | "h" | "?" => no_args(Command::Help, args, line_no)?,
        "quit" | "q" | "exit" => no_args(Command::Quit, args, line_no)?,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: head.clone(),
            })
        }
    };

    Ok(Some(command))
}

/// Parse a whole script, stopping at the first bad line.
///
/// Returns each command with its 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line, index + 1)? {
            commands.push((index + 1, command));
        }
    }
    Ok(commands)
}

fn plate_arg(command: &str, args: &[String], line_no: usize) -> Result<String, ScriptError> {
    let plate = args
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if plate.is_empty() {
        return Err(ScriptError::MissingPlate {
            line: line_no,
            command: command.to_string(),
        });
    }
    Ok(plate)
}

fn no_args(command: Command, args: &[String], line_no: usize) -> Result<Command, ScriptError> {
    match args.first() {
        Some(extra) => Err(ScriptError::UnexpectedArgument {
            line: line_no,
            argument: extra.clone(),
        }),
        None => Ok(command),
    }
}
