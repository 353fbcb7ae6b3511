//! Command handlers

use std::io::{self, BufRead, Write};
use std::path::Path;

use garage_app::command::{parse_line, Command, HELP};
use garage_app::config::Config;
use garage_app::plates::PlateGenerator;
use garage_app::session::Session;
use garage_types::{Error, OutputFormat, Result};
use log::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::output::{output_event, output_report, RenderOptions};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Config edits run before the load below so a broken file can be repaired
    if let Commands::Config {
        show,
        set_capacity,
        set_output,
        set_show_moves,
        set_plate_seed,
        reset,
    } = &cli.command
    {
        let edits = ConfigEdits {
            capacity: *set_capacity,
            output_format: *set_output,
            show_moves: *set_show_moves,
            plate_seed: *set_plate_seed,
        };
        return cmd_config(
            &Config::config_path()?,
            *show,
            edits,
            *reset,
            &mut io::stdout(),
        );
    }

    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
        config.validate()?;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match &cli.command {
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            cmd_shell(&config, stdin.lock(), &mut stdout.lock(), true)
        }

        Commands::Run { script, strict } => cmd_run(&config, script, *strict, &mut io::stdout()),

        Commands::Plate { count } => cmd_plate(&config, *count, &mut io::stdout()),

        Commands::Config { .. } => Ok(()),
    }
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        format: config.output_format,
        show_moves: config.show_moves,
    }
}

/// Read commands until `quit` or end of input.
///
/// Each line is applied and fully printed before the next one is read.
fn cmd_shell(config: &Config, input: impl BufRead, out: &mut impl Write, prompt: bool) -> Result<()> {
    let options = render_options(config);
    let mut session = Session::new(config);

    // JSON output stays one event per line
    let prompt = prompt && options.format == OutputFormat::Table;

    if prompt {
        writeln!(
            out,
            "Garage with {} spaces. Type 'help' for commands.",
            config.capacity
        )?;
    }

    let mut line_no = 0;
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "garage> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        line_no += 1;

        let command = match parse_line(&line, line_no) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            command => match session.apply(&command) {
                Ok(Some(event)) => output_event(out, options, &event)?,
                Ok(None) => {}
                Err(Error::EmptyPlate) => writeln!(out, "{}", Error::EmptyPlate)?,
                Err(e) => return Err(e),
            },
        }
    }

    debug!("shell closed after {} line(s)", line_no);
    Ok(())
}

fn cmd_run(config: &Config, script: &Path, strict: bool, out: &mut impl Write) -> Result<()> {
    if !script.exists() {
        return Err(Error::FileNotFound(script.display().to_string()));
    }
    let text = std::fs::read_to_string(script)?;

    let mut session = Session::new(config);
    let report = session.run_script(&text)?;
    output_report(out, render_options(config), &report)?;

    if strict && report.rejected > 0 {
        return Err(Error::Rejected(report.rejected));
    }
    Ok(())
}

fn cmd_plate(config: &Config, count: usize, out: &mut impl Write) -> Result<()> {
    let mut generator = PlateGenerator::new(config.plate_seed);
    let plates: Vec<_> = (0..count).map(|_| generator.generate()).collect();

    if config.output_format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&plates)?)?;
    } else {
        for plate in plates {
            writeln!(out, "{}", plate)?;
        }
    }
    Ok(())
}

/// Values requested through `config --set-*`
#[derive(Debug, Clone, Copy, Default)]
struct ConfigEdits {
    capacity: Option<usize>,
    output_format: Option<OutputFormat>,
    show_moves: Option<bool>,
    plate_seed: Option<u64>,
}

fn cmd_config(path: &Path, show: bool, edits: ConfigEdits, reset: bool, out: &mut impl Write) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        writeln!(out, "Configuration reset to defaults")?;
        writeln!(out, "\n{}", config)?;
        return Ok(());
    }

    // Not validated here: an invalid file must still be editable
    let mut config = Config::read_from(path)?;
    let mut modified = false;

    if let Some(capacity) = edits.capacity {
        config.capacity = capacity;
        modified = true;
    }

    if let Some(output_format) = edits.output_format {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(show_moves) = edits.show_moves {
        config.show_moves = show_moves;
        modified = true;
    }

    if let Some(seed) = edits.plate_seed {
        config.plate_seed = Some(seed);
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        writeln!(out, "Configuration updated")?;
    }

    if show || !modified {
        writeln!(out, "{}", config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_types::ConfigError;
    use std::io::Cursor;

    fn config() -> Config {
        Config {
            plate_seed: Some(5),
            ..Config::default()
        }
    }

    fn shell_output(config: &Config, input: &str) -> String {
        let mut out = Vec::new();
        cmd_shell(config, Cursor::new(input), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_shell_prints_circling() {
        let output = shell_output(&config(), "arrive A\narrive B\narrive C\ndepart B\n");
        assert!(output.contains("Car with plate number A has arrived and parked."));
        assert!(output.contains("Car with plate number B has departed."));
        assert!(output.contains("Circled: A"));
        assert!(output.contains("1. A circles out of the exit"));
        assert!(output.contains("4. A re-enters at the entrance"));
    }

    #[test]
    fn test_shell_hides_moves_when_disabled() {
        let config = Config {
            show_moves: false,
            ..config()
        };
        let output = shell_output(&config, "arrive A\narrive B\ndepart B\n");
        assert!(output.contains("Circled: A"));
        assert!(!output.contains("circles out of the exit"));
    }

    #[test]
    fn test_shell_keeps_going_after_bad_input() {
        let output = shell_output(&config(), "honk\narrive\ndepart X\nstatus\n");
        assert!(output.contains("unknown command 'honk'"));
        assert!(output.contains("'arrive' needs a plate number"));
        assert!(output.contains("Error: Parking is empty!"));
        assert!(output.contains("No cars currently parked"));
    }

    #[test]
    fn test_shell_stops_at_quit() {
        let output = shell_output(&config(), "arrive A\nquit\narrive B\n");
        assert!(output.contains("plate number A"));
        assert!(!output.contains("plate number B"));
    }

    #[test]
    fn test_shell_status_table() {
        let output = shell_output(&config(), "arrive A\narrive B\narrive C\nstatus\n");
        assert!(output.contains("Available Spaces: 7/10 (plenty of space)"));
        assert!(output.contains("(Exit)"));
        assert!(output.contains("(Entrance)"));
        assert!(output.contains("Total Movements:  3"));
    }

    #[test]
    fn test_shell_json_lines() {
        let config = Config {
            output_format: OutputFormat::Json,
            ..config()
        };
        let output = shell_output(&config, "arrive A\ndepart A\n");
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["outcome"], "arrived");
        assert_eq!(lines[1]["outcome"], "departed");
    }

    #[test]
    fn test_run_strict_fails_on_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("rush.txt");
        std::fs::write(&script, "arrive A\ndepart Z\n").unwrap();

        let mut out = Vec::new();
        let err = cmd_run(&config(), &script, true, &mut out).unwrap_err();
        assert!(matches!(err, Error::Rejected(1)));

        let mut out = Vec::new();
        cmd_run(&config(), &script, false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[line   2] Error: Car with plate number Z is not in the parking garage."));
        assert!(output.contains("Replayed 2 command(s), 1 rejected"));
    }

    #[test]
    fn test_run_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = cmd_run(&config(), &dir.path().join("none.txt"), false, &mut out).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_plate_count() {
        let mut out = Vec::new();
        cmd_plate(&config(), 3, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_shell_json_prompt_is_suppressed() {
        let config = Config {
            output_format: OutputFormat::Json,
            ..config()
        };
        let mut out = Vec::new();
        cmd_shell(&config, Cursor::new("arrive A\n"), &mut out, true).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("garage> "));
        let event: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(event["outcome"], "arrived");
    }

    #[test]
    fn test_shell_table_prompt() {
        let mut out = Vec::new();
        cmd_shell(&config(), Cursor::new("arrive A\n"), &mut out, true).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Garage with 10 spaces."));
        assert!(output.contains("garage> Car with plate number A has arrived and parked."));
    }

    fn config_output(path: &Path, edits: ConfigEdits, reset: bool) -> Result<String> {
        let mut out = Vec::new();
        cmd_config(path, false, edits, reset, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_config_set_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let edits = ConfigEdits {
            capacity: Some(4),
            show_moves: Some(false),
            ..ConfigEdits::default()
        };

        let output = config_output(&path, edits, false).unwrap();
        assert!(output.contains("Configuration updated"));

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.capacity, 4);
        assert!(!saved.show_moves);
        assert_eq!(saved.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let edits = ConfigEdits {
            capacity: Some(0),
            ..ConfigEdits::default()
        };
        let err = config_output(&path, edits, false).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
        assert_eq!(Config::load_from(&path).unwrap().capacity, 10);
    }

    #[test]
    fn test_config_reset_repairs_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"capacity": 0}"#).unwrap();
        assert!(Config::load_from(&path).is_err());

        let output = config_output(&path, ConfigEdits::default(), true).unwrap();
        assert!(output.contains("Configuration reset to defaults"));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_set_repairs_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"capacity": 0, "output_format": "json"}"#).unwrap();

        let edits = ConfigEdits {
            capacity: Some(6),
            ..ConfigEdits::default()
        };
        config_output(&path, edits, false).unwrap();

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.capacity, 6);
        assert_eq!(saved.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_show_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"capacity": 0}"#).unwrap();

        let output = config_output(&path, ConfigEdits::default(), false).unwrap();
        assert!(output.contains("Capacity:       0"));
    }
}
