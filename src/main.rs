//! `u-fcfs` command-line front end.
//!
//! ```text
//! u-fcfs [--json] [--config FILE] [INPUT]
//! ```
//!
//! Reads a JSON array of process rows from `INPUT` (stdin when absent or
//! `-`), runs the simulation and prints a text report or JSON.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing::{error, info};

use u_fcfs::logging::init_tracing;
use u_fcfs::models::ProcessInput;
use u_fcfs::{render, scheduler, Result, SimulatorConfig};

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

const USAGE: &str = "usage: u-fcfs [--json] [--config FILE] [INPUT]

Reads a JSON array of process rows, e.g.
  [{\"id\": \"P1\", \"arrival\": 0, \"burst\": 5}]
from INPUT (or stdin when INPUT is absent or '-') and prints the FCFS schedule.

options:
  --json           print JSON instead of a text report
  --config FILE    load simulator settings from a JSON file
  -h, --help       show this message";

#[derive(Debug, Default)]
struct Args {
    json: bool,
    config: Option<String>,
    input: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> std::result::Result<Option<Args>, String> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => parsed.json = true,
            "--config" => match args.next() {
                Some(path) => parsed.config = Some(path),
                None => return Err("--config requires a file argument".into()),
            },
            flag if flag.starts_with("--") => return Err(format!("unknown option: {flag}")),
            _ if parsed.input.is_some() => return Err(format!("unexpected argument: {arg}")),
            _ => parsed.input = Some(arg),
        }
    }

    Ok(Some(parsed))
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run(args: &Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => SimulatorConfig::from_json_file(path)?,
        None => SimulatorConfig::default(),
    };

    let text = read_input(args.input.as_deref())?;
    let rows: Vec<ProcessInput> = serde_json::from_str(&text)?;
    info!(rows = rows.len(), max_time_unit = config.max_time_unit, "input loaded");

    let sim = scheduler::simulate(&rows, &config)?;

    if args.json {
        Ok(render::render_json(&sim)?)
    } else {
        Ok(render::render_report(&sim))
    }
}

/// Runs one invocation, writing the report to `out` and diagnostics to
/// `err`. Returns the process exit status.
fn execute(argv: impl Iterator<Item = String>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let args = match parse_args(argv) {
        Ok(Some(args)) => args,
        Ok(None) => return emit(out, USAGE, EXIT_OK),
        Err(msg) => return emit(err, &format!("error: {msg}\n\n{USAGE}"), EXIT_USAGE),
    };

    match run(&args) {
        Ok(output) => emit(out, &output, EXIT_OK),
        Err(e) => {
            error!(err = %e, "simulation failed");
            emit(err, &format!("error: {e}"), EXIT_FAILURE)
        }
    }
}

fn emit(stream: &mut impl Write, text: &str, code: u8) -> u8 {
    match writeln!(stream, "{text}") {
        Ok(()) => code,
        Err(_) => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    init_tracing();
    let code = execute(std::env::args().skip(1), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;
    use u_fcfs::Error;

    fn parse(args: &[&str]) -> std::result::Result<Option<Args>, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap().unwrap();
        assert!(!args.json);
        assert!(args.config.is_none());
        assert!(args.input.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let args = parse(&["--json", "--config", "c.json", "in.json"])
            .unwrap()
            .unwrap();
        assert!(args.json);
        assert_eq!(args.config.as_deref(), Some("c.json"));
        assert_eq!(args.input.as_deref(), Some("in.json"));
    }

    #[test]
    fn test_parse_help_and_errors() {
        assert!(parse(&["--help"]).unwrap().is_none());
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert_eq!(parse(&["-"]).unwrap().unwrap().input.as_deref(), Some("-"));
    }

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn file_args(input: &str) -> Args {
        Args {
            input: Some(input.to_string()),
            ..Args::default()
        }
    }

    fn exec(argv: &[&str]) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(argv.iter().map(|s| s.to_string()), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    const ROWS: &str = r#"[{"id":"P1","arrival":0,"burst":2},{"id":"P2","arrival":5,"burst":3}]"#;

    #[test]
    fn test_run_text_report_from_file() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "rows.json", ROWS);

        let report = run(&file_args(&input)).unwrap();
        assert!(report.starts_with("Gantt Chart (CPU Timeline)"));
        assert!(report.contains("Execution Order: P1 -> P2"));
        assert!(report.contains("CPU Utilization: 62.50% (5 busy, 3 idle)"));
    }

    #[test]
    fn test_run_json_output() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "rows.json", ROWS);
        let args = Args {
            json: true,
            ..file_args(&input)
        };

        let json: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        assert_eq!(json["totalTime"], 8);
        assert_eq!(json["timeMarkers"], serde_json::json!([0, 2, 5, 8]));
        assert_eq!(json["ganttBlocks"][1]["process"], "IDLE");
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = TempDir::new().unwrap();
        let input = write_file(&dir, "rows.json", r#"[{"id":"P1","arrival":0,"burst":800}]"#);
        let args = file_args(&input);
        assert!(matches!(run(&args), Err(Error::Validation(_))));

        let config = write_file(&dir, "config.json", r#"{"max_time_unit": 1000}"#);
        let args = Args {
            config: Some(config),
            ..file_args(&input)
        };
        assert!(run(&args).unwrap().contains("Execution Order: P1"));
    }

    #[test]
    fn test_run_error_kinds() {
        let dir = TempDir::new().unwrap();

        let malformed = write_file(&dir, "bad.json", "[{\"id\": ");
        assert!(matches!(run(&file_args(&malformed)), Err(Error::Json(_))));

        let invalid = write_file(&dir, "dup.json", r#"[{"id":"A","arrival":0,"burst":1},{"id":"A","arrival":1,"burst":1}]"#);
        assert!(matches!(run(&file_args(&invalid)), Err(Error::Validation(_))));

        let missing = dir.path().join("absent.json");
        assert!(!Path::new(&missing).exists());
        let args = file_args(&missing.to_string_lossy());
        assert!(matches!(run(&args), Err(Error::Io(_))));

        let config = write_file(&dir, "config.json", r#"{"max_time_unit": 0}"#);
        let rows = write_file(&dir, "rows.json", ROWS);
        let args = Args {
            config: Some(config),
            ..file_args(&rows)
        };
        assert!(matches!(run(&args), Err(Error::Config(_))));
    }

    #[test]
    fn test_execute_exit_codes() {
        let dir = TempDir::new().unwrap();
        let rows = write_file(&dir, "rows.json", ROWS);
        let empty = write_file(&dir, "empty.json", "[]");

        let (code, out, err) = exec(&[rows.as_str()]);
        assert_eq!(code, EXIT_OK);
        assert!(out.contains("| P1"));
        assert!(err.is_empty());

        let (code, out, _) = exec(&["--help"]);
        assert_eq!(code, EXIT_OK);
        assert!(out.starts_with("usage: u-fcfs"));

        let (code, out, err) = exec(&["--verbose"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(out.is_empty());
        assert!(err.starts_with("error: unknown option: --verbose"));

        let (code, out, err) = exec(&[empty.as_str()]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.starts_with("error: "));
    }
}
