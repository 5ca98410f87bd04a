//! Command-line driver: reads an input document and prints the JSON report.

use std::{env, path::PathBuf};

use chrono::NaiveDate;
use fintrack_config::ConfigManager;
use fintrack_core::{parse_record_date, Clock};
use tracing::debug;

use crate::{
    errors::{FintrackError, Result},
    report::{build_report, clock_for, SnapshotInput},
    utils::build_info,
};

const USAGE: &str = "Usage: fintrack_cli <input.json> [--config <path>] [--today YYYY-MM-DD]\n       fintrack_cli version";

/// Options for a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Report(ReportArgs),
    Version,
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    // Bare keywords only count in command position so they stay usable as file names.
    match args.peek().map(String::as_str) {
        Some("version") => return Ok(CliCommand::Version),
        Some("help") => return Ok(CliCommand::Help),
        _ => {}
    }

    let mut input = None;
    let mut config = None;
    let mut today = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => config = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--today" => {
                let raw = flag_value(&mut args, "--today")?;
                today = Some(parse_record_date(&raw)?);
            }
            flag if flag.starts_with("--") => {
                return Err(FintrackError::Usage(format!("unknown flag `{flag}`")));
            }
            _ if input.is_some() => {
                return Err(FintrackError::Usage(format!("unexpected argument `{arg}`")));
            }
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let input = input.ok_or_else(|| FintrackError::Usage("missing input file".into()))?;
    Ok(CliCommand::Report(ReportArgs {
        input,
        config,
        today,
    }))
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| FintrackError::Usage(format!("`{flag}` needs a value")))
}

/// Entry point used by the `fintrack_cli` binary.
pub fn run_cli() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        CliCommand::Version => println!("{}", build_info::current()),
        CliCommand::Help => println!("{USAGE}"),
        CliCommand::Report(args) => println!("{}", run_report(&args)?),
    }
    Ok(())
}

/// Runs a report and returns the serialized JSON.
pub fn run_report(args: &ReportArgs) -> Result<String> {
    let manager = match &args.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    let config = manager.load()?;
    crate::init_with_filter(&config.log_filter);
    debug!(
        config = %manager.config_path().display(),
        day_boundary = %config.day_boundary,
        "loaded configuration"
    );

    let today = args
        .today
        .unwrap_or_else(|| clock_for(config.day_boundary).today());
    let input = SnapshotInput::from_path(&args.input)?;
    let report = build_report(input, config.ingest_mode, today)?;

    let json = if config.pretty_output {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}
