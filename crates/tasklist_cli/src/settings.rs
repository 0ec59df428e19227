//! Command-line settings.

use anyhow::{bail, Result};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tasklist_core::default_log_level;

const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";
/// Stderr carries diagnostics only, so it stays quiet below warnings.
const DEFAULT_STDERR_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` selects an in-memory store.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Records go to stderr when unset.
    pub log_dir: Option<String>,
}

pub fn build_cli() -> Command {
    Command::new("tasklist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keeps a local to-do list")
        .arg(
            Arg::new("db")
                .long("db")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("SQLite file holding the task list")
                .conflicts_with("in_memory"),
        )
        .arg(
            Arg::new("in_memory")
                .long("in-memory")
                .help("Keep tasks in memory for this session only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .num_args(1)
                .ignore_case(true)
                .value_parser(PossibleValuesParser::new(LOG_LEVELS))
                .help("Log level (default: debug/info to file, warn to stderr)"),
        )
        .arg(
            Arg::new("log_dir")
                .long("log-dir")
                .num_args(1)
                .help("Absolute directory for rolling log files"),
        )
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let db_path = if matches.get_flag("in_memory") {
            None
        } else {
            Some(
                matches
                    .get_one::<PathBuf>("db")
                    .cloned()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            )
        };

        let log_dir = matches.get_one::<String>("log_dir").cloned();
        if let Some(dir) = &log_dir {
            if dir.trim().is_empty() {
                bail!("--log-dir cannot be empty");
            }
        }

        let log_level = match matches.get_one::<String>("log_level") {
            Some(level) => level.clone(),
            None if log_dir.is_some() => default_log_level().to_string(),
            None => DEFAULT_STDERR_LOG_LEVEL.to_string(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}
