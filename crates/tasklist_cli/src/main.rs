//! `tasklist` terminal front-end.
//!
//! # Responsibility
//! - Resolve settings from command-line flags.
//! - Wire store, repository, service and view, then run the command loop.
//!
//! # Invariants
//! - Buffered log records are flushed on every exit path of `main`.

mod app;
mod command;
mod console;
mod settings;

use anyhow::{Context, Result};
use console::Console;
use log::{error, info};
use settings::Settings;
use std::io;
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::{
    flush_logging, init_logging, init_stderr_logging, KeyValueTaskRepository,
    SqliteKeyValueStore, TaskService,
};

fn main() -> Result<()> {
    let result = run_session();
    if let Err(err) = &result {
        error!("event=session_end module=cli status=error error={err:#}");
    }
    flush_logging();
    result
}

fn run_session() -> Result<()> {
    let settings = Settings::from_matches(&settings::build_cli().get_matches())?;

    match &settings.log_dir {
        Some(log_dir) => init_logging(&settings.log_level, log_dir),
        None => init_stderr_logging(&settings.log_level),
    }
    .context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        tasklist_core::core_version()
    );

    let conn = match &settings.db_path {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open task store `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory task store")?,
    };
    let service = TaskService::new(KeyValueTaskRepository::new(SqliteKeyValueStore::new(
        &conn,
    )));

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), io::stderr());
    app::run(&service, console)
}
