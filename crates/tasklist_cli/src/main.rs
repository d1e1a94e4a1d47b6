//! `tasklist` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the task database.
//! - Translate subcommands into board intents and render the result.

mod cli;
mod commands;
mod config;
mod error;
mod render;

use clap::Parser;
use cli::Cli;
use config::AppConfig;
use error::CliError;
use log::{error, info};
use std::process;
use tasklist_core::storage::open_db;
use tasklist_core::{
    core_version, init_logging, SlotTaskRepository, SqliteSlotStore, SystemClock, TaskBoard,
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("event=cli_exit module=cli status=error error={err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::resolve(&cli)?;

    // Logging failures are reported, never fatal.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    if let Some(parent) = config.db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            CliError::Config(format!("cannot create `{}`: {err}", parent.display()))
        })?;
    }
    let conn = open_db(&config.db_path)?;
    let repo = SlotTaskRepository::new(SqliteSlotStore::new(&conn));
    let mut board = TaskBoard::load(repo, SystemClock);

    commands::run(&mut board, cli.command)
}
