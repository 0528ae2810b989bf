//! SRMS - Entry Point
//!
//! Loads configuration, wires the JSON file store and runs the interactive
//! shell on stdin/stdout.

use log::info;
use std::io;
use std::process::ExitCode;

use srms::config::AppConfig;
use srms::error::{AppError, handle_error};
use srms::logging::setup_logging;
use srms::{App, Shell};

fn main() -> ExitCode {
    setup_logging();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => return fail(AppError::from(e)),
    };
    info!("Configuration: {:?}", config);

    let app = App::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&app, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        return fail(AppError::from(e));
    }

    ExitCode::SUCCESS
}

fn fail(err: AppError) -> ExitCode {
    handle_error(&err);
    eprintln!("{}", err);
    ExitCode::FAILURE
}
