//! Maquette CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use maquette::MaquetteError;
use maquette_cli::{Args, error_adapter::to_reportables};

fn init_logging(args: &Args) {
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Maquette");
}

fn report(err: &MaquetteError) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
    }
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args);
    debug!(args:?; "Parsed arguments");

    match maquette_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}
