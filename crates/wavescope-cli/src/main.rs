//! Wavescope CLI - Command-line interface for waveform synthesis and analysis
//!
//! This binary provides commands for generating two-channel signals, viewing
//! their spectra and animation frames, and validating scope configs.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

mod cli_args;

use cli_args::{Cli, Commands};
use wavescope_cli::commands;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            signal,
            json,
            full,
            rows,
            rate_from_time,
        } => commands::generate::run(&signal, json, full, rows, rate_from_time),
        Commands::Frame {
            signal,
            frame,
            count,
            json,
        } => commands::frame::run(&signal, frame, count, json),
        Commands::Validate { signal, json } => commands::validate::run(&signal, json),
        Commands::Series {
            signal,
            terms,
            json,
        } => commands::series::run(&signal, terms, json),
        Commands::Interactive { rows, frames } => commands::interactive::run(rows, frames),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
