// src/main.rs
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use photo_datefix_infra::{ConsoleConfirmer, ConsoleReport, DatedFileScanner, ExifToolCodec};
use photo_datefix_usecase::ReconcilePhotos;

mod args;
mod config;
mod presentation;

use args::Args;
use config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let scanner = DatedFileScanner::new().context("building candidate scanner")?;
    let codec = ExifToolCodec::with_command(&config.exiftool);
    let confirmer = ConsoleConfirmer::new();
    let sink = ConsoleReport::new(config.verbose, config.debug);

    let engine = ReconcilePhotos::new(&scanner, &codec, &confirmer, &sink);
    let output = engine
        .run(&config.scan, config.policy, config.reference_year)
        .context("reconciliation run failed")?;

    presentation::print_summary(&output, config.format)
}
