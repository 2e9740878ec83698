// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-line human-readable summary.
    #[default]
    Text,
    /// Summary counters as a JSON object.
    Json,
}

/// Aligns photo EXIF capture dates with the `MM-DD-YY_HHMM` date encoded
/// in their filenames.
#[derive(Debug, Parser)]
#[command(name = "photo_datefix", version, about)]
pub struct Args {
    /// Root directory to scan.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Descend into subdirectories (default).
    #[arg(long, overrides_with = "norecurse")]
    pub recurse: bool,

    /// Scan only the top-level directory.
    #[arg(long, overrides_with = "recurse")]
    pub norecurse: bool,

    /// Report proposed changes without modifying any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Ask before each write instead of auto-confirming.
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Continue past metadata write failures instead of aborting.
    #[arg(long)]
    pub keep_going: bool,

    /// Emit internal diagnostic messages.
    #[arg(long)]
    pub debug: bool,

    /// Emit per-file progress messages (default).
    #[arg(long, overrides_with = "noverbose")]
    pub verbose: bool,

    /// Suppress per-file progress messages.
    #[arg(long, overrides_with = "verbose")]
    pub noverbose: bool,

    /// Run-summary output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// exiftool executable to use as the metadata codec.
    #[arg(long, value_name = "PATH", default_value = "exiftool")]
    pub exiftool: String,
}

impl Args {
    /// `--recurse` unless the last override was `--norecurse`.
    pub fn recurse(&self) -> bool {
        !self.norecurse
    }

    /// `--verbose` unless the last override was `--noverbose`.
    pub fn verbose(&self) -> bool {
        !self.noverbose
    }
}
