// src/config.rs
use chrono::{Datelike, Local};
use photo_datefix_domain::ReconcilePolicy;
use photo_datefix_ports::filesystem::ScanPlan;
use photo_datefix_shared_kernel::{DomainError, ReferenceYear, Result};

use crate::args::{Args, OutputFormat};

/// Immutable run configuration built once from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub scan: ScanPlan,
    pub policy: ReconcilePolicy,
    pub reference_year: ReferenceYear,
    pub verbose: bool,
    pub debug: bool,
    pub format: OutputFormat,
    pub exiftool: String,
}

impl Config {
    /// Validates the root directory and captures the reference year from
    /// the wall clock; everything downstream is deterministic after this.
    pub fn from_args(args: Args) -> Result<Self> {
        Self::build(args, ReferenceYear::new(Local::now().year()))
    }

    fn build(args: Args, reference_year: ReferenceYear) -> Result<Self> {
        if !args.directory.is_dir() {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "'{}' does not exist or is not a directory",
                    args.directory.display()
                ),
            }
            .into());
        }

        Ok(Self {
            scan: ScanPlan { root: args.directory.clone(), recurse: args.recurse() },
            policy: ReconcilePolicy {
                dry_run: args.dry_run,
                interactive: args.interactive,
                keep_going: args.keep_going,
            },
            reference_year,
            verbose: args.verbose(),
            debug: args.debug,
            format: args.format,
            exiftool: args.exiftool,
        })
    }
}
