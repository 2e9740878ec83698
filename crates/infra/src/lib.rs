//! # Infrastructure
//!
//! Adapters implementing the ports against the real world:
//!
//! - [`filesystem`]: queue-driven directory walker for dated photo files
//! - [`exiftool`]: capture-date codec shelling out to exiftool
//! - [`console`]: stdin confirmer and stdout/stderr reporter

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod exiftool;
pub mod filesystem;

pub use console::{ConsoleConfirmer, ConsoleReport};
pub use exiftool::ExifToolCodec;
pub use filesystem::DatedFileScanner;
