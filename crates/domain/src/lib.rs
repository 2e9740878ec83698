//! # Domain
//!
//! Pure reconciliation logic, free of I/O.
//!
//! - [`filename`]: decomposition of `MM-DD-YY_HHMM` base names
//! - [`capture_date`]: two-digit-year disambiguation, formatting and
//!   calendar-date comparison
//! - [`summary`]: per-run updated/unchanged counters
//! - [`policy`]: confirmation and write-failure policy

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod capture_date;
pub mod filename;
pub mod policy;
pub mod summary;

pub use capture_date::{CaptureDate, EmbeddedDate, resolve_two_digit_year};
pub use filename::{FilenameTokens, decompose};
pub use policy::{ReconcilePolicy, is_affirmative};
pub use summary::RunSummary;
