//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the reconciliation run:
//!
//! - [`orchestrator`]: walks candidates and reconciles each file's
//!   embedded capture date with its filename date
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{FileOutcome, FileReport, ReconcileOutput};
pub use orchestrator::ReconcilePhotos;
