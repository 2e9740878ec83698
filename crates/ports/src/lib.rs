//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: directory traversal for dated photo files
//! - [`codec`]: reading and writing the embedded capture-date field
//! - [`confirm`]: the operator confirmation step
//! - [`report`]: per-file progress and diagnostic output
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod confirm;
pub mod filesystem;
pub mod report;
