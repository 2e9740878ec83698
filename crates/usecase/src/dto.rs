// crates/usecase/src/dto.rs
use std::path::PathBuf;

use photo_datefix_domain::RunSummary;
use serde::{Deserialize, Serialize};

/// Terminal state of one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// Embedded date already matched the filename date.
    Matched,
    /// Capture date rewritten from the filename.
    Written,
    /// Dry run: a write was proposed and counted but not performed.
    WouldWrite,
    /// Operator refused the proposed write.
    Refused,
    /// File skipped without counting (malformed name, or a write failure
    /// under keep-going).
    Skipped,
}

/// Per-file result paired with its path, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Output of one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutput {
    pub summary: RunSummary,
    pub files: Vec<FileReport>,
}
