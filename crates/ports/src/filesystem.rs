// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use photo_datefix_shared_kernel::Result;
use serde::{Deserialize, Serialize};

use crate::report::ReportSink;

/// Input parameters controlling the candidate walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    pub root: PathBuf,
    pub recurse: bool,
}

/// DTO representing one dated photo file discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDto {
    /// Full path to the file.
    pub path: PathBuf,
    /// Directory the file was found in.
    pub directory: PathBuf,
    /// File name without the extension, e.g. `12-25-99_1430`.
    pub base_name: String,
    /// Extension as found on disk, e.g. `jpg` or `JPEG`.
    pub extension: String,
}

/// Port for walking a directory tree for dated photo files.
///
/// Candidates are returned in discovery order: directories breadth-first
/// in the order they were found, entries within a directory in the order
/// the platform yields them.
pub trait CandidateScanner: Send + Sync {
    fn scan(&self, plan: &ScanPlan, sink: &dyn ReportSink) -> Result<Vec<CandidateDto>>;
}
