// crates/ports/src/confirm.rs
use std::path::PathBuf;

use photo_datefix_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO describing one proposed metadata write, shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteProposal {
    pub path: PathBuf,
    /// Existing capture datetime, if the tag was present.
    pub existing: Option<String>,
    /// Replacement datetime derived from the filename.
    pub proposed: String,
}

/// Port for the confirmation step.
///
/// Injectable so tests and non-interactive runs never touch real console
/// I/O; the console implementation blocks on one line of operator input.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, proposal: &WriteProposal) -> Result<bool>;
}
