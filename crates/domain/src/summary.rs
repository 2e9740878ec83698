// crates/domain/src/summary.rs
use photo_datefix_shared_kernel::{UnchangedCount, UpdatedCount};
use serde::{Deserialize, Serialize};

/// Counters accumulated over one run and reported once at the end.
///
/// Threaded explicitly through the reconciliation engine so there is no
/// process-wide mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub updated: UpdatedCount,
    pub unchanged: UnchangedCount,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_updated(&mut self) {
        self.updated += UpdatedCount::new(1);
    }

    pub fn record_unchanged(&mut self) {
        self.unchanged += UnchangedCount::new(1);
    }

    pub fn total(&self) -> usize {
        self.updated.value() + self.unchanged.value()
    }
}
