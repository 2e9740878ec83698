// crates/ports/src/report.rs
use photo_datefix_shared_kernel::Result;

/// Port for per-file progress and diagnostic reporting.
///
/// Keeps the engine and the walker free of direct console output.
pub trait ReportSink: Send + Sync {
    /// Informational per-file progress (suppressed unless verbose).
    fn info(&self, message: &str) -> Result<()>;

    /// Internal diagnostics (shown only in debug mode).
    fn debug(&self, message: &str) -> Result<()>;

    /// Non-fatal problems: unreadable directories, malformed filenames.
    fn warn(&self, message: &str) -> Result<()>;
}
