// crates/ports/src/codec.rs
use std::path::Path;

use photo_datefix_shared_kernel::Result;

/// Port for the external metadata codec.
///
/// The capture-date field travels as text in the codec's native form,
/// date and time separated by whitespace with colon-separated date
/// components, e.g. `2024:12:25 14:30:00`.
pub trait CaptureDateCodec: Send + Sync {
    /// Returns the embedded capture datetime, or `None` if the field is
    /// not set.
    fn read_capture_date(&self, path: &Path) -> Result<Option<String>>;

    /// Sets the capture-date field and persists the change in place.
    /// On error the original file must be left unmodified (best effort,
    /// delegated to the codec implementation).
    fn write_capture_date(&self, path: &Path, datetime: &str) -> Result<()>;
}
