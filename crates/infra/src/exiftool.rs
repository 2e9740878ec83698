// crates/infra/src/exiftool.rs
use std::path::Path;
use std::process::{Command, Output};

use photo_datefix_ports::codec::CaptureDateCodec;
use photo_datefix_shared_kernel::{InfrastructureError, Result};

const DEFAULT_COMMAND: &str = "exiftool";
const CAPTURE_DATE_TAG: &str = "DateTimeOriginal";

/// Metadata codec backed by the external `exiftool` program.
///
/// Only two operations are needed: reading and writing the
/// `DateTimeOriginal` tag. `-overwrite_original` makes exiftool replace
/// the file in place on success; on failure it leaves the original
/// untouched.
#[derive(Debug, Clone)]
pub struct ExifToolCodec {
    command: String,
}

impl ExifToolCodec {
    pub fn new() -> Self {
        Self { command: DEFAULT_COMMAND.to_string() }
    }

    /// Uses a different executable name or path, e.g. from `--exiftool`.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    fn invoke(&self, args: &[&str], path: &Path) -> Result<Output> {
        Command::new(&self.command)
            .args(args)
            .arg(path)
            .output()
            .map_err(|source| {
                InfrastructureError::CodecUnavailable { command: self.command.clone(), source }
                    .into()
            })
    }
}

impl Default for ExifToolCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureDateCodec for ExifToolCodec {
    fn read_capture_date(&self, path: &Path) -> Result<Option<String>> {
        // -s3 prints the bare tag value, one line, or nothing if unset.
        let output = self.invoke(&["-s3", &format!("-{CAPTURE_DATE_TAG}")], path)?;
        if !output.status.success() {
            return Err(InfrastructureError::CodecRead {
                path: path.to_path_buf(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    fn write_capture_date(&self, path: &Path, datetime: &str) -> Result<()> {
        let assignment = format!("-{CAPTURE_DATE_TAG}={datetime}");
        let output = self.invoke(&["-overwrite_original", &assignment], path)?;
        if !output.status.success() {
            return Err(InfrastructureError::CodecWrite {
                path: path.to_path_buf(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
