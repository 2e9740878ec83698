// src/presentation.rs
use anyhow::Result;
use photo_datefix_usecase::ReconcileOutput;

use crate::args::OutputFormat;

/// Prints the run summary once, after the walk is exhausted.
pub fn print_summary(output: &ReconcileOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Files with EXIF data updated: {}", output.summary.updated.value());
            println!("Files unchanged: {}", output.summary.unchanged.value());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output.summary)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use photo_datefix_domain::RunSummary;
    use serde_json::Value;

    #[test]
    fn summary_serializes_to_flat_counters() {
        let mut summary = RunSummary::new();
        summary.record_updated();
        summary.record_unchanged();
        summary.record_unchanged();

        let json: Value = serde_json::to_value(summary).expect("serializes");
        assert_eq!(json["updated"], 1);
        assert_eq!(json["unchanged"], 2);
    }
}
