// crates/usecase/src/orchestrator.rs
use photo_datefix_domain::{CaptureDate, EmbeddedDate, ReconcilePolicy, RunSummary, decompose};
use photo_datefix_ports::codec::CaptureDateCodec;
use photo_datefix_ports::confirm::{Confirmer, WriteProposal};
use photo_datefix_ports::filesystem::{CandidateDto, CandidateScanner, ScanPlan};
use photo_datefix_ports::report::ReportSink;
use photo_datefix_shared_kernel::{ApplicationError, ReferenceYear, Result};

use crate::dto::{FileOutcome, FileReport, ReconcileOutput};

/// Reconciliation engine: walks candidates and aligns each file's embedded
/// capture date with the date encoded in its name.
///
/// Files are processed strictly in discovery order, one at a time; the
/// confirmation step may block on operator input before the next file is
/// touched.
pub struct ReconcilePhotos<'a> {
    scanner: &'a dyn CandidateScanner,
    codec: &'a dyn CaptureDateCodec,
    confirmer: &'a dyn Confirmer,
    sink: &'a dyn ReportSink,
}

impl<'a> ReconcilePhotos<'a> {
    pub fn new(
        scanner: &'a dyn CandidateScanner,
        codec: &'a dyn CaptureDateCodec,
        confirmer: &'a dyn Confirmer,
        sink: &'a dyn ReportSink,
    ) -> Self {
        Self { scanner, codec, confirmer, sink }
    }

    pub fn run(
        &self,
        plan: &ScanPlan,
        policy: ReconcilePolicy,
        reference: ReferenceYear,
    ) -> Result<ReconcileOutput> {
        let candidates = self.scanner.scan(plan, self.sink)?;
        let mut summary = RunSummary::new();
        let mut files = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let outcome = self.reconcile_one(&candidate, policy, reference, &mut summary)?;
            files.push(FileReport { path: candidate.path, outcome });
        }

        Ok(ReconcileOutput { summary, files })
    }

    fn reconcile_one(
        &self,
        candidate: &CandidateDto,
        policy: ReconcilePolicy,
        reference: ReferenceYear,
        summary: &mut RunSummary,
    ) -> Result<FileOutcome> {
        let path = &candidate.path;
        self.sink.info(&format!("Scanning {}", path.display()))?;

        // The walker's pattern filter normally guarantees this succeeds;
        // a name that slips through is skipped rather than aborting the run.
        let tokens = match decompose(&candidate.base_name) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.sink.warn(&format!("Skipping {}: {err}", path.display()))?;
                return Ok(FileOutcome::Skipped);
            }
        };
        let derived = CaptureDate::from_tokens(tokens, reference);

        let existing = self.codec.read_capture_date(path)?;
        match &existing {
            Some(raw) => {
                self.sink.info(&format!("{}: existing capture date {raw}", path.display()))?;
                match EmbeddedDate::parse(raw) {
                    Some(embedded) if derived.same_calendar_date(&embedded) => {
                        self.sink.info(&format!(
                            "{}: capture date matches filename date {}",
                            path.display(),
                            derived.display_date()
                        ))?;
                        summary.record_unchanged();
                        return Ok(FileOutcome::Matched);
                    }
                    Some(_) => {}
                    None => {
                        self.sink.debug(&format!(
                            "{}: unparseable capture date '{raw}', treating as mismatch",
                            path.display()
                        ))?;
                    }
                }
            }
            None => {
                self.sink.info(&format!("{}: no capture date set", path.display()))?;
            }
        }

        let proposal = WriteProposal {
            path: path.clone(),
            existing,
            proposed: derived.exif_datetime(),
        };

        // Dry runs and non-interactive runs are auto-confirmed; only an
        // interactive live run consults the operator.
        let confirmed = if policy.dry_run || !policy.interactive {
            true
        } else {
            self.confirmer.confirm(&proposal)?
        };

        if !confirmed {
            self.sink.info(&format!("{}: left unchanged", path.display()))?;
            summary.record_unchanged();
            return Ok(FileOutcome::Refused);
        }

        if policy.dry_run {
            self.sink.info(&format!(
                "{}: would set capture date to {} (dry run)",
                path.display(),
                proposal.proposed
            ))?;
            summary.record_updated();
            return Ok(FileOutcome::WouldWrite);
        }

        match self.codec.write_capture_date(path, &proposal.proposed) {
            Ok(()) => {
                self.sink.info(&format!(
                    "{}: capture date set to {}",
                    path.display(),
                    proposal.proposed
                ))?;
                summary.record_updated();
                Ok(FileOutcome::Written)
            }
            Err(err) if policy.keep_going => {
                self.sink.warn(&format!(
                    "{}: capture date write failed, continuing: {err}",
                    path.display()
                ))?;
                Ok(FileOutcome::Skipped)
            }
            Err(err) => Err(ApplicationError::ReconciliationAborted {
                path: path.clone(),
                reason: "metadata write failed".to_string(),
                source: Some(Box::new(err)),
            }
            .into()),
        }
    }
}
