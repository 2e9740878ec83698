// crates/infra/src/filesystem.rs
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use photo_datefix_ports::filesystem::{CandidateDto, CandidateScanner, ScanPlan};
use photo_datefix_ports::report::ReportSink;
use photo_datefix_shared_kernel::{DomainError, Result};
use regex::Regex;

const DATED_BASE_NAME: &str = r"^\d{2}-\d{2}-\d{2}_\d{4}$";

/// Filesystem adapter implementing the `CandidateScanner` port.
///
/// The traversal is iterative: a FIFO queue of pending directories is
/// drained one directory at a time, so siblings are visited breadth-first
/// and deep trees never grow the call stack. Unreadable directories are
/// reported and skipped. Symlinked directories are followed without cycle
/// detection and no path de-duplication is performed.
#[derive(Debug)]
pub struct DatedFileScanner {
    pattern: Regex,
}

impl DatedFileScanner {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(DATED_BASE_NAME).map_err(|e| {
            DomainError::InvalidConfiguration { reason: format!("candidate pattern: {e}") }
        })?;
        Ok(Self { pattern })
    }

    fn match_candidate(&self, path: &Path) -> Option<CandidateDto> {
        let extension = path.extension()?.to_str()?;
        if !extension.eq_ignore_ascii_case("jpg") && !extension.eq_ignore_ascii_case("jpeg") {
            return None;
        }
        let base_name = path.file_stem()?.to_str()?;
        if !self.pattern.is_match(base_name) {
            return None;
        }
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_else(PathBuf::new);
        Some(CandidateDto {
            path: path.to_path_buf(),
            directory,
            base_name: base_name.to_string(),
            extension: extension.to_string(),
        })
    }
}

impl CandidateScanner for DatedFileScanner {
    fn scan(&self, plan: &ScanPlan, sink: &dyn ReportSink) -> Result<Vec<CandidateDto>> {
        let mut pending: VecDeque<PathBuf> = VecDeque::new();
        pending.push_back(plan.root.clone());
        let mut candidates = Vec::new();

        while let Some(dir) = pending.pop_front() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    sink.warn(&format!(
                        "Skipping unreadable directory {}: {err}",
                        dir.display()
                    ))?;
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        sink.warn(&format!(
                            "Skipping entry in {}: {err}",
                            dir.display()
                        ))?;
                        continue;
                    }
                };
                let path = entry.path();

                // is_dir follows symlinks, same as the reference behavior;
                // cycles are a known non-goal.
                if path.is_dir() {
                    if plan.recurse {
                        pending.push_back(path);
                    } else {
                        sink.debug(&format!(
                            "not recursing into {}",
                            path.display()
                        ))?;
                    }
                    continue;
                }

                match self.match_candidate(&path) {
                    Some(candidate) => candidates.push(candidate),
                    None => sink.debug(&format!("ignoring {}", path.display()))?,
                }
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    struct NullSink;

    impl ReportSink for NullSink {
        fn info(&self, _message: &str) -> Result<()> {
            Ok(())
        }

        fn debug(&self, _message: &str) -> Result<()> {
            Ok(())
        }

        fn warn(&self, _message: &str) -> Result<()> {
            Ok(())
        }
    }

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("fixture file");
    }

    fn scan(root: &Path, recurse: bool) -> Vec<CandidateDto> {
        let scanner = DatedFileScanner::new().expect("pattern compiles");
        let plan = ScanPlan { root: root.to_path_buf(), recurse };
        scanner.scan(&plan, &NullSink).expect("scan succeeds")
    }

    #[test]
    fn finds_dated_jpgs_and_skips_everything_else() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "12-25-99_1430.jpg");
        touch(temp.path(), "07-04-23_1530.JPEG");
        touch(temp.path(), "holiday.jpg");
        touch(temp.path(), "12-25-99_1430.png");
        touch(temp.path(), "1225-99_1430.jpg");
        touch(temp.path(), "notes.txt");

        let found = scan(temp.path(), true);
        let mut names: Vec<&str> = found.iter().map(|c| c.base_name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["07-04-23_1530", "12-25-99_1430"]);
    }

    #[test]
    fn candidate_components_are_split_out() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "01-02-03_0405.jpeg");

        let found = scan(temp.path(), true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].directory, temp.path());
        assert_eq!(found[0].base_name, "01-02-03_0405");
        assert_eq!(found[0].extension, "jpeg");
        assert_eq!(found[0].path, temp.path().join("01-02-03_0405.jpeg"));
    }

    #[test]
    fn recurses_into_subdirectories_breadth_first() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "01-01-20_0000.jpg");
        let sub = temp.path().join("album");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "02-02-20_0000.jpg");
        let deeper = sub.join("trip");
        fs::create_dir(&deeper).unwrap();
        touch(&deeper, "03-03-20_0000.jpg");

        let found = scan(temp.path(), true);
        let names: Vec<&str> = found.iter().map(|c| c.base_name.as_str()).collect();
        // Root entries come before any subdirectory's, each level before
        // the next.
        assert_eq!(names, vec!["01-01-20_0000", "02-02-20_0000", "03-03-20_0000"]);
    }

    #[test]
    fn norecurse_never_yields_subdirectory_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "01-01-20_0000.jpg");
        let sub = temp.path().join("album");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "02-02-20_0000.jpg");

        let found = scan(temp.path(), false);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base_name, "01-01-20_0000");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "01-01-20_0000.jpg");
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        touch(&locked, "02-02-20_0000.jpg");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let found = scan(temp.path(), true);
        assert_eq!(found.len(), 1);

        // Restore so TempDir can clean up.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn missing_root_yields_no_candidates_but_does_not_fail() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("nope");
        // Root existence is validated by configuration before any scan;
        // the walker itself just reports and keeps going.
        let found = scan(&gone, true);
        assert!(found.is_empty());
    }
}
