// crates/infra/src/console.rs
use std::io::{self, BufRead, Write};

use photo_datefix_domain::is_affirmative;
use photo_datefix_ports::confirm::{Confirmer, WriteProposal};
use photo_datefix_ports::report::ReportSink;
use photo_datefix_shared_kernel::Result;

/// Blocking stdin confirmer for interactive runs.
///
/// Reads exactly one line per proposal; the walk is suspended until the
/// operator answers.
#[derive(Debug, Default)]
pub struct ConsoleConfirmer;

impl ConsoleConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for ConsoleConfirmer {
    fn confirm(&self, proposal: &WriteProposal) -> Result<bool> {
        let mut stdout = io::stdout();
        match &proposal.existing {
            Some(existing) => write!(
                stdout,
                "{}: replace capture date {existing} with {}? [Y/n] ",
                proposal.path.display(),
                proposal.proposed
            )?,
            None => write!(
                stdout,
                "{}: set capture date to {}? [Y/n] ",
                proposal.path.display(),
                proposal.proposed
            )?,
        }
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Console reporter honoring the verbose and debug flags.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport {
    verbose: bool,
    debug: bool,
}

impl ConsoleReport {
    pub fn new(verbose: bool, debug: bool) -> Self {
        Self { verbose, debug }
    }
}

impl ReportSink for ConsoleReport {
    fn info(&self, message: &str) -> Result<()> {
        if self.verbose {
            println!("{message}");
        }
        Ok(())
    }

    fn debug(&self, message: &str) -> Result<()> {
        if self.debug {
            println!("DEBUG: {message}");
        }
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<()> {
        eprintln!("Warning: {message}");
        Ok(())
    }
}
