// crates/domain/src/policy.rs
use serde::{Deserialize, Serialize};

/// Confirmation and failure policy for one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilePolicy {
    /// Report proposed writes without performing them; everything is
    /// treated as confirmed.
    pub dry_run: bool,
    /// Ask the operator before each write instead of auto-confirming.
    pub interactive: bool,
    /// Continue past metadata write failures instead of aborting the run.
    pub keep_going: bool,
}

/// Interprets one line of operator input at the confirmation prompt.
///
/// An empty answer or `y` (case-insensitive) confirms; anything else
/// refuses.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_y_confirm() {
        assert!(is_affirmative(""));
        assert!(is_affirmative("\n"));
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y  "));
    }

    #[test]
    fn anything_else_refuses() {
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("q"));
    }
}
