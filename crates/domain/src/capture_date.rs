// crates/domain/src/capture_date.rs
use photo_datefix_shared_kernel::ReferenceYear;
use serde::{Deserialize, Serialize};

use crate::filename::FilenameTokens;

/// A capture datetime derived from a dated filename.
///
/// Seconds are always zero: the filename convention carries minute
/// precision only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CaptureDate {
    pub fn from_tokens(tokens: FilenameTokens, reference: ReferenceYear) -> Self {
        Self {
            year: resolve_two_digit_year(tokens.year2, reference),
            month: tokens.month,
            day: tokens.day,
            hour: tokens.hour,
            minute: tokens.minute,
        }
    }

    /// The metadata field's textual form, e.g. `2023:07:04 15:30:00`.
    pub fn exif_datetime(&self) -> String {
        format!(
            "{:04}:{:02}:{:02} {:02}:{:02}:00",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }

    /// Hyphen-separated date used for human-readable comparisons.
    pub fn display_date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Calendar-date equality against an embedded value; time of day is
    /// ignored.
    pub fn same_calendar_date(&self, embedded: &EmbeddedDate) -> bool {
        (self.year, self.month, self.day) == (embedded.year, embedded.month, embedded.day)
    }
}

/// Expands a two-digit filename year against the reference year.
///
/// `candidate = yy + 2000`; a candidate strictly beyond the reference year
/// rolls back to the 1900s. The comparator is `>`, not `>=`, so a two-digit
/// year that lands exactly on the reference year stays in the 2000s.
pub fn resolve_two_digit_year(year2: u32, reference: ReferenceYear) -> i32 {
    let candidate = year2 as i32 + 2000;
    if candidate > reference.value() { year2 as i32 + 1900 } else { candidate }
}

/// The date-only portion of a capture-date string as stored in metadata
/// (`YYYY:MM:DD HH:MM:SS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl EmbeddedDate {
    /// Parses the codec's native textual form, keeping only the date part.
    ///
    /// Returns `None` for anything that does not decompose into three
    /// colon-separated numbers; callers treat that the same as a missing
    /// tag.
    pub fn parse(raw: &str) -> Option<Self> {
        let date_part = raw.split_whitespace().next()?;
        let mut fields = date_part.split(':');
        let year = fields.next()?.parse().ok()?;
        let month = fields.next()?.parse().ok()?;
        let day = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::decompose;

    #[test]
    fn year_in_the_past_stays_in_the_2000s() {
        assert_eq!(resolve_two_digit_year(5, ReferenceYear::new(2024)), 2005);
    }

    #[test]
    fn year_beyond_reference_rolls_back_to_1900s() {
        // `99` evaluated when the reference year is 2005: 2099 > 2005.
        assert_eq!(resolve_two_digit_year(99, ReferenceYear::new(2005)), 1999);
    }

    #[test]
    fn year_equal_to_reference_stays_in_the_2000s() {
        // Strict `>` comparator: landing exactly on the reference year is
        // not "in the future".
        assert_eq!(resolve_two_digit_year(24, ReferenceYear::new(2024)), 2024);
        assert_eq!(resolve_two_digit_year(25, ReferenceYear::new(2024)), 1925);
    }

    #[test]
    fn formats_exif_datetime_with_zero_seconds() {
        let tokens = decompose("07-04-23_1530").unwrap();
        let date = CaptureDate::from_tokens(tokens, ReferenceYear::new(2024));
        assert_eq!(date.exif_datetime(), "2023:07:04 15:30:00");
        assert_eq!(date.display_date(), "2023-07-04");
    }

    #[test]
    fn embedded_date_parses_native_form() {
        let embedded = EmbeddedDate::parse("2023:07:04 09:12:45").expect("parses");
        assert_eq!(embedded, EmbeddedDate { year: 2023, month: 7, day: 4 });
    }

    #[test]
    fn embedded_date_rejects_garbage() {
        assert!(EmbeddedDate::parse("").is_none());
        assert!(EmbeddedDate::parse("not a date").is_none());
        assert!(EmbeddedDate::parse("2023:07:04:01 09:12:45").is_none());
        assert!(EmbeddedDate::parse("2023-07-04 09:12:45").is_none());
    }

    #[test]
    fn calendar_equality_ignores_time_of_day() {
        let tokens = decompose("12-25-99_1430").unwrap();
        let date = CaptureDate::from_tokens(tokens, ReferenceYear::new(2024));
        let embedded = EmbeddedDate::parse("1999:12:25 03:00:00").unwrap();
        assert!(date.same_calendar_date(&embedded));

        let other = EmbeddedDate::parse("1999:12:26 14:30:00").unwrap();
        assert!(!date.same_calendar_date(&other));
    }
}
