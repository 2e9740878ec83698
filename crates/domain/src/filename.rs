// crates/domain/src/filename.rs
use photo_datefix_shared_kernel::{DomainError, DomainResult};

/// Raw numeric tokens decomposed from a dated base name (`MM-DD-YY_HHMM`).
///
/// Values are taken verbatim from the filename. No range validation is
/// applied beyond the digit pattern: a `13` month or `31` hour passes
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameTokens {
    pub month: u32,
    pub day: u32,
    pub year2: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Decomposes a base name (extension already stripped) into its date and
/// time tokens.
pub fn decompose(base_name: &str) -> DomainResult<FilenameTokens> {
    let malformed = |details: &str| DomainError::MalformedFilename {
        name: base_name.to_string(),
        details: details.to_string(),
    };

    let (date_token, time_token) =
        base_name.split_once('_').ok_or_else(|| malformed("missing '_' separator"))?;

    let mut parts = date_token.split('-');
    let month = parse_two_digits(parts.next(), || malformed("missing month token"))?;
    let day = parse_two_digits(parts.next(), || malformed("missing day token"))?;
    let year2 = parse_two_digits(parts.next(), || malformed("missing year token"))?;
    if parts.next().is_some() {
        return Err(malformed("extra '-' separated tokens in date"));
    }

    if time_token.len() != 4 || !time_token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("time token is not four digits"));
    }
    let hour = time_token[..2].parse().map_err(|_| malformed("hour is not numeric"))?;
    let minute = time_token[2..].parse().map_err(|_| malformed("minute is not numeric"))?;

    Ok(FilenameTokens { month, day, year2, hour, minute })
}

fn parse_two_digits(
    token: Option<&str>,
    err: impl Fn() -> DomainError,
) -> DomainResult<u32> {
    let token = token.ok_or_else(&err)?;
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    token.parse().map_err(|_| err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_valid_base_name() {
        let tokens = decompose("07-04-23_1530").expect("valid name decomposes");
        assert_eq!(
            tokens,
            FilenameTokens { month: 7, day: 4, year2: 23, hour: 15, minute: 30 }
        );
    }

    #[test]
    fn keeps_out_of_range_components_verbatim() {
        let tokens = decompose("13-32-99_2961").expect("range is not validated here");
        assert_eq!(tokens.month, 13);
        assert_eq!(tokens.day, 32);
        assert_eq!(tokens.hour, 29);
        assert_eq!(tokens.minute, 61);
    }

    #[test]
    fn rejects_missing_time_separator() {
        let err = decompose("07-04-23").unwrap_err();
        assert!(err.to_string().contains("missing '_'"));
    }

    #[test]
    fn rejects_non_numeric_date_token() {
        assert!(decompose("07-xx-23_1530").is_err());
        assert!(decompose("7-04-23_1530").is_err());
    }

    #[test]
    fn rejects_short_or_alpha_time_token() {
        assert!(decompose("07-04-23_153").is_err());
        assert!(decompose("07-04-23_15a0").is_err());
    }

    #[test]
    fn rejects_extra_date_tokens() {
        assert!(decompose("07-04-23-01_1530").is_err());
    }
}
