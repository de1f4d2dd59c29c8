//! Relative-timestamp recognizer.
//!
//! `<t:seconds:format>` carries a Unix epoch and a format code (the common
//! codes are `t`, `T`, `d`, `D`, `f`, `F` and `R`). The code is captured
//! verbatim and left for the time formatter to interpret; only the seconds
//! field is validated, because it must parse as an integer.

use crate::{scanning::scan_until, token::Token};

/// Try to match a timestamp at `offset`.
///
/// A seconds field that does not parse as base-10 rejects the match, letting
/// the construct fall through to plain text.
pub(crate) fn recognize(input: &str, offset: usize) -> Option<(Token, usize)> {
    if !input[offset..].starts_with("<t:") {
        return None;
    }
    let seconds_start = offset + 3;
    let (seconds_end, seconds_closed) = scan_until(input, seconds_start, ':');
    let timestamp: i64 = input[seconds_start..seconds_end].parse().ok()?;

    let format_start = seconds_end + usize::from(seconds_closed);
    let (format_end, closed) = scan_until(input, format_start, '>');
    let token = Token::Timestamp {
        timestamp,
        format: input[format_start..format_end].to_string(),
    };
    Some((token, format_end - offset + usize::from(closed)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<t:1630368000:R>", 1_630_368_000, "R")]
    #[case("<t:0:t>", 0, "t")]
    #[case("<t:-86400:D>", -86_400, "D")]
    #[case("<t:1630368000:whatever>", 1_630_368_000, "whatever")]
    fn recognises_timestamps(#[case] input: &str, #[case] seconds: i64, #[case] format: &str) {
        let (token, used) = recognize(input, 0).expect("timestamp should match");
        assert_eq!(
            token,
            Token::Timestamp {
                timestamp: seconds,
                format: format.into(),
            }
        );
        assert_eq!(used, input.len());
    }

    #[test]
    fn unterminated_timestamp_soft_fails() {
        let (token, used) = recognize("<t:1630368000:R", 0).expect("soft-fail should still match");
        assert_eq!(
            token,
            Token::Timestamp {
                timestamp: 1_630_368_000,
                format: "R".into(),
            }
        );
        assert_eq!(used, "<t:1630368000:R".len());
    }

    #[rstest]
    #[case("<t:abc:R>")]
    #[case("<t::R>")]
    #[case("<t:12.5:R>")]
    fn non_numeric_seconds_is_no_match(#[case] input: &str) {
        assert!(recognize(input, 0).is_none());
    }
}
