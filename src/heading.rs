//! Heading recognizer.
//!
//! Headings use ATX-style hash markers and are only recognised at the start
//! of a line: one to three `#` characters followed by a single space. Runs of
//! four or more hashes are not headings and fall through as plain text.

use crate::{
    scanning::{at_line_start, scan_while},
    token::Token,
};

/// Maximum supported heading depth.
const MAX_LEVEL: usize = 3;

/// Try to match a heading at `offset`.
///
/// Consumes up to, but not including, the terminating line break so that the
/// following line still starts a fresh token.
pub(crate) fn recognize(input: &str, offset: usize) -> Option<(Token, usize)> {
    if !at_line_start(input, offset) {
        return None;
    }
    let hashes_end = scan_while(input, offset, |ch| ch == '#');
    let level = hashes_end - offset;
    if level == 0 || level > MAX_LEVEL {
        return None;
    }
    if !input[hashes_end..].starts_with(' ') {
        return None;
    }
    let line_end = scan_while(input, hashes_end, |ch| ch != '\n');
    let content = input[hashes_end + 1..line_end].trim().to_string();
    let token = Token::Header {
        content,
        level: u8::try_from(level).ok()?,
    };
    Some((token, line_end - offset))
}
