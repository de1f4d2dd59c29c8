//! Byte-level scanning helpers shared by the recognizers.
//!
//! All offsets are byte indexes into the original input, advanced by
//! `char::len_utf8` so every returned position sits on a character boundary.

/// Advance from `start` while the predicate holds.
///
/// Returns the byte index of the first character for which `cond` fails, or
/// the end of the input.
pub(crate) fn scan_while<F>(text: &str, start: usize, mut cond: F) -> usize
where
    F: FnMut(char) -> bool,
{
    let mut idx = start;
    for ch in text[start..].chars() {
        if !cond(ch) {
            break;
        }
        idx += ch.len_utf8();
    }
    idx
}

/// Advance from `start` up to the next occurrence of `delim`.
///
/// Returns the byte index of the delimiter and `true`, or the end of the
/// input and `false` when the delimiter never appears. The delimiter itself
/// is not included in the returned index.
pub(crate) fn scan_until(text: &str, start: usize, delim: char) -> (usize, bool) {
    let end = scan_while(text, start, |ch| ch != delim);
    (end, end < text.len())
}

/// Whether `offset` sits at the start of a line.
///
/// True at the start of the input and immediately after a `\n` (which also
/// covers `\r\n` endings).
pub(crate) fn at_line_start(text: &str, offset: usize) -> bool {
    offset == 0 || text.as_bytes()[offset - 1] == b'\n'
}
