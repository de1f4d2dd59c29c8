//! Inline-code and fenced-code-block recognizers.
//!
//! Inline spans are delimited by single backticks. Blocks are delimited by
//! triple-backtick fences and have their own micro-grammar: the first line of
//! the fence doubles as either a language tag or the first line of content,
//! depending on whether it contains whitespace. A fence line like
//! ```` ```js {1} ```` is a line-highlighting hint, not a language, and must
//! survive verbatim in the body.

use crate::{
    scanning::{scan_until, scan_while},
    token::Token,
};

/// Opening and closing delimiter of a fenced block.
const FENCE: &str = "```";

/// Try to match an inline code span at `offset`.
///
/// The closing backtick is consumed when present; an unterminated span
/// soft-fails and takes the rest of the input as content.
pub(crate) fn inline(input: &str, offset: usize) -> Option<(Token, usize)> {
    if !input[offset..].starts_with('`') {
        return None;
    }
    let content_start = offset + 1;
    let (content_end, closed) = scan_until(input, content_start, '`');
    let token = Token::CodeInline {
        content: input[content_start..content_end].to_string(),
    };
    Some((token, content_end - offset + usize::from(closed)))
}

/// Try to match a fenced code block at `offset`.
///
/// Two-phase scan: the first line runs up to a line break or a same-line
/// closing fence, then the body runs up to the closing fence. Consumption
/// spans both fences; a missing closing fence soft-fails at end of input.
pub(crate) fn block(input: &str, offset: usize) -> Option<(Token, usize)> {
    if !input[offset..].starts_with(FENCE) {
        return None;
    }
    let first_start = offset + FENCE.len();
    let first_end = scan_while(input, first_start, |ch| ch != '\n' && ch != '`');
    let first_end = if input[first_end..].starts_with('`') && !input[first_end..].starts_with(FENCE)
    {
        // A stray backtick inside the first line is not a closing fence.
        scan_first_line(input, first_end)
    } else {
        first_end
    };
    let first_line = &input[first_start..first_end];

    if input[first_end..].starts_with(FENCE) {
        // Same-line close, e.g. "```one```".
        let (content, lang) = split_language(first_line, "");
        return Some((
            Token::CodeBlock { content, lang },
            first_end + FENCE.len() - offset,
        ));
    }

    // Skip the line break terminating the first line, when there is one.
    let body_start = if input[first_end..].starts_with('\n') {
        first_end + 1
    } else {
        first_end
    };
    let body_end = find_fence(input, body_start);
    let closed = body_end < input.len();
    let (content, lang) = split_language(first_line, &input[body_start..body_end]);
    let consumed = if closed {
        body_end + FENCE.len() - offset
    } else {
        body_end - offset
    };
    Some((Token::CodeBlock { content, lang }, consumed))
}

/// Continue the first-line scan past backticks that do not open a fence.
fn scan_first_line(input: &str, mut idx: usize) -> usize {
    while idx < input.len() {
        let rest = &input[idx..];
        if rest.starts_with('\n') || rest.starts_with(FENCE) {
            break;
        }
        idx = scan_while(input, idx, |ch| ch == '`');
        idx = scan_while(input, idx, |ch| ch != '\n' && ch != '`');
    }
    idx
}

/// Byte index of the next triple-backtick fence at or after `start`, or the
/// end of the input.
fn find_fence(input: &str, start: usize) -> usize {
    let mut idx = start;
    while idx < input.len() {
        if input[idx..].starts_with(FENCE) {
            return idx;
        }
        // Skip a 1- or 2-backtick run, then advance to the next run.
        idx = scan_while(input, idx, |ch| ch == '`');
        idx = scan_while(input, idx, |ch| ch != '`');
    }
    input.len()
}

/// Decide whether the fence's first line is a language tag or body content.
///
/// Only a non-empty, whitespace-free first line becomes `lang`; anything else
/// is re-joined as the first line of the body.
fn split_language(first_line: &str, body: &str) -> (String, Option<String>) {
    if !first_line.is_empty() && !first_line.contains(char::is_whitespace) {
        (strip_one_newline(body), Some(first_line.to_string()))
    } else {
        (strip_one_newline(&format!("{first_line}\n{body}")), None)
    }
}

/// Remove exactly one trailing line break, if present.
fn strip_one_newline(content: &str) -> String {
    content.strip_suffix('\n').unwrap_or(content).to_string()
}
