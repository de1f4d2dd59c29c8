//! Cursor-driven dispatch loop.
//!
//! At each cursor position the recognizers are tried in a fixed priority
//! order; the first match wins and advances the cursor by the consumed byte
//! length. Characters nobody claims accumulate into a pending plain-text run
//! that is flushed before the next structured token and at end of input.

use std::ops::Range;

use crate::{code, emoji, heading, mention, timestamp, token::Token};

type Recognizer = fn(&str, usize) -> Option<(Token, usize)>;

/// Recognizer priority order.
///
/// The order is part of the contract: `<@&` (role) extends `<@` (user), so
/// the role recognizer must come first or user mentions would swallow role
/// mentions, and the triple-backtick fence must be tried before the single
/// backtick. Headings lead because the line-start test rejects almost every
/// position immediately.
const RECOGNIZERS: [Recognizer; 8] = [
    heading::recognize,
    mention::channel,
    emoji::recognize,
    mention::role,
    mention::user,
    code::block,
    code::inline,
    timestamp::recognize,
];

fn recognize_at(input: &str, offset: usize) -> Option<(Token, usize)> {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(input, offset))
}

/// Tokenize a message, returning each token with the byte range of the input
/// it was derived from.
///
/// The ranges partition the input: they are contiguous, non-empty, and cover
/// every byte, so concatenating `&input[range]` over the result reproduces
/// the message exactly.
#[must_use]
pub fn tokenize_spans(input: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;
    while cursor < input.len() {
        if let Some((token, used)) = recognize_at(input, cursor) {
            debug_assert!(used > 0, "recognizers must consume input");
            flush_text(&mut tokens, input, text_start..cursor);
            tokens.push((token, cursor..cursor + used));
            cursor += used;
            text_start = cursor;
        } else {
            cursor += input[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }
    flush_text(&mut tokens, input, text_start..input.len());
    tokens
}

/// Tokenize a message into an ordered token sequence.
///
/// Total over all inputs: malformed markup degrades to [`Token::Text`]
/// rather than failing.
///
/// ```
/// use chatmark::{Token, tokenize};
///
/// let tokens = tokenize("Hey <@270063754576789504>!");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Text { content: "Hey ".into() },
///         Token::Mention { id: "270063754576789504".into() },
///         Token::Text { content: "!".into() },
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

fn flush_text(tokens: &mut Vec<(Token, Range<usize>)>, input: &str, span: Range<usize>) {
    if span.is_empty() {
        return;
    }
    let content = input[span.clone()].to_string();
    tokens.push((Token::Text { content }, span));
}
