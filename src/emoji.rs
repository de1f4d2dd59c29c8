//! Custom-emoji recognizer.
//!
//! Static emoji use `<:name:id>`; animated emoji use `<a:name:id>`. The id
//! maps to an image asset downstream (`.png` for static, `.gif` for
//! animated), which is why the animated flag travels with the token.

use crate::{scanning::scan_until, token::Token};

/// Try to match an emoji reference at `offset`.
pub(crate) fn recognize(input: &str, offset: usize) -> Option<(Token, usize)> {
    let rest = &input[offset..];
    let (animated, prefix_len) = if rest.starts_with("<a:") {
        (true, 3)
    } else if rest.starts_with("<:") {
        (false, 2)
    } else {
        return None;
    };

    let name_start = offset + prefix_len;
    let (name_end, name_closed) = scan_until(input, name_start, ':');
    let id_start = name_end + usize::from(name_closed);
    let (id_end, id_closed) = scan_until(input, id_start, '>');

    let token = Token::Emoji {
        name: input[name_start..name_end].to_string(),
        id: input[id_start..id_end].to_string(),
        animated,
    };
    Some((token, id_end - offset + usize::from(id_closed)))
}
