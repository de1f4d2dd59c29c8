//! Channel, user-mention and role-mention recognizers.
//!
//! The three grammars are identical apart from their opening sigil: a literal
//! prefix, an opaque identifier, and a closing `>`. The identifier is carried
//! verbatim; resolving it to a display name is a renderer concern.
//!
//! `<@&` is a strict extension of `<@`, so the dispatch table must try the
//! role recognizer before the user recognizer.

use crate::{scanning::scan_until, token::Token};

/// Match `prefix` at `offset` and scan the identifier up to `>`.
///
/// An unterminated reference soft-fails: the scan stops at the end of the
/// input and whatever accumulated becomes the identifier.
fn reference(
    input: &str,
    offset: usize,
    prefix: &str,
    build: fn(String) -> Token,
) -> Option<(Token, usize)> {
    if !input[offset..].starts_with(prefix) {
        return None;
    }
    let id_start = offset + prefix.len();
    let (id_end, closed) = scan_until(input, id_start, '>');
    let id = input[id_start..id_end].to_string();
    Some((build(id), id_end - offset + usize::from(closed)))
}

/// `<#id>` channel reference.
pub(crate) fn channel(input: &str, offset: usize) -> Option<(Token, usize)> {
    reference(input, offset, "<#", |id| Token::Channel { id })
}

/// `<@id>` user mention. Relies on [`role`] being tried first so the `<@&`
/// form never reaches this recognizer.
pub(crate) fn user(input: &str, offset: usize) -> Option<(Token, usize)> {
    reference(input, offset, "<@", |id| Token::Mention { id })
}

/// `<@&id>` role mention.
pub(crate) fn role(input: &str, offset: usize) -> Option<(Token, usize)> {
    reference(input, offset, "<@&", |id| Token::RoleMention { id })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn channel_reference() {
        let (token, used) = channel("<#1154529035214848030>", 0).expect("channel should match");
        assert_eq!(
            token,
            Token::Channel {
                id: "1154529035214848030".into(),
            }
        );
        assert_eq!(used, "<#1154529035214848030>".len());
    }

    #[test]
    fn user_mention() {
        let (token, used) = user("<@270063754576789504> hi", 0).expect("mention should match");
        assert_eq!(
            token,
            Token::Mention {
                id: "270063754576789504".into(),
            }
        );
        assert_eq!(used, "<@270063754576789504>".len());
    }

    #[test]
    fn role_mention() {
        let (token, used) = role("<@&910945073624129607>", 0).expect("role should match");
        assert_eq!(
            token,
            Token::RoleMention {
                id: "910945073624129607".into(),
            }
        );
        assert_eq!(used, "<@&910945073624129607>".len());
    }

    #[rstest]
    #[case("<#123", "123")]
    #[case("<#", "")]
    fn unterminated_reference_soft_fails(#[case] input: &str, #[case] id: &str) {
        let (token, used) = channel(input, 0).expect("soft-fail should still match");
        assert_eq!(token, Token::Channel { id: id.into() });
        assert_eq!(used, input.len());
    }

    #[test]
    fn wrong_prefix_is_no_match() {
        assert!(channel("<@1>", 0).is_none());
        assert!(role("<@1>", 0).is_none());
        assert!(user("<#1>", 0).is_none());
    }
}
