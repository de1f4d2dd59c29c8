//! Typed tokens emitted by the tokenizer.
//!
//! `Token` is a closed sum type: every span of a message belongs to exactly
//! one variant. The serialised form carries a camelCase `type` tag so that
//! renderers in other languages can dispatch on it directly.

use serde::Serialize;

/// One segment of a tokenized chat message.
///
/// The tokenizer never escapes or rewrites content: `Text`, `CodeInline` and
/// `CodeBlock` carry verbatim substrings of the input, and escaping for a
/// target format is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token {
    /// Plain text between recognised constructs, passed through verbatim.
    Text { content: String },
    /// Custom emoji reference, `<:name:id>` or `<a:name:id>` when animated.
    Emoji {
        name: String,
        id: String,
        /// Serialised only for animated emoji; static emoji omit the field.
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        animated: bool,
    },
    /// User mention, `<@id>`.
    Mention { id: String },
    /// Role mention, `<@&id>`.
    RoleMention { id: String },
    /// Channel reference, `<#id>`.
    Channel { id: String },
    /// Relative timestamp, `<t:seconds:format>`.
    Timestamp { timestamp: i64, format: String },
    /// Inline code span without its surrounding backticks.
    CodeInline { content: String },
    /// Fenced code block; `lang` is present only when the opening fence
    /// declared a whitespace-free language tag.
    CodeBlock {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    /// Heading text and its nesting level (1 to 3).
    Header { content: String, level: u8 },
}
