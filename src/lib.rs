//! Tokenizer for chat-style message markup.
//!
//! Converts a raw message string into an ordered sequence of typed tokens:
//! plain text, custom emoji (`<:name:id>`, `<a:name:id>`), user mentions
//! (`<@id>`), role mentions (`<@&id>`), channel references (`<#id>`),
//! relative timestamps (`<t:seconds:format>`), inline code, fenced code
//! blocks, and headings (`#` to `###` at the start of a line).
//!
//! Tokenization is total: anything that fails to parse as markup falls
//! through to plain text, and unterminated constructs soft-fail at the end of
//! the input instead of erroring. The tokenizer only segments the message;
//! escaping, identifier resolution and timestamp formatting belong to the
//! renderer consuming the token stream.
//!
//! ```
//! use chatmark::{Token, tokenize};
//!
//! let tokens = tokenize("deploy finished <a:party:123> see <#456>");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Text { content: "deploy finished ".into() },
//!         Token::Emoji { name: "party".into(), id: "123".into(), animated: true },
//!         Token::Text { content: " see ".into() },
//!         Token::Channel { id: "456".into() },
//!     ]
//! );
//! ```

mod code;
mod emoji;
mod heading;
mod mention;
mod scanning;
mod timestamp;
mod token;
mod tokenize;

pub use token::Token;
pub use tokenize::{tokenize, tokenize_spans};
