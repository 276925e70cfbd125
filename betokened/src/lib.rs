//! A combinator toolkit for hand-building lexers.
//!
//! Primitive text matchers (parsers, see `parsers`) are turned into token-producing units
//! (recognizers, see `recognizers`) by mapping the text they extract into a caller-defined token
//! type. Recognizers are then listed, in order of precedence, in a `Tokenizer`, which scans an
//! input string from left to right into a sequence of tokens.
//!
//! ```
//! use betokened::parsers::{anchored_regex, one_char_of, EndOfInput, Parser, Whitespace};
//! use betokened::{tokenizer, Span};
//!
//! #[derive(Debug, PartialEq)]
//! enum Token {
//!     Op(char, Span),
//!     Literal(String, Span),
//! }
//!
//! let literal = anchored_regex(r"[^\s+()]+").unwrap();
//! let tokenizer = tokenizer![
//!     Whitespace,
//!     one_char_of("(+)").then_map(|text, span| Token::Op(text.chars().next().unwrap(), span)),
//!     literal.then_map(|text, span| Token::Literal(text.to_string(), span)),
//!     EndOfInput,
//! ];
//!
//! let tokens = tokenizer.tokenize_str("( betokened)   ").unwrap();
//! let kinds: Vec<String> = tokens
//!     .iter()
//!     .map(|token| match token {
//!         Token::Op(c, _) => c.to_string(),
//!         Token::Literal(text, _) => text.clone(),
//!     })
//!     .collect();
//! assert_eq!(kinds, vec!["(", "betokened", ")"]);
//! ```
//!
//! Scanning is synchronous and keeps no state outside of the `StringStream` it is given, so a
//! tokenizer can be reused for any number of inputs.

pub mod combinators;
pub mod errors;
pub mod outcome;
pub mod parsers;
pub mod recognizers;
pub mod source;
pub mod stream;
pub mod tokenizer;

pub use crate::errors::TokenizeError;
pub use crate::outcome::{ParseOutcome, RecognitionOutcome, TokenizationResult};
pub use crate::parsers::Parser;
pub use crate::recognizers::Recognizer;
pub use crate::source::{Position, Span};
pub use crate::stream::StringStream;
pub use crate::tokenizer::Tokenizer;
