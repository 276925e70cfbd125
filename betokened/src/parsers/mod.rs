//! Primitive parsers.
//!
//! A parser tests the input at the current position of a `StringStream` and, if it applies,
//! consumes what it recognized. A `Matched` outcome always means at least one character was
//! consumed; the end-of-input check is the only exception, since it matches exactly where
//! there is nothing left to consume. `NoMatch` and `Error` never consume anything.

use crate::combinators::{MapToToken, Skipped};
use crate::outcome::ParseOutcome;
use crate::source::Span;
use crate::stream::StringStream;

mod base;
mod chars;
mod delimited;
mod pattern;
mod words;

pub use base::{end_of_input, whitespace, EndOfInput, Whitespace};
pub use chars::{one_char_of, OneCharOf};
pub use delimited::{delimit, quote, Delimited};
pub use pattern::{anchored_regex, AnchoredRegex};
pub use words::{literal, one_of_literals, Literal, OneOfLiterals};

/// A routine that tests and consumes text at the current position of a stream.
pub trait Parser {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome;

    /// Wraps this parser into a recognizer that turns the extracted text into a token.
    ///
    /// Matches that extract no text produce no token.
    fn then_map<T, F>(self, f: F) -> MapToToken<Self, F>
    where
        Self: Sized,
        F: Fn(&str, Span) -> T,
    {
        MapToToken::new(self, f)
    }

    /// Wraps this parser into a recognizer that consumes input but never produces a token.
    fn skipped(self) -> Skipped<Self>
    where
        Self: Sized,
    {
        Skipped::new(self)
    }
}

/// A parser backed by a closure. Created by `parser_fn`.
#[derive(Clone, Copy)]
pub struct ParserFn<F> {
    f: F,
}

/// Makes a parser out of a closure.
///
/// The closure has to uphold the parser contract: consume nothing unless it returns `Matched`,
/// and consume at least one character when it does.
pub fn parser_fn<F>(f: F) -> ParserFn<F>
where
    F: Fn(&mut StringStream<'_>) -> ParseOutcome,
{
    ParserFn { f }
}

impl<F> Parser for ParserFn<F>
where
    F: Fn(&mut StringStream<'_>) -> ParseOutcome,
{
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        (self.f)(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Position;

    #[test]
    fn closure_parser() {
        let digit = parser_fn(|stream: &mut StringStream<'_>| match stream.peek() {
            Some(c) if c.is_ascii_digit() => {
                let (text, span) = stream.consume(1);
                ParseOutcome::matched(text, span)
            }
            _ => ParseOutcome::NoMatch,
        });

        let mut stream = StringStream::new("7a");
        let span = Span::new(Position::new(0), Position::new(1));
        assert_eq!(digit.parse(&mut stream), ParseOutcome::matched("7", span));
        assert_eq!(digit.parse(&mut stream), ParseOutcome::NoMatch);
        assert_eq!(stream.remaining(), "a");
    }
}
