//! Parsers that skip input or check where it ends.

use crate::errors::TokenizeError;
use crate::outcome::ParseOutcome;
use crate::parsers::Parser;
use crate::source::Span;
use crate::stream::StringStream;

/// Skips a maximal run of whitespace, including newlines.
///
/// Does not apply if the next character is not whitespace, so it never produces an empty
/// match. Extracts no text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Whitespace;

pub fn whitespace() -> Whitespace {
    Whitespace
}

impl Parser for Whitespace {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        let remaining = stream.remaining();
        let len = match remaining.find(|c: char| !c.is_whitespace()) {
            Some(idx) => idx,
            None => remaining.len(),
        };
        if len == 0 {
            return ParseOutcome::NoMatch;
        }
        ParseOutcome::skipped(stream.advance(len))
    }
}

/// Asserts that the whole input has been consumed.
///
/// Matches without consuming anything at the end of input, and fails with
/// `UnexpectedTrailingInput` anywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct EndOfInput;

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

impl Parser for EndOfInput {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        if stream.is_at_end() {
            ParseOutcome::skipped(Span::empty_at(stream.position()))
        } else {
            ParseOutcome::Error(TokenizeError::UnexpectedTrailingInput(stream.position()))
        }
    }
}
