//! Keeping track of input that is being tokenized.

use crate::source::{Position, Span};
use std::ops::Range;

/// A cursor over the input text.
///
/// `StringStream` holds the full input and the position of the first unconsumed character.
/// Parsers look at the unconsumed suffix through `remaining`, but report spans against the
/// full input, which is what `span_of_len` and `span_of_range` are for.
///
/// The position only ever moves forward.
#[derive(Clone, Debug)]
pub struct StringStream<'a> {
    contents: &'a str,
    position: Position,
}

impl<'a> StringStream<'a> {
    pub fn new(contents: &'a str) -> StringStream<'a> {
        StringStream {
            contents,
            position: Position::default(),
        }
    }

    /// The full input, including the part that was already consumed.
    pub fn contents(&self) -> &'a str {
        self.contents
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The unconsumed suffix of the input.
    pub fn remaining(&self) -> &'a str {
        &self.contents[self.position.offset()..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset() == self.contents.len()
    }

    /// Returns the first unconsumed character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Creates a span starting at the current position and covering `len` bytes.
    pub fn span_of_len(&self, len: usize) -> Span {
        Span::new(self.position, self.position.advance(len))
    }

    /// Converts a range measured against `remaining()` into a span over the full input.
    pub fn span_of_range(&self, range: Range<usize>) -> Span {
        Span::new(
            self.position.advance(range.start),
            self.position.advance(range.end),
        )
    }

    /// Moves the position forward by `len` bytes, returning the span that was skipped.
    ///
    /// `len` must land on a character boundary of the unconsumed input.
    pub fn advance(&mut self, len: usize) -> Span {
        assert!(
            self.remaining().is_char_boundary(len),
            "cannot advance {} bytes from offset {}",
            len,
            self.position
        );
        let span = self.span_of_len(len);
        self.position = span.end;
        span
    }

    /// Like `advance`, but also returns the consumed text.
    pub fn consume(&mut self, len: usize) -> (&'a str, Span) {
        let text = &self.remaining()[..len];
        (text, self.advance(len))
    }
}

impl<'a> From<&'a str> for StringStream<'a> {
    fn from(contents: &'a str) -> StringStream<'a> {
        StringStream::new(contents)
    }
}
