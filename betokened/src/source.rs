//! Locations in the input text.

use std::fmt;
use std::ops::{Add, Range};

/// An offset into the input text.
///
/// Positions are byte offsets into the full input, and always fall on a `char` boundary of
/// the input they were produced from.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug, Default)]
pub struct Position(usize);

impl Position {
    pub fn new(offset: usize) -> Position {
        Position(offset)
    }

    pub fn offset(self) -> usize {
        self.0
    }

    /// Number of bytes from `self` to `other`, or zero if `other` comes first.
    pub fn distance_to(self, other: Position) -> usize {
        other.0.saturating_sub(self.0)
    }

    pub fn advance(self, bytes: usize) -> Position {
        Position(self.0 + bytes)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open `[start, end)` range of the input text that produced some result.
///
/// Spans always refer to the original input, never to the unconsumed part of a stream.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Span {
        debug_assert!(start <= end, "span ends before it starts");
        Span { start, end }
    }

    /// Returns a zero-length span located at `position`.
    pub fn empty_at(position: Position) -> Span {
        Span {
            start: position,
            end: position,
        }
    }

    pub fn len(&self) -> usize {
        self.start.distance_to(self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start.offset()..self.end.offset()
    }

    /// Slices the text covered by this span out of the input it refers to.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// The sum of two spans is the smallest span covering both of them.
impl Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
