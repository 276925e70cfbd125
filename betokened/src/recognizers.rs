//! Recognizers: parsers that produce tokens.
//!
//! A recognizer runs at the current position of a stream, like a parser, but instead of raw
//! text it yields an optional token of a caller-defined type. Recognizers are usually built by
//! calling `Parser::then_map` or `Parser::skipped`, and combined into a `Tokenizer`.

use crate::outcome::RecognitionOutcome;
use crate::parsers::{EndOfInput, Parser, Whitespace};
use crate::stream::StringStream;
use crate::tokenizer::Tokenizer;

/// A routine that consumes input at the current position and may produce a token of type `T`.
pub trait Recognizer<T> {
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T>;

    /// Creates a tokenizer trying `self` first, then `other`.
    fn or_else<R>(self, other: R) -> Tokenizer<T>
    where
        Self: Sized + 'static,
        R: Recognizer<T> + 'static,
    {
        self.into_tokenizer().or_else(other)
    }

    /// Creates a tokenizer consisting of just this recognizer.
    fn into_tokenizer(self) -> Tokenizer<T>
    where
        Self: Sized + 'static,
    {
        Tokenizer::empty().or_else(self)
    }
}

impl<T> Recognizer<T> for Whitespace {
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T> {
        self.parse(stream).into_tokenless()
    }
}

impl<T> Recognizer<T> for EndOfInput {
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T> {
        self.parse(stream).into_tokenless()
    }
}

/// A recognizer backed by a closure. Created by `recognizer_fn`.
#[derive(Clone, Copy)]
pub struct RecognizerFn<F> {
    f: F,
}

/// Makes a recognizer out of a closure.
pub fn recognizer_fn<T, F>(f: F) -> RecognizerFn<F>
where
    F: Fn(&mut StringStream<'_>) -> RecognitionOutcome<T>,
{
    RecognizerFn { f }
}

impl<T, F> Recognizer<T> for RecognizerFn<F>
where
    F: Fn(&mut StringStream<'_>) -> RecognitionOutcome<T>,
{
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T> {
        (self.f)(stream)
    }
}
