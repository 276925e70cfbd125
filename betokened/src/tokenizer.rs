//! Definitions related to tokenizers.

use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::outcome::{RecognitionOutcome, TokenizationResult};
use crate::recognizers::Recognizer;
use crate::stream::StringStream;

/// An ordered list of recognizers, and the loop that drives them over a stream.
///
/// At every position, recognizers are tried in order and the first one that applies wins.
/// There is no longest-match resolution between recognizers, and no backtracking once a
/// recognizer has consumed input, so more specific recognizers should come first.
pub struct Tokenizer<T> {
    recognizers: Vec<Box<dyn Recognizer<T>>>,
}

impl<T> Tokenizer<T> {
    pub fn new(recognizers: Vec<Box<dyn Recognizer<T>>>) -> Tokenizer<T> {
        Tokenizer { recognizers }
    }

    /// A tokenizer with no recognizers. It does not consume anything.
    pub fn empty() -> Tokenizer<T> {
        Tokenizer::new(Vec::new())
    }

    /// Adds `recognizer` to the end of the list, with the lowest precedence.
    pub fn or_else<R>(mut self, recognizer: R) -> Tokenizer<T>
    where
        R: Recognizer<T> + 'static,
    {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    /// Concatenates two tokenizers: recognizers of `self` keep precedence over those of `other`.
    pub fn append(mut self, other: Tokenizer<T>) -> Tokenizer<T> {
        self.recognizers.extend(other.recognizers);
        self
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Scans `stream` from its current position, collecting tokens until the input ends.
    ///
    /// The scan aborts on the first error, discarding the tokens collected so far. If at some
    /// position none of the recognizers apply, the scan stops there and still succeeds with
    /// the tokens collected up to that point, leaving the rest of the input unconsumed. Put
    /// an `EndOfInput` recognizer last to turn that case into an error.
    ///
    /// Every match must consume input, and a recognizer that does not match must leave the
    /// stream where it was. A recognizer breaking either rule stops the scan in the same way.
    pub fn tokenize(&self, stream: &mut StringStream<'_>) -> TokenizationResult<T> {
        debug!(
            "tokenizing from offset {} with {} recognizers",
            stream.position(),
            self.recognizers.len()
        );

        let mut tokens = Vec::new();
        'scanning: while !stream.is_at_end() {
            let start = stream.position();
            for recognizer in &self.recognizers {
                match recognizer.recognize(stream) {
                    RecognitionOutcome::NoMatch => {
                        if stream.position() != start {
                            debug!(
                                "recognizer moved past offset {} without matching, stopping",
                                start
                            );
                            break 'scanning;
                        }
                    }
                    RecognitionOutcome::Matched(token) => {
                        if stream.position() == start {
                            debug!(
                                "recognizer matched at offset {} without consuming input, stopping",
                                start
                            );
                            break 'scanning;
                        }
                        match token {
                            Some(token) => {
                                trace!("token at {}..{}", start, stream.position());
                                tokens.push(token);
                            }
                            None => trace!("skipped {}..{}", start, stream.position()),
                        }
                        continue 'scanning;
                    }
                    RecognitionOutcome::Error(error) => {
                        debug!("tokenizing failed: {}", error);
                        return Err(error);
                    }
                }
            }

            debug!(
                "no recognizer applies at offset {}, leaving {} bytes unconsumed",
                start,
                stream.remaining().len()
            );
            break;
        }

        debug!("tokenizing produced {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Scans the whole of `input` with a fresh stream.
    pub fn tokenize_str(&self, input: &str) -> TokenizationResult<T> {
        self.tokenize(&mut StringStream::new(input))
    }
}

impl<T> Default for Tokenizer<T> {
    fn default() -> Tokenizer<T> {
        Tokenizer::empty()
    }
}

impl<T> FromIterator<Box<dyn Recognizer<T>>> for Tokenizer<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Recognizer<T>>>>(iter: I) -> Tokenizer<T> {
        Tokenizer::new(iter.into_iter().collect())
    }
}

impl<T> fmt::Debug for Tokenizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("recognizers", &self.recognizers.len())
            .finish()
    }
}

/// Builds a `Tokenizer` from a list of recognizers, in order of precedence.
///
/// `tokenizer![a, b, c]` is the same as `a.or_else(b).or_else(c)`.
#[macro_export]
macro_rules! tokenizer {
    ( $( $recognizer:expr ),* $(,)? ) => {{
        let tokenizer = $crate::tokenizer::Tokenizer::empty();
        $(
            let tokenizer = tokenizer.or_else($recognizer);
        )*
        tokenizer
    }};
}
