//! Outcomes of running parsers, recognizers and tokenizers.
//!
//! Each level distinguishes three cases: the routine does not apply at the current position
//! (`NoMatch`), it applied and consumed input (`Matched`), or it applied and found the input to
//! be malformed (`Error`). `NoMatch` is never an error: it is how alternatives are tried one
//! after another.

use crate::errors::TokenizeError;
use crate::source::Span;

/// Result of running a parser.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ParseOutcome {
    /// The parser does not apply here. Nothing was consumed.
    NoMatch,

    /// The parser consumed the input covered by `span`.
    ///
    /// `text` is the text the parser extracted, which may differ from the consumed text (e.g.
    /// delimiters and escapes are stripped). It is `None` for parsers that only skip input.
    Matched { text: Option<String>, span: Span },

    /// The parser applies here, but the input is malformed.
    Error(TokenizeError),
}

impl ParseOutcome {
    pub fn matched(text: impl Into<String>, span: Span) -> ParseOutcome {
        ParseOutcome::Matched {
            text: Some(text.into()),
            span,
        }
    }

    /// A match that consumed `span` without extracting any text.
    pub fn skipped(span: Span) -> ParseOutcome {
        ParseOutcome::Matched { text: None, span }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseOutcome::NoMatch)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ParseOutcome::Matched { .. })
    }

    /// Converts into a recognition outcome that never carries a token.
    pub fn into_tokenless<T>(self) -> RecognitionOutcome<T> {
        match self {
            ParseOutcome::NoMatch => RecognitionOutcome::NoMatch,
            ParseOutcome::Matched { .. } => RecognitionOutcome::Matched(None),
            ParseOutcome::Error(error) => RecognitionOutcome::Error(error),
        }
    }
}

/// Result of running a recognizer.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum RecognitionOutcome<T> {
    /// The recognizer does not apply here. Nothing was consumed.
    NoMatch,

    /// The recognizer consumed input and produced either a token or nothing.
    Matched(Option<T>),

    /// The recognizer applies here, but the input is malformed.
    Error(TokenizeError),
}

impl<T> RecognitionOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RecognitionOutcome<U> {
        match self {
            RecognitionOutcome::NoMatch => RecognitionOutcome::NoMatch,
            RecognitionOutcome::Matched(token) => RecognitionOutcome::Matched(token.map(f)),
            RecognitionOutcome::Error(error) => RecognitionOutcome::Error(error),
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, RecognitionOutcome::NoMatch)
    }
}

/// Result of running a tokenizer over a stream.
///
/// Either every token produced by the scan, in input order, or the first error encountered.
pub type TokenizationResult<T> = Result<Vec<T>, TokenizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Position;

    #[test]
    fn tokenless_keeps_applicability() {
        let span = Span::new(Position::new(0), Position::new(3));

        let outcome: RecognitionOutcome<()> = ParseOutcome::matched("abc", span).into_tokenless();
        assert_eq!(outcome, RecognitionOutcome::Matched(None));

        let outcome: RecognitionOutcome<()> = ParseOutcome::NoMatch.into_tokenless();
        assert!(outcome.is_no_match());

        let error = TokenizeError::UnterminatedDelimiter(Position::new(0));
        let outcome: RecognitionOutcome<()> = ParseOutcome::Error(error).into_tokenless();
        assert_eq!(outcome, RecognitionOutcome::Error(error));
    }

    #[test]
    fn map_touches_only_tokens() {
        assert_eq!(
            RecognitionOutcome::Matched(Some(2)).map(|n| n * 10),
            RecognitionOutcome::Matched(Some(20))
        );
        assert_eq!(
            RecognitionOutcome::<i32>::Matched(None).map(|n| n * 10),
            RecognitionOutcome::Matched(None)
        );
    }
}
