//! Tokenization error definitions.

use crate::source::{Position, Span};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// An error that aborts a scan.
///
/// Errors are never recovered from: the first one encountered is reported, and tokens produced
/// before it are discarded.
#[derive(Error, PartialEq, Eq, Clone, Copy, Debug)]
pub enum TokenizeError {
    /// A delimited or quoted region opened at this position was never closed.
    #[error("unterminated delimiter opened at offset {0}")]
    UnterminatedDelimiter(Position),

    /// An explicit end-of-input check found unconsumed input starting at this position.
    #[error("unexpected trailing input at offset {0}")]
    UnexpectedTrailingInput(Position),
}

impl TokenizeError {
    /// Unique code identifying the kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            TokenizeError::UnterminatedDelimiter(_) => "E0001",
            TokenizeError::UnexpectedTrailingInput(_) => "E0002",
        }
    }

    /// Position at which the error was detected.
    pub fn position(&self) -> Position {
        match self {
            TokenizeError::UnterminatedDelimiter(position) => *position,
            TokenizeError::UnexpectedTrailingInput(position) => *position,
        }
    }

    /// Short message describing the problem, without the location.
    pub fn message(&self) -> &'static str {
        match self {
            TokenizeError::UnterminatedDelimiter(_) => "unterminated delimiter",
            TokenizeError::UnexpectedTrailingInput(_) => "unexpected trailing input",
        }
    }

    fn subtitle(&self) -> &'static str {
        match self {
            TokenizeError::UnterminatedDelimiter(_) => "delimiter opened here is never closed",
            TokenizeError::UnexpectedTrailingInput(_) => "expected end of input here",
        }
    }

    /// The span of the character at the error position in `source`.
    ///
    /// The span is empty if the position is at the end of `source`.
    pub fn span(&self, source: &str) -> Span {
        let position = self.position();
        let len = source
            .get(position.offset()..)
            .and_then(|rest| rest.chars().next())
            .map(char::len_utf8)
            .unwrap_or(0);
        Span::new(position, position.advance(len))
    }

    /// Renders the error as a diagnostic attached to the file `file_id` with contents `source`.
    pub fn to_codespan<I: Copy>(&self, file_id: I, source: &str) -> Diagnostic<I> {
        Diagnostic::error()
            .with_code(self.code())
            .with_message(self.message())
            .with_labels(vec![
                Label::primary(file_id, self.span(source).range()).with_message(self.subtitle())
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_position() {
        let error = TokenizeError::UnterminatedDelimiter(Position::new(4));
        assert_eq!(error.to_string(), "unterminated delimiter opened at offset 4");
        assert_eq!(error.code(), "E0001");

        let error = TokenizeError::UnexpectedTrailingInput(Position::new(0));
        assert_eq!(error.to_string(), "unexpected trailing input at offset 0");
        assert_eq!(error.code(), "E0002");
    }

    #[test]
    fn spans_one_character() {
        let source = "ab→c";
        let error = TokenizeError::UnexpectedTrailingInput(Position::new(2));
        assert_eq!(error.span(source).text(source), "→");

        let error = TokenizeError::UnexpectedTrailingInput(Position::new(source.len()));
        assert!(error.span(source).is_empty());
    }

    #[test]
    fn diagnostic_points_at_position() {
        let error = TokenizeError::UnterminatedDelimiter(Position::new(1));
        let diagnostic = error.to_codespan((), " 'oops");
        assert_eq!(diagnostic.code.as_deref(), Some("E0001"));
        assert_eq!(diagnostic.message, "unterminated delimiter");
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].range, 1..2);
    }
}
