//! Combinators turning parsers into recognizers.

use crate::outcome::{ParseOutcome, RecognitionOutcome};
use crate::parsers::Parser;
use crate::recognizers::Recognizer;
use crate::source::Span;
use crate::stream::StringStream;

/// A recognizer that maps the text extracted by a parser into a token.
///
/// Created by `Parser::then_map`.
#[derive(Clone, Copy)]
pub struct MapToToken<P, F> {
    parser: P,
    f: F,
}

impl<P, F> MapToToken<P, F> {
    pub fn new(parser: P, f: F) -> MapToToken<P, F> {
        MapToToken { parser, f }
    }
}

impl<T, P, F> Recognizer<T> for MapToToken<P, F>
where
    P: Parser,
    F: Fn(&str, Span) -> T,
{
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T> {
        match self.parser.parse(stream) {
            ParseOutcome::NoMatch => RecognitionOutcome::NoMatch,
            ParseOutcome::Matched {
                text: Some(text),
                span,
            } => RecognitionOutcome::Matched(Some((self.f)(&text, span))),
            ParseOutcome::Matched { text: None, .. } => RecognitionOutcome::Matched(None),
            ParseOutcome::Error(error) => RecognitionOutcome::Error(error),
        }
    }
}

/// A recognizer that consumes whatever a parser matches and produces no token.
///
/// Created by `Parser::skipped`.
#[derive(Clone, Copy, Debug)]
pub struct Skipped<P> {
    parser: P,
}

impl<P> Skipped<P> {
    pub fn new(parser: P) -> Skipped<P> {
        Skipped { parser }
    }
}

impl<T, P: Parser> Recognizer<T> for Skipped<P> {
    fn recognize(&self, stream: &mut StringStream<'_>) -> RecognitionOutcome<T> {
        self.parser.parse(stream).into_tokenless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TokenizeError;
    use crate::parsers::{anchored_regex, literal, quote, whitespace};
    use crate::source::Position;

    #[derive(PartialEq, Debug)]
    enum Token {
        Literal(String, Span),
    }

    #[test]
    fn maps_text_and_span() {
        let gregory = literal("gregory").then_map(|text, span| Token::Literal(text.into(), span));
        let mut stream = StringStream::new("gregory!");
        assert_eq!(
            gregory.recognize(&mut stream),
            RecognitionOutcome::Matched(Some(Token::Literal(
                "gregory".into(),
                Span::new(Position::new(0), Position::new(7))
            )))
        );
        assert_eq!(gregory.recognize(&mut stream), RecognitionOutcome::NoMatch);
    }

    #[test]
    fn passes_errors_through() {
        let string = quote('"', None).then_map(|text, _| text.to_string());
        let mut stream = StringStream::new("\"open");
        assert_eq!(
            string.recognize(&mut stream),
            RecognitionOutcome::Error(TokenizeError::UnterminatedDelimiter(Position::new(0)))
        );
    }

    #[test]
    fn textless_match_produces_no_token() {
        let spaces = whitespace().then_map(|text, _| text.to_string());
        let mut stream = StringStream::new("   x");
        assert_eq!(spaces.recognize(&mut stream), RecognitionOutcome::Matched(None));
        assert_eq!(stream.remaining(), "x");
    }

    #[test]
    fn skipped_discards_text() {
        let comment = anchored_regex(";[^\n]*").unwrap().skipped();
        let mut stream = StringStream::new("; note\n(");
        let outcome: RecognitionOutcome<Token> = comment.recognize(&mut stream);
        assert_eq!(outcome, RecognitionOutcome::Matched(None));
        assert_eq!(stream.remaining(), "\n(");
    }
}
