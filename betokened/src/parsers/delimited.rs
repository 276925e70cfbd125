//! Scanner for delimited and quoted text with an optional escape character.

use crate::errors::TokenizeError;
use crate::outcome::ParseOutcome;
use crate::parsers::Parser;
use crate::stream::StringStream;

/// Consumes text enclosed between an opening and a closing delimiter.
///
/// The extracted text is the content between the delimiters, with escapes resolved. The span
/// covers the delimiters too.
///
/// The escape character only has a special meaning in front of the closing delimiter, where
/// it makes the delimiter part of the content. In front of any other character both the
/// escape and the character are kept as they are.
///
/// When the escape character is the closing delimiter itself (e.g. `''` inside a `'`-quoted
/// string), a single delimiter is ambiguous until the next character is seen: if it is
/// another delimiter, the pair stands for one literal delimiter; otherwise the first one
/// closed the region, and the next character is left unconsumed. A pending delimiter at the
/// very end of input closes the region.
#[derive(Clone, Copy, Debug)]
pub struct Delimited {
    open: char,
    close: char,
    escape: Option<char>,
}

pub fn delimit(open: char, close: char, escape: Option<char>) -> Delimited {
    Delimited {
        open,
        close,
        escape,
    }
}

/// Like `delimit`, but opens and closes with the same `mark`.
pub fn quote(mark: char, escape: Option<char>) -> Delimited {
    delimit(mark, mark, escape)
}

impl Parser for Delimited {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        let remaining = stream.remaining();
        let mut chars = remaining.char_indices();
        match chars.next() {
            Some((_, c)) if c == self.open => {}
            _ => return ParseOutcome::NoMatch,
        }

        let mut content = String::new();
        let mut escaping = false;
        for (idx, c) in chars {
            match self.escape {
                Some(escape) if escaping => {
                    escaping = false;
                    if c == self.close {
                        content.push(c);
                    } else if escape == self.close {
                        // The previous character was the closing delimiter.
                        return finish(stream, content, idx);
                    } else {
                        content.push(escape);
                        content.push(c);
                    }
                }
                Some(escape) if c == escape => escaping = true,
                _ if c == self.close => return finish(stream, content, idx + c.len_utf8()),
                _ => content.push(c),
            }
        }

        if escaping && self.escape == Some(self.close) {
            return finish(stream, content, remaining.len());
        }
        ParseOutcome::Error(TokenizeError::UnterminatedDelimiter(stream.position()))
    }
}

/// Consumes `len` bytes as the delimited region.
fn finish(stream: &mut StringStream<'_>, content: String, len: usize) -> ParseOutcome {
    let span = stream.advance(len);
    ParseOutcome::Matched {
        text: Some(content),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Position;

    /// Runs `parser` on `input`, returning the extracted text, the consumed text and what is
    /// left over.
    fn scan<'a>(parser: Delimited, input: &'a str) -> (String, &'a str, &'a str) {
        let mut stream = StringStream::new(input);
        match parser.parse(&mut stream) {
            ParseOutcome::Matched {
                text: Some(text),
                span,
            } => (text, span.text(input), stream.remaining()),
            outcome => panic!("unexpected outcome for {:?}: {:?}", input, outcome),
        }
    }

    #[test]
    fn plain_delimiters() {
        let (text, consumed, rest) = scan(delimit('{', '}', None), "{betokened}+");
        assert_eq!(text, "betokened");
        assert_eq!(consumed, "{betokened}");
        assert_eq!(rest, "+");
    }

    #[test]
    fn escaped_close_delimiter() {
        let (text, consumed, rest) = scan(delimit('{', '}', Some('^')), "{betoke^}ned}+");
        assert_eq!(text, "betoke}ned");
        assert_eq!(consumed, "{betoke^}ned}");
        assert_eq!(rest, "+");
    }

    #[test]
    fn escape_before_other_characters_is_kept() {
        let (text, _, _) = scan(quote('"', Some('\\')), r#""a\nb\\c""#);
        assert_eq!(text, r"a\nb\\c");
    }

    #[test]
    fn doubled_quote_mark() {
        let (text, consumed, rest) = scan(quote('\'', Some('\'')), "'betoke''ned'+");
        assert_eq!(text, "betoke'ned");
        assert_eq!(consumed, "'betoke''ned'");
        assert_eq!(rest, "+");
    }

    #[test]
    fn doubled_quote_mark_closes_at_end_of_input() {
        let (text, consumed, rest) = scan(quote('\'', Some('\'')), "'betokened'");
        assert_eq!(text, "betokened");
        assert_eq!(consumed, "'betokened'");
        assert_eq!(rest, "");

        let (text, _, _) = scan(quote('\'', Some('\'')), "''");
        assert_eq!(text, "");
    }

    #[test]
    fn doubled_quote_mark_pairs_before_closing() {
        let (text, consumed, rest) = scan(quote('\'', Some('\'')), "'it''s''' x");
        assert_eq!(text, "it's'");
        assert_eq!(consumed, "'it''s'''");
        assert_eq!(rest, " x");
    }

    #[test]
    fn nested_open_delimiter_is_content() {
        let (text, consumed, rest) = scan(delimit('{', '}', None), "{a{b}c}");
        assert_eq!(text, "a{b");
        assert_eq!(consumed, "{a{b}");
        assert_eq!(rest, "c}");
    }

    #[test]
    fn multibyte_delimiters() {
        let (text, consumed, _) = scan(delimit('«', '»', None), "«ça»!");
        assert_eq!(text, "ça");
        assert_eq!(consumed, "«ça»");
    }

    #[test]
    fn does_not_apply_without_open_delimiter() {
        let mut stream = StringStream::new("x'y'");
        assert_eq!(quote('\'', None).parse(&mut stream), ParseOutcome::NoMatch);
        assert_eq!(stream.position(), Position::new(0));
    }

    #[test]
    fn unterminated_reports_opening_position() {
        let mut stream = StringStream::new("ab'unterminated");
        stream.advance(2);
        assert_eq!(
            quote('\'', None).parse(&mut stream),
            ParseOutcome::Error(TokenizeError::UnterminatedDelimiter(Position::new(2)))
        );
        assert_eq!(stream.position(), Position::new(2));
    }

    #[test]
    fn escaped_close_at_end_is_unterminated() {
        let mut stream = StringStream::new("{abc^}");
        assert_eq!(
            delimit('{', '}', Some('^')).parse(&mut stream),
            ParseOutcome::Error(TokenizeError::UnterminatedDelimiter(Position::new(0)))
        );

        let mut stream = StringStream::new("{abc^");
        assert_eq!(
            delimit('{', '}', Some('^')).parse(&mut stream),
            ParseOutcome::Error(TokenizeError::UnterminatedDelimiter(Position::new(0)))
        );
    }
}
