use crate::outcome::ParseOutcome;
use crate::parsers::Parser;
use crate::stream::StringStream;

/// Consumes one character if it belongs to a set.
#[derive(Clone, Debug)]
pub struct OneCharOf {
    charset: String,
}

pub fn one_char_of(charset: impl Into<String>) -> OneCharOf {
    OneCharOf {
        charset: charset.into(),
    }
}

impl Parser for OneCharOf {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        match stream.peek() {
            Some(c) if self.charset.contains(c) => {
                let (text, span) = stream.consume(c.len_utf8());
                ParseOutcome::matched(text, span)
            }
            _ => ParseOutcome::NoMatch,
        }
    }
}
