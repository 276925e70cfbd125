use crate::outcome::ParseOutcome;
use crate::parsers::Parser;
use crate::stream::StringStream;

/// Consumes an exact piece of text.
///
/// Unlike a keyword matcher, `Literal` does not look for a word boundary: `literal("fun")`
/// matches the start of `"fund"`. An empty literal never matches.
#[derive(Clone, Debug)]
pub struct Literal {
    text: String,
}

pub fn literal(text: impl Into<String>) -> Literal {
    Literal { text: text.into() }
}

impl Parser for Literal {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        if self.text.is_empty() || !stream.remaining().starts_with(self.text.as_str()) {
            return ParseOutcome::NoMatch;
        }
        let (text, span) = stream.consume(self.text.len());
        ParseOutcome::matched(text, span)
    }
}

/// Tries several literals in order and takes the first one that matches.
///
/// The first match wins even if a later literal would match more text, so longer literals
/// sharing a prefix with shorter ones should be listed first.
#[derive(Clone, Debug)]
pub struct OneOfLiterals {
    literals: Vec<Literal>,
}

pub fn one_of_literals<I, S>(literals: I) -> OneOfLiterals
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOfLiterals {
        literals: literals.into_iter().map(|text| literal(text)).collect(),
    }
}

impl Parser for OneOfLiterals {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        for literal in &self.literals {
            match literal.parse(stream) {
                ParseOutcome::NoMatch => continue,
                outcome => return outcome,
            }
        }
        ParseOutcome::NoMatch
    }
}
