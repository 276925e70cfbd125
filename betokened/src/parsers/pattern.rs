use crate::outcome::ParseOutcome;
use crate::parsers::Parser;
use crate::stream::StringStream;
use regex::Regex;

/// Consumes the text matched by a regular expression starting exactly at the current position.
///
/// A match further ahead in the input does not count. A pattern that matches the empty string
/// at the current position is treated as not applying.
#[derive(Clone, Debug)]
pub struct AnchoredRegex {
    regex: Regex,
}

impl AnchoredRegex {
    pub fn new(pattern: &str) -> Result<AnchoredRegex, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(AnchoredRegex { regex })
    }

    /// The anchored pattern, as compiled.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

pub fn anchored_regex(pattern: &str) -> Result<AnchoredRegex, regex::Error> {
    AnchoredRegex::new(pattern)
}

impl Parser for AnchoredRegex {
    fn parse(&self, stream: &mut StringStream<'_>) -> ParseOutcome {
        match self.regex.find(stream.remaining()) {
            Some(match_) if match_.end() > 0 => {
                let (text, span) = stream.consume(match_.end());
                ParseOutcome::matched(text, span)
            }
            _ => ParseOutcome::NoMatch,
        }
    }
}
