//! Tokenizer for the sample notation understood by the command-line tool.
//!
//! The notation is a small s-expression language:
//!
//! ```text
//! ; comments run to the end of the line
//! (define greeting "say \"hi\"")
//! (if (<= n 1) #t {raw ^} block})
//! ```

use std::fmt;
use std::str::FromStr;

use betokened::parsers::{
    anchored_regex, delimit, literal, one_char_of, one_of_literals, quote, AnchoredRegex,
    EndOfInput, Parser, Whitespace,
};
use betokened::{Span, Tokenizer};
use lazy_static::lazy_static;

lazy_static! {
    static ref COMMENT_RE: AnchoredRegex = anchored_regex(r";[^\n]*").unwrap();
    static ref INTEGER_RE: AnchoredRegex = anchored_regex(r"[0-9]+").unwrap();
    static ref IDENTIFIER_RE: AnchoredRegex = anchored_regex(r"[A-Za-z_][A-Za-z0-9_\-?!]*").unwrap();
}

/// How a double quote is embedded into a string literal.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum QuoteStyle {
    /// `"say \"hi\""`
    Backslash,

    /// `"say ""hi"""`
    Doubled,
}

impl QuoteStyle {
    fn escape(self) -> char {
        match self {
            QuoteStyle::Backslash => '\\',
            QuoteStyle::Doubled => '"',
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<QuoteStyle, String> {
        match s {
            "backslash" => Ok(QuoteStyle::Backslash),
            "doubled" => Ok(QuoteStyle::Doubled),
            _ => Err(format!("unknown quote style: \"{}\"", s)),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SampleTokenKind {
    LeftParen,
    RightParen,
    Operator,
    Boolean,
    Integer,
    Identifier,
    String,
    Block,
}

impl SampleTokenKind {
    pub fn name(self) -> &'static str {
        match self {
            SampleTokenKind::LeftParen => "left-paren",
            SampleTokenKind::RightParen => "right-paren",
            SampleTokenKind::Operator => "operator",
            SampleTokenKind::Boolean => "boolean",
            SampleTokenKind::Integer => "integer",
            SampleTokenKind::Identifier => "identifier",
            SampleTokenKind::String => "string",
            SampleTokenKind::Block => "block",
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct SampleToken {
    pub kind: SampleTokenKind,
    pub text: String,
    pub span: Span,
}

impl SampleToken {
    pub fn new(kind: SampleTokenKind, text: &str, span: Span) -> SampleToken {
        SampleToken {
            kind,
            text: text.to_string(),
            span,
        }
    }
}

impl fmt::Display for SampleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.span, self.kind.name(), self.text)
    }
}

/// Creates a constructor for tokens of `kind`, to be used with `Parser::then_map`.
fn token(kind: SampleTokenKind) -> impl Fn(&str, Span) -> SampleToken {
    move |text: &str, span: Span| SampleToken::new(kind, text, span)
}

/// Builds the tokenizer for the sample notation.
///
/// Without `end_check`, scanning stops quietly at the first character no recognizer accepts.
pub fn sample_tokenizer(quote_style: QuoteStyle, end_check: bool) -> Tokenizer<SampleToken> {
    let tokenizer = betokened::tokenizer![
        Whitespace,
        COMMENT_RE.clone().skipped(),
        quote('"', Some(quote_style.escape())).then_map(token(SampleTokenKind::String)),
        delimit('{', '}', Some('^')).then_map(token(SampleTokenKind::Block)),
        one_char_of("(").then_map(token(SampleTokenKind::LeftParen)),
        one_char_of(")").then_map(token(SampleTokenKind::RightParen)),
        literal("#t").then_map(token(SampleTokenKind::Boolean)),
        literal("#f").then_map(token(SampleTokenKind::Boolean)),
        one_of_literals(vec!["<=", ">=", "==", "<", ">", "="])
            .then_map(token(SampleTokenKind::Operator)),
        one_char_of("+-*/").then_map(token(SampleTokenKind::Operator)),
        INTEGER_RE.clone().then_map(token(SampleTokenKind::Integer)),
        IDENTIFIER_RE.clone().then_map(token(SampleTokenKind::Identifier)),
    ];

    if end_check {
        tokenizer.or_else(EndOfInput)
    } else {
        tokenizer
    }
}
