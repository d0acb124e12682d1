//! Parser for strcalc input
//!
//! Resolves the delimiter header, cleans the body, validates its structure
//! and parses every delimited token into a [`Sequence`].

use strcalc_ast::{CalcError, DEFAULT_DELIMITER, Sequence, Span, Spanned};
use strcalc_lexer::{Lexer, SpannedToken, Token};

// Custom delimiter header handling
pub mod delimiter;

pub use delimiter::Header;

/// Body of the input with the header removed and newlines rewritten
///
/// Each newline becomes the single byte `,`, so offsets into the body plus
/// `offset` are offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub offset: usize,
}

/// Strip the header and turn newlines into the default delimiter
#[must_use]
pub fn clean(input: &str, header: &Header) -> Cleaned {
    let text = input[header.len..].replace('\n', &DEFAULT_DELIMITER.to_string());
    Cleaned {
        text,
        offset: header.len,
    }
}

/// Fail if the cleaned body ends with a dangling default delimiter
///
/// # Errors
///
/// Returns `CalcError::InvalidSequence` pointing at the trailing delimiter
pub fn validate_sequence(cleaned: &Cleaned) -> Result<(), CalcError> {
    if cleaned.text.ends_with(DEFAULT_DELIMITER) {
        let end = cleaned.text.len();
        return Err(CalcError::InvalidSequence {
            span: Span::new(end - 1, end).shift(cleaned.offset),
        });
    }
    Ok(())
}

pub struct Parser {
    input: String,
    header: Header,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// # Errors
    ///
    /// Returns `CalcError::MalformedHeader` if the input is `//` with no delimiter
    pub fn new(input: &str) -> Result<Self, CalcError> {
        let header = delimiter::resolve(input)?;
        Ok(Self {
            input: input.to_string(),
            header,
        })
    }

    /// Parse the input into a sequence of integers
    ///
    /// Empty input yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidSequence` for a trailing delimiter and
    /// `CalcError::Parse` for a token that is not an `i32`
    pub fn parse(&self) -> Result<Sequence, CalcError> {
        if self.input.is_empty() {
            return Ok(Sequence::default());
        }

        let cleaned = clean(&self.input, &self.header);
        validate_sequence(&cleaned)?;

        let tokens = Lexer::new(&cleaned.text).tokenize();
        let mut values = Vec::new();
        let mut first = 0;
        let mut field_start = 0;
        for (index, token) in tokens.iter().enumerate() {
            if token.token == Token::Eof || self.is_delimiter(token) {
                values.push(parse_field(&cleaned, field_start, &tokens[first..index])?);
                first = index + 1;
                field_start = token.span.end;
            }
        }

        tracing::debug!(count = values.len(), "parsed sequence");
        Ok(Sequence::new(values))
    }

    /// Get access to the resolved header
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    fn is_delimiter(&self, token: &SpannedToken) -> bool {
        token.token != Token::Eof
            && token
                .ch()
                .is_some_and(|ch| self.header.delimiters.contains(ch))
    }
}

/// Parse the tokens between two delimiters as one integer
///
/// Surrounding blanks are ignored, matching how the numbers are usually typed.
///
/// `at` is the body offset where the field starts, used when it is empty.
fn parse_field(
    cleaned: &Cleaned,
    at: usize,
    tokens: &[SpannedToken],
) -> Result<Spanned<i32>, CalcError> {
    let span = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::new(at, at),
    };

    let raw = &cleaned.text[span.start..span.end];
    let number = trim_blanks(tokens);
    let text = number.map_or("", |number| &cleaned.text[number.start..number.end]);

    text.parse::<i32>()
        .map(|value| Spanned::new(value, span.shift(cleaned.offset)))
        .map_err(|source| {
            tracing::trace!(token = raw, "token is not an integer");
            CalcError::Parse {
                token: raw.to_string(),
                span: span.shift(cleaned.offset),
                source,
            }
        })
}

/// Span of the tokens left after dropping leading and trailing blanks
fn trim_blanks(tokens: &[SpannedToken]) -> Option<Span> {
    let first = tokens.iter().position(|token| token.token != Token::Space)?;
    let last = tokens.iter().rposition(|token| token.token != Token::Space)?;
    Some(Span::new(tokens[first].span.start, tokens[last].span.end))
}
