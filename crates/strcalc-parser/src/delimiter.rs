//! Custom delimiter header resolution
//!
//! A header is `//` followed by one delimiter character, or by two when a
//! newline sits right after them: `//;\n1;2` names `;`, `//*%\n1*2%3` names
//! `*` and `%`. Positions are counted in characters.

use strcalc_ast::{CalcError, DelimiterSet, HEADER_MARKER, Span};

/// Delimiters in effect and where the body begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub delimiters: DelimiterSet,
    /// Byte length of the header text stripped from the input
    pub len: usize,
}

impl Header {
    /// No header: the default delimiter and a body starting at offset 0
    #[must_use]
    pub fn none() -> Self {
        Self {
            delimiters: DelimiterSet::default(),
            len: 0,
        }
    }
}

/// Resolve the delimiter set named by the input's header
///
/// The header is only stripped when the input starts with the literal
/// `//<delimiters>\n`; otherwise the whole input is the body.
///
/// # Errors
///
/// Returns `CalcError::MalformedHeader` if nothing follows the `//` marker
pub fn resolve(input: &str) -> Result<Header, CalcError> {
    let Some(rest) = input.strip_prefix(HEADER_MARKER) else {
        return Ok(Header::none());
    };

    let mut chars = rest.chars();
    let first = chars.next().ok_or(CalcError::MalformedHeader {
        span: Span::new(0, input.len()),
    })?;

    // two delimiters only when the first newline of the input is the fourth character after `//`
    let delimiters = match (chars.next(), chars.next()) {
        (Some(second), Some('\n')) if first != '\n' && second != '\n' => {
            DelimiterSet::custom(first, Some(second))
        }
        _ => DelimiterSet::custom(first, None),
    };

    let header = delimiters.header();
    let len = if input.starts_with(&header) {
        header.len()
    } else {
        0
    };

    tracing::debug!(delimiters = ?delimiters.chars(), header_len = len, "resolved custom delimiters");
    Ok(Header { delimiters, len })
}
