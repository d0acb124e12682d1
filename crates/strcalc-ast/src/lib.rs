//! Shared types for the strcalc pipeline
//!
//! Every parsed value keeps the location of its token in the original input
//! so failures can point back at it.

use std::num::ParseIntError;

/// The delimiter used when no custom delimiter header is present
pub const DEFAULT_DELIMITER: char = ',';

/// Marker that opens a custom delimiter header
pub const HEADER_MARKER: &str = "//";

/// Byte range into the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Move the span right by `offset` bytes
    #[must_use]
    pub const fn shift(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte offsets to line/column positions
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }
}

/// Value with location information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// The characters that separate numbers in the body of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: Vec<char>,
    custom: bool,
}

impl DelimiterSet {
    /// A set holding one or two delimiters named by a `//` header
    #[must_use]
    pub fn custom(first: char, second: Option<char>) -> Self {
        let mut chars = vec![first];
        chars.extend(second);
        Self {
            chars,
            custom: true,
        }
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom
    }

    /// The literal `//<delimiters>\n` header naming this set
    ///
    /// Empty for the default set.
    #[must_use]
    pub fn header(&self) -> String {
        if !self.is_custom() {
            return String::new();
        }
        let mut header = String::from(HEADER_MARKER);
        header.extend(&self.chars);
        header.push('\n');
        header
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self {
            chars: vec![DEFAULT_DELIMITER],
            custom: false,
        }
    }
}

/// Ordered integers parsed from the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub values: Vec<Spanned<i32>>,
}

impl Sequence {
    #[must_use]
    pub const fn new(values: Vec<Spanned<i32>>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().map(|value| value.node)
    }

    /// Negative values in sequence order
    pub fn negatives(&self) -> impl Iterator<Item = &Spanned<i32>> + '_ {
        self.values.iter().filter(|value| value.node < 0)
    }
}

/// Classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSequence,
    NegativesNotAllowed,
    ParseFailure,
    MalformedHeader,
}

impl ErrorKind {
    /// Stable code used in diagnostics
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidSequence => "ERR_INVALID_SEQUENCE",
            Self::NegativesNotAllowed => "ERR_NEGATIVES",
            Self::ParseFailure => "ERR_PARSE",
            Self::MalformedHeader => "ERR_HEADER",
        }
    }
}

/// Error types with location information
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid character in sequence.")]
    InvalidSequence { span: Span },

    #[error("Negatives not allowed: {}", join_values(.negatives))]
    NegativesNotAllowed { negatives: Vec<i32>, spans: Vec<Span> },

    #[error("{source}")]
    Parse {
        token: String,
        span: Span,
        source: ParseIntError,
    },

    #[error("Missing custom delimiter after '//'.")]
    MalformedHeader { span: Span },
}

impl CalcError {
    /// Collect every negative value of `sequence` into one error
    ///
    /// Returns `None` when the sequence holds no negatives.
    #[must_use]
    pub fn negatives(sequence: &Sequence) -> Option<Self> {
        let (negatives, spans): (Vec<i32>, Vec<Span>) = sequence
            .negatives()
            .map(|value| (value.node, value.span))
            .unzip();
        if negatives.is_empty() {
            None
        } else {
            Some(Self::NegativesNotAllowed { negatives, spans })
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSequence { .. } => ErrorKind::InvalidSequence,
            Self::NegativesNotAllowed { .. } => ErrorKind::NegativesNotAllowed,
            Self::Parse { .. } => ErrorKind::ParseFailure,
            Self::MalformedHeader { .. } => ErrorKind::MalformedHeader,
        }
    }

    /// Location of the offending input, the first negative for `NegativesNotAllowed`
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidSequence { span }
            | Self::Parse { span, .. }
            | Self::MalformedHeader { span } => *span,
            Self::NegativesNotAllowed { spans, .. } => {
                spans.first().copied().unwrap_or_else(Span::dummy)
            }
        }
    }
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
