//! Lexical analysis for strcalc
//!
//! Classifies each character of a cleaned body using logos. Grouping the
//! characters into numbers is left to the parser, since which characters
//! separate numbers is only known at run time.

use logos::Logos;
use strcalc_ast::Span;

/// Character classes of the body
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single decimal digit
    #[regex(r"[0-9]")]
    Digit,

    /// Leading sign of a number
    #[token("+")]
    #[token("-")]
    Sign,

    /// The default delimiter
    #[token(",")]
    Comma,

    /// ASCII blank, tolerated around a number
    #[regex(r"[ \t\r\x0B\x0C]")]
    Space,

    /// Any other character, custom delimiters among them
    ///
    /// Cleaned bodies carry no newlines; one in raw text lands here too.
    #[regex(r"[^0-9+\-, \t\r\x0B\x0C]")]
    Symbol,

    /// End of input
    Eof,
}

/// Token with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

impl SpannedToken {
    /// The character this token was lexed from, `None` for `Eof`
    #[must_use]
    pub fn ch(&self) -> Option<char> {
        self.text.chars().next()
    }
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    // every character falls in some class, so an error can only be a stray symbol
                    token: result.unwrap_or(Token::Symbol),
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
