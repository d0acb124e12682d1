//! Integration tests for the lexer + parser pipeline

use strcalc::{CalcError, ErrorKind, Lexer, Parser, SourceMap, Span, Token};

#[test]
fn test_parser_keeps_sequence_order() {
    let sequence = Parser::new("3\n1,2").unwrap().parse().unwrap();
    assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn test_header_resolution_exposed_by_parser() {
    let parser = Parser::new("//*%\n1*2%3").unwrap();
    assert_eq!(parser.header().delimiters.chars(), &['*', '%'][..]);
    assert_eq!(parser.header().len, 5);
}

#[test]
fn test_lexer_sees_custom_delimiters_as_symbols() {
    let tokens = Lexer::new("1;2").tokenize();
    assert_eq!(tokens[1].token, Token::Symbol);
    assert_eq!(tokens[1].text, ";");
}

#[test]
fn test_spans_map_to_original_lines() {
    let input = "//;\n1;2\nx";
    let err = Parser::new(input).unwrap().parse().unwrap_err();

    // the newline before "x" became a comma, which is not a delimiter here
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
    let pos = SourceMap::new(input).position(err.span().start);
    assert_eq!((pos.line, pos.column), (2, 3));
}

#[test]
fn test_parse_error_carries_source() {
    let err = Parser::new("1,two").unwrap().parse().unwrap_err();
    match &err {
        CalcError::Parse { token, span, .. } => {
            assert_eq!(token, "two");
            assert_eq!(*span, Span::new(2, 5));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}
