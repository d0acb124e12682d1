//! Integration tests for end-to-end summation through the public `add`

use proptest::prelude::*;
use strcalc::{Calculator, CalculatorConfig, ErrorKind, add};

#[test]
fn test_single_number_input() {
    for (input, expected) in [("", 0), ("1", 1), ("2", 2)] {
        assert_eq!(add(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn test_comma_delimited_sequence() {
    assert_eq!(add("1,2,3").unwrap(), 6);
}

#[test]
fn test_newline_in_sequence() {
    assert_eq!(add("1\n2,3").unwrap(), 6);
}

#[test]
fn test_invalid_sequence() {
    let err = add("1,\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSequence);
    assert_eq!(err.to_string(), "Invalid character in sequence.");
}

#[test]
fn test_custom_delimiter_sequences() {
    // single delimiter
    assert_eq!(add("//;\n1;2").unwrap(), 3);
    // multiple delimiter
    assert_eq!(add("//*%\n1*2%3").unwrap(), 6);
}

#[test]
fn test_negative_numbers_rejected() {
    for negatives in ["-4", "-4,-5,-6"] {
        let input = format!("1,2,3,{negatives}");
        let err = add(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NegativesNotAllowed);
        assert_eq!(err.to_string(), format!("Negatives not allowed: {negatives}"));
    }
}

#[test]
fn test_numbers_over_1000_excluded() {
    for input in ["1001,2,13", "2,1001,13", "2,13,1001"] {
        assert_eq!(add(input).unwrap(), 15, "input {input:?}");
    }
}

#[test]
fn test_negatives_under_custom_delimiter() {
    let err = add("//;\n-1;2;-3").unwrap_err();
    assert_eq!(err.to_string(), "Negatives not allowed: -1,-3");
}

#[test]
fn test_blank_line_after_header_is_not_a_delimiter() {
    let err = add("//;\n\n1;2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn test_configured_calculator() {
    let calculator = Calculator::new(CalculatorConfig::default().with_upper_bound(i32::MAX));
    assert_eq!(calculator.add("1001,2,13").unwrap(), 1016);
}

#[test]
fn test_repeated_calls_agree() {
    let first = add("//;\n1;2");
    let second = add("//;\n1;2");
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn newline_and_comma_are_interchangeable(values in prop::collection::vec(0i32..=2000, 1..30)) {
        let commas = values.iter().map(i32::to_string).collect::<Vec<_>>().join(",");
        let newlines = values.iter().map(i32::to_string).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(add(&commas).unwrap(), add(&newlines).unwrap());
    }

    #[test]
    fn custom_delimiter_matches_default(values in prop::collection::vec(0i32..=1000, 1..30)) {
        let default = values.iter().map(i32::to_string).collect::<Vec<_>>().join(",");
        let custom = format!(
            "//;\n{}",
            values.iter().map(i32::to_string).collect::<Vec<_>>().join(";")
        );
        let expected: i64 = values.iter().copied().map(i64::from).sum();
        prop_assert_eq!(add(&default).unwrap(), expected);
        prop_assert_eq!(add(&custom).unwrap(), expected);
    }
}
